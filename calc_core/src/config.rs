//! # Configuration
//!
//! Process-wide settings, read once at start-up and never mutated.
//!
//! Values are resolved in three layers:
//! 1. Built-in defaults (allowable stress 240 MPa, deflection limit L/250)
//! 2. An optional TOML file (`--config` flag or `BEAMCALC_CONFIG`)
//! 3. Environment overrides (`ALLOWABLE_STRESS`, `ALLOWABLE_DEFLECTION_RATIO`,
//!    `HOST`, `PORT`)
//!
//! ## Example file
//!
//! ```toml
//! app_name = "Engineering Strength Calculator"
//!
//! [criteria]
//! allowable_stress_mpa = 240.0
//! allowable_deflection_ratio = 0.004
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! cors_origins = ["http://localhost:5173"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "BEAMCALC_CONFIG";

/// Application settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default)]
    pub criteria: DesignCriteria,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            criteria: DesignCriteria::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Allowable limits the strength and stiffness checks compare against
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignCriteria {
    /// Allowable bending stress (MPa), C245 steel by default
    #[serde(default = "default_allowable_stress_mpa")]
    pub allowable_stress_mpa: f64,

    /// Allowable deflection as a fraction of the span (1/250 → L/250)
    #[serde(default = "default_allowable_deflection_ratio")]
    pub allowable_deflection_ratio: f64,
}

impl Default for DesignCriteria {
    fn default() -> Self {
        Self {
            allowable_stress_mpa: default_allowable_stress_mpa(),
            allowable_deflection_ratio: default_allowable_deflection_ratio(),
        }
    }
}

impl DesignCriteria {
    /// Reject limits that would make either check meaningless
    pub fn validate(&self) -> CalcResult<()> {
        if !self.allowable_stress_mpa.is_finite() || self.allowable_stress_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "allowable_stress_mpa",
                self.allowable_stress_mpa.to_string(),
                "Allowable stress must be positive",
            ));
        }
        if !self.allowable_deflection_ratio.is_finite()
            || self.allowable_deflection_ratio <= 0.0
            || self.allowable_deflection_ratio > 1.0
        {
            return Err(CalcError::invalid_input(
                "allowable_deflection_ratio",
                self.allowable_deflection_ratio.to_string(),
                "Allowable deflection ratio must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Denominator of the "L/n" deflection limit (250 for a ratio of 0.004)
    pub fn deflection_denominator(&self) -> u32 {
        (1.0 / self.allowable_deflection_ratio).round() as u32
    }

    /// Allowable deflection in millimetres for a span in metres
    pub fn allowable_deflection_mm(&self, length_m: f64) -> f64 {
        length_m * 1000.0 * self.allowable_deflection_ratio
    }
}

/// HTTP server configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Socket address string, e.g. "0.0.0.0:8000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Default value functions
fn default_app_name() -> String {
    "Engineering Strength Calculator".to_string()
}

fn default_allowable_stress_mpa() -> f64 {
    240.0
}

fn default_allowable_deflection_ratio() -> f64 {
    1.0 / 250.0
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".into(),
        "http://127.0.0.1:5173".into(),
    ]
}

impl Settings {
    /// Resolve settings from an explicit path, `BEAMCALC_CONFIG`, and the environment.
    ///
    /// An explicit path must exist. A path from the environment variable that
    /// does not exist falls back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> CalcResult<Self> {
        let mut settings = match explicit_path {
            Some(path) => Self::load_from(path)?,
            None => match std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
                Some(path) if path.exists() => Self::load_from(&path)?,
                Some(path) => {
                    tracing::warn!("Config file {} not found, using defaults", path.display());
                    Self::default()
                }
                None => Self::default(),
            },
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.criteria.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load_from(path: &Path) -> CalcResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))?;
        let settings = Self::from_toml_str(&content)
            .map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CalcResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ALLOWABLE_STRESS") {
            self.criteria.allowable_stress_mpa = parse_override("ALLOWABLE_STRESS", &raw)?;
        }
        if let Some(raw) = lookup("ALLOWABLE_DEFLECTION_RATIO") {
            self.criteria.allowable_deflection_ratio = parse_override("ALLOWABLE_DEFLECTION_RATIO", &raw)?;
        }
        if let Some(raw) = lookup("HOST") {
            self.server.host = raw;
        }
        if let Some(raw) = lookup("PORT") {
            self.server.port = parse_override("PORT", &raw)?;
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> CalcResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| CalcError::config_error(format!("${}", key), format!("'{}': {}", raw, e)))
}
