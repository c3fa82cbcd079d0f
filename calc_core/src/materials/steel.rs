//! Steel Profile Catalog (GOST 26020-83)
//!
//! Section properties for hot-rolled I-beams with parallel flange edges.
//! The catalog is an in-memory table; lookups are by the profile key used on
//! the wire (e.g. `"I-beam_20B1"`).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::steel::builtin_catalog;
//!
//! let profile = builtin_catalog().lookup("I-beam_20B1").unwrap();
//! assert_eq!(profile.moment_of_inertia_ix_cm4, 1840.0);
//! assert_eq!(profile.moment_of_resistance_wx_cm3, 184.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Cm3, Cm4};

/// Modulus of elasticity of structural steel (Pa)
pub const STEEL_ELASTIC_MODULUS_PA: f64 = 2.1e11;

/// Rolled steel profile with the properties the beam checks need
///
/// Only `moment_of_inertia_ix_cm4` and `moment_of_resistance_wx_cm3` enter
/// the formulas. The remaining fields are descriptive and are echoed back in
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelProfile {
    /// Display name (e.g., "I-beam 20B1")
    pub name: String,

    /// Rolling standard (e.g., "GOST 26020-83")
    pub standard: String,

    /// Unique catalog key (e.g., "I-beam_20B1")
    pub key: String,

    /// Moment of inertia about the strong axis, Ix (cm⁴)
    pub moment_of_inertia_ix_cm4: f64,

    /// Elastic section modulus about the strong axis, Wx (cm³)
    pub moment_of_resistance_wx_cm3: f64,

    /// Overall depth (mm)
    pub height_mm: f64,

    /// Flange width (mm)
    pub width_mm: f64,

    /// Mass per metre (kg/m)
    pub mass_kg_m: f64,
}

impl SteelProfile {
    /// Moment of inertia as a typed value
    pub fn ix(&self) -> Cm4 {
        Cm4(self.moment_of_inertia_ix_cm4)
    }

    /// Section modulus as a typed value
    pub fn wx(&self) -> Cm3 {
        Cm3(self.moment_of_resistance_wx_cm3)
    }

    /// Check that every geometric property is a positive, finite number.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("moment_of_inertia_ix_cm4", self.moment_of_inertia_ix_cm4),
            ("moment_of_resistance_wx_cm3", self.moment_of_resistance_wx_cm3),
            ("height_mm", self.height_mm),
            ("width_mm", self.width_mm),
            ("mass_kg_m", self.mass_kg_m),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Profile '{}' must have a positive {}", self.key, field),
                ));
            }
        }
        Ok(())
    }

    /// Flat property mapping carried into calculation results
    pub fn properties(&self) -> ProfileProperties {
        ProfileProperties {
            moment_of_inertia_ix_cm4: self.moment_of_inertia_ix_cm4,
            moment_of_resistance_wx_cm3: self.moment_of_resistance_wx_cm3,
            height_mm: self.height_mm,
            width_mm: self.width_mm,
            mass_kg_m: self.mass_kg_m,
        }
    }
}

impl std::fmt::Display for SteelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] (Ix={:.0} cm⁴, Wx={:.1} cm³, h={:.0} mm)",
            self.name, self.key, self.moment_of_inertia_ix_cm4, self.moment_of_resistance_wx_cm3, self.height_mm
        )
    }
}

/// Geometric properties of the profile used in a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileProperties {
    pub moment_of_inertia_ix_cm4: f64,
    pub moment_of_resistance_wx_cm3: f64,
    pub height_mm: f64,
    pub width_mm: f64,
    pub mass_kg_m: f64,
}

/// Source of steel profiles by key.
///
/// The front ends depend on this trait rather than on [`ProfileCatalog`] so
/// another table can be swapped in without touching request handling.
pub trait ProfileRepository: Send + Sync {
    /// Resolve a profile by key; unknown keys are `ProfileNotFound`
    fn get_profile(&self, key: &str) -> CalcResult<&SteelProfile>;

    /// Every profile, ordered by depth
    fn all_profiles(&self) -> Vec<&SteelProfile>;

    /// Profiles whose name or key contains `name_part` (case-insensitive)
    fn search_profiles(&self, name_part: &str) -> Vec<&SteelProfile>;
}

/// In-memory steel profile table
///
/// Profiles are indexed by upper-cased key, so lookups ignore case.
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    profiles: HashMap<String, SteelProfile>,
}

impl ProfileCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile, replacing any profile with the same key
    pub fn insert(&mut self, profile: SteelProfile) {
        self.profiles.insert(profile.key.to_uppercase(), profile);
    }

    /// Look up a profile by key
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::materials::steel::builtin_catalog;
    ///
    /// let catalog = builtin_catalog();
    /// assert!(catalog.lookup("I-beam_30B1").is_ok());
    /// assert!(catalog.lookup("i-beam_30b1").is_ok());
    /// assert!(catalog.lookup("I-beam_99B9").is_err());
    /// ```
    pub fn lookup(&self, key: &str) -> CalcResult<&SteelProfile> {
        self.profiles
            .get(&key.trim().to_uppercase())
            .ok_or_else(|| CalcError::profile_not_found(key))
    }

    /// All profiles sorted by depth, then key
    pub fn all(&self) -> Vec<&SteelProfile> {
        let mut profiles: Vec<&SteelProfile> = self.profiles.values().collect();
        sort_profiles(&mut profiles);
        profiles
    }

    /// Case-insensitive substring search over names and keys
    pub fn search(&self, name_part: &str) -> Vec<&SteelProfile> {
        let needle = name_part.trim().to_lowercase();
        let mut matches: Vec<&SteelProfile> = self
            .profiles
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle) || p.key.to_lowercase().contains(&needle))
            .collect();
        sort_profiles(&mut matches);
        matches
    }

    /// Number of profiles in the catalog
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileRepository for ProfileCatalog {
    fn get_profile(&self, key: &str) -> CalcResult<&SteelProfile> {
        self.lookup(key)
    }

    fn all_profiles(&self) -> Vec<&SteelProfile> {
        self.all()
    }

    fn search_profiles(&self, name_part: &str) -> Vec<&SteelProfile> {
        self.search(name_part)
    }
}

fn sort_profiles(profiles: &mut [&SteelProfile]) {
    profiles.sort_by(|a, b| a.height_mm.total_cmp(&b.height_mm).then_with(|| a.key.cmp(&b.key)));
}

// ============================================================================
// Built-in Profiles
// ============================================================================

static BUILTIN_CATALOG: Lazy<ProfileCatalog> = Lazy::new(|| {
    let mut catalog = ProfileCatalog::new();

    // (designation, Ix cm⁴, Wx cm³, h mm, b mm, mass kg/m)
    let i_beams = [
        ("10B1", 198.0, 39.7, 100.0, 55.0, 8.1),
        ("14B1", 572.0, 81.7, 140.0, 73.0, 12.3),
        ("20B1", 1840.0, 184.0, 200.0, 100.0, 22.7),
        ("30B1", 6320.0, 422.0, 300.0, 140.0, 39.2),
        ("40B1", 15760.0, 788.0, 400.0, 155.0, 57.0),
        ("50B1", 39727.0, 1589.0, 500.0, 180.0, 89.8),
        ("60B1", 76806.0, 2560.0, 600.0, 190.0, 108.0),
    ];

    for (designation, ix, wx, h, b, mass) in i_beams {
        catalog.insert(SteelProfile {
            name: format!("I-beam {}", designation),
            standard: "GOST 26020-83".to_string(),
            key: format!("I-beam_{}", designation),
            moment_of_inertia_ix_cm4: ix,
            moment_of_resistance_wx_cm3: wx,
            height_mm: h,
            width_mm: b,
            mass_kg_m: mass,
        });
    }

    catalog
});

/// Shared catalog of the standard I-beams shipped with the engine
pub fn builtin_catalog() -> &'static ProfileCatalog {
    &BUILTIN_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 7);

        let profile = catalog.lookup("I-beam_20B1").unwrap();
        assert_eq!(profile.name, "I-beam 20B1");
        assert_eq!(profile.standard, "GOST 26020-83");
        assert_eq!(profile.ix(), Cm4(1840.0));
        assert_eq!(profile.wx(), Cm3(184.0));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let catalog = builtin_catalog();
        let upper = catalog.lookup("I-BEAM_40B1").unwrap();
        let mixed = catalog.lookup(" i-beam_40b1 ").unwrap();
        assert_eq!(upper.key, mixed.key);
        assert_eq!(upper.key, "I-beam_40B1");
    }

    #[test]
    fn test_profile_not_found() {
        let err = builtin_catalog().lookup("W14X90").unwrap_err();
        assert_eq!(err, CalcError::profile_not_found("W14X90"));
    }

    #[test]
    fn test_all_sorted_by_height() {
        let all = builtin_catalog().all();
        assert_eq!(all.len(), 7);
        assert_eq!(all.first().unwrap().key, "I-beam_10B1");
        assert_eq!(all.last().unwrap().key, "I-beam_60B1");
        assert!(all.windows(2).all(|w| w[0].height_mm <= w[1].height_mm));
    }

    #[test]
    fn test_search() {
        let catalog = builtin_catalog();
        let hits = catalog.search("0b1");
        let keys: Vec<&str> = hits.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["I-beam_10B1", "I-beam_20B1", "I-beam_30B1", "I-beam_40B1", "I-beam_50B1", "I-beam_60B1"]
        );

        assert_eq!(catalog.search("14B").len(), 1);
        assert!(catalog.search("channel").is_empty());
        assert_eq!(catalog.search("").len(), 7);
    }

    #[test]
    fn test_repository_trait_delegates() {
        let repo: &dyn ProfileRepository = builtin_catalog();
        assert!(repo.get_profile("I-beam_14B1").is_ok());
        assert_eq!(repo.all_profiles().len(), 7);
        assert_eq!(repo.search_profiles("i-beam 60").len(), 1);
    }

    #[test]
    fn test_profile_validation() {
        let mut profile = builtin_catalog().lookup("I-beam_20B1").unwrap().clone();
        assert!(profile.validate().is_ok());

        profile.moment_of_resistance_wx_cm3 = 0.0;
        let err = profile.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_profile_serialization_field_names() {
        let profile = builtin_catalog().lookup("I-beam_20B1").unwrap();
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["moment_of_inertia_ix_cm4"], 1840.0);
        assert_eq!(json["moment_of_resistance_wx_cm3"], 184.0);
        assert_eq!(json["key"], "I-beam_20B1");
    }

    #[test]
    fn test_profile_display() {
        let profile = builtin_catalog().lookup("I-beam_20B1").unwrap();
        let display = profile.to_string();
        assert!(display.contains("I-beam 20B1"));
        assert!(display.contains("1840"));
    }
}
