//! # Single-Span Steel Beam Check
//!
//! Evaluates a steel beam carrying one concentrated load for strength
//! (bending stress) and stiffness (deflection) against configured limits.
//!
//! ## Pipeline
//!
//! reactions → max moment → max deflection → stress → checks → report/diagram
//!
//! Each stage depends only on the input and on earlier stages. The whole
//! result is returned or an error is, never anything in between.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::beam::{evaluate, CalculationInput};
//! use calc_core::calculations::SupportType;
//! use calc_core::config::DesignCriteria;
//! use calc_core::materials::builtin_catalog;
//!
//! let input = CalculationInput {
//!     length: 5.0,
//!     support_type: SupportType::SimplySupported,
//!     force: 100.0,
//!     force_position: 0.4,
//!     profile_name: "I-beam_20B1".to_string(),
//! };
//! let profile = builtin_catalog().lookup(&input.profile_name).unwrap();
//!
//! let result = evaluate(&input, profile, &DesignCriteria::default()).unwrap();
//! assert_eq!(result.reactions.r_a, 60.0);
//! assert_eq!(result.max_moment, 120.0);
//! assert_eq!(result.report_sections.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::report::{self, ReportSection};
use crate::calculations::response::{self, DiagramData, Reactions, SupportType};
use crate::config::DesignCriteria;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{ProfileProperties, SteelProfile};
use crate::units::{round_to, Cm3, KiloNewtonMeters, MegaPascals, M3, NewtonMeters, Pascals};

/// Slack allowed when checking that the load lies on the span (fraction of L)
const POSITION_TOLERANCE: f64 = 1e-9;

/// Input parameters for a beam check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 5.0,
///   "support_type": "hinged",
///   "force": 100.0,
///   "force_position": 0.5,
///   "profile_name": "I-beam_20B1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Span length L (m)
    pub length: f64,

    /// Boundary condition
    pub support_type: SupportType,

    /// Concentrated load F (kN)
    pub force: f64,

    /// Load position as a fraction of the span, 0 at the left support
    pub force_position: f64,

    /// Catalog key of the steel profile (e.g., "I-beam_20B1")
    pub profile_name: String,
}

impl CalculationInput {
    /// Validate ranges at the request boundary.
    ///
    /// Front ends call this before resolving the profile; [`evaluate`] only
    /// re-checks what its formulas depend on.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                "Span length must be positive",
            ));
        }
        if !self.force.is_finite() || self.force <= 0.0 {
            return Err(CalcError::invalid_input(
                "force",
                self.force.to_string(),
                "Force must be positive",
            ));
        }
        if !self.force_position.is_finite() || !(0.0..=1.0).contains(&self.force_position) {
            return Err(CalcError::invalid_input(
                "force_position",
                self.force_position.to_string(),
                "Force position must be between 0 and 1",
            ));
        }
        if self.profile_name.trim().is_empty() {
            return Err(CalcError::invalid_input(
                "profile_name",
                "\"\"",
                "Profile name must not be empty",
            ));
        }
        Ok(())
    }

    /// Distance from the left support to the load, a = p·L (m)
    pub fn load_offset_m(&self) -> f64 {
        self.force_position * self.length
    }
}

/// Results from a beam check.
///
/// Field names and units are a stable contract for renderers.
///
/// ## JSON Example
///
/// ```json
/// {
///   "input_data": { "length": 5.0, "support_type": "hinged", "force": 100.0,
///                   "force_position": 0.5, "profile_name": "I-beam_20B1" },
///   "reactions": { "R_a": 50.0, "R_b": 50.0 },
///   "max_moment": 125.0,
///   "max_deflection": 67.396,
///   "max_stress": 679.35,
///   "is_strength_sufficient": false,
///   "is_stiffness_sufficient": false,
///   "profile_properties": { "moment_of_inertia_ix_cm4": 1840.0, "...": 0 },
///   "report_sections": [ { "title": "Input Data", "content": "..." } ],
///   "diagram_data": { "moments": [[0.0, 0.0], [2.5, 125.0], [5.0, 0.0]],
///                     "positions": [[0.0, 0.0], [5.0, 0.0]] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Echo of the request
    pub input_data: CalculationInput,

    /// Support reactions (kN, kN·m)
    pub reactions: Reactions,

    /// Maximum bending moment (kN·m)
    pub max_moment: f64,

    /// Maximum deflection (mm), 0 where no deflection model exists
    pub max_deflection: f64,

    /// Maximum bending stress σ = M/Wx (MPa)
    pub max_stress: f64,

    /// σ ≤ allowable stress
    pub is_strength_sufficient: bool,

    /// f ≤ L × allowable deflection ratio
    pub is_stiffness_sufficient: bool,

    /// Section properties of the profile used
    pub profile_properties: ProfileProperties,

    /// Human-readable report, always four sections in fixed order
    #[serde(default)]
    pub report_sections: Vec<ReportSection>,

    /// Plot data
    pub diagram_data: DiagramData,
}

impl CalculationResult {
    /// Both checks pass
    pub fn passes(&self) -> bool {
        self.is_strength_sufficient && self.is_stiffness_sufficient
    }
}

/// Maximum bending stress in MPa, rounded to 2 decimals.
///
/// σ = M / Wx with M converted kN·m → N·m and Wx cm³ → m³.
pub fn bending_stress(max_moment_knm: f64, wx: Cm3) -> f64 {
    let m = NewtonMeters::from(KiloNewtonMeters(max_moment_knm)).value();
    let w = M3::from(wx).value();
    let stress = MegaPascals::from(Pascals(m / w));
    round_to(stress.value(), 2)
}

/// Strength check: σ ≤ allowable (no tolerance band)
pub fn check_strength(max_stress_mpa: f64, criteria: &DesignCriteria) -> bool {
    max_stress_mpa <= criteria.allowable_stress_mpa
}

/// Stiffness check: f ≤ L·1000·ratio (mm)
pub fn check_stiffness(max_deflection_mm: f64, length_m: f64, criteria: &DesignCriteria) -> bool {
    max_deflection_mm <= criteria.allowable_deflection_mm(length_m)
}

/// Check that the load actually lies on the span and the span is usable.
fn check_consistency(input: &CalculationInput) -> CalcResult<()> {
    if !input.length.is_finite() || input.length <= 0.0 {
        return Err(CalcError::invalid_input(
            "length",
            input.length.to_string(),
            "Span length must be positive",
        ));
    }
    let a = input.load_offset_m();
    let slack = POSITION_TOLERANCE * input.length;
    if !a.is_finite() || a < -slack || a > input.length + slack {
        return Err(CalcError::invalid_input(
            "force_position",
            input.force_position.to_string(),
            format!("Load at {} m lies outside the {} m span", a, input.length),
        ));
    }
    Ok(())
}

fn ensure_finite(calculation_type: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::calculation_failed(
            calculation_type,
            format!("non-finite result {}", value),
        ))
    }
}

/// Run the full beam check.
///
/// This is a pure function: no I/O, no shared state, identical output for
/// identical input.
///
/// # Arguments
///
/// * `input` - Span, support, load and profile key
/// * `profile` - Resolved profile for `input.profile_name`
/// * `criteria` - Allowable stress and deflection limits
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Numbers, verdicts, report and diagrams
/// * `Err(CalcError::InvalidInput)` - Load off the span or degenerate section
/// * `Err(CalcError::CalculationFailed)` - A stage produced NaN or infinity
pub fn evaluate(
    input: &CalculationInput,
    profile: &SteelProfile,
    criteria: &DesignCriteria,
) -> CalcResult<CalculationResult> {
    check_consistency(input)?;
    profile.validate()?;
    criteria.validate()?;

    let (length, force, position, support) =
        (input.length, input.force, input.force_position, input.support_type);

    let reactions = response::reactions(length, force, position, support);
    let max_moment = ensure_finite("max_moment", response::max_moment(length, force, position, support))?;
    let max_deflection = ensure_finite(
        "max_deflection",
        response::max_deflection(length, force, position, support, profile.ix()),
    )?;
    let max_stress = ensure_finite("max_stress", bending_stress(max_moment, profile.wx()))?;

    let is_strength_sufficient = check_strength(max_stress, criteria);
    let is_stiffness_sufficient = check_stiffness(max_deflection, length, criteria);

    tracing::debug!(
        support = %support,
        profile = %profile.key,
        max_moment,
        max_deflection,
        max_stress,
        is_strength_sufficient,
        is_stiffness_sufficient,
        "Beam check evaluated"
    );

    let mut result = CalculationResult {
        input_data: input.clone(),
        reactions,
        max_moment,
        max_deflection,
        max_stress,
        is_strength_sufficient,
        is_stiffness_sufficient,
        profile_properties: profile.properties(),
        report_sections: Vec::new(),
        diagram_data: response::diagram_points(length, force, position, support),
    };
    result.report_sections = report::build_sections(&result, profile, criteria);

    Ok(result)
}
