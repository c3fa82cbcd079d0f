//! # Beam Response per Support Condition
//!
//! The formula set of the engine: reactions, maximum moment, maximum
//! deflection and diagram points for one concentrated load, selected by
//! [`SupportType`].
//!
//! Inputs use engineering units (m, kN, fraction of span). Reactions and
//! moments come back in kN / kN·m rounded to 2 decimals, deflection in mm
//! rounded to 3 decimals.
//!
//! ## Scope of the support models
//!
//! | Support          | Reactions      | Max moment    | Deflection |
//! |------------------|----------------|---------------|------------|
//! | `SimplySupported`| R_a, R_b       | Pa(L-a)/L     | yes        |
//! | `Cantilever`     | R_a, M_a = Pa  | Pa            | 0          |
//! | `Fixed`          | R_a, M_a = Pa  | Pa(L-a)/L     | 0          |
//!
//! `Fixed` is a simplified model: reactions follow the cantilever and the
//! maximum moment follows the simply-supported beam, without end-moment
//! redistribution. Deflection is only computed for `SimplySupported`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    cantilever_point_max_moment, cantilever_point_reactions, point_load_deflection_at_load,
    point_load_max_deflection_midspan, point_load_max_moment, point_load_moment, point_load_reactions,
};
use crate::errors::CalcError;
use crate::materials::STEEL_ELASTIC_MODULUS_PA;
use crate::units::{round_to, Cm4, KiloNewtons, M4, Meters, Millimeters, Newtons};

/// Distance between a and b below which the load counts as midspan (m)
const MIDSPAN_TOLERANCE_M: f64 = 1e-6;

/// Boundary condition of the span.
///
/// Serialized with the wire literals `"hinged"`, `"cantilever"`, `"fixed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportType {
    /// Pin at the left end, roller at the right end
    #[serde(rename = "hinged", alias = "simply_supported")]
    SimplySupported,
    /// Fixed at the left end, free at the right end
    #[serde(rename = "cantilever")]
    Cantilever,
    /// Fixed support (simplified model, see module docs)
    #[serde(rename = "fixed")]
    Fixed,
}

impl SupportType {
    /// All support types for iteration
    pub const ALL: [SupportType; 3] = [
        SupportType::SimplySupported,
        SupportType::Cantilever,
        SupportType::Fixed,
    ];

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "hinged",
            SupportType::Cantilever => "cantilever",
            SupportType::Fixed => "fixed",
        }
    }

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "simply supported",
            SupportType::Cantilever => "cantilever",
            SupportType::Fixed => "fixed support",
        }
    }

    /// Whether the engine models deflection for this support
    pub fn has_deflection_model(&self) -> bool {
        matches!(self, SupportType::SimplySupported)
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SupportType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hinged" | "simply_supported" | "simply-supported" => Ok(SupportType::SimplySupported),
            "cantilever" => Ok(SupportType::Cantilever),
            "fixed" => Ok(SupportType::Fixed),
            _ => Err(CalcError::invalid_input(
                "support_type",
                s,
                "Expected one of: hinged, cantilever, fixed",
            )),
        }
    }
}

/// Support reactions keyed by name.
///
/// Serializes as a flat map: `{"R_a": 60.0, "R_b": 40.0}` for a simply
/// supported span, `{"R_a": 50.0, "M_a": 200.0}` for a fixed end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Vertical reaction at the left support (kN)
    #[serde(rename = "R_a")]
    pub r_a: f64,

    /// Vertical reaction at the right support (kN)
    #[serde(rename = "R_b", default, skip_serializing_if = "Option::is_none")]
    pub r_b: Option<f64>,

    /// Reaction moment at the fixed left end (kN·m)
    #[serde(rename = "M_a", default, skip_serializing_if = "Option::is_none")]
    pub m_a: Option<f64>,
}

impl Reactions {
    /// Present reactions in report order as (name, value, unit)
    pub fn entries(&self) -> Vec<(&'static str, f64, &'static str)> {
        let mut entries = vec![("R_a", self.r_a, "kN")];
        if let Some(r_b) = self.r_b {
            entries.push(("R_b", r_b, "kN"));
        }
        if let Some(m_a) = self.m_a {
            entries.push(("M_a", m_a, "kN·m"));
        }
        entries
    }
}

/// Point series for plotting, each point is `[x (m), value]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    /// Bending moment diagram (kN·m)
    pub moments: Vec<[f64; 2]>,
    /// Beam axis reference line
    pub positions: Vec<[f64; 2]>,
}

/// Load offset a = p·L (m)
#[inline]
fn load_offset(length_m: f64, position: f64) -> f64 {
    position * length_m
}

/// Support reactions for a point load `force_kn` at `position` (fraction of span).
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::response::{reactions, SupportType};
///
/// let r = reactions(5.0, 100.0, 0.4, SupportType::SimplySupported);
/// assert_eq!(r.r_a, 60.0);
/// assert_eq!(r.r_b, Some(40.0));
/// ```
pub fn reactions(length_m: f64, force_kn: f64, position: f64, support: SupportType) -> Reactions {
    let a = load_offset(length_m, position);

    match support {
        SupportType::SimplySupported => {
            let (r1, r2) = point_load_reactions(force_kn, a, length_m);
            Reactions {
                r_a: round_to(r1, 2),
                r_b: Some(round_to(r2, 2)),
                m_a: None,
            }
        }
        SupportType::Cantilever | SupportType::Fixed => {
            let (r1, m1) = cantilever_point_reactions(force_kn, a);
            Reactions {
                r_a: round_to(r1, 2),
                r_b: None,
                m_a: Some(round_to(m1, 2)),
            }
        }
    }
}

/// Maximum bending moment (kN·m, rounded to 2 decimals).
pub fn max_moment(length_m: f64, force_kn: f64, position: f64, support: SupportType) -> f64 {
    let a = load_offset(length_m, position);

    let moment = match support {
        SupportType::SimplySupported | SupportType::Fixed => point_load_max_moment(force_kn, a, length_m),
        SupportType::Cantilever => cantilever_point_max_moment(force_kn, a),
    };
    round_to(moment, 2)
}

/// Maximum deflection (mm, rounded to 3 decimals).
///
/// Returns `0.0` for supports without a deflection model.
pub fn max_deflection(length_m: f64, force_kn: f64, position: f64, support: SupportType, ix: Cm4) -> f64 {
    if !support.has_deflection_model() {
        return 0.0;
    }

    let i = M4::from(ix).value();
    let p = Newtons::from(KiloNewtons(force_kn)).value();
    let e = STEEL_ELASTIC_MODULUS_PA;

    let a = load_offset(length_m, position);
    let b = length_m - a;

    let deflection_m = if (a - b).abs() < MIDSPAN_TOLERANCE_M {
        point_load_max_deflection_midspan(p, length_m, e, i)
    } else {
        point_load_deflection_at_load(p, a, length_m, e, i)
    };

    round_to(Millimeters::from(Meters(deflection_m)).value(), 3)
}

/// Moment diagram and axis reference line.
///
/// Only the simply-supported span gets a moment polyline (zero at both
/// supports, peak under the load). Other supports return a flat line.
pub fn diagram_points(length_m: f64, force_kn: f64, position: f64, support: SupportType) -> DiagramData {
    let a = load_offset(length_m, position);

    let moments = match support {
        SupportType::SimplySupported => vec![
            [0.0, 0.0],
            [a, point_load_moment(force_kn, a, length_m, a)],
            [length_m, 0.0],
        ],
        SupportType::Cantilever | SupportType::Fixed => vec![[0.0, 0.0], [length_m, 0.0]],
    };

    DiagramData {
        moments,
        positions: vec![[0.0, 0.0], [length_m, 0.0]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IX_20B1: Cm4 = Cm4(1840.0);

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_midspan_reactions_are_equal() {
        for length in [1.0, 3.7, 5.0, 12.0] {
            let r = reactions(length, 100.0, 0.5, SupportType::SimplySupported);
            assert_eq!(r.r_a, 50.0, "L = {}", length);
            assert_eq!(r.r_b, Some(50.0), "L = {}", length);
            assert_eq!(r.m_a, None);
        }
    }

    #[test]
    fn test_reactions_round_ties_to_even() {
        let r = reactions(1.0, 0.25, 0.5, SupportType::SimplySupported);
        assert_eq!(r.r_a, 0.12);
        assert_eq!(r.r_b, Some(0.12));
    }

    #[test]
    fn test_reactions_equilibrium() {
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            let r = reactions(7.3, 83.0, p, SupportType::SimplySupported);
            let total = r.r_a + r.r_b.unwrap_or(0.0);
            assert!(approx_eq(total, 83.0, 0.011), "p = {}: {}", p, total);
        }
    }

    #[test]
    fn test_offset_load_reactions() {
        let r = reactions(5.0, 100.0, 0.4, SupportType::SimplySupported);
        assert_eq!(r.r_a, 60.0);
        assert_eq!(r.r_b, Some(40.0));
    }

    #[test]
    fn test_cantilever_and_fixed_reactions() {
        for support in [SupportType::Cantilever, SupportType::Fixed] {
            let r = reactions(4.0, 50.0, 1.0, support);
            assert_eq!(r.r_a, 50.0);
            assert_eq!(r.r_b, None);
            assert_eq!(r.m_a, Some(200.0));
        }
    }

    #[test]
    fn test_max_moment_zero_over_supports() {
        assert_eq!(max_moment(5.0, 100.0, 0.0, SupportType::SimplySupported), 0.0);
        assert_eq!(max_moment(5.0, 100.0, 1.0, SupportType::SimplySupported), 0.0);
    }

    #[test]
    fn test_max_moment_peaks_at_midspan() {
        let peak = max_moment(5.0, 100.0, 0.5, SupportType::SimplySupported);
        assert_eq!(peak, 125.0); // FL/4
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            assert!(max_moment(5.0, 100.0, p, SupportType::SimplySupported) <= peak);
        }
    }

    #[test]
    fn test_max_moment_by_support() {
        assert_eq!(max_moment(5.0, 100.0, 0.4, SupportType::SimplySupported), 120.0);
        assert_eq!(max_moment(4.0, 50.0, 1.0, SupportType::Cantilever), 200.0);
        // Fixed keeps the simply-supported expression
        assert_eq!(max_moment(5.0, 100.0, 0.4, SupportType::Fixed), 120.0);
        assert_eq!(max_moment(4.0, 50.0, 1.0, SupportType::Fixed), 0.0);
    }

    #[test]
    fn test_midspan_deflection() {
        // PL³/48EI = 1e5 * 125 / (48 * 2.1e11 * 1.84e-5) = 0.067396 m
        let f = max_deflection(5.0, 100.0, 0.5, SupportType::SimplySupported, IX_20B1);
        assert!(approx_eq(f, 67.396, 0.001), "f = {}", f);
    }

    #[test]
    fn test_off_center_deflection() {
        // Pa²b²/3EIL = 1e5 * 4 * 9 / (3 * 2.1e11 * 1.84e-5 * 5) = 0.062112 m
        let f = max_deflection(5.0, 100.0, 0.4, SupportType::SimplySupported, IX_20B1);
        assert!(approx_eq(f, 62.112, 0.001), "f = {}", f);
    }

    #[test]
    fn test_deflection_branches_agree_near_midspan() {
        let at_mid = max_deflection(5.0, 100.0, 0.5, SupportType::SimplySupported, IX_20B1);
        let below = max_deflection(5.0, 100.0, 0.5 - 1e-5, SupportType::SimplySupported, IX_20B1);
        let above = max_deflection(5.0, 100.0, 0.5 + 1e-5, SupportType::SimplySupported, IX_20B1);
        assert!(approx_eq(at_mid, below, 0.002), "{} vs {}", at_mid, below);
        assert!(approx_eq(at_mid, above, 0.002), "{} vs {}", at_mid, above);
    }

    #[test]
    fn test_deflection_not_modelled_for_other_supports() {
        assert_eq!(max_deflection(4.0, 50.0, 1.0, SupportType::Cantilever, IX_20B1), 0.0);
        assert_eq!(max_deflection(4.0, 50.0, 0.5, SupportType::Fixed, IX_20B1), 0.0);
    }

    #[test]
    fn test_deflection_zero_for_load_over_support() {
        assert_eq!(max_deflection(5.0, 100.0, 0.0, SupportType::SimplySupported, IX_20B1), 0.0);
    }

    #[test]
    fn test_simply_supported_diagram() {
        let d = diagram_points(5.0, 100.0, 0.4, SupportType::SimplySupported);
        assert_eq!(d.moments.len(), 3);
        assert_eq!(d.moments[0], [0.0, 0.0]);
        assert!(approx_eq(d.moments[1][0], 2.0, 1e-12));
        assert!(approx_eq(d.moments[1][1], 120.0, 1e-9));
        assert_eq!(d.moments[2], [5.0, 0.0]);
        assert_eq!(d.positions, vec![[0.0, 0.0], [5.0, 0.0]]);
    }

    #[test]
    fn test_flat_diagram_for_other_supports() {
        for support in [SupportType::Cantilever, SupportType::Fixed] {
            let d = diagram_points(4.0, 50.0, 1.0, support);
            assert_eq!(d.moments, vec![[0.0, 0.0], [4.0, 0.0]]);
            assert_eq!(d.positions, vec![[0.0, 0.0], [4.0, 0.0]]);
        }
    }

    #[test]
    fn test_support_type_parsing() {
        assert_eq!("hinged".parse::<SupportType>().unwrap(), SupportType::SimplySupported);
        assert_eq!("Cantilever".parse::<SupportType>().unwrap(), SupportType::Cantilever);
        assert_eq!(" fixed ".parse::<SupportType>().unwrap(), SupportType::Fixed);
        assert!("pinned".parse::<SupportType>().is_err());
    }

    #[test]
    fn test_support_type_wire_format() {
        assert_eq!(serde_json::to_string(&SupportType::SimplySupported).unwrap(), "\"hinged\"");
        for support in SupportType::ALL {
            let json = serde_json::to_string(&support).unwrap();
            assert_eq!(json, format!("\"{}\"", support.as_str()));
        }
        let parsed: SupportType = serde_json::from_str("\"simply_supported\"").unwrap();
        assert_eq!(parsed, SupportType::SimplySupported);
    }

    #[test]
    fn test_reactions_serialize_as_flat_map() {
        let ss = serde_json::to_value(reactions(5.0, 100.0, 0.5, SupportType::SimplySupported)).unwrap();
        assert_eq!(ss, serde_json::json!({"R_a": 50.0, "R_b": 50.0}));

        let cant = serde_json::to_value(reactions(4.0, 50.0, 1.0, SupportType::Cantilever)).unwrap();
        assert_eq!(cant, serde_json::json!({"R_a": 50.0, "M_a": 200.0}));
    }
}
