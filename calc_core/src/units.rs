//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by the beam engine. They are
//! plain `f64` newtypes, so JSON stays clean (just numbers) and the
//! conversion factors live in exactly one place.
//!
//! ## Units
//!
//! Inputs and outputs use engineering-scale units, formulas run in base SI:
//! - Length: metres (m) in, millimetres (mm) for deflection out
//! - Force: kilonewtons (kN) in, newtons (N) in formulas
//! - Moment: kilonewton-metres (kN·m) out, newton-metres (N·m) in formulas
//! - Stress: megapascals (MPa) out, pascals (Pa) in formulas
//! - Section properties: cm⁴ / cm³ from catalogs, m⁴ / m³ in formulas
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Cm4, KiloNewtons, M4, Newtons};
//!
//! let force: Newtons = KiloNewtons(100.0).into();
//! assert_eq!(force.0, 100_000.0);
//!
//! let ix: M4 = Cm4(1840.0).into();
//! assert!((ix.0 - 1.84e-5).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMeters(knm.0 * 1000.0)
    }
}

impl From<NewtonMeters> for KiloNewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KiloNewtonMeters(nm.0 / 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Pascals> for MegaPascals {
    fn from(pa: Pascals) -> Self {
        MegaPascals(pa.0 / 1e6)
    }
}

impl From<MegaPascals> for Pascals {
    fn from(mpa: MegaPascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Moment of inertia in cm⁴ (catalog unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm4(pub f64);

/// Moment of inertia in m⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

impl From<Cm4> for M4 {
    fn from(cm4: Cm4) -> Self {
        M4(cm4.0 * 1e-8)
    }
}

/// Section modulus in cm³ (catalog unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm3(pub f64);

/// Section modulus in m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M3(pub f64);

impl From<Cm3> for M3 {
    fn from(cm3: Cm3) -> Self {
        M3(cm3.0 * 1e-6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(KiloNewtonMeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(Cm4);
impl_arithmetic!(M4);
impl_arithmetic!(Cm3);
impl_arithmetic!(M3);

// ============================================================================
// Presentation Rounding
// ============================================================================

/// Round a value to a fixed number of decimals, exact ties to even.
///
/// `0.125` at 2 decimals gives `0.12` and `0.135` gives `0.14`.
///
/// Results are rounded only at the presentation boundary; formulas always
/// run at full precision.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(5.0).into();
        assert_eq!(mm.0, 5000.0);
    }

    #[test]
    fn test_kilonewtons_to_newtons() {
        let n: Newtons = KiloNewtons(1.5).into();
        assert_eq!(n.0, 1500.0);
        let back: KiloNewtons = n.into();
        assert_eq!(back.0, 1.5);
    }

    #[test]
    fn test_section_property_conversions() {
        let ix: M4 = Cm4(1840.0).into();
        assert!((ix.0 - 1.84e-5).abs() < 1e-15);

        let wx: M3 = Cm3(184.0).into();
        assert!((wx.0 - 1.84e-4).abs() < 1e-15);
    }

    #[test]
    fn test_stress_conversion() {
        let mpa: MegaPascals = Pascals(679_347_826.0).into();
        assert!((mpa.0 - 679.347826).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 0.5).0, 5.0);
        assert_eq!((a / 4.0).0, 2.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(679.347826, 2), 679.35);
        assert_eq!(round_to(12.12345, 3), 12.123);
        assert_eq!(round_to(-1.005_1, 2), -1.01);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(12.125, 2), 12.12);
        assert_eq!(round_to(-0.125, 2), -0.12);
        assert_eq!(round_to(1.0625, 3), 1.062);
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn test_serialization() {
        let span = Meters(5.5);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "5.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(span, roundtrip);
    }
}
