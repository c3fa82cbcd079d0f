//! # Single Point Load Beam Formulas
//!
//! Closed-form equations for a prismatic beam carrying one concentrated load.
//! Every function works in consistent base SI units (N, m, Pa, m⁴); unit
//! conversion happens in the calculation layer.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `a` = Load position from the left support (or from the fixed end)
//! - `b` = `L - a`
//! - `P` = Point load magnitude
//! - `M` = Bending moment
//! - `δ` = Deflection
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//! - `R1` = Left reaction, `R2` = Right reaction, `M1` = Left reaction moment
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Deflection: Positive downward
//! - Reactions: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

// =============================================================================
// SIMPLY-SUPPORTED BEAM, POINT LOAD
// Pin at x=0, roller at x=L, load P at distance 'a' from the left
// =============================================================================

/// Calculate reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
///
/// # Returns
/// (R1, R2) - Left and right reactions (positive upward)
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Calculate moment at position x for point load P at position a
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

/// Maximum moment, which occurs under the load
///
/// # Formula
/// M_max = Pa(L-a)/L
///
/// Zero when the load sits over either support (a = 0 or a = L).
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    p * a * (l - a) / l
}

/// Maximum deflection for a load at midspan (a = L/2)
///
/// # Formula
/// ```text
/// δ_max = PL³ / (48EI)   at x = L/2
/// ```
#[inline]
pub fn point_load_max_deflection_midspan(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}

/// Deflection under an off-center load
///
/// # Formula (Roark's Table 8.1, Case 1a, evaluated at x = a)
/// ```text
/// δ_a = Pa²b² / (3EIL)
/// ```
///
/// Reduces to PL³/(48EI) when a = b = L/2.
#[inline]
pub fn point_load_deflection_at_load(p: f64, a: f64, l: f64, e: f64, i: f64) -> f64 {
    let b = l - a;
    p * a.powi(2) * b.powi(2) / (3.0 * e * i * l)
}

// =============================================================================
// CANTILEVER, POINT LOAD
// Fixed at x=0, free at x=L, load P at distance 'a' from the fixed end
// =============================================================================

/// Reactions at the fixed end of a cantilever with point load P at a
///
/// ```text
///   ▌      P
///   ▌      ↓
///   ▌──────┬─────
///   ▌  a
///   R1, M1
/// ```
///
/// # Formulas
/// - R1 = P
/// - M1 = Pa
///
/// # Returns
/// (R1, M1) - Vertical reaction and reaction moment magnitude
#[inline]
pub fn cantilever_point_reactions(p: f64, a: f64) -> (f64, f64) {
    (p, p * a)
}

/// Maximum moment for a cantilever point load (at the fixed end)
///
/// # Formula
/// M_max = Pa
#[inline]
pub fn cantilever_point_max_moment(p: f64, a: f64) -> f64 {
    p * a
}

// =============================================================================
// UNIT TESTS
// =============================================================================
