//! # Structural Engineering Equations
//!
//! Fundamental structural mechanics equations used by the calculations.
//! Keeping them in one place makes them easy to check against references
//! and keeps the calculation layer free of raw algebra.
//!
//! ## Modules
//!
//! - [`beam`] - Point load formulas for simply-supported beams and cantilevers
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;

pub use beam::{
    // Simply-supported formulas
    point_load_reactions,
    point_load_moment,
    point_load_max_moment,
    point_load_max_deflection_midspan,
    point_load_deflection_at_load,
    // Cantilever formulas
    cantilever_point_reactions,
    cantilever_point_max_moment,
};
