//! # calc_core - Steel Beam Calculation Engine
//!
//! `calc_core` checks a single-span steel beam under one concentrated load:
//! support reactions, maximum bending moment, maximum deflection, bending
//! stress, and pass/fail verdicts against allowable limits. All inputs and
//! outputs are JSON-serializable so the same types back the CLI and the
//! HTTP API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit configuration**: Allowable limits are passed in, never global
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{evaluate, CalculationInput, DesignCriteria, SupportType};
//! use calc_core::materials::builtin_catalog;
//!
//! let input = CalculationInput {
//!     length: 5.0,
//!     support_type: SupportType::SimplySupported,
//!     force: 100.0,
//!     force_position: 0.5,
//!     profile_name: "I-beam_20B1".to_string(),
//! };
//! input.validate().unwrap();
//!
//! let profile = builtin_catalog().lookup(&input.profile_name).unwrap();
//! let result = evaluate(&input, profile, &DesignCriteria::default()).unwrap();
//!
//! assert_eq!(result.max_moment, 125.0);
//! assert!(!result.is_strength_sufficient);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Formula set, orchestration and report
//! - [`equations`] - Closed-form beam formulas
//! - [`materials`] - Steel properties and the profile catalog
//! - [`config`] - Allowable limits and server settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`logging`] - Tracing subscriber setup for binaries

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod logging;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, CalculationInput, CalculationResult, SupportType};
pub use config::{DesignCriteria, Settings};
pub use errors::{CalcError, CalcResult};
pub use materials::{builtin_catalog, ProfileRepository, SteelProfile};
