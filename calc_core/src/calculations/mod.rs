//! # Structural Calculations
//!
//! The beam check follows the pattern:
//!
//! - `CalculationInput` - Input parameters (JSON-serializable)
//! - `CalculationResult` - Calculation results (JSON-serializable)
//! - `evaluate(input, profile, criteria) -> Result<CalculationResult, CalcError>` - Pure function
//!
//! ## Modules
//!
//! - [`response`] - Formula set: reactions, moment, deflection, diagrams per support
//! - [`beam`] - Orchestration: stress, strength/stiffness checks, result assembly
//! - [`report`] - Human-readable report blocks

pub mod beam;
pub mod report;
pub mod response;

// Re-export commonly used types
pub use beam::{evaluate, CalculationInput, CalculationResult};
pub use report::{render_text, ReportSection};
pub use response::{DiagramData, Reactions, SupportType};
