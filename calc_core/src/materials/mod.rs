//! # Materials Database
//!
//! Structural steel and the rolled profiles the beam check can be run on.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{builtin_catalog, ProfileRepository};
//!
//! let catalog = builtin_catalog();
//! for profile in catalog.all_profiles() {
//!     println!("{}", profile);
//! }
//! ```

pub mod steel;

pub use steel::{
    builtin_catalog, ProfileCatalog, ProfileProperties, ProfileRepository, SteelProfile,
    STEEL_ELASTIC_MODULUS_PA,
};
