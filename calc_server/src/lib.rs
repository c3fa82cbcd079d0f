//! # calc_server
//!
//! HTTP front end for `calc_core`. The router is built here so integration
//! tests can drive it without binding a socket.

pub mod api;

pub use api::{create_router, ApiError, AppState};
