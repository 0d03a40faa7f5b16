//! School data models and DTOs.
//!
//! Re-exported from the `schoolhub-models` crate.

pub use schoolhub_models::schools::*;
