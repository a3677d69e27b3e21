//! Core value types for brandcheck
//!
//! This crate defines the types every other brandcheck crate passes around:
//! validated brand names, check modes, tri-state availability, and the
//! shared error type.

pub mod brand;
pub mod error;
pub mod tristate;

pub use brand::{BrandName, CheckMode};
pub use error::{Error, Result};
pub use tristate::TriState;
