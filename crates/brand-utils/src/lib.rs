//! Shared utilities for brandcheck
//!
//! This crate provides common functionality used across the brandcheck workspace:
//! logging setup and environment configuration helpers.

pub mod config;
pub mod logging;

pub use config::{EnvLookup, env_lookup, parse_var};
pub use logging::{LogFormat, init_tracing};
