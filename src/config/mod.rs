//! Configuration management
//!
//! This module handles application settings and the global configuration
//! instance.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
