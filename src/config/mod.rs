//! Life Configuration Module
//!
//! Initial parameter values and display options loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `--config <path>` CLI flag
//! 2. `SOML_CONFIG` environment variable (path to TOML file)
//! 3. `life_config.toml` in the current working directory
//! 4. Built-in defaults (the widget's published defaults)
//!
//! ## Usage
//!
//! ```ignore
//! let config = LifeConfig::load(None);
//! config.log_range_warnings();
//! let store = ParameterStore::new(config.parameters());
//! ```
//!
//! There is no global instance: every session builds its own
//! `Parameters` record from the loaded config.

mod life_config;
pub mod defaults;
pub mod validation;

pub use life_config::*;
