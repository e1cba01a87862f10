//! Seconds Of My Life: where a lifetime goes
//!
//! Given daily sleep, work and commute hours, minutes spent on one named
//! activity and yearly holidays, works out how that activity compares to
//! the rest of life over a day, week, month, year, decade and lifetime.
//!
//! ## Architecture
//!
//! - **Parameter Store** (`store`): the one mutable parameter record and
//!   its setters
//! - **Derivation Engine** (`engine`): pure calculators, duration strings
//!   and label rounding, recomputed on every read
//! - **Config** (`config`): TOML initialization overrides and validation
//! - **Widget** (`widget`): thin text/JSON adapter driving the two above

pub mod config;
pub mod engine;
pub mod store;
pub mod types;
pub mod widget;

// Re-export configuration
pub use config::LifeConfig;

// Re-export commonly used types
pub use types::{CalendarConstants, Category, Horizon, ParameterOverrides, Parameters};

// Re-export the store and engine entry points
pub use engine::{format_duration, round_to_scale, Breakdown};
pub use store::ParameterStore;
pub use widget::Widget;
