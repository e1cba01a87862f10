//! Derivation Engine
//!
//! Pure functions over a [`crate::types::Parameters`] snapshot. Nothing in
//! here holds state; every read recomputes from the current parameters.
//!
//! ## Building blocks
//! - `format_duration()` - compound "1 hr, 1 min, 1 sec" strings
//! - `round_to_scale()` - decimal rounding for labels
//! - `calculators` - hours / percent per category and horizon
//! - `Breakdown` - everything one rendered frame needs

pub mod breakdown;
pub mod calculators;
pub mod duration;
pub mod rounding;

pub use breakdown::{
    activity_duration, activity_seconds, segment_label, Breakdown, HorizonBreakdown, Segment,
};
pub use calculators::{category_value, category_value_with, horizon_total_hours, hours_part};
pub use duration::{format_duration, format_duration_with, DurationParts, DEFAULT_UNIT_LABELS};
pub use rounding::{round_default, round_to_scale};
