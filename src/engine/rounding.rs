//! Decimal rounding without binary floating-point artifacts
//!
//! Naive `(x * 100.0).round() / 100.0` turns 1.005 into 1.0 because
//! 1.005 * 100 is 100.49999999999999. Shifting the decimal exponent of the
//! shortest decimal representation instead (`1.005e0` -> `1.005e2`) keeps
//! the value the user actually sees.

/// Round `value` to `scale` decimal places.
///
/// Ties round towards positive infinity (2.5 -> 3, -2.5 -> -2). A negative
/// `scale` rounds to tens, hundreds and so on. Non-finite input is
/// returned unchanged.
///
/// ```
/// use seconds_of_my_life::engine::round_to_scale;
/// assert_eq!(round_to_scale(1.005, 2), 1.01);
/// assert_eq!(round_to_scale(2.5, 0), 3.0);
/// ```
pub fn round_to_scale(value: f64, scale: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted = shift_decimal(value, scale);
    if !shifted.is_finite() {
        // More decimals than an f64 holds: nothing to round
        return value;
    }
    let rounded = round_half_up(shifted);
    shift_decimal(rounded, scale.saturating_neg())
}

/// Round to one decimal place, the default label precision.
pub fn round_default(value: f64) -> f64 {
    round_to_scale(value, 1)
}

/// Multiply by `10^places` by rewriting the exponent of the shortest
/// round-trip representation and parsing it back.
fn shift_decimal(value: f64, places: i32) -> f64 {
    let repr = format!("{value:e}");
    let (mantissa, exponent) = match repr.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (repr.as_str(), 0),
    };

    format!("{mantissa}e{}", exponent.saturating_add(places))
        .parse::<f64>()
        .unwrap_or(value)
}

/// `Math.round` semantics: halves go up, everything else to nearest.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
