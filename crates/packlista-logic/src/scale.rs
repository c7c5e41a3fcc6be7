//! Fixed-point helpers: meters <-> integer tenths, labels, tolerant compares.
//!
//! All DP state lives in tenths of a meter. Floats only appear at the API
//! boundary and in the geometric tests, which always go through [`approx_eq`].

use crate::constants::EPS;

/// Tenths of a meter per meter.
pub const SCALE: f64 = 10.0;

/// Convert meters to signed tenths (`round(m * 10)`). NaN maps to 0.
pub fn to_tenths(meters: f64) -> i64 {
    (meters * SCALE).round() as i64
}

/// Convert meters to tenths, clamping negatives to zero.
pub fn to_tenths_clamped(meters: f64) -> u32 {
    to_tenths(meters).clamp(0, u32::MAX as i64) as u32
}

/// Convert tenths back to meters.
pub fn to_meters(tenths: u32) -> f64 {
    tenths as f64 / SCALE
}

/// Render tenths as a decimal label without trailing zeros.
///
/// `30 -> "3"`, `25 -> "2.5"`, `5 -> "0.5"`.
pub fn format_tenths(tenths: u32) -> String {
    let whole = tenths / 10;
    let frac = tenths % 10;
    if frac == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{frac}")
    }
}

/// Float equality within [`EPS`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}
