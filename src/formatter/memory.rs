// Memory-value parsing and byte/percentage rendering

use regex::Regex;
use std::sync::LazyLock;

use super::FormatError;
use crate::models::MemoryValue;

/// Unit letters in ascending powers of 1024.
const UNITS: &str = "BKMGTPEZY";

const MIB: f64 = 1024.0 * 1024.0;

static MEMORY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:[,.]\d+)?)\s*([A-Za-z])").expect("memory value pattern compiles")
});

/// Value in bytes. Numbers pass through unchanged; strings like `"512.5 MB"`,
/// `"2G"` or `"1,5 GB"` are scaled by 1024 per unit step.
pub fn parse_memory_value(raw: &MemoryValue) -> Result<f64, FormatError> {
    match raw {
        MemoryValue::Number(n) => Ok(*n),
        MemoryValue::Text(s) => parse_memory_str(s),
    }
}

fn parse_memory_str(s: &str) -> Result<f64, FormatError> {
    let unparseable = || FormatError::UnparseableMemoryValue(s.to_string());
    let caps = MEMORY_VALUE_RE.captures(s.trim()).ok_or_else(unparseable)?;

    let number: f64 = caps[1].replace(',', ".").parse().map_err(|_| unparseable())?;
    let unit = caps[2].to_ascii_uppercase();
    let power = UNITS.find(unit.as_str()).ok_or_else(unparseable)?;

    Ok(number * 1024f64.powi(power as i32))
}

/// `"<v> MB"` below 1024 MB, `"<v> GB"` otherwise, always two decimals.
/// There is no KB or TB step.
pub fn pretty_print_bytes(byte_value: f64) -> String {
    let mut value = byte_value / MIB;
    let mut unit = "MB";
    if value >= 1024.0 {
        value /= 1024.0;
        unit = "GB";
    }
    format!("{} {}", to_fixed(value, 2), unit)
}

/// `used / total * 100` with one decimal. A zero or missing denominator gives
/// `"NaN%"` or `"Infinity%"` rather than panicking.
pub fn compute_percentage(used: f64, total: f64) -> String {
    format!("{}%", to_fixed(used / total * 100.0, 1))
}

/// Fixed-point rendering; non-finite values come out as `NaN` / `Infinity`.
/// Exact ties round away from zero (`6.25` -> `"6.3"`), everything else to
/// the nearest representable decimal.
fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}Infinity", sign)
    } else {
        format!("{:.*}", digits, round_ties_away(value, digits))
    }
}

/// `format!` breaks exact ties to even; nudge those to the away-from-zero
/// neighbour first. The `mul_add` residual is zero only when `value * scale`
/// was computed without rounding, so near-ties are left alone.
fn round_ties_away(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    let is_tie = scaled.fract().abs() == 0.5 && value.mul_add(scale, -scaled) == 0.0;
    if is_tie { scaled.round() / scale } else { value }
}
