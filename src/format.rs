//! Display formatting for the derived total.
//!
//! The model accumulates in f64, so exact decimal fractions can carry
//! binary representation noise. The readout rounds to six decimal
//! places before formatting, which is the only mitigation applied.

use crate::models::PlaceValueMode;

/// Fractional digits shown in CenterUnits mode.
const FRACTION_DIGITS: i32 = 6;

/// Format a total for the readout: grouped integer digits, and in
/// CenterUnits mode up to six fractional digits with trailing zeros
/// trimmed away.
pub fn format_total(total: f64, mode: PlaceValueMode) -> String {
    let scale = 10f64.powi(FRACTION_DIGITS);
    let rounded = (total * scale).round() / scale;

    match mode {
        PlaceValueMode::RightmostUnits => group_digits(&format!("{rounded:.0}")),
        PlaceValueMode::CenterUnits => {
            let text = format!("{rounded:.6}");
            let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
            let frac = frac_part.trim_end_matches('0');
            let grouped = group_digits(int_part);
            if frac.is_empty() {
                grouped
            } else {
                format!("{grouped}.{frac}")
            }
        }
    }
}

/// Insert a separator every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
