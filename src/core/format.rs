/// Magnitude suffix for a value, with thresholds at 10^3, 10^6 and 10^9.
///
/// Values at or above 10^12 fall back to the empty suffix; callers formatting
/// the trillion range get the raw scaled number. Negative and non-finite
/// input also maps to the empty suffix.
#[must_use]
pub fn magnitude_suffix(value: f64) -> &'static str {
    if !value.is_finite() || value < 1_000.0 {
        return "";
    }
    if value < 1_000_000.0 {
        return "K";
    }
    if value < 1_000_000_000.0 {
        return "M";
    }
    if value < 1_000_000_000_000.0 {
        return "B";
    }
    ""
}

/// Formats a value for an axis tick label, scaled down by a power of 1000
/// and rounded up, with the matching magnitude suffix appended.
///
/// `1_500.0` becomes `"2K"`, `950.0` stays `"950"`, `2_000_000.0` becomes
/// `"2M"`.
#[must_use]
pub fn format_with_suffix(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_owned();
    }

    let rank = digit_count(value.ceil()) - 1;
    let scale = 1000_f64.powi((rank / 3) as i32);
    let scaled = (value / scale).ceil();
    format!("{scaled}{}", magnitude_suffix(10_f64.powi(rank as i32)))
}

/// Rounds a value up to the next "nice" axis maximum.
///
/// The value is bumped past its second-most-significant digit: `4_321.0`
/// becomes `4_400.0`, `87.0` becomes `88.0`. Values below 100 are bumped to
/// the next whole number.
#[must_use]
pub fn nice_axis_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }

    let rank = digit_count(value.trunc()).saturating_sub(2);
    let scale = 10_f64.powi(rank as i32);
    ((value / scale + 1.0).round()) * scale
}

fn digit_count(value: f64) -> usize {
    if value < 1.0 {
        return 1;
    }
    format!("{value:.0}").len()
}
