//! Presentation helpers. Aggregation never rounds; views format once here.

/// Round to one decimal place.
pub fn rounded(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a rating with a single decimal, e.g. `8.5`.
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", rounded(value))
}

/// Width of a 0-10 rating bar expressed as a percentage.
pub fn progress_percent(rating: f64) -> u8 {
    (rating * 10.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_and_clamps() {
        assert_eq!(one_decimal(8.26), "8.3");
        assert_eq!(one_decimal(7.0), "7.0");
        assert_eq!(rounded(7.46), 7.5);
        assert_eq!(progress_percent(8.5), 85);
        assert_eq!(progress_percent(12.0), 100);
        assert_eq!(progress_percent(-1.0), 0);
    }
}
