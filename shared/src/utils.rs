// Small numeric and display helpers shared across the engine and its consumers.

/// Rounds to two decimal places, the precision every chart value is emitted at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a percentage for display, rounding to the nearest integer.
/// A missing value renders as "0%".
pub fn format_percent(value: Option<f64>) -> String {
    format!("{}%", value.unwrap_or(0.0).round() as i64)
}

/// Converts "#RRGGBB" into "r,g,b" for CSS rgba() strings.
/// Unparseable input yields "0,0,0".
pub fn hex_to_rgb_str(hex: &str) -> String {
    let packed = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    let r = (packed >> 16) & 255;
    let g = (packed >> 8) & 255;
    let b = packed & 255;
    format!("{},{},{}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(-0.004), -0.0);
        assert_eq!(round2(99.5), 99.5);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(42.4)), "42%");
        assert_eq!(format_percent(Some(15.8)), "16%");
        assert_eq!(format_percent(None), "0%");
    }

    #[test]
    fn test_hex_to_rgb_str() {
        assert_eq!(hex_to_rgb_str("#179F61"), "23,159,97");
        assert_eq!(hex_to_rgb_str("FFFFFF"), "255,255,255");
        assert_eq!(hex_to_rgb_str("#zz"), "0,0,0");
    }
}
