//! Display helpers shared by the renderers

use chrono::{DateTime, Local};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const UNIT: u64 = 1024;

/// Formats a byte count with the largest unit that keeps the quotient >= 1.
///
/// Values are rounded half-up to two decimals and trailing zeros are dropped, so
/// `1536` becomes `"1.5 KB"` and `2097152` becomes `"2 MB"`. Sizes past the
/// gigabyte range stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index < SIZE_UNITS.len() - 1 && bytes >= divisor * UNIT {
        divisor *= UNIT;
        index += 1;
    }

    // Exact halves round up, so 1.125 KB shows as 1.13 KB.
    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{} {}", trim_decimal(&format!("{:.2}", value)), SIZE_UNITS[index])
}

fn trim_decimal(fixed: &str) -> &str {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.')
}

/// Formats a timestamp the way the upload panel shows it (`3/14/2025, 9:05:07 AM`).
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_fractional_zeros() {
        assert_eq!(trim_decimal("10.00"), "10");
        assert_eq!(trim_decimal("1.50"), "1.5");
        assert_eq!(trim_decimal("100"), "100");
    }

    #[test]
    fn clamps_at_gigabytes() {
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1100), "1.07 KB");
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(1664), "1.63 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024 + 640 * 1024), "3.63 MB");
    }
}
