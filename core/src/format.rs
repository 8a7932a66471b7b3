//! Display helpers for sizes and dates.

use chrono::{DateTime, Utc};

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable byte count in 1024 steps, at most two decimals with
/// trailing zeros dropped.
///
/// `0` → `"0 Bytes"`, `1536` → `"1.5 KB"`. Anything from 1 GiB up stays in
/// GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit + 1 < UNITS.len() && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }

    let value = bytes as f64 / (1u64 << (10 * unit)) as f64;
    format!("{} {}", trim_decimals(value), UNITS[unit])
}

/// Two decimals, ties rounded up, without trailing zeros or a dangling
/// point.
fn trim_decimals(value: f64) -> String {
    // `{:.2}` alone rounds 1.125 down to 1.12
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", rounded);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Short date, `M/D/YYYY`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Pluralised counter label, e.g. `"45 views"`.
pub fn format_count(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(1_887_436), "1.8 MB");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50 MB");
    }

    #[test]
    fn test_format_file_size_caps_at_gb() {
        assert_eq!(format_file_size(1 << 30), "1 GB");
        assert_eq!(format_file_size(2048 << 30), "2048 GB");
    }

    #[test]
    fn test_two_decimal_rounding() {
        // 1234567 / 1048576 = 1.1773...
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_ties_round_up() {
        // 1.125, 1.375 and 2.625 KB
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(1408), "1.38 KB");
        assert_eq!(format_file_size(2688), "2.63 KB");
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 13, 0, 0).unwrap();
        assert_eq!(format_date(&at), "1/5/2024");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(45, "view"), "45 views");
        assert_eq!(format_count(1, "download"), "1 download");
        assert_eq!(format_count(0, "download"), "0 downloads");
    }
}
