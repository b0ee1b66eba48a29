//! Size formatting utilities — human-readable byte counts.
//!
//! All internal sizes are `u64` bytes. Floating point is only used
//! at the display-formatting boundary.

const UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Divides by 1024 while the value is strictly above 1024 and the unit is
/// below GB, so exactly 1024 bytes stays "1024 bytes" and anything past
/// the GB tier keeps growing in GB. Byte counts print as integers, every
/// other unit with two decimals.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// Format a count with English thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(750), "750 bytes");
        assert_eq!(format_size(1024), "1024 bytes");
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size(1025), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
    }

    #[test]
    fn test_format_size_mb() {
        assert_eq!(format_size(5 * 1_048_576), "5.00 MB");
    }

    #[test]
    fn test_format_size_gb() {
        assert_eq!(format_size(3 * 1_073_741_824), "3.00 GB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(2 * 1_099_511_627_776), "2048.00 GB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
