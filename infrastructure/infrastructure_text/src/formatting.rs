//! Byte Size Formatting
//!
//! Renders byte counts with binary (1024) multiples and one decimal digit.

/// Units in ascending order; the last one absorbs everything larger.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formatting utilities for human readable sizes
pub struct FormatUtils;

impl FormatUtils {
    /// Format a byte count as a human readable string
    ///
    /// The value is divided by 1024 until it drops below 1024 or the unit
    /// reaches TB, then printed with one decimal digit.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_text::FormatUtils;
    ///
    /// assert_eq!(FormatUtils::format_bytes(1536), "1.5 KB");
    /// assert_eq!(FormatUtils::format_bytes(512), "512.0 B");
    /// ```
    pub fn format_bytes(bytes: i64) -> String {
        let mut size = bytes as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(FormatUtils::format_bytes(0), "0.0 B");
        assert_eq!(FormatUtils::format_bytes(1023), "1023.0 B");
        assert_eq!(FormatUtils::format_bytes(1024), "1.0 KB");
        assert_eq!(FormatUtils::format_bytes(1536), "1.5 KB");
        assert_eq!(FormatUtils::format_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(FormatUtils::format_bytes(5 * 1024 * 1024 * 1024), "5.0 GB");
        assert_eq!(FormatUtils::format_bytes(1 << 40), "1.0 TB");
    }

    #[test]
    fn test_format_bytes_caps_at_terabytes() {
        assert_eq!(FormatUtils::format_bytes(2048 * (1 << 40)), "2048.0 TB");
    }

    #[test]
    fn test_format_bytes_negative_stays_in_bytes() {
        assert_eq!(FormatUtils::format_bytes(-1), "-1.0 B");
    }
}
