//! Utility Facades
//!
//! String helpers, byte-size formatting and system probes.

use std::path::Path;

use infrastructure_text::{FormatUtils, SystemInfo, SystemProbe, TextUtils};

pub use infrastructure_text::FILE_SIZE_UNAVAILABLE;

/// Get the size of a file in bytes, or `-1` if it cannot be read
pub fn get_file_size(file_path: impl AsRef<Path>) -> i64 {
    SystemProbe::file_size(file_path)
}

/// Format bytes into a human-readable size (e.g. `"1.5 MB"`)
pub fn format_bytes(bytes_size: i64) -> String {
    FormatUtils::format_bytes(bytes_size)
}

/// Reverse a string
pub fn reverse_string(text: &str) -> String {
    TextUtils::reverse_string(text)
}

/// Check if a string is a palindrome, ignoring case and punctuation
pub fn is_palindrome(text: &str) -> bool {
    TextUtils::is_palindrome(text)
}

/// Count the number of words in a string
pub fn count_words(text: &str) -> usize {
    TextUtils::count_words(text)
}

/// Get basic system information
pub fn get_system_info() -> SystemInfo {
    SystemProbe::system_info()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_helpers() {
        assert_eq!(reverse_string("Hello, World!"), "!dlroW ,olleH");
        assert_eq!(count_words("Hello, World!"), 2);
        assert!(is_palindrome("racecar"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(1536), "1.5 KB");
    }

    #[test]
    fn test_get_file_size_missing() {
        assert_eq!(get_file_size("no/such/file"), FILE_SIZE_UNAVAILABLE);
    }

    #[test]
    fn test_get_system_info() {
        let info = get_system_info();
        assert!(!info.platform.is_empty());
    }
}
