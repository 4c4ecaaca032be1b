//! String Utilities
//!
//! All functions operate on Unicode scalar values (`char`), never on bytes.

/// String helper functions
pub struct TextUtils;

impl TextUtils {
    /// Reverse a string
    ///
    /// # Examples
    /// ```
    /// use infrastructure_text::TextUtils;
    ///
    /// assert_eq!(TextUtils::reverse_string("Hello, World!"), "!dlroW ,olleH");
    /// assert_eq!(TextUtils::reverse_string("héllo"), "olléh");
    /// ```
    pub fn reverse_string(text: &str) -> String {
        text.chars().rev().collect()
    }

    /// Check if a string is a palindrome
    ///
    /// Non-alphanumeric characters are dropped and the rest lower-cased
    /// before comparing. A string with nothing left is a palindrome.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_text::TextUtils;
    ///
    /// assert!(TextUtils::is_palindrome("A man a plan a canal Panama"));
    /// assert!(!TextUtils::is_palindrome("hello"));
    /// ```
    pub fn is_palindrome(text: &str) -> bool {
        let cleaned: Vec<char> = text
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        cleaned.iter().eq(cleaned.iter().rev())
    }

    /// Count whitespace-separated words
    ///
    /// Runs of whitespace count as a single separator; leading and trailing
    /// whitespace is ignored.
    pub fn count_words(text: &str) -> usize {
        text.split_whitespace().count()
    }
}
