//! Infrastructure Layer: Text Utilities
//!
//! Provides string helpers (reversal, palindromes, word counts), human
//! readable byte sizes and two thin probes of the running system.
//! Independent of the arithmetic crates.

pub mod formatting;
pub mod system;
pub mod text;

pub use formatting::FormatUtils;
pub use system::{SystemInfo, SystemProbe, FILE_SIZE_UNAVAILABLE};
pub use text::TextUtils;
