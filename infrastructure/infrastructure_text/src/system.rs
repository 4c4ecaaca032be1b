//! System Probes
//!
//! Thin pass-through calls to the operating environment:
//! - File size lookup
//! - Platform/runtime/executable description
//!
//! The file size probe is the one place where an error is swallowed; the
//! failure is reported as the `-1` sentinel and logged at debug level.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Sentinel returned by [`SystemProbe::file_size`] when the file cannot be read
pub const FILE_SIZE_UNAVAILABLE: i64 = -1;

/// Basic description of the running program and its platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    /// Platform name (`linux`, `darwin`, `win32`, ...)
    pub platform: String,
    /// Version string of the running library build
    pub runtime_version: String,
    /// Path of the current executable, empty when unknown
    pub executable: String,
}

impl SystemInfo {
    /// Key/value view of the fields, in a stable order
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("platform", self.platform.as_str()),
            ("runtime_version", self.runtime_version.as_str()),
            ("executable", self.executable.as_str()),
        ]
    }
}

impl std::fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': '{}'", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Probes of the operating environment
pub struct SystemProbe;

impl SystemProbe {
    /// Get the size of a file in bytes
    ///
    /// # Returns
    /// * File size in bytes
    /// * [`FILE_SIZE_UNAVAILABLE`] (`-1`) if the file cannot be inspected
    pub fn file_size(path: impl AsRef<Path>) -> i64 {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(meta) => i64::try_from(meta.len()).unwrap_or(i64::MAX),
            Err(error) => {
                debug!(path = %path.display(), %error, "file size unavailable");
                FILE_SIZE_UNAVAILABLE
            }
        }
    }

    /// Get basic system information
    pub fn system_info() -> SystemInfo {
        let executable = match env::current_exe() {
            Ok(path) => path.to_string_lossy().into_owned(),
            Err(error) => {
                debug!(%error, "current executable unavailable");
                String::new()
            }
        };
        SystemInfo {
            platform: Self::platform_name(env::consts::OS).to_string(),
            runtime_version: format!(
                "{} ({}-{})",
                env!("CARGO_PKG_VERSION"),
                env::consts::ARCH,
                env::consts::OS
            ),
            executable,
        }
    }

    /// Map a Rust target OS name to its conventional platform identifier
    fn platform_name(os: &str) -> &str {
        match os {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 1536]).unwrap();
        file.flush().unwrap();
        assert_eq!(SystemProbe::file_size(file.path()), 1536);
    }

    #[test]
    fn test_file_size_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(SystemProbe::file_size(file.path()), 0);
    }

    #[test]
    fn test_file_size_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.txt");
        assert_eq!(SystemProbe::file_size(&missing), FILE_SIZE_UNAVAILABLE);
    }

    #[test]
    fn test_platform_name() {
        assert_eq!(SystemProbe::platform_name("linux"), "linux");
        assert_eq!(SystemProbe::platform_name("macos"), "darwin");
        assert_eq!(SystemProbe::platform_name("windows"), "win32");
        assert_eq!(SystemProbe::platform_name("freebsd"), "freebsd");
    }

    #[test]
    fn test_system_info() {
        let info = SystemProbe::system_info();
        assert!(!info.platform.is_empty());
        assert!(info.runtime_version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(!info.executable.is_empty());
    }

    #[test]
    fn test_system_info_display() {
        let info = SystemInfo {
            platform: "linux".to_string(),
            runtime_version: "1.0.0".to_string(),
            executable: "/usr/bin/demo".to_string(),
        };
        assert_eq!(
            info.to_string(),
            "{'platform': 'linux', 'runtime_version': '1.0.0', 'executable': '/usr/bin/demo'}"
        );
    }
}
