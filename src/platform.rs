//! platform
//!
//! Platform-family classification.
//!
//! grate ships as `grate.exe` on Windows and `grate` everywhere else. The
//! family is injectable so the runner can be tested against either name on any
//! host.

/// Broad platform family, as far as executable naming cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    /// The Windows family
    Windows,
    /// Everything else (Linux, macOS, BSDs)
    Unix,
}

impl PlatformFamily {
    /// Classify the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            PlatformFamily::Windows
        } else {
            PlatformFamily::Unix
        }
    }

    /// The grate executable name for this family.
    pub fn executable_name(self) -> &'static str {
        match self {
            PlatformFamily::Windows => "grate.exe",
            PlatformFamily::Unix => "grate",
        }
    }
}
