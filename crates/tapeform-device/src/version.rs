#![forbid(unsafe_code)]

//! Build and version metadata reporting.

use std::fmt;

/// Version information compiled into the binary.
///
/// `git_commit` and `build_date` come from the `TAPEFORM_GIT_COMMIT` and
/// `TAPEFORM_BUILD_DATE` build-time environment variables when the build
/// pipeline sets them, and read `"unknown"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_date: &'static str,
}

impl VersionInfo {
    /// Metadata for the current build.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: match option_env!("TAPEFORM_GIT_COMMIT") {
                Some(commit) => commit,
                None => "unknown",
            },
            build_date: match option_env!("TAPEFORM_BUILD_DATE") {
                Some(date) => date,
                None => "unknown",
            },
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{} ({}) - {}", self.version, self.git_commit, self.build_date)
    }
}
