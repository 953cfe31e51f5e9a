//! Error type shared by the version, comparator and range constructors

use thiserror::Error;

/// Error type for semver parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("Invalid Version: {0}")]
    InvalidVersion(String),
    #[error("Invalid Version: {version} ({reason})")]
    InvalidVersionWithContext { version: String, reason: String },
    #[error("Invalid comparator: {0}")]
    InvalidComparator(String),
    #[error("Invalid SemVer Range: {0}")]
    InvalidRange(String),
    #[error("invalid increment argument: {0}")]
    InvalidIncrementArgument(String),
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
}

impl SemverError {
    /// True for both flavours of version failure.
    pub fn is_invalid_version(&self) -> bool {
        matches!(
            self,
            SemverError::InvalidVersion(_) | SemverError::InvalidVersionWithContext { .. }
        )
    }
}
