//! Parsing and matching options

/// Flags controlling how versions and ranges are parsed and matched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Accept sloppy input such as `=v1.2.3`, `1.2.3beta` or leading zeros.
    pub loose: bool,
    /// Let pre-release versions satisfy ranges that never mention them.
    pub include_prerelease: bool,
}

impl Options {
    pub const STRICT: Options = Options {
        loose: false,
        include_prerelease: false,
    };

    pub const LOOSE: Options = Options {
        loose: true,
        include_prerelease: false,
    };

    pub fn new() -> Self {
        Self::STRICT
    }

    pub fn with_loose(mut self, loose: bool) -> Self {
        self.loose = loose;
        self
    }

    pub fn with_include_prerelease(mut self, include_prerelease: bool) -> Self {
        self.include_prerelease = include_prerelease;
        self
    }
}
