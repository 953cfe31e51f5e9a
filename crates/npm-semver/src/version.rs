//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::identifier::{compare_identifiers, Identifier};
use crate::version_parser::{version_re, MAX_LENGTH, MAX_SAFE_INTEGER};
use crate::{Options, SemverError};

/// Kinds of release a version can be bumped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
    Pre,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::PreMajor => "premajor",
            ReleaseType::PreMinor => "preminor",
            ReleaseType::PrePatch => "prepatch",
            ReleaseType::PreRelease => "prerelease",
            ReleaseType::Pre => "pre",
        }
    }
}

impl FromStr for ReleaseType {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            "premajor" => Ok(ReleaseType::PreMajor),
            "preminor" => Ok(ReleaseType::PreMinor),
            "prepatch" => Ok(ReleaseType::PrePatch),
            "prerelease" => Ok(ReleaseType::PreRelease),
            "pre" => Ok(ReleaseType::Pre),
            _ => Err(SemverError::InvalidIncrementArgument(s.to_string())),
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `major.minor.patch[-prerelease][+build]` version.
///
/// Equality and ordering follow semver precedence, so build metadata is
/// ignored. Use [`Version::compare_build`] for a total order that includes it.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
    build: Vec<String>,
    version: String,
}

fn parse_component(value: &str, name: &str, version: &str) -> Result<u64, SemverError> {
    match value.parse::<u64>() {
        Ok(n) if n <= MAX_SAFE_INTEGER => Ok(n),
        _ => Err(SemverError::InvalidVersionWithContext {
            version: version.to_string(),
            reason: format!("invalid {} version", name),
        }),
    }
}

impl Version {
    /// Parse a version, failing with [`SemverError`] on malformed input.
    pub fn new(version: &str, options: Options) -> Result<Self, SemverError> {
        if version.len() > MAX_LENGTH {
            return Err(SemverError::InvalidVersionWithContext {
                version: version.to_string(),
                reason: format!("version is longer than {} characters", MAX_LENGTH),
            });
        }

        let caps = version_re(options)
            .captures(version.trim())
            .ok_or_else(|| SemverError::InvalidVersion(version.to_string()))?;

        let major = parse_component(&caps[1], "major", version)?;
        let minor = parse_component(&caps[2], "minor", version)?;
        let patch = parse_component(&caps[3], "patch", version)?;

        let prerelease = caps
            .get(4)
            .map(|m| m.as_str().split('.').map(Identifier::new).collect())
            .unwrap_or_default();

        let build = caps
            .get(5)
            .map(|m| m.as_str().split('.').map(str::to_string).collect())
            .unwrap_or_default();

        let mut parsed = Self::from_parts(major, minor, patch, prerelease, build);
        parsed.raw = version.to_string();
        Ok(parsed)
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Vec<Identifier>,
        build: Vec<String>,
    ) -> Self {
        let mut version = format!("{}.{}.{}", major, minor, patch);
        if !prerelease.is_empty() {
            version.push('-');
            version.push_str(&join(&prerelease));
        }

        Version {
            raw: version.clone(),
            major,
            minor,
            patch,
            prerelease,
            build,
            version,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The text this version was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical `major.minor.patch[-prerelease]` rendering.
    pub fn as_str(&self) -> &str {
        &self.version
    }

    /// True when major, minor and patch are equal to the other version's.
    pub fn same_release(&self, other: &Version) -> bool {
        self.compare_main(other) == Ordering::Equal
    }

    /// Compare by semver precedence.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.compare_main(other).then_with(|| self.compare_pre(other))
    }

    /// Compare only the major, minor and patch numbers.
    pub fn compare_main(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }

    /// Compare pre-release identifiers; a release sorts after any pre-release.
    pub fn compare_pre(&self, other: &Version) -> Ordering {
        match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
            (true, true) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (false, false) => compare_sequences(&self.prerelease, &other.prerelease, Identifier::cmp),
        }
    }

    /// Compare build metadata identifiers.
    pub fn compare_build(&self, other: &Version) -> Ordering {
        compare_sequences(&self.build, &other.build, |a, b| compare_identifiers(a, b))
    }

    /// Return the version bumped by `release`.
    ///
    /// `identifier` names the pre-release train for the `pre*` kinds, so
    /// `1.2.0-beta.1` bumped by `prerelease` with `beta` becomes `1.2.0-beta.2`.
    pub fn inc(&self, release: ReleaseType, identifier: Option<&str>) -> Version {
        let mut bump = Bump::from(self);
        bump.apply(release, identifier);
        Self::from_parts(bump.major, bump.minor, bump.patch, bump.prerelease, self.build.clone())
    }

    /// Like [`Version::inc`] but with the release kind given as text.
    pub fn inc_str(&self, release: &str, identifier: Option<&str>) -> Result<Version, SemverError> {
        Ok(self.inc(release.parse()?, identifier))
    }
}

fn join(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn compare_sequences<T, F>(a: &[T], b: &[T], cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    for (x, y) in a.iter().zip(b.iter()) {
        match cmp(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Mutable scratch state for [`Version::inc`]
struct Bump {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
}

impl From<&Version> for Bump {
    fn from(v: &Version) -> Self {
        Bump {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            prerelease: v.prerelease.clone(),
        }
    }
}

impl Bump {
    fn apply(&mut self, release: ReleaseType, identifier: Option<&str>) {
        match release {
            ReleaseType::PreMajor => {
                self.prerelease.clear();
                self.patch = 0;
                self.minor = 0;
                self.major += 1;
                self.apply(ReleaseType::Pre, identifier);
            }
            ReleaseType::PreMinor => {
                self.prerelease.clear();
                self.patch = 0;
                self.minor += 1;
                self.apply(ReleaseType::Pre, identifier);
            }
            ReleaseType::PrePatch => {
                self.prerelease.clear();
                self.apply(ReleaseType::Patch, identifier);
                self.apply(ReleaseType::Pre, identifier);
            }
            // Acts like prepatch on a release version.
            ReleaseType::PreRelease => {
                if self.prerelease.is_empty() {
                    self.apply(ReleaseType::Patch, identifier);
                }
                self.apply(ReleaseType::Pre, identifier);
            }
            // 1.0.0-5 bumps to 1.0.0, 1.1.0 bumps to 2.0.0
            ReleaseType::Major => {
                if self.minor != 0 || self.patch != 0 || self.prerelease.is_empty() {
                    self.major += 1;
                }
                self.minor = 0;
                self.patch = 0;
                self.prerelease.clear();
            }
            // 1.2.0-5 bumps to 1.2.0, 1.2.1 bumps to 1.3.0
            ReleaseType::Minor => {
                if self.patch != 0 || self.prerelease.is_empty() {
                    self.minor += 1;
                }
                self.patch = 0;
                self.prerelease.clear();
            }
            // 1.2.0-5 bumps to 1.2.0, 1.2.0 bumps to 1.2.1
            ReleaseType::Patch => {
                if self.prerelease.is_empty() {
                    self.patch += 1;
                }
                self.prerelease.clear();
            }
            ReleaseType::Pre => self.apply_pre(identifier),
        }
    }

    fn apply_pre(&mut self, identifier: Option<&str>) {
        if self.prerelease.is_empty() {
            self.prerelease.push(Identifier::Numeric(0));
        } else {
            let last_numeric = self
                .prerelease
                .iter_mut()
                .rev()
                .find_map(|id| match id {
                    Identifier::Numeric(n) => Some(n),
                    Identifier::AlphaNumeric(_) => None,
                });
            match last_numeric {
                Some(n) => *n += 1,
                None => self.prerelease.push(Identifier::Numeric(0)),
            }
        }

        let Some(identifier) = identifier.filter(|id| !id.is_empty()) else {
            return;
        };

        // 1.2.0-beta.1 bumps to 1.2.0-beta.2,
        // 1.2.0-beta.fooblz or 1.2.0-beta bumps to 1.2.0-beta.0
        let same_train = self
            .prerelease
            .first()
            .map_or(false, |first| first.to_string() == identifier);
        let numbered = self
            .prerelease
            .get(1)
            .map_or(false, |second| second.to_string().bytes().all(|b| b.is_ascii_digit()));

        if !same_train || !numbered {
            self.prerelease = vec![Identifier::new(identifier), Identifier::Numeric(0)];
        }
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::new(s, Options::STRICT)
    }
}

impl TryFrom<&str> for Version {
    type Error = SemverError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
