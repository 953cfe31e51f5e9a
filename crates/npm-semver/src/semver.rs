//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::constraint::{Direction, Operator, Range};
use crate::{version_parser, Identifier, Options, ReleaseType, Version};

/// Main facade for semantic versioning operations.
///
/// Every function takes plain strings and never fails: malformed input
/// yields `None` or `false`.
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str, options: Options) -> bool {
        let Some(range) = Self::range(range, options) else {
            return false;
        };
        match Self::version(version, options) {
            Some(version) => range.test(&version),
            None => false,
        }
    }

    /// Return the highest version in the list satisfying the range
    pub fn max_satisfying(versions: &[&str], range: &str, options: Options) -> Option<String> {
        Self::best_satisfying(versions, range, options, Ordering::Greater)
    }

    /// Return the lowest version in the list satisfying the range
    pub fn min_satisfying(versions: &[&str], range: &str, options: Options) -> Option<String> {
        Self::best_satisfying(versions, range, options, Ordering::Less)
    }

    fn best_satisfying(
        versions: &[&str],
        range: &str,
        options: Options,
        prefer: Ordering,
    ) -> Option<String> {
        let range = Self::range(range, options)?;

        let mut best: Option<(Version, &str)> = None;
        for &text in versions {
            let Some(version) = Self::version(text, options) else {
                continue;
            };
            if !range.test(&version) {
                continue;
            }
            if best
                .as_ref()
                .map_or(true, |(current, _)| version.compare(current) == prefer)
            {
                best = Some((version, text));
            }
        }

        best.map(|(_, text)| text.to_string())
    }

    /// The lowest version that can satisfy the range
    pub fn min_version(range: &str, options: Options) -> Option<Version> {
        Self::range(range, options)?.min_version()
    }

    /// The canonical form of a range, `*` when it matches everything
    pub fn valid_range(range: &str, options: Options) -> Option<String> {
        let range = Self::range(range, options)?;
        Some(match range.as_str() {
            "" => "*".to_string(),
            canonical => canonical.to_string(),
        })
    }

    /// The comparator strings of each OR-group of the range
    pub fn to_comparators(range: &str, options: Options) -> Option<Vec<Vec<String>>> {
        Some(Self::range(range, options)?.to_comparators())
    }

    /// Check whether the version lies beyond the range in the given direction
    pub fn outside(version: &str, range: &str, direction: Direction, options: Options) -> bool {
        let Some(range) = Self::range(range, options) else {
            return false;
        };
        match Self::version(version, options) {
            Some(version) => range.outside(&version, direction),
            None => false,
        }
    }

    /// Check whether the version is greater than every version the range allows
    pub fn gtr(version: &str, range: &str, options: Options) -> bool {
        Self::outside(version, range, Direction::Greater, options)
    }

    /// Check whether the version is less than every version the range allows
    pub fn ltr(version: &str, range: &str, options: Options) -> bool {
        Self::outside(version, range, Direction::Less, options)
    }

    /// Check whether some version satisfies both ranges
    pub fn intersects(range1: &str, range2: &str, options: Options) -> bool {
        match (Self::range(range1, options), Self::range(range2, options)) {
            (Some(a), Some(b)) => a.intersects(&b),
            _ => false,
        }
    }

    /// Parse a version, rejecting surrounding whitespace
    pub fn parse(version: &str, options: Options) -> Option<Version> {
        version_parser::parse(version, options)
    }

    /// The canonical form of a version
    pub fn valid(version: &str, options: Options) -> Option<String> {
        version_parser::valid(version, options)
    }

    /// The canonical form of a version after stripping whitespace and `=`/`v` prefixes
    pub fn clean(version: &str, options: Options) -> Option<String> {
        version_parser::clean(version, options)
    }

    /// Extract the first version-looking number run from arbitrary text
    pub fn coerce(version: &str, options: Options) -> Option<Version> {
        version_parser::coerce(version, options)
    }

    /// Bump a version by the named release kind
    pub fn inc(
        version: &str,
        release: &str,
        options: Options,
        identifier: Option<&str>,
    ) -> Option<String> {
        let version = Self::version(version, options)?;
        match version.inc_str(release, identifier) {
            Ok(bumped) => Some(bumped.to_string()),
            Err(err) => {
                log::debug!("cannot bump {}: {}", version, err);
                None
            }
        }
    }

    /// The most significant kind of release separating two versions
    pub fn diff(version1: &str, version2: &str, options: Options) -> Option<ReleaseType> {
        let a = Self::version(version1, options)?;
        let b = Self::version(version2, options)?;
        if a.compare(&b) == Ordering::Equal {
            return None;
        }

        let pre = a.is_prerelease() || b.is_prerelease();
        let release = if a.major() != b.major() {
            if pre { ReleaseType::PreMajor } else { ReleaseType::Major }
        } else if a.minor() != b.minor() {
            if pre { ReleaseType::PreMinor } else { ReleaseType::Minor }
        } else if a.patch() != b.patch() {
            if pre { ReleaseType::PrePatch } else { ReleaseType::Patch }
        } else {
            ReleaseType::PreRelease
        };
        Some(release)
    }

    pub fn major(version: &str, options: Options) -> Option<u64> {
        Self::version(version, options).map(|v| v.major())
    }

    pub fn minor(version: &str, options: Options) -> Option<u64> {
        Self::version(version, options).map(|v| v.minor())
    }

    pub fn patch(version: &str, options: Options) -> Option<u64> {
        Self::version(version, options).map(|v| v.patch())
    }

    /// The pre-release identifiers, or `None` when there are none
    pub fn prerelease(version: &str, options: Options) -> Option<Vec<Identifier>> {
        let version = Self::parse(version, options)?;
        if version.is_prerelease() {
            Some(version.prerelease().to_vec())
        } else {
            None
        }
    }

    /// Compare two versions by precedence
    pub fn compare(version1: &str, version2: &str, options: Options) -> Option<Ordering> {
        let a = Self::version(version1, options)?;
        let b = Self::version(version2, options)?;
        Some(a.compare(&b))
    }

    /// Compare two versions in reverse precedence order
    pub fn rcompare(version1: &str, version2: &str, options: Options) -> Option<Ordering> {
        Self::compare(version2, version1, options)
    }

    pub fn compare_loose(version1: &str, version2: &str) -> Option<Ordering> {
        Self::compare(version1, version2, Options::LOOSE)
    }

    /// Compare by precedence, then by build metadata
    pub fn compare_build(version1: &str, version2: &str, options: Options) -> Option<Ordering> {
        let a = Self::version(version1, options)?;
        let b = Self::version(version2, options)?;
        Some(a.compare(&b).then_with(|| a.compare_build(&b)))
    }

    pub fn gt(version1: &str, version2: &str, options: Options) -> bool {
        Self::cmp_with(version1, Operator::GreaterThan, version2, options)
    }

    pub fn gte(version1: &str, version2: &str, options: Options) -> bool {
        Self::cmp_with(version1, Operator::GreaterThanOrEqual, version2, options)
    }

    pub fn lt(version1: &str, version2: &str, options: Options) -> bool {
        Self::cmp_with(version1, Operator::LessThan, version2, options)
    }

    pub fn lte(version1: &str, version2: &str, options: Options) -> bool {
        Self::cmp_with(version1, Operator::LessThanOrEqual, version2, options)
    }

    pub fn eq(version1: &str, version2: &str, options: Options) -> bool {
        Self::cmp_with(version1, Operator::Equal, version2, options)
    }

    pub fn neq(version1: &str, version2: &str, options: Options) -> bool {
        Self::cmp_with(version1, Operator::NotEqual, version2, options)
    }

    /// Evaluate `version1 <operator> version2` for any supported operator text
    pub fn cmp(version1: &str, operator: &str, version2: &str, options: Options) -> bool {
        match operator.parse::<Operator>() {
            Ok(operator) => Self::cmp_with(version1, operator, version2, options),
            Err(err) => {
                log::debug!("{}", err);
                false
            }
        }
    }

    fn cmp_with(version1: &str, operator: Operator, version2: &str, options: Options) -> bool {
        match (Self::version(version1, options), Self::version(version2, options)) {
            (Some(a), Some(b)) => operator.apply(&a, &b),
            _ => false,
        }
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str], options: Options) -> Vec<String> {
        Self::usort(versions, options, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str], options: Options) -> Vec<String> {
        Self::usort(versions, options, false)
    }

    fn usort(versions: &[&str], options: Options, ascending: bool) -> Vec<String> {
        // Keep the original index so the input text is returned untouched
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Self::version(v, options)?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.compare(b).then_with(|| a.compare_build(b));
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    fn version(text: &str, options: Options) -> Option<Version> {
        match Version::new(text, options) {
            Ok(version) => Some(version),
            Err(err) => {
                log::debug!("rejecting version: {}", err);
                None
            }
        }
    }

    fn range(text: &str, options: Options) -> Option<Range> {
        match Range::new(text, options) {
            Ok(range) => Some(range),
            Err(err) => {
                log::debug!("rejecting range: {}", err);
                None
            }
        }
    }
}
