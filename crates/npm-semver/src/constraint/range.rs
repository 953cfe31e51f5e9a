//! Range - an OR of AND-ed comparator sets

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Comparator, Operator};
use crate::range_parser::parse_comparator_set;
use crate::{Identifier, Options, SemverError, Version};

lazy_static! {
    static ref OR_SPLIT_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();
}

/// Which side of a range [`Range::outside`] looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Above every version the range allows
    Greater,
    /// Below every version the range allows
    Less,
}

impl Direction {
    /// `a` lies further in this direction than `b`.
    fn beyond(self, a: &Version, b: &Version) -> bool {
        match self {
            Direction::Greater => a > b,
            Direction::Less => a < b,
        }
    }

    fn operators(self) -> (Operator, Operator) {
        match self {
            Direction::Greater => (Operator::GreaterThan, Operator::GreaterThanOrEqual),
            Direction::Less => (Operator::LessThan, Operator::LessThanOrEqual),
        }
    }
}

/// A parsed range such as `^1.2.3 || >=2.5.0 <3.0.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    raw: String,
    range: String,
    set: Vec<Vec<Comparator>>,
    options: Options,
}

impl Range {
    /// Parse a range, failing with [`SemverError::InvalidRange`].
    pub fn new(range: &str, options: Options) -> Result<Self, SemverError> {
        let mut set = Vec::new();
        for group in OR_SPLIT_RE.split(range) {
            let comparators = parse_comparator_set(group.trim(), options).map_err(|err| {
                log::debug!("invalid range {:?}: {}", range, err);
                SemverError::InvalidRange(range.to_string())
            })?;
            // Loose parsing can leave a group with nothing relevant in it.
            if !comparators.is_empty() {
                set.push(comparators);
            }
        }

        if set.is_empty() {
            return Err(SemverError::InvalidRange(range.to_string()));
        }

        Ok(Self::from_set(range.to_string(), set, options))
    }

    /// A range holding exactly one comparator.
    pub fn from_comparator(comparator: Comparator, options: Options) -> Self {
        Self::from_set(comparator.to_string(), vec![vec![comparator]], options)
    }

    fn from_set(raw: String, set: Vec<Vec<Comparator>>, options: Options) -> Self {
        let range = set
            .iter()
            .map(|comparators| {
                comparators
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("||")
            .trim()
            .to_string();

        Range {
            raw,
            range,
            set,
            options,
        }
    }

    /// The text this range was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical comparator rendering.
    pub fn as_str(&self) -> &str {
        &self.range
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// The OR-ed comparator sets.
    pub fn set(&self) -> &[Vec<Comparator>] {
        &self.set
    }

    /// Check whether `version` satisfies at least one comparator set.
    pub fn test(&self, version: &Version) -> bool {
        self.set
            .iter()
            .any(|comparators| test_set(comparators, version, self.options))
    }

    /// Check whether some version satisfies both ranges.
    pub fn intersects(&self, other: &Range) -> bool {
        let options = self.options;
        self.set.iter().any(|these| {
            is_satisfiable(these, options)
                && other.set.iter().any(|those| {
                    is_satisfiable(those, options)
                        && these
                            .iter()
                            .all(|a| those.iter().all(|b| a.intersects(b, options)))
                })
        })
    }

    /// The lowest version that satisfies this range, if any.
    pub fn min_version(&self) -> Option<Version> {
        let zero = Version::from_parts(0, 0, 0, Vec::new(), Vec::new());
        if self.test(&zero) {
            return Some(zero);
        }

        let zero_pre = Version::from_parts(0, 0, 0, vec![Identifier::Numeric(0)], Vec::new());
        if self.test(&zero_pre) {
            return Some(zero_pre);
        }

        let mut min: Option<Version> = None;
        for comparator in self.set.iter().flatten() {
            let Some(version) = comparator.version() else {
                continue;
            };

            let candidate = match comparator.operator() {
                Operator::GreaterThan => {
                    let mut prerelease = version.prerelease().to_vec();
                    let mut patch = version.patch();
                    if prerelease.is_empty() {
                        patch += 1;
                    } else {
                        prerelease.push(Identifier::Numeric(0));
                    }
                    Version::from_parts(version.major(), version.minor(), patch, prerelease, Vec::new())
                }
                Operator::Equal | Operator::GreaterThanOrEqual => Version::from_parts(
                    version.major(),
                    version.minor(),
                    version.patch(),
                    version.prerelease().to_vec(),
                    Vec::new(),
                ),
                _ => continue,
            };

            if min.as_ref().map_or(true, |current| *current > candidate) {
                min = Some(candidate);
            }
        }

        min.filter(|candidate| self.test(candidate))
    }

    /// Check whether `version` lies beyond every version this range allows.
    pub fn outside(&self, version: &Version, direction: Direction) -> bool {
        if self.test(version) {
            return false;
        }

        let (comp, ecomp) = direction.operators();
        let floor = Version::from_parts(0, 0, 0, Vec::new(), Vec::new());

        for comparators in &self.set {
            let mut high: Option<(Operator, &Version)> = None;
            let mut low: Option<(Operator, &Version)> = None;

            for comparator in comparators {
                // An "any" comparator acts as >=0.0.0 here.
                let current = match comparator.version() {
                    Some(v) => (comparator.operator(), v),
                    None => (Operator::GreaterThanOrEqual, &floor),
                };
                let h = *high.get_or_insert(current);
                let l = *low.get_or_insert(current);

                if direction.beyond(current.1, h.1) {
                    high = Some(current);
                } else if direction.beyond(l.1, current.1) {
                    low = Some(current);
                }
            }

            let (Some((high_op, _)), Some((low_op, low_version))) = (high, low) else {
                return true;
            };

            // The edge comparator points our way, so the version can't be past it.
            if high_op == comp || high_op == ecomp {
                return false;
            }

            if (low_op == Operator::Equal || low_op == comp)
                && !direction.beyond(version, low_version)
            {
                return false;
            } else if low_op == ecomp && direction.beyond(low_version, version) {
                return false;
            }
        }

        true
    }

    /// Render each comparator set as a list of comparator strings.
    pub fn to_comparators(&self) -> Vec<Vec<String>> {
        self.set
            .iter()
            .map(|comparators| {
                comparators
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .split(' ')
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }
}

fn test_set(comparators: &[Comparator], version: &Version, options: Options) -> bool {
    if !comparators.iter().all(|c| c.test(version)) {
        return false;
    }

    if version.is_prerelease() && !options.include_prerelease {
        // `^1.2.3-pr.1` desugars to `>=1.2.3-pr.1 <2.0.0` and should let
        // `1.2.3-pr.2` through, but not `1.2.4-alpha.notready`.
        return comparators
            .iter()
            .filter_map(Comparator::version)
            .any(|allowed| allowed.is_prerelease() && allowed.same_release(version));
    }

    true
}

/// Check whether some version can satisfy every comparator of the set at once.
pub fn is_satisfiable(comparators: &[Comparator], options: Options) -> bool {
    comparators.iter().enumerate().all(|(i, a)| {
        comparators[i + 1..]
            .iter()
            .all(|b| b.intersects(a, options))
    })
}

impl FromStr for Range {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::new(s, Options::STRICT)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.range)
    }
}
