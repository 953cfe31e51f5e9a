//! Comparator - a single operator and version constraint

use std::fmt;
use std::str::FromStr;

use super::{Operator, Range};
use crate::version_parser::{COMPARATOR_LOOSE_RE, COMPARATOR_RE};
use crate::{Options, SemverError, Version};

/// What a comparator compares against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Matches every version, pre-releases included
    Any,
    Version(Version),
}

/// A single constraint such as `>=1.2.3`, or the empty "any version" constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    operator: Operator,
    operand: Operand,
}

impl Comparator {
    /// Parse a comparator; the empty string yields [`Comparator::any`].
    pub fn new(comp: &str, options: Options) -> Result<Self, SemverError> {
        let re = if options.loose { &*COMPARATOR_LOOSE_RE } else { &*COMPARATOR_RE };
        let caps = re
            .captures(comp)
            .ok_or_else(|| SemverError::InvalidComparator(comp.to_string()))?;

        let operator: Operator = caps
            .get(1)
            .map_or("", |m| m.as_str())
            .parse()
            .map_err(|_| SemverError::InvalidComparator(comp.to_string()))?;

        let operand = match caps.get(2) {
            Some(m) if !m.as_str().is_empty() => {
                Operand::Version(Version::new(m.as_str(), Options::STRICT.with_loose(options.loose))?)
            }
            _ => Operand::Any,
        };

        Ok(Comparator { operator, operand })
    }

    /// The comparator every version satisfies.
    pub fn any() -> Self {
        Comparator {
            operator: Operator::Equal,
            operand: Operand::Any,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// The version operand, or `None` for [`Comparator::any`].
    pub fn version(&self) -> Option<&Version> {
        match &self.operand {
            Operand::Any => None,
            Operand::Version(v) => Some(v),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self.operand, Operand::Any)
    }

    /// Check whether `version` satisfies this comparator alone.
    pub fn test(&self, version: &Version) -> bool {
        match &self.operand {
            Operand::Any => true,
            Operand::Version(v) => self.operator.apply(version, v),
        }
    }

    /// Check whether some version satisfies both comparators.
    pub fn intersects(&self, other: &Comparator, options: Options) -> bool {
        let (this_version, other_version) = match (&self.operand, &other.operand) {
            (Operand::Version(a), Operand::Version(b)) => (a, b),
            _ => return true,
        };

        if self.operator == Operator::Equal {
            return Range::from_comparator(other.clone(), options).test(this_version);
        }
        if other.operator == Operator::Equal {
            return Range::from_comparator(self.clone(), options).test(other_version);
        }

        let same_direction_increasing = self.operator.is_greater() && other.operator.is_greater();
        let same_direction_decreasing = self.operator.is_less() && other.operator.is_less();
        let same_semver = this_version.as_str() == other_version.as_str();
        // Exact matches were handled above, so only `>=` and `<=` remain inclusive.
        let different_directions_inclusive =
            self.operator.is_inclusive() && other.operator.is_inclusive();
        let opposite_directions_less_than = this_version < other_version
            && self.operator.is_greater()
            && other.operator.is_less();
        let opposite_directions_greater_than = this_version > other_version
            && self.operator.is_less()
            && other.operator.is_greater();

        same_direction_increasing
            || same_direction_decreasing
            || (same_semver && different_directions_inclusive)
            || opposite_directions_less_than
            || opposite_directions_greater_than
    }
}

impl FromStr for Comparator {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::new(s, Options::STRICT)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operand {
            Operand::Any => Ok(()),
            Operand::Version(v) => write!(f, "{}{}", self.operator, v),
        }
    }
}
