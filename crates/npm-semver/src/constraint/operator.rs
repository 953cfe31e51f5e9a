//! Operator types for version comparators

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{SemverError, Version};

/// Comparison operators between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal by precedence (``, `=`, `==`)
    Equal,
    /// Not equal by precedence (`!=`)
    NotEqual,
    /// Same canonical rendering (`===`)
    Identical,
    /// Different canonical rendering (`!==`)
    NotIdentical,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// The form used when rendering a comparator; exact match renders empty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "",
            Operator::NotEqual => "!=",
            Operator::Identical => "===",
            Operator::NotIdentical => "!==",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// True for `>` and `>=`.
    pub fn is_greater(&self) -> bool {
        matches!(self, Operator::GreaterThan | Operator::GreaterThanOrEqual)
    }

    /// True for `<` and `<=`.
    pub fn is_less(&self) -> bool {
        matches!(self, Operator::LessThan | Operator::LessThanOrEqual)
    }

    /// True for the operators that admit their own operand.
    pub fn is_inclusive(&self) -> bool {
        matches!(
            self,
            Operator::Equal | Operator::LessThanOrEqual | Operator::GreaterThanOrEqual
        )
    }

    /// Evaluate `left <op> right`.
    pub fn apply(&self, left: &Version, right: &Version) -> bool {
        let ordering = left.compare(right);
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::Identical => left.as_str() == right.as_str(),
            Operator::NotIdentical => left.as_str() != right.as_str(),
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl FromStr for Operator {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" | "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            "===" => Ok(Operator::Identical),
            "!==" => Ok(Operator::NotIdentical),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(SemverError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
