//! Pre-release and build identifier ordering

use std::cmp::Ordering;
use std::fmt;

use crate::version_parser::MAX_SAFE_INTEGER;

/// A single dot-separated pre-release segment
///
/// Equality follows precedence, so `AlphaNumeric("007")` equals `Numeric(7)`.
#[derive(Debug, Clone)]
pub enum Identifier {
    /// Digits only, below the safe-integer bound
    Numeric(u64),
    /// Anything else, including digit runs too large to be numeric
    AlphaNumeric(String),
}

impl Identifier {
    /// Classify a raw token the way pre-release segments are classified.
    pub fn new(token: &str) -> Self {
        if is_numeric(token) {
            if let Ok(n) = token.parse::<u64>() {
                if n < MAX_SAFE_INTEGER {
                    return Identifier::Numeric(n);
                }
            }
        }
        Identifier::AlphaNumeric(token.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

impl From<&str> for Identifier {
    fn from(token: &str) -> Self {
        Identifier::new(token)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier {}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(a), Identifier::AlphaNumeric(b)) => {
                compare_identifiers(&a.to_string(), b)
            }
            (Identifier::AlphaNumeric(a), Identifier::Numeric(b)) => {
                compare_identifiers(a, &b.to_string())
            }
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => compare_identifiers(a, b),
        }
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit runs by value without overflowing.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two identifier tokens.
///
/// Numeric tokens compare by value and always sort before alphanumeric ones.
/// Alphanumeric tokens compare by code point.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_digit_runs(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// [`compare_identifiers`] with the arguments swapped.
pub fn rcompare_identifiers(a: &str, b: &str) -> Ordering {
    compare_identifiers(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_identifiers() {
        assert_eq!(compare_identifiers("1", "2"), Ordering::Less);
        assert_eq!(compare_identifiers("10", "9"), Ordering::Greater);
        assert_eq!(compare_identifiers("007", "7"), Ordering::Equal);
        assert_eq!(compare_identifiers("1", "alpha"), Ordering::Less);
        assert_eq!(compare_identifiers("alpha", "1"), Ordering::Greater);
        assert_eq!(compare_identifiers("alpha", "beta"), Ordering::Less);
        assert_eq!(compare_identifiers("beta", "beta"), Ordering::Equal);
        assert_eq!(compare_identifiers("B", "a"), Ordering::Less);
    }

    #[test]
    fn test_compare_huge_digit_runs() {
        assert_eq!(
            compare_identifiers("99999999999999999999", "100000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_rcompare_identifiers() {
        assert_eq!(rcompare_identifiers("1", "2"), Ordering::Greater);
        assert_eq!(rcompare_identifiers("alpha", "alpha"), Ordering::Equal);
    }

    #[test]
    fn test_identifier_classification() {
        assert_eq!(Identifier::new("12"), Identifier::Numeric(12));
        assert_eq!(Identifier::new("rc"), Identifier::AlphaNumeric("rc".to_string()));
        assert_eq!(Identifier::new("1a"), Identifier::AlphaNumeric("1a".to_string()));
        assert!(!Identifier::new("9007199254740991").is_numeric());
        assert!(Identifier::new("9007199254740990").is_numeric());
    }

    #[test]
    fn test_identifier_ordering() {
        assert!(Identifier::Numeric(2) < Identifier::Numeric(11));
        assert!(Identifier::Numeric(99) < Identifier::new("alpha"));
        assert!(Identifier::new("alpha") < Identifier::new("beta"));
        assert!(Identifier::Numeric(1) < Identifier::new("99999999999999999999"));
    }

    #[test]
    fn test_identifier_equality_follows_ordering() {
        let numeric = Identifier::Numeric(1);
        let digits = Identifier::AlphaNumeric("1".to_string());
        assert_eq!(numeric.cmp(&digits), Ordering::Equal);
        assert_eq!(numeric, digits);
        assert_eq!(Identifier::AlphaNumeric("007".to_string()), Identifier::Numeric(7));
        assert_ne!(Identifier::AlphaNumeric("1a".to_string()), Identifier::Numeric(1));
        assert_ne!(Identifier::new("alpha"), Identifier::new("beta"));
    }

    #[test]
    fn test_identifier_conversions() {
        assert_eq!(Identifier::from(3u64), Identifier::Numeric(3));
        assert!(Identifier::from(3u64).is_numeric());
        assert_eq!(Identifier::from("rc"), Identifier::AlphaNumeric("rc".to_string()));
        assert!(Identifier::from("42").is_numeric());
        assert_eq!(Identifier::from("beta").to_string(), "beta");
    }
}
