/// Integration tests for the public semver API
///
/// These tests exercise versions, ranges and the string facade together
/// the way a package manager resolving dependencies would.

use npm_semver::{
    coerce, is_satisfiable, Comparator, Direction, Operator, Options, Range, ReleaseType, Semver,
    SemverError, Version, SEMVER_SPEC_VERSION,
};
use std::cmp::Ordering;

fn v(s: &str) -> Version {
    Version::new(s, Options::STRICT).unwrap()
}

#[test]
fn test_spec_version() {
    assert_eq!(SEMVER_SPEC_VERSION, "2.0.0");
}

#[test]
fn test_precedence_law() {
    let chain = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];

    for pair in chain.windows(2) {
        assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        assert_eq!(Semver::compare(pair[0], pair[1], Options::STRICT), Some(Ordering::Less));
    }

    let mut shuffled = vec![chain[4], chain[7], chain[0], chain[2], chain[6], chain[1], chain[5], chain[3]];
    shuffled.sort_by(|a, b| v(a).cmp(&v(b)));
    assert_eq!(shuffled, chain);
}

#[test]
fn test_tilde_caret_hyphen() {
    let cases = [
        ("1.2.3", "~1.2.3", true),
        ("1.3.0", "~1.2.3", false),
        ("1.9.9", "^1.2.3", true),
        ("2.0.0", "^1.2.3", false),
        ("0.2.3", "^0.2.3", true),
        ("0.3.0", "^0.2.3", false),
        ("1.2.5", "1.2.3 - 1.3.0", true),
        ("1.3.1", "1.2.3 - 1.3.0", false),
    ];

    for (version, range, expected) in cases {
        assert_eq!(
            Semver::satisfies(version, range, Options::STRICT),
            expected,
            "{} in {}",
            version,
            range
        );
    }
}

#[test]
fn test_prerelease_exclusion() {
    assert!(!Semver::satisfies("1.2.4-alpha", "^1.2.3", Options::STRICT));
    assert!(Semver::satisfies("1.2.3-alpha.2", ">=1.2.3-alpha.1 <1.3.0", Options::STRICT));
    assert!(Semver::satisfies(
        "1.2.4-alpha",
        "^1.2.3",
        Options::STRICT.with_include_prerelease(true)
    ));
}

#[test]
fn test_max_min_satisfying() {
    let versions = ["1.0.0", "1.2.0", "2.0.0"];
    assert_eq!(
        Semver::max_satisfying(&versions, "1.x", Options::STRICT).as_deref(),
        Some("1.2.0")
    );
    assert_eq!(
        Semver::min_satisfying(&versions, "1.x", Options::STRICT).as_deref(),
        Some("1.0.0")
    );
    assert_eq!(Semver::max_satisfying(&versions, "^3", Options::STRICT), None);
    assert_eq!(Semver::min_satisfying(&versions, "^3", Options::STRICT), None);
}

#[test]
fn test_coerce() {
    let coerced = |s: &str| coerce(s, Options::STRICT).map(|v| v.to_string());
    assert_eq!(coerced("v2").as_deref(), Some("2.0.0"));
    assert_eq!(coerced("foo 3.4 bar").as_deref(), Some("3.4.0"));
    assert_eq!(coerced("not a version"), None);
    assert_eq!(coerced("1.2.3.4.5").as_deref(), Some("1.2.3"));
    assert_eq!(coerced("12345678901234567").as_deref(), None);
}

#[test]
fn test_constructors_raise_typed_errors() {
    assert!(matches!(
        Version::new("1.2", Options::STRICT),
        Err(SemverError::InvalidVersion(_))
    ));
    assert!(matches!(
        Version::new(&"1".repeat(300), Options::STRICT),
        Err(SemverError::InvalidVersionWithContext { .. })
    ));
    assert!(matches!(
        Version::new("9007199254740992.0.0", Options::STRICT),
        Err(SemverError::InvalidVersionWithContext { .. })
    ));
    assert!(matches!(
        Comparator::new("~1.2.3", Options::STRICT),
        Err(SemverError::InvalidComparator(_))
    ));
    assert!(matches!(
        Range::new("blerg", Options::STRICT),
        Err(SemverError::InvalidRange(_))
    ));
    assert!(matches!(
        v("1.2.3").inc_str("fake", None),
        Err(SemverError::InvalidIncrementArgument(_))
    ));
}

#[test]
fn test_range_structure() {
    let range = Range::new("^1.2.3 || 2.x", Options::STRICT).unwrap();
    assert_eq!(range.to_string(), ">=1.2.3 <2.0.0||>=2.0.0 <3.0.0");
    assert_eq!(range.set().len(), 2);

    let first = &range.set()[0];
    assert_eq!(first[0].operator(), Operator::GreaterThanOrEqual);
    assert_eq!(first[1].operator(), Operator::LessThan);
    assert!(is_satisfiable(first, range.options()));

    assert_eq!(range.min_version().map(|v| v.to_string()).as_deref(), Some("1.2.3"));
    assert!(range.outside(&v("3.0.0"), Direction::Greater));
    assert!(range.outside(&v("1.0.0"), Direction::Less));
}

#[test]
fn test_resolution_flow() {
    // Pick the newest release compatible with two dependents.
    let published = ["1.0.0", "1.4.2", "1.5.0-beta.1", "1.5.0", "1.6.3", "2.0.0", "2.1.0"];
    let wanted_by_a = "^1.4.0";
    let wanted_by_b = ">=1.5.0 <1.7.0 || >=2.1.0";

    assert!(Semver::intersects(wanted_by_a, wanted_by_b, Options::STRICT));

    let both = format!(
        "{} {}",
        Semver::valid_range(wanted_by_a, Options::STRICT).unwrap(),
        ">=1.5.0 <1.7.0"
    );
    assert_eq!(
        Semver::max_satisfying(&published, &both, Options::STRICT).as_deref(),
        Some("1.6.3")
    );

    assert_eq!(
        Semver::diff("1.4.2", "1.6.3", Options::STRICT),
        Some(ReleaseType::Minor)
    );
    assert_eq!(
        Semver::inc("1.6.3", "preminor", Options::STRICT, Some("rc")).as_deref(),
        Some("1.7.0-rc.0")
    );
}
