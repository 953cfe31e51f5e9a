//! Version grammar and the non-throwing version parsing helpers

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Options, Version};

/// The semver.org specification version this grammar implements
pub const SEMVER_SPEC_VERSION: &str = "2.0.0";

/// Longest input accepted by any version parser
pub const MAX_LENGTH: usize = 256;

/// Largest value a numeric component may take
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Longest digit run picked up by [`coerce`]
pub const MAX_SAFE_COMPONENT_LENGTH: usize = 16;

lazy_static! {
    // A single `0`, or a non-zero digit followed by more digits.
    static ref NUMERIC_IDENTIFIER: &'static str = "0|[1-9][0-9]*";
    static ref NUMERIC_IDENTIFIER_LOOSE: &'static str = "[0-9]+";

    // Digits followed by a letter or hyphen, then letters, digits or hyphens.
    static ref NON_NUMERIC_IDENTIFIER: &'static str = "[0-9]*[a-zA-Z-][a-zA-Z0-9-]*";

    static ref MAIN_VERSION: String = format!(
        r"({0})\.({0})\.({0})",
        *NUMERIC_IDENTIFIER
    );
    static ref MAIN_VERSION_LOOSE: String = format!(
        r"({0})\.({0})\.({0})",
        *NUMERIC_IDENTIFIER_LOOSE
    );

    static ref PRERELEASE_IDENTIFIER: String = format!(
        "(?:{}|{})",
        *NUMERIC_IDENTIFIER, *NON_NUMERIC_IDENTIFIER
    );
    static ref PRERELEASE_IDENTIFIER_LOOSE: String = format!(
        "(?:{}|{})",
        *NUMERIC_IDENTIFIER_LOOSE, *NON_NUMERIC_IDENTIFIER
    );

    static ref PRERELEASE: String = format!(
        r"(?:-({0}(?:\.{0})*))",
        *PRERELEASE_IDENTIFIER
    );
    // The hyphen is optional here so `1.0.0alpha1` parses.
    static ref PRERELEASE_LOOSE: String = format!(
        r"(?:-?({0}(?:\.{0})*))",
        *PRERELEASE_IDENTIFIER_LOOSE
    );

    static ref BUILD_IDENTIFIER: &'static str = "[0-9A-Za-z-]+";
    static ref BUILD: String = format!(r"(?:\+({0}(?:\.{0})*))", *BUILD_IDENTIFIER);

    static ref FULL_PLAIN: String = format!("v?{}{}?{}?", *MAIN_VERSION, *PRERELEASE, *BUILD);
    static ref LOOSE_PLAIN: String = format!(
        r"[v=\s]*{}{}?{}?",
        *MAIN_VERSION_LOOSE, *PRERELEASE_LOOSE, *BUILD
    );

    static ref GTLT: &'static str = "((?:<|>)?=?)";

    // `2.*`, `1.2.x`, `x.x`; only the first component is required.
    static ref XRANGE_IDENTIFIER: String = format!(r"{}|x|X|\*", *NUMERIC_IDENTIFIER);
    static ref XRANGE_IDENTIFIER_LOOSE: String = format!(r"{}|x|X|\*", *NUMERIC_IDENTIFIER_LOOSE);

    pub(crate) static ref XRANGE_PLAIN: String = format!(
        r"[v=\s]*({0})(?:\.({0})(?:\.({0})(?:{1})?{2}?)?)?",
        *XRANGE_IDENTIFIER, *PRERELEASE, *BUILD
    );
    pub(crate) static ref XRANGE_PLAIN_LOOSE: String = format!(
        r"[v=\s]*({0})(?:\.({0})(?:\.({0})(?:{1})?{2}?)?)?",
        *XRANGE_IDENTIFIER_LOOSE, *PRERELEASE_LOOSE, *BUILD
    );

    pub(crate) static ref FULL_RE: Regex = Regex::new(&format!("^{}$", *FULL_PLAIN)).unwrap();
    pub(crate) static ref LOOSE_RE: Regex = Regex::new(&format!("^{}$", *LOOSE_PLAIN)).unwrap();

    pub(crate) static ref XRANGE_RE: Regex = Regex::new(&format!(
        r"^{}\s*{}$",
        *GTLT, *XRANGE_PLAIN
    )).unwrap();
    pub(crate) static ref XRANGE_LOOSE_RE: Regex = Regex::new(&format!(
        r"^{}\s*{}$",
        *GTLT, *XRANGE_PLAIN_LOOSE
    )).unwrap();

    static ref COERCE_RE: Regex = Regex::new(&format!(
        r"(?:^|[^0-9])([0-9]{{1,{0}}})(?:\.([0-9]{{1,{0}}}))?(?:\.([0-9]{{1,{0}}}))?(?:$|[^0-9])",
        MAX_SAFE_COMPONENT_LENGTH
    )).unwrap();

    // Tilde ranges: "reasonably at or greater than".
    static ref LONE_TILDE: &'static str = "(?:~>?)";
    pub(crate) static ref TILDE_TRIM_RE: Regex = Regex::new(&format!(r"(\s*){}\s+", *LONE_TILDE)).unwrap();
    pub(crate) static ref TILDE_RE: Regex = Regex::new(&format!("^{}{}$", *LONE_TILDE, *XRANGE_PLAIN)).unwrap();
    pub(crate) static ref TILDE_LOOSE_RE: Regex = Regex::new(&format!("^{}{}$", *LONE_TILDE, *XRANGE_PLAIN_LOOSE)).unwrap();

    // Caret ranges: "at least and backwards compatible with".
    static ref LONE_CARET: &'static str = r"(?:\^)";
    pub(crate) static ref CARET_TRIM_RE: Regex = Regex::new(&format!(r"(\s*){}\s+", *LONE_CARET)).unwrap();
    pub(crate) static ref CARET_RE: Regex = Regex::new(&format!("^{}{}$", *LONE_CARET, *XRANGE_PLAIN)).unwrap();
    pub(crate) static ref CARET_LOOSE_RE: Regex = Regex::new(&format!("^{}{}$", *LONE_CARET, *XRANGE_PLAIN_LOOSE)).unwrap();

    // An operator and a version, or nothing at all for "any version".
    pub(crate) static ref COMPARATOR_RE: Regex = Regex::new(&format!(
        r"^{}\s*({})$|^$",
        *GTLT, *FULL_PLAIN
    )).unwrap();
    pub(crate) static ref COMPARATOR_LOOSE_RE: Regex = Regex::new(&format!(
        r"^{}\s*({})$|^$",
        *GTLT, *LOOSE_PLAIN
    )).unwrap();

    // Strips the whitespace between an operator and its operand: `> 1.2.3` => `>1.2.3`.
    pub(crate) static ref COMPARATOR_TRIM_RE: Regex = Regex::new(&format!(
        r"(\s*){}\s*({}|{})",
        *GTLT, *LOOSE_PLAIN, *XRANGE_PLAIN
    )).unwrap();

    // `1.2.3 - 1.2.4`
    pub(crate) static ref HYPHEN_RANGE_RE: Regex = Regex::new(&format!(
        r"^\s*({0})\s+-\s+({0})\s*$",
        *XRANGE_PLAIN
    )).unwrap();
    pub(crate) static ref HYPHEN_RANGE_LOOSE_RE: Regex = Regex::new(&format!(
        r"^\s*({0})\s+-\s+({0})\s*$",
        *XRANGE_PLAIN_LOOSE
    )).unwrap();

    pub(crate) static ref STAR_RE: Regex = Regex::new(r"(<|>)?=?\s*\*").unwrap();
}

pub(crate) fn version_re(options: Options) -> &'static Regex {
    if options.loose {
        &LOOSE_RE
    } else {
        &FULL_RE
    }
}

/// Parse a version, returning `None` instead of an error.
pub fn parse(version: &str, options: Options) -> Option<Version> {
    if version.len() > MAX_LENGTH {
        return None;
    }
    if !version_re(options).is_match(version) {
        return None;
    }
    Version::new(version, options).ok()
}

/// Return the canonical form of `version` if it parses.
pub fn valid(version: &str, options: Options) -> Option<String> {
    parse(version, options).map(|v| v.to_string())
}

/// Strip surrounding whitespace and leading `=`/`v` runs, then validate.
pub fn clean(version: &str, options: Options) -> Option<String> {
    let stripped = version.trim().trim_start_matches(|c| c == '=' || c == 'v');
    valid(stripped, options)
}

/// Pull the first `N(.N(.N))` digit run out of arbitrary text.
pub fn coerce(version: &str, options: Options) -> Option<Version> {
    let caps = COERCE_RE.captures(version)?;
    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map_or("0", |m| m.as_str());
    let patch = caps.get(3).map_or("0", |m| m.as_str());

    parse(&format!("{}.{}.{}", major, minor, patch), options)
}
