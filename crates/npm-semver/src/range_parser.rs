//! Desugaring of range shorthand into plain comparators
//!
//! A comparator set is rewritten in a fixed order: hyphen ranges, operator
//! whitespace, tilde and caret whitespace, then per token tilde, caret,
//! x-range and star expansion. Each step sees the output of the previous one.

use lazy_static::lazy_static;
use regex::{Captures, Match, Regex};

use crate::version_parser::{
    CARET_LOOSE_RE, CARET_RE, CARET_TRIM_RE, COMPARATOR_LOOSE_RE, COMPARATOR_TRIM_RE,
    HYPHEN_RANGE_LOOSE_RE, HYPHEN_RANGE_RE, STAR_RE, TILDE_LOOSE_RE, TILDE_RE, TILDE_TRIM_RE,
    XRANGE_LOOSE_RE, XRANGE_RE,
};
use crate::{Comparator, Options, SemverError};

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Parse one `||`-free group of a range into its comparators.
pub(crate) fn parse_comparator_set(range: &str, options: Options) -> Result<Vec<Comparator>, SemverError> {
    let range = range.trim();

    // `1.2.3 - 1.2.4` => `>=1.2.3 <=1.2.4`
    let hyphen_re = if options.loose { &*HYPHEN_RANGE_LOOSE_RE } else { &*HYPHEN_RANGE_RE };
    let range = hyphen_re.replace(range, |caps: &Captures| hyphen_replace(caps)).into_owned();
    log::trace!("hyphen replace: {}", range);

    // `> 1.2.3 < 1.2.5` => `>1.2.3 <1.2.5`
    let range = COMPARATOR_TRIM_RE.replace_all(&range, "${1}${2}${3}").into_owned();
    log::trace!("comparator trim: {}", range);

    // `~ 1.2.3` => `~1.2.3`
    let range = TILDE_TRIM_RE.replace_all(&range, "${1}~").into_owned();

    // `^ 1.2.3` => `^1.2.3`
    let range = CARET_TRIM_RE.replace_all(&range, "${1}^").into_owned();

    let range = range.split_whitespace().collect::<Vec<_>>().join(" ");

    let expanded = range
        .split(' ')
        .map(|comp| expand_comparator(comp, options))
        .collect::<Vec<_>>()
        .join(" ");
    log::trace!("expanded: {}", expanded);

    let tokens = split_whitespace_keep_edges(&expanded);

    if options.loose {
        // Anything that still is not a comparator is thrown away.
        return Ok(tokens
            .into_iter()
            .filter(|comp| COMPARATOR_LOOSE_RE.is_match(comp))
            .filter_map(|comp| match Comparator::new(comp, options) {
                Ok(c) => Some(c),
                Err(err) => {
                    log::debug!("dropping comparator {:?}: {}", comp, err);
                    None
                }
            })
            .collect());
    }

    tokens
        .into_iter()
        .map(|comp| Comparator::new(comp, options))
        .collect()
}

/// Split on whitespace runs, yielding empty tokens at leading or trailing whitespace.
fn split_whitespace_keep_edges(s: &str) -> Vec<&str> {
    WHITESPACE_RE.split(s).collect()
}

fn expand_comparator(comp: &str, options: Options) -> String {
    let comp = replace_tildes(comp, options);
    let comp = replace_carets(&comp, options);
    let comp = replace_x_ranges(&comp, options);
    replace_stars(&comp)
}

fn is_x(id: Option<Match<'_>>) -> bool {
    match id {
        None => true,
        Some(m) => matches!(m.as_str(), "" | "x" | "X" | "*"),
    }
}

fn group<'h>(caps: &Captures<'h>, i: usize) -> &'h str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// The next value of a numeric component. Values too large to count are left
/// as they are and get rejected once parsed as a version.
fn incr(id: &str) -> String {
    id.parse::<u64>()
        .map(|n| n.saturating_add(1).to_string())
        .unwrap_or_else(|_| id.to_string())
}

fn map_tokens(comp: &str, f: impl Fn(&str) -> String) -> String {
    split_whitespace_keep_edges(comp.trim())
        .into_iter()
        .map(f)
        .collect::<Vec<_>>()
        .join(" ")
}

// ~, ~> --> * (any, kinda silly)
// ~2, ~2.x, ~2.x.x, ~>2, ~>2.x ~>2.x.x --> >=2.0.0 <3.0.0
// ~2.0, ~2.0.x, ~>2.0, ~>2.0.x --> >=2.0.0 <2.1.0
// ~1.2, ~1.2.x, ~>1.2, ~>1.2.x --> >=1.2.0 <1.3.0
// ~1.2.3, ~>1.2.3 --> >=1.2.3 <1.3.0
fn replace_tildes(comp: &str, options: Options) -> String {
    map_tokens(comp, |token| replace_tilde(token, options))
}

fn replace_tilde(comp: &str, options: Options) -> String {
    let re = if options.loose { &*TILDE_LOOSE_RE } else { &*TILDE_RE };
    re.replace(comp, |caps: &Captures| {
        let (major, minor, patch) = (group(caps, 1), group(caps, 2), group(caps, 3));
        if is_x(caps.get(1)) {
            String::new()
        } else if is_x(caps.get(2)) {
            format!(">={}.0.0 <{}.0.0", major, incr(major))
        } else if is_x(caps.get(3)) {
            format!(">={}.{}.0 <{}.{}.0", major, minor, major, incr(minor))
        } else if let Some(pr) = caps.get(4) {
            format!(
                ">={}.{}.{}-{} <{}.{}.0",
                major, minor, patch, pr.as_str(), major, incr(minor)
            )
        } else {
            format!(">={}.{}.{} <{}.{}.0", major, minor, patch, major, incr(minor))
        }
    })
    .into_owned()
}

// ^ --> * (any, kinda silly)
// ^2, ^2.x, ^2.x.x --> >=2.0.0 <3.0.0
// ^2.0, ^2.0.x --> >=2.0.0 <3.0.0
// ^1.2, ^1.2.x --> >=1.2.0 <2.0.0
// ^1.2.3 --> >=1.2.3 <2.0.0
// ^0.2.3 --> >=0.2.3 <0.3.0
// ^0.0.3 --> >=0.0.3 <0.0.4
fn replace_carets(comp: &str, options: Options) -> String {
    map_tokens(comp, |token| replace_caret(token, options))
}

fn replace_caret(comp: &str, options: Options) -> String {
    let re = if options.loose { &*CARET_LOOSE_RE } else { &*CARET_RE };
    re.replace(comp, |caps: &Captures| {
        let (major, minor, patch) = (group(caps, 1), group(caps, 2), group(caps, 3));
        if is_x(caps.get(1)) {
            return String::new();
        }
        if is_x(caps.get(2)) {
            return format!(">={}.0.0 <{}.0.0", major, incr(major));
        }
        if is_x(caps.get(3)) {
            return if major == "0" {
                format!(">={}.{}.0 <{}.{}.0", major, minor, major, incr(minor))
            } else {
                format!(">={}.{}.0 <{}.0.0", major, minor, incr(major))
            };
        }

        let lower = match caps.get(4) {
            Some(pr) => format!(">={}.{}.{}-{}", major, minor, patch, pr.as_str()),
            None => format!(">={}.{}.{}", major, minor, patch),
        };
        let upper = if major != "0" {
            format!("<{}.0.0", incr(major))
        } else if minor != "0" {
            format!("<{}.{}.0", major, incr(minor))
        } else {
            format!("<{}.{}.{}", major, minor, incr(patch))
        };
        format!("{} {}", lower, upper)
    })
    .into_owned()
}

fn replace_x_ranges(comp: &str, options: Options) -> String {
    split_whitespace_keep_edges(comp)
        .into_iter()
        .map(|token| replace_x_range(token, options))
        .collect::<Vec<_>>()
        .join(" ")
}

fn replace_x_range(comp: &str, options: Options) -> String {
    let comp = comp.trim();
    let re = if options.loose { &*XRANGE_LOOSE_RE } else { &*XRANGE_RE };
    re.replace(comp, |caps: &Captures| {
        let (major, minor) = (group(caps, 2), group(caps, 3));
        let x_major = is_x(caps.get(2));
        let x_minor = x_major || is_x(caps.get(3));
        let any_x = x_minor || is_x(caps.get(4));

        let mut gtlt = group(caps, 1);
        if gtlt == "=" && any_x {
            gtlt = "";
        }

        if x_major {
            if gtlt == ">" || gtlt == "<" {
                // nothing is allowed
                "<0.0.0".to_string()
            } else {
                // nothing is forbidden
                "*".to_string()
            }
        } else if !gtlt.is_empty() && any_x {
            let mut new_major = major.to_string();
            let mut new_minor = if x_minor { "0".to_string() } else { minor.to_string() };

            if gtlt == ">" {
                // >1 => >=2.0.0, >1.2 => >=1.3.0
                gtlt = ">=";
                if x_minor {
                    new_major = incr(major);
                    new_minor = "0".to_string();
                } else {
                    new_minor = incr(minor);
                }
            } else if gtlt == "<=" {
                // <=0.7.x is actually <0.8.0, since any 0.7.x should pass.
                gtlt = "<";
                if x_minor {
                    new_major = incr(major);
                } else {
                    new_minor = incr(minor);
                }
            }
            format!("{}{}.{}.0", gtlt, new_major, new_minor)
        } else if x_minor {
            format!(">={}.0.0 <{}.0.0", major, incr(major))
        } else if any_x {
            format!(">={}.{}.0 <{}.{}.0", major, minor, major, incr(minor))
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

// `*` is AND-ed with everything else and an empty comparator already means
// "any version", so stars are simply removed.
fn replace_stars(comp: &str) -> String {
    STAR_RE.replacen(comp.trim(), 1, "").into_owned()
}

// 1.2 - 3.4.5 => >=1.2.0 <=3.4.5
// 1.2.3 - 3.4 => >=1.2.0 <3.5.0 Any 3.4.x will do
// 1.2 - 3.4 => >=1.2.0 <3.5.0
fn hyphen_replace(caps: &Captures) -> String {
    let (from_major, from_minor) = (group(caps, 2), group(caps, 3));
    let from = if is_x(caps.get(2)) {
        String::new()
    } else if is_x(caps.get(3)) {
        format!(">={}.0.0", from_major)
    } else if is_x(caps.get(4)) {
        format!(">={}.{}.0", from_major, from_minor)
    } else {
        format!(">={}", group(caps, 1))
    };

    let (to_major, to_minor, to_patch) = (group(caps, 8), group(caps, 9), group(caps, 10));
    let to = if is_x(caps.get(8)) {
        String::new()
    } else if is_x(caps.get(9)) {
        format!("<{}.0.0", incr(to_major))
    } else if is_x(caps.get(10)) {
        format!("<{}.{}.0", to_major, incr(to_minor))
    } else if let Some(pr) = caps.get(11) {
        format!("<={}.{}.{}-{}", to_major, to_minor, to_patch, pr.as_str())
    } else {
        format!("<={}", group(caps, 7))
    };

    format!("{} {}", from, to).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(range: &str) -> String {
        parse_comparator_set(range, Options::STRICT)
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    fn expand_loose(range: &str) -> String {
        parse_comparator_set(range, Options::LOOSE)
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    #[test]
    fn test_hyphen_ranges() {
        assert_eq!(expand("1.2.3 - 2.3.4"), ">=1.2.3 <=2.3.4");
        assert_eq!(expand("1.2 - 2.3.4"), ">=1.2.0 <=2.3.4");
        assert_eq!(expand("1.2.3 - 2.3"), ">=1.2.3 <2.4.0");
        assert_eq!(expand("1.2.3 - 2"), ">=1.2.3 <3.0.0");
        assert_eq!(expand("1.2 - 2.3"), ">=1.2.0 <2.4.0");
        assert_eq!(expand("1.2.3 - 2.3.4-beta"), ">=1.2.3 <=2.3.4-beta");
        assert_eq!(expand("1.2.3+asdf - 2.4.3+asdf"), ">=1.2.3 <=2.4.3");
        assert_eq!(expand("* - 2.0.0"), "<=2.0.0");
    }

    #[test]
    fn test_operator_whitespace() {
        assert_eq!(expand("> 1.2.3"), ">1.2.3");
        assert_eq!(expand(">=   1.0.0 <  2.0.0"), ">=1.0.0 <2.0.0");
        assert_eq!(expand("~ 1.2.3"), ">=1.2.3 <1.3.0");
        assert_eq!(expand("^ 1.2.3"), ">=1.2.3 <2.0.0");
        assert_eq!(expand("~> 1.2"), ">=1.2.0 <1.3.0");
    }

    #[test]
    fn test_tilde() {
        assert_eq!(expand("~1"), ">=1.0.0 <2.0.0");
        assert_eq!(expand("~1.x"), ">=1.0.0 <2.0.0");
        assert_eq!(expand("~1.2"), ">=1.2.0 <1.3.0");
        assert_eq!(expand("~1.2.3"), ">=1.2.3 <1.3.0");
        assert_eq!(expand("~1.2.3-beta.2"), ">=1.2.3-beta.2 <1.3.0");
        assert_eq!(expand("~>3.2.1"), ">=3.2.1 <3.3.0");
        assert_eq!(expand("~*"), "");
    }

    #[test]
    fn test_caret() {
        assert_eq!(expand("^1"), ">=1.0.0 <2.0.0");
        assert_eq!(expand("^1.2"), ">=1.2.0 <2.0.0");
        assert_eq!(expand("^0.2"), ">=0.2.0 <0.3.0");
        assert_eq!(expand("^0.0"), ">=0.0.0 <0.1.0");
        assert_eq!(expand("^1.2.3"), ">=1.2.3 <2.0.0");
        assert_eq!(expand("^1.2.3-beta.4"), ">=1.2.3-beta.4 <2.0.0");
        assert_eq!(expand("^0.2.3"), ">=0.2.3 <0.3.0");
        assert_eq!(expand("^0.0.3"), ">=0.0.3 <0.0.4");
        assert_eq!(expand("^0.0.3-beta"), ">=0.0.3-beta <0.0.4");
        assert_eq!(expand("^0.1.2-alpha"), ">=0.1.2-alpha <0.2.0");
        assert_eq!(expand("^1.2.3+build"), ">=1.2.3 <2.0.0");
    }

    #[test]
    fn test_x_ranges() {
        assert_eq!(expand("1.x"), ">=1.0.0 <2.0.0");
        assert_eq!(expand("1.2.x"), ">=1.2.0 <1.3.0");
        assert_eq!(expand("1.2.*"), ">=1.2.0 <1.3.0");
        assert_eq!(expand("1"), ">=1.0.0 <2.0.0");
        assert_eq!(expand("1.2"), ">=1.2.0 <1.3.0");
        assert_eq!(expand("=1.x"), ">=1.0.0 <2.0.0");
        assert_eq!(expand(">1"), ">=2.0.0");
        assert_eq!(expand(">1.2"), ">=1.3.0");
        assert_eq!(expand(">=1.2"), ">=1.2.0");
        assert_eq!(expand("<1.2"), "<1.2.0");
        assert_eq!(expand("<=0.7.x"), "<0.8.0");
        assert_eq!(expand("<=7.x"), "<8.0.0");
        assert_eq!(expand(">x"), "<0.0.0");
        assert_eq!(expand("<*"), "<0.0.0");
        assert_eq!(expand(">=*"), "");
    }

    #[test]
    fn test_stars() {
        assert_eq!(expand("*"), "");
        assert_eq!(expand("x"), "");
        assert_eq!(expand(""), "");
        assert_eq!(expand("* 1.2.3"), "1.2.3");
    }

    #[test]
    fn test_plain_comparators_pass_through() {
        assert_eq!(expand(">=1.2.3 <2.0.0-0"), ">=1.2.3 <2.0.0-0");
        assert_eq!(expand("=1.2.3"), "1.2.3");
        assert_eq!(expand("v1.2.3"), "1.2.3");
    }

    #[test]
    fn test_strict_rejects_garbage() {
        assert!(parse_comparator_set("blerg", Options::STRICT).is_err());
        assert!(parse_comparator_set(">=1.2.3 nope", Options::STRICT).is_err());
    }

    #[test]
    fn test_loose_drops_garbage() {
        assert_eq!(expand_loose(">=1.2.3 nope"), ">=1.2.3");
        assert_eq!(expand_loose("~v0.5.4-pre"), ">=0.5.4-pre <0.6.0");
        assert_eq!(expand_loose("=0.7.x"), ">=0.7.0 <0.8.0");
        assert!(parse_comparator_set("blerg", Options::LOOSE).unwrap().is_empty());
    }
}
