//! Semantic versioning library compatible with node-semver
//!
//! This crate provides version parsing, precedence comparison, release bumps
//! and range matching (tilde, caret, x-range, hyphen and star ranges) with the
//! semantics of the npm `semver` package.

pub mod constraint;
mod error;
mod identifier;
mod options;
mod range_parser;
mod semver;
mod version;
mod version_parser;

pub use constraint::{is_satisfiable, Comparator, Direction, Operand, Operator, Range};
pub use error::SemverError;
pub use identifier::{compare_identifiers, rcompare_identifiers, Identifier};
pub use options::Options;
pub use semver::Semver;
pub use version::{ReleaseType, Version};
pub use version_parser::{
    clean, coerce, parse, valid, MAX_LENGTH, MAX_SAFE_COMPONENT_LENGTH, MAX_SAFE_INTEGER,
    SEMVER_SPEC_VERSION,
};
