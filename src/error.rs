//! Error types
//!
//! Typed failures for catalog construction and reading validation. The
//! recognition engine itself is total and never returns these; they come from
//! building a catalog or from turning a recognized string into a value.

use thiserror::Error;

use crate::vision::recognizer::UnmatchedSpan;

/// Reasons a glyph catalog cannot be used for matching
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog must contain at least one glyph
    #[error("catalog has no glyphs")]
    Empty,

    /// Symbol outside of `0-9` and `-`
    #[error("unsupported symbol {0:?} (expected 0-9 or '-')")]
    InvalidSymbol(char),

    /// Skeleton text is empty
    #[error("glyph {0:?} has an empty skeleton")]
    EmptySkeleton(char),

    /// Skeleton contains the substitution delimiter
    #[error("glyph {0:?} skeleton contains the reserved delimiter '|'")]
    ReservedDelimiter(char),

    /// Same symbol declared twice
    #[error("symbol {0:?} is declared more than once")]
    DuplicateSymbol(char),

    /// Two symbols share a skeleton
    #[error("glyphs {first:?} and {second:?} have identical skeletons")]
    DuplicateSkeleton { first: char, second: char },

    /// One skeleton occurs inside another
    #[error("skeleton of {inner:?} occurs inside the skeleton of {outer:?}")]
    NestedSkeleton { outer: char, inner: char },

    /// A skeleton straddles two back-to-back glyphs
    #[error("skeleton of {found:?} matches across the boundary of {left:?} followed by {right:?}")]
    BoundaryCollision { left: char, right: char, found: char },

    /// Symbol field is not exactly one character
    #[error("symbol {0:?} must be exactly one character")]
    MalformedSymbol(String),

    /// Catalog file could not be parsed
    #[error("invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Reasons a recognized number cannot be used as a measurement
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReadingError {
    /// Nothing was recognized
    #[error("no measurement value")]
    Empty,

    /// Recognized text is not a signed integer literal
    #[error("malformed number {0:?}")]
    MalformedNumber(String),

    /// Some glyphs matched no catalog entry
    #[error("partially recognized {output:?}, {} unmatched fragment(s)", .unmatched.len())]
    PartiallyRecognized {
        output: String,
        unmatched: Vec<UnmatchedSpan>,
    },
}
