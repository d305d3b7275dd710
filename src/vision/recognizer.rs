//! Glyph recognizer
//!
//! Turns a skeleton into the characters it spells by matching catalog
//! skeletons. Two strategies are available:
//! - `Substitution` replaces every occurrence of each catalog skeleton, in
//!   catalog order, with a delimited symbol and strips the delimiters.
//! - `LongestMatch` walks the skeleton left to right and takes the longest
//!   catalog skeleton starting at each offset. The result does not depend on
//!   catalog order.
//!
//! Anything no catalog entry accounts for is reported as an [`UnmatchedSpan`].

use serde::{Deserialize, Serialize};

use super::catalog::{GlyphCatalog, DELIMITER};
use super::skeleton::normalize;
use crate::error::ReadingError;

/// How skeletons are matched against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Whole-string replacement in catalog declaration order
    Substitution,
    /// Anchored longest-prefix scan
    #[default]
    LongestMatch,
}

/// A stretch of skeleton text no glyph accounts for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedSpan {
    /// Number of recognized characters before the span
    pub position: usize,
    /// Byte offset of the span in the skeleton
    pub offset: usize,
    /// Unmatched skeleton text
    pub fragment: String,
}

/// Outcome of recognizing one skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// Every part of the path matched a glyph
    Recognized(String),
    /// Some parts matched nothing; `output` holds only the matched characters
    PartiallyRecognized {
        output: String,
        unmatched: Vec<UnmatchedSpan>,
    },
}

impl Recognition {
    fn from_parts(output: String, unmatched: Vec<UnmatchedSpan>) -> Self {
        if unmatched.is_empty() {
            Recognition::Recognized(output)
        } else {
            Recognition::PartiallyRecognized { output, unmatched }
        }
    }

    /// Recognized characters
    pub fn output(&self) -> &str {
        match self {
            Recognition::Recognized(output) => output,
            Recognition::PartiallyRecognized { output, .. } => output,
        }
    }

    pub fn unmatched(&self) -> &[UnmatchedSpan] {
        match self {
            Recognition::Recognized(_) => &[],
            Recognition::PartiallyRecognized { unmatched, .. } => unmatched,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Recognition::Recognized(_))
    }

    /// Best-effort text with unmatched fragments left in place
    pub fn render(&self) -> String {
        let output = self.output();
        let mut rendered = String::with_capacity(output.len());
        let mut spans = self.unmatched().iter().peekable();

        for (i, symbol) in output.chars().enumerate() {
            while let Some(span) = spans.next_if(|s| s.position == i) {
                rendered.push_str(&span.fragment);
            }
            rendered.push(symbol);
        }
        for span in spans {
            rendered.push_str(&span.fragment);
        }

        rendered
    }

    /// Recognized text, or an error when anything went unmatched
    pub fn into_result(self) -> Result<String, ReadingError> {
        match self {
            Recognition::Recognized(output) => Ok(output),
            Recognition::PartiallyRecognized { output, unmatched } => {
                Err(ReadingError::PartiallyRecognized { output, unmatched })
            }
        }
    }
}

/// Replace catalog skeletons with `|symbol|` markers, in catalog order
pub fn substitute(catalog: &GlyphCatalog, skeleton: &str) -> String {
    let mut marked = skeleton.to_string();
    for entry in catalog {
        if marked.contains(entry.skeleton.as_str()) {
            let marker = format!("{DELIMITER}{}{DELIMITER}", entry.symbol);
            marked = marked.replace(entry.skeleton.as_str(), &marker);
        }
    }
    marked
}

/// Remove substitution delimiters
pub fn strip_delimiters(marked: &str) -> String {
    marked.chars().filter(|&c| c != DELIMITER).collect()
}

/// Recognize a draw path with the built-in catalog by substitution
///
/// Unmatched skeleton text is left in the result untouched.
pub fn recognize(path: &str) -> String {
    recognize_with(GlyphCatalog::builtin(), path)
}

/// Recognize a draw path with the given catalog by substitution
pub fn recognize_with(catalog: &GlyphCatalog, path: &str) -> String {
    strip_delimiters(&substitute(catalog, &normalize(path)))
}

/// Collects matched symbols and groups unmatched text into spans
struct SpanCollector {
    output: String,
    unmatched: Vec<UnmatchedSpan>,
    pending: Option<(usize, String)>,
}

impl SpanCollector {
    fn new() -> Self {
        Self {
            output: String::new(),
            unmatched: Vec::new(),
            pending: None,
        }
    }

    fn symbol(&mut self, symbol: char) {
        self.flush();
        self.output.push(symbol);
    }

    fn residue(&mut self, offset: usize, text: &str) {
        self.pending
            .get_or_insert_with(|| (offset, String::new()))
            .1
            .push_str(text);
    }

    fn flush(&mut self) {
        if let Some((offset, fragment)) = self.pending.take() {
            self.unmatched.push(UnmatchedSpan {
                position: self.output.chars().count(),
                offset,
                fragment,
            });
        }
    }

    fn finish(mut self) -> Recognition {
        self.flush();
        Recognition::from_parts(self.output, self.unmatched)
    }
}

/// Part of a skeleton after structured substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Glyph(char),
    Raw { offset: usize, text: &'a str },
}

/// Replace catalog skeletons in catalog order, keeping matched glyphs apart
/// from the source text so delimiters in the input are never read as markers
fn substitution_pieces<'a>(catalog: &GlyphCatalog, skeleton: &'a str) -> Vec<Piece<'a>> {
    let mut pieces = vec![Piece::Raw { offset: 0, text: skeleton }];
    for entry in catalog {
        let pattern = entry.skeleton.as_str();
        if pattern.is_empty() {
            continue;
        }
        pieces = pieces
            .into_iter()
            .flat_map(|piece| split_piece(piece, entry.symbol, pattern))
            .collect();
    }
    pieces
}

fn split_piece<'a>(piece: Piece<'a>, symbol: char, pattern: &str) -> Vec<Piece<'a>> {
    let Piece::Raw { offset, text } = piece else {
        return vec![piece];
    };

    let mut split = Vec::new();
    let mut last = 0;
    for (start, matched) in text.match_indices(pattern) {
        if start > last {
            split.push(Piece::Raw {
                offset: offset + last,
                text: &text[last..start],
            });
        }
        split.push(Piece::Glyph(symbol));
        last = start + matched.len();
    }
    if last < text.len() {
        split.push(Piece::Raw {
            offset: offset + last,
            text: &text[last..],
        });
    }
    split
}

/// Recognize a skeleton by substitution, reporting leftover text as spans
pub fn match_substitution(catalog: &GlyphCatalog, skeleton: &str) -> Recognition {
    let mut collector = SpanCollector::new();

    for piece in substitution_pieces(catalog, skeleton) {
        match piece {
            Piece::Glyph(symbol) => collector.symbol(symbol),
            Piece::Raw { offset, text } => collector.residue(offset, text),
        }
    }

    collector.finish()
}

/// Recognize a skeleton with an anchored longest-prefix scan
pub fn match_longest(catalog: &GlyphCatalog, skeleton: &str) -> Recognition {
    let mut collector = SpanCollector::new();
    let mut offset = 0;

    while offset < skeleton.len() {
        let rest = &skeleton[offset..];
        let best = catalog
            .iter()
            .filter(|entry| rest.starts_with(entry.skeleton.as_str()))
            .max_by_key(|entry| entry.skeleton.len());

        match best {
            Some(entry) => {
                collector.symbol(entry.symbol);
                offset += entry.skeleton.len();
            }
            None => {
                let width = rest.chars().next().map_or(1, char::len_utf8);
                collector.residue(offset, &rest[..width]);
                offset += width;
            }
        }
    }

    collector.finish()
}

/// Recognize a skeleton with the chosen strategy
pub fn match_skeleton(catalog: &GlyphCatalog, skeleton: &str, strategy: MatchStrategy) -> Recognition {
    match strategy {
        MatchStrategy::Substitution => match_substitution(catalog, skeleton),
        MatchStrategy::LongestMatch => match_longest(catalog, skeleton),
    }
}

/// Catalog symbol whose skeleton most resembles `fragment`, with its similarity
pub fn closest_glyph(catalog: &GlyphCatalog, fragment: &str) -> Option<(char, f64)> {
    catalog
        .iter()
        .map(|entry| {
            let score = strsim::normalized_levenshtein(fragment, &entry.skeleton);
            (entry.symbol, score)
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
}
