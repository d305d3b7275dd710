//! Vision Layer
//!
//! Reads numbers that sensor pages render as vector glyph artwork instead of
//! text. A draw path is reduced to its skeleton (operand values erased) and
//! the skeleton is matched against a catalog of known glyph skeletons.
//! Supports two matching strategies:
//! - Anchored longest match (default)
//! - Scan-order substitution

pub mod catalog;
pub mod collate;
pub mod path;
pub mod recognizer;
pub mod reference;
pub mod skeleton;

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

pub use catalog::{load_catalog, GlyphCatalog, GlyphEntry};
pub use collate::collate;
pub use recognizer::{closest_glyph, MatchStrategy, Recognition, UnmatchedSpan};
pub use skeleton::normalize;

/// Configuration for the glyph reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Matching strategy
    pub strategy: MatchStrategy,
    /// Reject catalogs that could match ambiguously
    pub validate_catalog: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::LongestMatch,
            validate_catalog: true,
        }
    }
}

/// Glyph reading pipeline with an explicit catalog
#[derive(Debug, Clone)]
pub struct GlyphReader {
    /// Skeleton table to match against
    catalog: GlyphCatalog,
    /// Current configuration
    config: ReaderConfig,
}

impl GlyphReader {
    /// Create a reader over the built-in catalog with default configuration
    pub fn new() -> Self {
        Self {
            catalog: GlyphCatalog::default(),
            config: ReaderConfig::default(),
        }
    }

    /// Create a reader over a given catalog
    pub fn with_catalog(catalog: GlyphCatalog, config: ReaderConfig) -> Result<Self> {
        if config.validate_catalog {
            catalog.validate()?;
        }
        debug!(
            "Glyph reader ready: {} glyphs, strategy {:?}",
            catalog.len(),
            config.strategy
        );
        Ok(Self { catalog, config })
    }

    /// Create a reader over a catalog stored in a TOML file
    pub fn from_catalog_file(path: &Path, config: ReaderConfig) -> Result<Self> {
        let catalog = load_catalog(path)?;
        Self::with_catalog(catalog, config)
    }

    pub fn catalog(&self) -> &GlyphCatalog {
        &self.catalog
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.config.strategy
    }

    /// Set the matching strategy
    pub fn set_strategy(&mut self, strategy: MatchStrategy) {
        self.config.strategy = strategy;
    }

    fn recognize(&self, path: &str) -> Recognition {
        let skeleton = normalize(path);
        recognizer::match_skeleton(&self.catalog, &skeleton, self.config.strategy)
    }

    /// Best-effort reading; unmatched skeleton text stays in the result
    pub fn read(&self, path: &str) -> String {
        self.recognize(path).render()
    }

    /// Reading that separates recognized characters from unmatched fragments
    pub fn read_checked(&self, path: &str) -> Recognition {
        let recognition = self.recognize(path);

        for span in recognition.unmatched() {
            match closest_glyph(&self.catalog, &span.fragment) {
                Some((symbol, score)) => warn!(
                    "Unrecognized glyph after {} character(s) at offset {} (closest {:?}, similarity {:.2})",
                    span.position, span.offset, symbol, score
                ),
                None => warn!(
                    "Unrecognized glyph after {} character(s) at offset {}",
                    span.position, span.offset
                ),
            }
        }

        debug!(
            "Read {:?} from {} sub-shape(s)",
            recognition.output(),
            path::subpath_count(path)
        );
        recognition
    }

    /// Read a number split across several single-glyph paths
    pub fn read_collated<I>(&self, paths: I) -> Recognition
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.read_checked(&collate(paths))
    }
}

impl Default for GlyphReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::reference::{reference_glyph, REFERENCE_NUMBERS};

    #[test]
    fn test_default_reader() {
        let reader = GlyphReader::new();
        assert_eq!(reader.strategy(), MatchStrategy::LongestMatch);
        assert_eq!(reader.catalog(), GlyphCatalog::builtin());
    }

    #[test]
    fn test_read_reference_numbers_with_both_strategies() {
        let mut reader = GlyphReader::new();
        for strategy in [MatchStrategy::LongestMatch, MatchStrategy::Substitution] {
            reader.set_strategy(strategy);
            for number in REFERENCE_NUMBERS {
                let paths = number.paths();
                assert_eq!(reader.read(&paths.concat()), number.expected);
                assert_eq!(
                    reader.read_collated(&paths),
                    Recognition::Recognized(number.expected.to_string())
                );
            }
        }
    }

    #[test]
    fn test_read_matches_legacy_recognize() {
        let mut reader = GlyphReader::new();
        reader.set_strategy(MatchStrategy::Substitution);
        let path = format!("{}M1 2L3 4Z", reference_glyph("3@1").unwrap().path);
        assert_eq!(reader.read(&path), recognizer::recognize(&path));
    }

    #[test]
    fn test_read_checked_partial() {
        let reader = GlyphReader::new();
        let path = format!("{}M1 2L3 4Z", reference_glyph("3@1").unwrap().path);
        let recognition = reader.read_checked(&path);
        assert_eq!(recognition.output(), "3");
        assert_eq!(recognition.unmatched().len(), 1);
        assert_eq!(reader.read(&path), "3M* 2L* 4Z");
    }

    #[test]
    fn test_read_checked_literal_marker() {
        let mut reader = GlyphReader::new();
        for strategy in [MatchStrategy::LongestMatch, MatchStrategy::Substitution] {
            reader.set_strategy(strategy);
            let recognition = reader.read_checked("|1|");
            assert!(!recognition.is_complete(), "{strategy:?}");
            assert!(crate::analysis::reading::parse_recognition(recognition).is_err());
        }
    }

    #[test]
    fn test_read_empty() {
        let reader = GlyphReader::new();
        assert_eq!(reader.read(""), "");
        assert!(reader.read_checked("").is_complete());
        assert!(reader.read_collated(Vec::<&str>::new()).is_complete());
    }

    #[test]
    fn test_with_catalog_validation() {
        let catalog = GlyphCatalog::new(vec![GlyphEntry::new('1', "M* 1Z")]).unwrap();
        let reader = GlyphReader::with_catalog(catalog, ReaderConfig::default()).unwrap();
        assert_eq!(reader.read("M4 1Z"), "1");
    }

    #[test]
    fn test_from_catalog_file_missing() {
        let result = GlyphReader::from_catalog_file(
            Path::new("/nonexistent/catalog.toml"),
            ReaderConfig::default(),
        );
        assert!(result.is_err());
    }
}
