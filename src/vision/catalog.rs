//! Glyph catalog
//!
//! Ordered table of known glyph skeletons (`-` and `0`-`9`). The built-in
//! table matches the sensor widget's font; other renderings can be loaded
//! from TOML or derived from reference paths.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use super::skeleton::normalize;
use crate::error::CatalogError;

/// Symbols a catalog may contain, in declaration order
pub const CATALOG_ORDER: &str = "-0123456789";

/// Delimiter used by the substitution matcher
pub const DELIMITER: char = '|';

/// Skeletons of the sensor widget font
const BUILTIN_GLYPHS: [(char, &str); 11] = [
    ('-', "M* 14.13L* 14.13L* 12.35L* 12.35L* 14.13Z"),
    ('0', "M* 18.23L* 18.23Q* * * 16.56Q* * * 11.68L* 11.68Q* * * 6.80Q* * * 5.13L* 5.13Q* * * 6.80Q* * * 11.66L* 11.66Q* * * 16.56Q* * * 18.23ZM* 16.43L* 16.43Q* * * 15.29Q* * * 11.66L* 11.66Q* * * 8.08Q* * * 6.97L* 6.97Q* * * 8.09Q* * * 11.66L* 11.66Q* * * 15.29Q* * * 16.43Z"),
    ('1', "M* 17.03L* 17.03L* 6.98L* 7.24L* 9.50L* 7.43L* 5.27L* 5.27L* 17.03ZM* 18.09L* 18.09L* 16.22L* 16.22L* 18.09Z"),
    ('2', "M* 18.09L* 18.09L* 16.38L* 11.68Q* * * 10.13Q* * * 8.75L* 8.75Q* * * 7.42Q* * * 6.97L* 6.97Q* * * 7.30Q* * * 8.30L* 8.30L* 6.61Q* * * 5.53Q* * * 5.13L* 5.13Q* * * 5.54Q* * * 6.74Q* * * 8.60L* 8.60Q* * * 10.68Q* * * 12.85L* 12.85L* 16.99L* 16.22L* 16.22L* 18.09Z"),
    ('3', "M* 18.22L* 18.22Q* * * 17.83Q* * * 16.74L* 16.74L* 15.05Q* * * 16.05Q* * * 16.38L* 16.38Q* * * 15.90Q* * * 14.42L* 14.42Q* * * 12.98Q* * * 12.51L* 12.51L* 12.51L* 10.67L* 10.67Q* * * 10.21Q* * * 8.80L* 8.80Q* * * 7.43Q* * * 6.97L* 6.97Q* * * 7.30Q* * * 8.30L* 8.30L* 6.61Q* * * 5.53Q* * * 5.13L* 5.13Q* * * 5.54Q* * * 6.72Q* * * 8.51L* 8.51Q* * * 10.47Q* * * 11.59L* 11.59L* 11.41Q* * * 12.52Q* * * 14.62L* 14.62Q* * * 17.25Q* * * 18.22Z"),
    ('4', "M* 18.09L* 18.09L* 8.14L* 8.14L* 14.49L* 13.75L* 13.75L* 15.57L* 15.57L* 13.86L* 5.27L* 5.27L* 18.09Z"),
    ('5', "M* 18.22L* 18.22Q* * * 17.82Q* * * 16.74L* 16.74L* 15.05Q* * * 16.04Q* * * 16.38L* 16.38Q* * * 15.78Q* * * 14.06L* 14.06Q* * * 12.82Q* * * 12.01Q* * * 11.72L* 11.72Q* * * 12.00Q* * * 12.82L* 12.82L* 12.82L* 5.27L* 5.27L* 7.09L* 7.09L* 11.32L* 11.21Q* * * 10.22Q* * * 9.88L* 9.88Q* * * 10.40Q* * * 11.84Q* * * 13.99L* 13.99Q* * * 16.21Q* * * 17.69Q* * * 18.22Z"),
    ('6', "M* 18.23L* 18.23Q* * * 16.61Q* * * 11.92L* 11.92Q* * * 8.25Q* * * 5.93Q* * * 5.13L* 5.13Q* * * 5.51Q* * * 6.61L* 6.61L* 8.30Q* * * 7.28Q* * * 6.97L* 6.97Q* * * 8.24Q* * * 11.88L* 11.88L* 12.85L* 12.40Q* * * 11.06Q* * * 10.18Q* * * 9.86L* 9.86Q* * * 10.40Q* * * 11.85Q* * * 13.99L* 13.99Q* * * 16.19Q* * * 17.69Q* * * 18.23ZM* 16.40L* 16.40Q* * * 15.76Q* * * 14.06L* 14.06Q* * * 12.36Q* * * 11.72L* 11.72Q* * * 12.02Q* * * 12.84Q* * * 14.06L* 14.06Q* * * 15.28Q* * * 16.10Q* * * 16.40Z"),
    ('7', "M* 7.00L* 18.09L* 18.09L* 6.43L* 7.15L* 7.15L* 5.27L* 5.27L* 7.00Z"),
    ('8', "M* 18.22L* 18.22Q* * * 17.79Q* * * 16.56Q* * * 14.63L* 14.63Q* * * 12.43Q* * * 11.38L* 11.38L* 11.65Q* * * 10.56Q* * * 8.57L* 8.57Q* * * 6.73Q* * * 5.54Q* * * 5.13L* 5.13Q* * * 5.54Q* * * 6.73Q* * * 8.57L* 8.57Q* * * 10.58Q* * * 11.65L* 11.65L* 11.38Q* * * 12.46Q* * * 14.63L* 14.63Q* * * 16.56Q* * * 17.79Q* * * 18.22ZM* 16.42L* 16.42Q* * * 15.92Q* * * 14.47L* 14.47Q* * * 13.02Q* * * 12.35L* 12.35Q* * * 13.02Q* * * 14.47L* 14.47Q* * * 15.92Q* * * 16.42ZM* 10.87L* 10.87Q* * * 10.20Q* * * 8.80L* 8.80Q* * * 7.41Q* * * 6.93L* 6.93Q* * * 7.41Q* * * 8.80L* 8.80Q* * * 10.20Q* * * 10.87Z"),
    ('9', "M* 5.13L* 5.13Q* * * 6.76Q* * * 11.45L* 11.45Q* * * 15.11Q* * * 17.43Q* * * 18.23L* 18.23Q* * * 17.86Q* * * 16.76L* 16.76L* 15.07Q* * * 16.08Q* * * 16.40L* 16.40Q* * * 15.13Q* * * 11.48L* 11.48L* 10.51L* 10.96Q* * * 12.30Q* * * 13.19Q* * * 13.50L* 13.50Q* * * 12.97Q* * * 11.51Q* * * 9.38L* 9.38Q* * * 7.17Q* * * 5.67Q* * * 5.13ZM* 6.97L* 6.97Q* * * 7.61Q* * * 9.31L* 9.31Q* * * 11.01Q* * * 11.65L* 11.65Q* * * 11.35Q* * * 10.52Q* * * 9.31L* 9.31Q* * * 8.08Q* * * 7.26Q* * * 6.97Z"),
];

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    pub symbol: char,
    pub skeleton: String,
}

impl GlyphEntry {
    pub fn new(symbol: char, skeleton: impl Into<String>) -> Self {
        Self {
            symbol,
            skeleton: skeleton.into(),
        }
    }
}

/// On-disk catalog layout
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    glyph: Vec<GlyphRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GlyphRecord {
    symbol: String,
    skeleton: String,
}

/// Immutable, ordered skeleton table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphCatalog {
    entries: Vec<GlyphEntry>,
}

fn order_of(symbol: char) -> usize {
    CATALOG_ORDER.find(symbol).unwrap_or(usize::MAX)
}

impl GlyphCatalog {
    /// Build a catalog, rejecting tables that cannot be matched unambiguously
    pub fn new(entries: Vec<GlyphEntry>) -> Result<Self, CatalogError> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in catalog, constructed on first use
    pub fn builtin() -> &'static GlyphCatalog {
        static BUILTIN: OnceLock<GlyphCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| GlyphCatalog {
            entries: BUILTIN_GLYPHS
                .iter()
                .map(|&(symbol, skeleton)| GlyphEntry::new(symbol, skeleton))
                .collect(),
        })
    }

    /// Derive a catalog from reference renderings of each symbol
    ///
    /// Several renderings of one symbol are allowed as long as they all
    /// normalize to the same skeleton. Entries come out in [`CATALOG_ORDER`].
    pub fn from_references<'a, I>(references: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, char)>,
    {
        let mut entries: Vec<GlyphEntry> = Vec::new();

        for (path, symbol) in references {
            let skeleton = normalize(path);
            match entries.iter().find(|e| e.symbol == symbol) {
                Some(existing) if existing.skeleton == skeleton => {}
                Some(_) => return Err(CatalogError::DuplicateSymbol(symbol)),
                None => entries.push(GlyphEntry::new(symbol, skeleton)),
            }
        }

        entries.sort_by_key(|e| order_of(e.symbol));
        debug!("Derived catalog with {} glyphs", entries.len());
        Self::new(entries)
    }

    /// Parse a catalog from TOML (`[[glyph]]` tables with `symbol` and `skeleton`)
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut entries = Vec::with_capacity(file.glyph.len());

        for record in file.glyph {
            let mut chars = record.symbol.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(CatalogError::MalformedSymbol(record.symbol)),
            };
            entries.push(GlyphEntry::new(symbol, record.skeleton));
        }

        Self::new(entries)
    }

    /// Serialize the catalog to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let file = CatalogFile {
            glyph: self
                .entries
                .iter()
                .map(|e| GlyphRecord {
                    symbol: e.symbol.to_string(),
                    skeleton: e.skeleton.clone(),
                })
                .collect(),
        };
        toml::to_string_pretty(&file)
    }

    /// Check the table can be matched without ambiguity
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if !CATALOG_ORDER.contains(entry.symbol) {
                return Err(CatalogError::InvalidSymbol(entry.symbol));
            }
            if entry.skeleton.is_empty() {
                return Err(CatalogError::EmptySkeleton(entry.symbol));
            }
            if entry.skeleton.contains(DELIMITER) {
                return Err(CatalogError::ReservedDelimiter(entry.symbol));
            }

            for other in &self.entries[i + 1..] {
                if other.symbol == entry.symbol {
                    return Err(CatalogError::DuplicateSymbol(entry.symbol));
                }
                if other.skeleton == entry.skeleton {
                    return Err(CatalogError::DuplicateSkeleton {
                        first: entry.symbol,
                        second: other.symbol,
                    });
                }
            }
        }

        for outer in &self.entries {
            for inner in &self.entries {
                if outer.symbol != inner.symbol && outer.skeleton.contains(inner.skeleton.as_str()) {
                    return Err(CatalogError::NestedSkeleton {
                        outer: outer.symbol,
                        inner: inner.symbol,
                    });
                }
            }
        }

        for left in &self.entries {
            for right in &self.entries {
                if let Some(found) = self.straddling(&left.skeleton, &right.skeleton) {
                    return Err(CatalogError::BoundaryCollision {
                        left: left.symbol,
                        right: right.symbol,
                        found,
                    });
                }
            }
        }

        Ok(())
    }

    /// Find an entry whose skeleton crosses the joint of `left` + `right`
    fn straddling(&self, left: &str, right: &str) -> Option<char> {
        let joined = format!("{left}{right}");
        let joint = left.len();

        self.entries.iter().find_map(|entry| {
            let width = entry.skeleton.len();
            // Occurrences that start before the joint and end after it
            let crosses = (joint.saturating_sub(width - 1)..joint)
                .filter_map(|start| joined.get(start..))
                .any(|rest| rest.starts_with(entry.skeleton.as_str()));
            crosses.then_some(entry.symbol)
        })
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlyphEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skeleton registered for a symbol
    pub fn skeleton_for(&self, symbol: char) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.skeleton.as_str())
    }

    /// Symbol whose skeleton is exactly `skeleton`
    pub fn symbol_for(&self, skeleton: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|e| e.skeleton == skeleton)
            .map(|e| e.symbol)
    }
}

impl Default for GlyphCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl<'a> IntoIterator for &'a GlyphCatalog {
    type Item = &'a GlyphEntry;
    type IntoIter = std::slice::Iter<'a, GlyphEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Load a catalog variant from a TOML file
pub fn load_catalog(path: &Path) -> Result<GlyphCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {:?}", path))?;
    let catalog = GlyphCatalog::from_toml_str(&content)
        .with_context(|| format!("Failed to load catalog {:?}", path))?;
    Ok(catalog)
}

/// Save a catalog to a TOML file
pub fn save_catalog(catalog: &GlyphCatalog, path: &Path) -> Result<()> {
    let content = catalog.to_toml_string()?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::reference::REFERENCE_GLYPHS;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = GlyphCatalog::builtin();
        assert_eq!(catalog.len(), 11);
        catalog.validate().unwrap();
    }

    #[test]
    fn test_builtin_declaration_order() {
        let order: String = GlyphCatalog::builtin().iter().map(|e| e.symbol).collect();
        assert_eq!(order, CATALOG_ORDER);
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(GlyphCatalog::builtin(), GlyphCatalog::builtin()));
    }

    #[test]
    fn test_lookup() {
        let catalog = GlyphCatalog::builtin();
        let minus = "M* 14.13L* 14.13L* 12.35L* 12.35L* 14.13Z";
        assert_eq!(catalog.skeleton_for('-'), Some(minus));
        assert_eq!(catalog.symbol_for(minus), Some('-'));
        assert_eq!(catalog.skeleton_for('.'), None);
        assert_eq!(catalog.symbol_for("M* 1Z"), None);
    }

    #[test]
    fn test_from_references_matches_builtin() {
        let derived =
            GlyphCatalog::from_references(REFERENCE_GLYPHS.iter().map(|g| (g.path, g.symbol)))
                .unwrap();
        assert_eq!(&derived, GlyphCatalog::builtin());
    }

    #[test]
    fn test_from_references_conflicting_renderings() {
        let result = GlyphCatalog::from_references([("M1 2L3 4Z", '7'), ("M1 2Q3 4 5 6Z", '7')]);
        assert!(matches!(result, Err(CatalogError::DuplicateSymbol('7'))));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(GlyphCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_invalid_symbol() {
        let result = GlyphCatalog::new(vec![GlyphEntry::new('x', "M* 1Z")]);
        assert!(matches!(result, Err(CatalogError::InvalidSymbol('x'))));
    }

    #[test]
    fn test_rejects_empty_and_delimited_skeletons() {
        let result = GlyphCatalog::new(vec![GlyphEntry::new('1', "")]);
        assert!(matches!(result, Err(CatalogError::EmptySkeleton('1'))));

        let result = GlyphCatalog::new(vec![GlyphEntry::new('1', "M*|Z")]);
        assert!(matches!(result, Err(CatalogError::ReservedDelimiter('1'))));
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = GlyphCatalog::new(vec![
            GlyphEntry::new('1', "M* 1Z"),
            GlyphEntry::new('1', "M* 2Z"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateSymbol('1'))));

        let result = GlyphCatalog::new(vec![
            GlyphEntry::new('1', "M* 1Z"),
            GlyphEntry::new('2', "M* 1Z"),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateSkeleton { first: '1', second: '2' })
        ));
    }

    #[test]
    fn test_rejects_nested_skeleton() {
        let result = GlyphCatalog::new(vec![
            GlyphEntry::new('1', "M* 1Z"),
            GlyphEntry::new('7', "M* 1ZM* 2Z"),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::NestedSkeleton { outer: '7', inner: '1' })
        ));
    }

    #[test]
    fn test_rejects_boundary_collision() {
        // "ZM" spans the joint of any two glyphs ending in Z and starting with M
        let result = GlyphCatalog::new(vec![
            GlyphEntry::new('1', "M1Z"),
            GlyphEntry::new('2', "M2Z"),
            GlyphEntry::new('3', "ZM"),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::BoundaryCollision { left: '1', right: '1', found: '3' })
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let catalog = GlyphCatalog::builtin();
        let text = catalog.to_toml_string().unwrap();
        let parsed = GlyphCatalog::from_toml_str(&text).unwrap();
        assert_eq!(&parsed, catalog);
    }

    #[test]
    fn test_toml_malformed_symbol() {
        let text = "[[glyph]]\nsymbol = \"12\"\nskeleton = \"M* 1Z\"\n";
        let result = GlyphCatalog::from_toml_str(text);
        assert!(matches!(result, Err(CatalogError::MalformedSymbol(s)) if s == "12"));
    }

    #[test]
    fn test_toml_invalid() {
        let result = GlyphCatalog::from_toml_str("this is not valid toml {{");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_save_and_load_catalog() {
        let catalog = GlyphCatalog::new(vec![
            GlyphEntry::new('-', "M* 5L* 5Z"),
            GlyphEntry::new('1', "M* 9L* 1Z"),
        ])
        .unwrap();
        let temp_file = NamedTempFile::new().unwrap();

        save_catalog(&catalog, temp_file.path()).unwrap();
        let loaded = load_catalog(temp_file.path()).unwrap();

        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_catalog_file_not_found() {
        assert!(load_catalog(Path::new("/nonexistent/path/catalog.toml")).is_err());
    }
}
