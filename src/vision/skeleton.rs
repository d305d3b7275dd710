//! Skeleton normalizer
//!
//! Erases coordinate values from a draw path so that the same glyph drawn at
//! a different position yields the same text. Two kinds of operand are
//! replaced with [`WILDCARD`]:
//!
//! 1. a number standing alone between two separators
//!    (`Q3.13 18.23 1.93 16.56Q` erases `18.23` and `1.93`)
//! 2. a number glued to an absolute command letter (`M5.40` becomes `M*`)
//!
//! Everything else, including the operand that runs into the next command
//! letter, is kept verbatim. Fonts render digits on a shared baseline, so
//! those trailing operands are the same for every position of a glyph and
//! carry shape information.

use super::path::{tokenize, Token, TokenKind};

/// Marker that replaces an erased operand
pub const WILDCARD: char = '*';

fn is_separator(token: Option<&Token>) -> bool {
    matches!(token, Some(t) if t.kind == TokenKind::Separator)
}

/// Reduce a draw path to its skeleton
pub fn normalize(path: &str) -> String {
    let tokens: Vec<Token> = tokenize(path).collect();
    let mut skeleton = String::with_capacity(path.len());

    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Number {
            skeleton.push_str(token.text);
            continue;
        }

        let prev = i.checked_sub(1).and_then(|p| tokens.get(p));
        let next = tokens.get(i + 1);

        let glued_to_command = prev.is_some_and(Token::is_absolute_command);
        let isolated = is_separator(prev) && is_separator(next);

        if glued_to_command || isolated {
            skeleton.push(WILDCARD);
        } else {
            skeleton.push_str(token.text);
        }
    }

    skeleton
}

/// Whether normalizing `path` would leave it unchanged
pub fn is_normalized(path: &str) -> bool {
    normalize(path) == path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::catalog::GlyphCatalog;
    use crate::vision::reference::REFERENCE_GLYPHS;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_minus_sign() {
        assert_eq!(
            normalize("M6.66 14.13L1.24 14.13L1.24 12.35L6.66 12.35L6.66 14.13Z"),
            "M* 14.13L* 14.13L* 12.35L* 12.35L* 14.13Z"
        );
    }

    #[test]
    fn test_normalize_curve_operands() {
        // Control points between separators are erased, the last operand is kept
        assert_eq!(
            normalize("M5.40 18.23Q3.13 18.23 1.93 16.56Q0.72 14.89 0.72 11.68Z"),
            "M* 18.23Q* * * 16.56Q* * * 11.68Z"
        );
    }

    #[test]
    fn test_leading_and_trailing_numbers_kept() {
        // No command before, no separator after
        assert_eq!(normalize("5 6"), "5 6");
        assert_eq!(normalize(" 5 "), " * ");
    }

    #[test]
    fn test_relative_commands_untouched() {
        assert_eq!(normalize("m1.5 2 3l4 5"), "m1.5 * 3l4 5");
    }

    #[test]
    fn test_normalization_invariance() {
        // Same glyph rendered at different offsets
        let a = "M9.86 7.00L4.05 18.09L1.57 18.09L7.76 6.43L7.81 7.15L0.94 7.15L0.94 5.27L9.86 5.27L9.86 7.00Z";
        let b = "M42.26 7.00L36.45 18.09L33.97 18.09L40.16 6.43L40.21 7.15L33.34 7.15L33.34 5.27L42.26 5.27L42.26 7.00Z";
        assert_eq!(normalize(a), normalize(b));
    }

    #[test]
    fn test_idempotence() {
        for glyph in REFERENCE_GLYPHS {
            let once = normalize(glyph.path);
            assert_eq!(normalize(&once), once, "glyph {}", glyph.label);
            assert!(is_normalized(&once));
        }
        assert!(is_normalized(""));
        assert!(!is_normalized("M1 2Z"));
    }

    #[test]
    fn test_comma_separators_kept_verbatim() {
        let once = normalize("M1,2,3 4");
        assert_eq!(once, "M*,*,* 4");
        assert_eq!(normalize(&once), once);

        // Operands are erased alike, separator text is not
        assert_eq!(normalize("M1 2 3 4"), "M* * * 4");
        assert_ne!(normalize("M1 2 3 4"), once);
    }

    #[test]
    fn test_catalog_round_trip() {
        let catalog = GlyphCatalog::builtin();
        for glyph in REFERENCE_GLYPHS {
            let expected = catalog
                .skeleton_for(glyph.symbol)
                .expect("every reference symbol is catalogued");
            assert_eq!(normalize(glyph.path), expected, "glyph {}", glyph.label);
        }
    }
}
