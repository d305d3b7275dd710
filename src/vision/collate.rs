//! Path collation
//!
//! Some renderers emit one `<path>` element per glyph instead of one per
//! number. Joining their `d` attributes in document order gives the same
//! combined path a single-element rendering would have produced.

/// Concatenate draw paths in the given order
pub fn collate<I>(paths: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    paths.into_iter().fold(String::new(), |mut combined, path| {
        combined.push_str(path.as_ref());
        combined
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::reference::REFERENCE_NUMBERS;

    #[test]
    fn test_collate_empty() {
        assert_eq!(collate(Vec::<String>::new()), "");
        assert_eq!(collate([""; 3]), "");
    }

    #[test]
    fn test_collate_keeps_order() {
        assert_eq!(collate(["M1 2Z", "M3 4Z", "M5 6Z"]), "M1 2ZM3 4ZM5 6Z");
        assert_eq!(collate(["M3 4Z", "M1 2Z"]), "M3 4ZM1 2Z");
    }

    #[test]
    fn test_collate_owned_strings() {
        let paths = vec!["M1 2Z".to_string(), "L3 4Z".to_string()];
        assert_eq!(collate(&paths), "M1 2ZL3 4Z");
    }

    #[test]
    fn test_collate_reference_numbers() {
        for number in REFERENCE_NUMBERS {
            let paths = number.paths();
            assert_eq!(collate(&paths), paths.concat(), "{}", number.expected);
        }
    }
}
