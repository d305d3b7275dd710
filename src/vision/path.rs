//! Draw-path lexer
//!
//! Splits the text of a vector path (`d` attribute) into command letters,
//! numeric operands, separators and anything else. The lexer never fails:
//! every byte of the input lands in exactly one token, so concatenating the
//! token texts reproduces the input.

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A single ASCII letter (`M`, `L`, `Q`, `Z`, `m`, ...)
    Command,
    /// A maximal run of ASCII digits and decimal points
    Number,
    /// A maximal run of whitespace and commas
    Separator,
    /// Any other single character (signs, wildcards, delimiters)
    Other,
}

/// One token with its position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the token in the source
    pub offset: usize,
}

impl Token<'_> {
    /// Absolute (uppercase) drawing command
    pub fn is_absolute_command(&self) -> bool {
        self.kind == TokenKind::Command && self.text.bytes().all(|b| b.is_ascii_uppercase())
    }
}

fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}

fn is_separator_byte(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b','
}

/// Iterator over the tokens of a draw path
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn take_while(&mut self, pred: fn(u8) -> bool) -> usize {
        let bytes = self.src.as_bytes();
        let mut end = self.pos;
        while end < bytes.len() && pred(bytes[end]) {
            end += 1;
        }
        end
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        let first = *self.src.as_bytes().get(start)?;

        let (kind, end) = if is_number_byte(first) {
            (TokenKind::Number, self.take_while(is_number_byte))
        } else if is_separator_byte(first) {
            (TokenKind::Separator, self.take_while(is_separator_byte))
        } else if first.is_ascii_alphabetic() {
            (TokenKind::Command, start + 1)
        } else {
            // Keep multi-byte characters whole
            let width = self.src[start..].chars().next().map_or(1, char::len_utf8);
            (TokenKind::Other, start + width)
        };

        self.pos = end;
        Some(Token {
            kind,
            text: &self.src[start..end],
            offset: start,
        })
    }
}

/// Lex a draw path
pub fn tokenize(path: &str) -> Lexer<'_> {
    Lexer::new(path)
}

/// Number of sub-shapes (moveto commands) in a path
pub fn subpath_count(path: &str) -> usize {
    tokenize(path)
        .filter(|t| t.kind == TokenKind::Command && (t.text == "M" || t.text == "m"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(path: &str) -> Vec<(TokenKind, &str)> {
        tokenize(path).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_tokenize_simple_path() {
        assert_eq!(
            kinds("M6.66 14.13L1.24 14.13Z"),
            vec![
                (TokenKind::Command, "M"),
                (TokenKind::Number, "6.66"),
                (TokenKind::Separator, " "),
                (TokenKind::Number, "14.13"),
                (TokenKind::Command, "L"),
                (TokenKind::Number, "1.24"),
                (TokenKind::Separator, " "),
                (TokenKind::Number, "14.13"),
                (TokenKind::Command, "Z"),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_tokens_cover_input() {
        let path = "M1,2  l-3.5 4ZM* 7.00Q|x|ü";
        let rebuilt: String = tokenize(path).map(|t| t.text).collect();
        assert_eq!(rebuilt, path);

        let offsets: Vec<usize> = tokenize(path).map(|t| t.offset).collect();
        assert_eq!(offsets[0], 0);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_separator_runs_and_signs() {
        assert_eq!(
            kinds("l-3 ,4"),
            vec![
                (TokenKind::Command, "l"),
                (TokenKind::Other, "-"),
                (TokenKind::Number, "3"),
                (TokenKind::Separator, " ,"),
                (TokenKind::Number, "4"),
            ]
        );
    }

    #[test]
    fn test_absolute_command() {
        let tokens: Vec<Token> = tokenize("Mq5").collect();
        assert!(tokens[0].is_absolute_command());
        assert!(!tokens[1].is_absolute_command());
        assert!(!tokens[2].is_absolute_command());
    }

    #[test]
    fn test_subpath_count() {
        assert_eq!(subpath_count(""), 0);
        assert_eq!(subpath_count("M1 2L3 4Z"), 1);
        assert_eq!(subpath_count("M1 2L3 4ZM5 6L7 8Zm1 1z"), 3);
    }
}
