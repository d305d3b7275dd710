//! Measurement readings
//!
//! Converts recognized glyph text into numeric values. The glyph reader makes
//! no promise that its output is a number; this is where that is checked.

use crate::error::ReadingError;
use crate::vision::Recognition;

/// Parse a recognized number (`-?[0-9]+`)
pub fn parse_reading(text: &str) -> Result<f64, ReadingError> {
    if text.is_empty() {
        return Err(ReadingError::Empty);
    }

    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReadingError::MalformedNumber(text.to_string()));
    }

    text.parse::<f64>()
        .map_err(|_| ReadingError::MalformedNumber(text.to_string()))
}

/// Parse a recognition, refusing partially recognized glyph runs
pub fn parse_recognition(recognition: Recognition) -> Result<f64, ReadingError> {
    let text = recognition.into_result()?;
    parse_reading(&text)
}
