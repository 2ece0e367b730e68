//! Program Loader.
//!
//! LS-8 programs are text files holding one byte per line, written as eight
//! binary digits. Everything from a `#` to the end of the line is a comment,
//! and lines that are blank once comments are stripped are skipped:
//!
//! ```text
//! # print8.ls8
//! 10011001 # LDI R0,8
//! 00000000
//! 00001000
//! 01000011 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Number of digits in one program byte.
const BYTE_DIGITS: usize = 8;

/// Parses LS-8 program text into an image.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] with the 1-based line number of the first
/// malformed line, or [`LoadError::Empty`] if no bytes were found.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::parse_program;
///
/// let image = parse_program("10011001 # LDI\n00000000\n\n00000001\n").unwrap();
/// assert_eq!(image, vec![0b1001_1001, 0, 1]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let code = raw.split_once('#').map_or(raw, |(code, _)| code).trim();
        if code.is_empty() {
            continue;
        }
        image.push(parse_byte(code).ok_or_else(|| LoadError::Parse {
            line: i + 1,
            text: code.to_string(),
        })?);
    }
    if image.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(image)
}

/// Parses exactly eight binary digits.
fn parse_byte(code: &str) -> Option<u8> {
    if code.len() != BYTE_DIGITS || !code.bytes().all(|c| c == b'0' || c == b'1') {
        return None;
    }
    u8::from_str_radix(code, 2).ok()
}

/// Reads and parses an LS-8 program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the same
/// errors as [`parse_program`].
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&text)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "parsed program");
    Ok(image)
}
