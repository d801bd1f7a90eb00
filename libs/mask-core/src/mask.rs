use std::str::FromStr;

use thiserror::Error;

/// Errors produced while reading a mask character from a host argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskCharError {
    #[error("mask character must not be empty")]
    Empty,
}

/// The character a masked run is filled with.
///
/// Hosts pass the mask as a string; only its first character is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskChar(char);

impl MaskChar {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl FromStr for MaskChar {
    type Err = MaskCharError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().next().map(Self).ok_or(MaskCharError::Empty)
    }
}

impl From<char> for MaskChar {
    fn from(c: char) -> Self {
        Self(c)
    }
}

/// Replaces a run of characters with `mask_char`.
///
/// # Arguments
/// * `input` - String to mask
/// * `start` - 1-based position of the first masked character
/// * `length` - Number of characters to mask
/// * `mask_char` - Replacement character
///
/// Out-of-range arguments clamp instead of failing: `start <= 0` starts at the
/// first character, a run past the end stops at the end, and a zero or
/// negative `length` masks nothing. The output always has as many characters
/// as the input.
///
/// # Example
/// ```
/// use mask_core::mask;
///
/// assert_eq!(mask("hello world", 3, 5, '*'), "he*****orld");
/// assert_eq!(mask("hello world", 1, 100, '#'), "###########");
/// ```
pub fn mask(input: &str, start: i64, length: i64, mask_char: impl Into<MaskChar>) -> String {
    let mask_char = mask_char.into().as_char();
    let (begin, end) = masked_range(input.chars().count(), start, length);

    input
        .chars()
        .enumerate()
        .map(|(idx, c)| if (begin..end).contains(&idx) { mask_char } else { c })
        .collect()
}

/// Resolves the 0-based `[begin, end)` character range covered by a mask.
fn masked_range(char_count: usize, start: i64, length: i64) -> (usize, usize) {
    let count = i64::try_from(char_count).unwrap_or(i64::MAX);
    let begin = start.saturating_sub(1).clamp(0, count);
    let end = begin.saturating_add(length).clamp(begin, count);

    // Both bounds lie in [0, char_count] after clamping.
    (begin as usize, end as usize)
}
