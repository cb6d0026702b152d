// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! Scanning primitives for the `strptime` parser.

use super::ParseErrorKind;

/// No specifier domain accepts a value anywhere near this; the digit
/// accumulator fails once it grows past it.
const NUMBER_LIMIT: u64 = 1_000_000;

/// Advances `pos` past any ASCII whitespace.
pub(crate) fn skip_whitespace(data: &[u8], pos: &mut usize) {
    while *pos < data.len() && data[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
}

/// Consumes the maximal run of ASCII digits at `pos` into a `u64`.
///
/// Fails with [`ParseErrorKind::ExpectedNumber`] when no digit is present
/// and with [`ParseErrorKind::NumberOutOfRange`] when the accumulator has
/// already exceeded [`NUMBER_LIMIT`] before another digit arrives.
pub(crate) fn parse_number(data: &[u8], pos: &mut usize) -> Result<u64, ParseErrorKind> {
    let start = *pos;
    let mut number: u64 = 0;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        if number > NUMBER_LIMIT {
            return Err(ParseErrorKind::NumberOutOfRange);
        }
        number = number * 10 + u64::from(data[*pos] - b'0');
        *pos += 1;
    }
    if *pos == start {
        return Err(ParseErrorKind::ExpectedNumber);
    }
    Ok(number)
}

/// Case-insensitively matches one of `collection` at `pos`.
///
/// Entries are tried in order; the first that compares equal is consumed
/// and its index returned. Matching is by entry length, so an abbreviation
/// leaves the rest of a longer word in the input.
pub(crate) fn parse_collection(
    data: &[u8],
    pos: &mut usize,
    collection: &[&str],
) -> Option<usize> {
    for (index, entry) in collection.iter().enumerate() {
        let entry = entry.as_bytes();
        if *pos + entry.len() > data.len() {
            // too big: can't match
            continue;
        }
        if data[*pos..*pos + entry.len()].eq_ignore_ascii_case(entry) {
            *pos += entry.len();
            return Some(index);
        }
    }
    None
}
