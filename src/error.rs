// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! Error type for calendar operations and format compilation.

use core::fmt;

/// Error type for calendar construction and format-string compilation.
///
/// Parse failures of an individual input row are reported separately with a
/// byte position, see [`ParseError`](crate::format::ParseError).
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A date or time does not exist.
    ///
    /// Examples are April 31, February 29 in a non-leap year and 25:00:00.
    DoesNotExist,

    /// The result, or an intermediate value necessary for calculating a
    /// result, would be outside the representable range.
    OutOfRange,

    /// The character following `%` (or `%-`) in a format string is not a
    /// recognized specifier.
    UnrecognizedSpecifier {
        /// The offending character.
        ch: char,
        /// Whether the specifier was written in the unpadded `%-` form.
        dashed: bool,
    },

    /// A format string ended with a lone `%`.
    TrailingFormatCharacter,

    /// The specifier has no parsing inverse and cannot appear in a
    /// `strptime` program (`%j`, `%-j`, `%w`, `%U`, `%W`).
    UnsupportedSpecifier,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::DoesNotExist => write!(f, "date or time does not exist"),
            Error::OutOfRange => write!(f, "date or time outside of the supported range"),
            Error::UnrecognizedSpecifier { ch, dashed: false } => {
                write!(f, "Unrecognized format for strftime/strptime: %{}", ch)
            }
            Error::UnrecognizedSpecifier { ch, dashed: true } => {
                write!(f, "Unrecognized format for strftime/strptime: %-{}", ch)
            }
            Error::TrailingFormatCharacter => write!(f, "Trailing format character %"),
            Error::UnsupportedSpecifier => write!(f, "Unimplemented specifier for strptime"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_matches_engine_messages() {
        assert_eq!(
            Error::UnrecognizedSpecifier { ch: 'q', dashed: false }.to_string(),
            "Unrecognized format for strftime/strptime: %q"
        );
        assert_eq!(
            Error::UnrecognizedSpecifier { ch: 'q', dashed: true }.to_string(),
            "Unrecognized format for strftime/strptime: %-q"
        );
        assert_eq!(Error::TrailingFormatCharacter.to_string(), "Trailing format character %");
        assert_eq!(Error::UnsupportedSpecifier.to_string(), "Unimplemented specifier for strptime");
    }
}
