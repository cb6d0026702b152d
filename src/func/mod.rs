// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! The SQL-facing surface: bind-time adapters for the `strftime` and
//! `strptime` scalar functions.
//!
//! The surrounding executor folds the constant format argument at plan
//! time, hands it to [`bind_strftime`] or [`bind_strptime`] once, and then
//! drives the resulting bind data over every row of the input vector. The
//! compiled program inside the bind data is immutable and shared across
//! rows and threads.

use core::fmt;

use crate::error::Error;
use crate::format::ParseError;

mod strftime;
mod strptime;

pub use self::strftime::{bind_strftime, StrfTimeBindData};
pub use self::strptime::{bind_strptime, StrpTimeBindData};

/// The plan-time view of a scalar function's format argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// The argument folded to a constant VARCHAR, or to SQL NULL.
    Constant(Option<String>),
    /// The argument references row data and cannot be folded.
    NonConstant,
}

/// A user-facing error raised while binding or executing `strftime` or
/// `strptime`.
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionError {
    /// The format argument was not foldable at plan time.
    NonConstantFormat,

    /// The constant format string failed to compile.
    InvalidFormat {
        /// The offending format string.
        format: String,
        /// The compile error.
        reason: Error,
    },

    /// An input row did not match the format specifier.
    ParseFailure {
        /// The input row.
        input: String,
        /// The format string the program was compiled from.
        format: String,
        /// The positioned parse error.
        error: ParseError,
    },

    /// The parsed calendar fields do not form a representable timestamp,
    /// e.g. February 31.
    OutOfRange(Error),
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FunctionError::NonConstantFormat => {
                write!(f, "strftime format must be a constant")
            }
            FunctionError::InvalidFormat { ref format, ref reason } => {
                write!(f, "Failed to parse format specifier {}: {}", format, reason)
            }
            FunctionError::ParseFailure { ref input, ref format, ref error } => {
                writeln!(
                    f,
                    "Could not parse string \"{}\" according to format specifier \"{}\"",
                    input, format
                )?;
                writeln!(f, "{}", input)?;
                writeln!(f, "{:>width$}", "^", width = error.position + 1)?;
                write!(f, "Error: {}", error.kind)
            }
            FunctionError::OutOfRange(ref error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for FunctionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            FunctionError::InvalidFormat { ref reason, .. } => Some(reason),
            FunctionError::ParseFailure { ref error, .. } => Some(error),
            FunctionError::OutOfRange(ref error) => Some(error),
            FunctionError::NonConstantFormat => None,
        }
    }
}
