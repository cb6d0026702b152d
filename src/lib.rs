// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! # datefmt
//!
//! A bidirectional `strftime`/`strptime` engine for a vectorized SQL
//! executor.
//!
//! A format string is compiled once at plan time into a program of literal
//! fragments and specifier opcodes. The formatting side predicts the exact
//! output byte length of every row before writing it; the parsing side
//! consumes the input left to right, validates every field domain and
//! reports failures with a byte-precise position. See the [`format`]
//! module for the specifier table.
//!
//! ## Formatting
//!
//! ```
//! use datefmt::format::strftime::StrfTimeFormat;
//! use datefmt::{Date, Time};
//!
//! let program = StrfTimeFormat::compile("%a, %-d %B %Y")?;
//! let date = Date::from_ymd(1992, 1, 1)?;
//! assert_eq!(program.format(date, Time::midnight()), "Wed, 1 January 1992");
//! # Ok::<(), datefmt::Error>(())
//! ```
//!
//! ## Parsing
//!
//! ```
//! use datefmt::format::strptime::StrpTimeFormat;
//!
//! let program = StrpTimeFormat::compile("%-d %b %Y")?;
//! let fields = program.parse("5 Dec 1992").unwrap();
//! assert_eq!((fields.year, fields.month, fields.day), (1992, 12, 5));
//! # Ok::<(), datefmt::Error>(())
//! ```
//!
//! ## The SQL surface
//!
//! The [`func`] module carries the scalar-function glue: the executor folds
//! the constant format argument, binds it once, and drives the bind data
//! over the rows of the input vector.
//!
//! ```
//! use datefmt::func::{bind_strptime, FormatArg};
//!
//! let arg = FormatArg::Constant(Some("%Y-%m-%d %H:%M:%S".to_owned()));
//! let bound = bind_strptime(&arg).unwrap();
//! let column = bound.execute(&[Some("1992-03-02 07:08:09"), None]).unwrap();
//! assert_eq!(column[0].unwrap().to_string(), "1992-03-02 07:08:09");
//! assert_eq!(column[1], None);
//! ```

#![deny(missing_docs)]

#[macro_use]
mod logging;

mod date;
mod error;
mod time;
mod timestamp;
mod weekday;

pub mod format;
pub mod func;

pub use crate::date::Date;
pub use crate::error::Error;
pub use crate::time::Time;
pub use crate::timestamp::Timestamp;
pub use crate::weekday::Weekday;
