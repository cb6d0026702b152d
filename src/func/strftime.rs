// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! Bind-time adapter and vector entry points for `strftime`.

use crate::date::Date;
use crate::format::strftime::StrfTimeFormat;
use crate::time::Time;
use crate::timestamp::Timestamp;

use super::{FormatArg, FunctionError};

/// The bind data of a `strftime(DATE, VARCHAR)` or
/// `strftime(TIMESTAMP, VARCHAR)` call: the program compiled once from the
/// constant format argument.
#[derive(Clone, Debug, PartialEq)]
pub struct StrfTimeBindData {
    /// The compiled program; empty when the format argument was NULL.
    pub format: StrfTimeFormat,
    null_format: bool,
}

/// Binds `strftime` from its plan-time format argument.
///
/// Fails when the argument is not foldable or does not compile. A NULL
/// format is tolerated and later yields an all-NULL result vector.
pub fn bind_strftime(arg: &FormatArg) -> Result<StrfTimeBindData, FunctionError> {
    let (format_string, null_format) = match *arg {
        FormatArg::NonConstant => return Err(FunctionError::NonConstantFormat),
        FormatArg::Constant(None) => ("", true),
        FormatArg::Constant(Some(ref format)) => (format.as_str(), false),
    };
    let format = StrfTimeFormat::compile(format_string)
        .map_err(|reason| FunctionError::InvalidFormat { format: format_string.to_owned(), reason })?;
    trace!("bound strftime program for {:?} with {} specifiers", format_string, format.specifiers().len());
    Ok(StrfTimeBindData { format, null_format })
}

impl StrfTimeBindData {
    /// Formats a column of dates. NULL rows stay NULL; a NULL format makes
    /// the whole result NULL.
    pub fn execute_date(&self, dates: &[Option<Date>]) -> Vec<Option<String>> {
        if self.null_format {
            return vec![None; dates.len()];
        }
        dates
            .iter()
            .map(|date| date.map(|date| self.format.format(date, Time::midnight())))
            .collect()
    }

    /// Formats a column of timestamps. NULL rows stay NULL; a NULL format
    /// makes the whole result NULL.
    pub fn execute_timestamp(&self, timestamps: &[Option<Timestamp>]) -> Vec<Option<String>> {
        if self.null_format {
            return vec![None; timestamps.len()];
        }
        timestamps
            .iter()
            .map(|timestamp| {
                timestamp.map(|timestamp| {
                    let (date, time) = timestamp.split();
                    self.format.format(date, time)
                })
            })
            .collect()
    }
}
