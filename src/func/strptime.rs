// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! Bind-time adapter and vector entry point for `strptime`.

use crate::format::strptime::StrpTimeFormat;
use crate::timestamp::Timestamp;

use super::{FormatArg, FunctionError};

/// The bind data of a `strptime(VARCHAR, VARCHAR)` call: the program
/// compiled once from the constant format argument.
#[derive(Clone, Debug, PartialEq)]
pub struct StrpTimeBindData {
    /// The compiled program; empty when the format argument was NULL.
    pub format: StrpTimeFormat,
    null_format: bool,
}

/// Binds `strptime` from its plan-time format argument.
///
/// Fails when the argument is not foldable or does not compile; the
/// non-invertible specifiers are rejected here. A NULL format is tolerated
/// and later yields an all-NULL result vector.
pub fn bind_strptime(arg: &FormatArg) -> Result<StrpTimeBindData, FunctionError> {
    let (format_string, null_format) = match *arg {
        FormatArg::NonConstant => return Err(FunctionError::NonConstantFormat),
        FormatArg::Constant(None) => ("", true),
        FormatArg::Constant(Some(ref format)) => (format.as_str(), false),
    };
    let format = StrpTimeFormat::compile(format_string)
        .map_err(|reason| FunctionError::InvalidFormat { format: format_string.to_owned(), reason })?;
    trace!("bound strptime program for {:?} with {} specifiers", format_string, format.specifiers().len());
    Ok(StrpTimeBindData { format, null_format })
}

impl StrpTimeBindData {
    /// Parses one row into a timestamp, rendering failures with the
    /// caret-annotated engine message.
    pub fn parse_row(&self, input: &str) -> Result<Timestamp, FunctionError> {
        let fields = self.format.parse(input).map_err(|error| FunctionError::ParseFailure {
            input: input.to_owned(),
            format: self.format.format_string().to_owned(),
            error,
        })?;
        fields.to_timestamp().map_err(FunctionError::OutOfRange)
    }

    /// Parses a column of strings. NULL rows stay NULL; a NULL format makes
    /// the whole result NULL; the first failing row aborts the call.
    pub fn execute(&self, inputs: &[Option<&str>]) -> Result<Vec<Option<Timestamp>>, FunctionError> {
        if self.null_format {
            return Ok(vec![None; inputs.len()]);
        }
        inputs
            .iter()
            .map(|input| match *input {
                None => Ok(None),
                Some(input) => self.parse_row(input).map(Some),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;
    use crate::error::Error;
    use crate::time::Time;

    fn constant(format: &str) -> FormatArg {
        FormatArg::Constant(Some(format.to_owned()))
    }

    fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        let date = Date::from_ymd(y, mo, d).unwrap();
        let time = Time::from_hms_micro(h, mi, s, 0).unwrap();
        Timestamp::new(date, time).unwrap()
    }

    #[test]
    fn test_execute() {
        let bound = bind_strptime(&constant("%-d %b %Y")).unwrap();
        let result = bound.execute(&[Some("5 Dec 1992"), None]).unwrap();
        assert_eq!(result, [Some(timestamp(1992, 12, 5, 0, 0, 0)), None]);
    }

    #[test]
    fn test_parse_failure_message() {
        let bound = bind_strptime(&constant("%-I %p")).unwrap();
        let error = bound.execute(&[Some("13 PM")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Could not parse string \"13 PM\" according to format specifier \"%-I %p\"\n\
             13 PM\n\
             ^\n\
             Error: Hour12 out of range, expected a value between 1 and 12"
        );
    }

    #[test]
    fn test_null_format_yields_null_vector() {
        let bound = bind_strptime(&FormatArg::Constant(None)).unwrap();
        assert_eq!(bound.execute(&[Some("anything"), None]).unwrap(), [None, None]);
    }

    #[test]
    fn test_non_constant_format() {
        assert_eq!(bind_strptime(&FormatArg::NonConstant), Err(FunctionError::NonConstantFormat));
    }

    #[test]
    fn test_rejected_specifier_at_bind_time() {
        assert_eq!(
            bind_strptime(&constant("%U")),
            Err(FunctionError::InvalidFormat {
                format: "%U".to_owned(),
                reason: Error::UnsupportedSpecifier,
            })
        );
        let error = bind_strptime(&constant("%U")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Failed to parse format specifier %U: Unimplemented specifier for strptime"
        );
    }

    #[test]
    fn test_impossible_date_is_out_of_range() {
        let bound = bind_strptime(&constant("%Y-%m-%d")).unwrap();
        assert_eq!(
            bound.execute(&[Some("1900-02-31")]),
            Err(FunctionError::OutOfRange(Error::DoesNotExist))
        );
    }
}
