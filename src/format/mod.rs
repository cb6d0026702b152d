// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! `strftime`/`strptime`-style date and time formatting and parsing.
//!
//! A format string is compiled once into an executable program of literal
//! fragments interleaved with specifier opcodes; the program is then reused
//! across all rows of a bound expression.
//!
//! ## Specifiers
//!
//! Spec. | Example  | Description
//! ----- | -------- | -----------
//! `%a`  | `Sun`    | Abbreviated weekday name. Always 3 letters.
//! `%A`  | `Sunday` | Full weekday name.
//! `%w`  | `0`      | Weekday as a decimal number. Sunday = 0, Saturday = 6.
//! `%d`  | `08`     | Day of the month, zero-padded to 2 digits.
//! `%-d` | `8`      | Day of the month without padding.
//! `%b`  | `Jul`    | Abbreviated month name. Always 3 letters. `%h` is an alias.
//! `%B`  | `July`   | Full month name.
//! `%m`  | `07`     | Month number, zero-padded to 2 digits.
//! `%-m` | `7`      | Month number without padding.
//! `%y`  | `01`     | Year modulo 100, zero-padded to 2 digits.
//! `%-y` | `1`      | Year modulo 100 without padding.
//! `%Y`  | `2001`   | Full year, zero-padded to 4 digits up to the year 9999.
//! `%H`  | `09`     | Hour in the 24-hour clock, zero-padded to 2 digits.
//! `%-H` | `9`      | Hour in the 24-hour clock without padding.
//! `%I`  | `09`     | Hour in the 12-hour clock, zero-padded to 2 digits.
//! `%-I` | `9`      | Hour in the 12-hour clock without padding.
//! `%p`  | `AM`     | `AM` or `PM`.
//! `%M`  | `34`     | Minute, zero-padded to 2 digits.
//! `%-M` | `34`     | Minute without padding.
//! `%S`  | `56`     | Second, zero-padded to 2 digits.
//! `%-S` | `56`     | Second without padding.
//! `%f`  | `012345` | Microsecond, zero-padded to 6 digits.
//! `%z`  |          | UTC offset. Formats as an empty string.
//! `%Z`  |          | Time zone name. Formats as an empty string.
//! `%j`  | `189`    | Day of the year, zero-padded to 3 digits.
//! `%-j` | `189`    | Day of the year without padding.
//! `%U`  | `28`     | Week number with Sunday as the first day of the week.
//! `%W`  | `27`     | Week number with Monday as the first day of the week.
//! `%c`  |          | Expands to `%Y-%m-%d %H:%M:%S` at compile time.
//! `%x`  |          | Expands to `%Y-%m-%d` at compile time.
//! `%X`  |          | Expands to `%H:%M:%S` at compile time.
//! `%%`  |          | Literal percent sign.
//!
//! A `strptime` program additionally rejects `%j`, `%-j`, `%w`, `%U` and
//! `%W` at compile time; they have no parsing inverse.

use core::fmt;
use core::mem;

use crate::date::Date;
use crate::error::Error;
use crate::time::Time;
use crate::timestamp::Timestamp;

pub mod strftime;
pub mod strptime;

pub(crate) mod scan;
pub(crate) mod write;

/// A calendar or clock field recognized by the format language.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Specifier {
    /// `%a`, abbreviated weekday name.
    WeekdayNameShort,
    /// `%A`, full weekday name.
    WeekdayNameLong,
    /// `%w`, weekday as a decimal number, Sunday = 0.
    WeekdayDecimal,
    /// `%d`, day of the month zero-padded to 2 digits.
    DayPadded,
    /// `%-d`, day of the month without padding.
    Day,
    /// `%b` or `%h`, abbreviated month name.
    MonthNameShort,
    /// `%B`, full month name.
    MonthNameLong,
    /// `%m`, month number zero-padded to 2 digits.
    MonthPadded,
    /// `%-m`, month number without padding.
    Month,
    /// `%y`, year modulo 100 zero-padded to 2 digits.
    YearMod100Padded,
    /// `%-y`, year modulo 100 without padding.
    YearMod100,
    /// `%Y`, full year.
    Year,
    /// `%H`, 24-hour clock hour zero-padded to 2 digits.
    Hour24Padded,
    /// `%-H`, 24-hour clock hour without padding.
    Hour24,
    /// `%I`, 12-hour clock hour zero-padded to 2 digits.
    Hour12Padded,
    /// `%-I`, 12-hour clock hour without padding.
    Hour12,
    /// `%p`, `AM` or `PM`.
    AmPm,
    /// `%M`, minute zero-padded to 2 digits.
    MinutePadded,
    /// `%-M`, minute without padding.
    Minute,
    /// `%S`, second zero-padded to 2 digits.
    SecondPadded,
    /// `%-S`, second without padding.
    Second,
    /// `%f`, microsecond zero-padded to 6 digits.
    Microsecond,
    /// `%z`, UTC offset. Reserved; formats as an empty string.
    UtcOffset,
    /// `%Z`, time zone name. Reserved; formats as an empty string.
    TimezoneName,
    /// `%j`, day of the year zero-padded to 3 digits.
    OrdinalPadded,
    /// `%-j`, day of the year without padding.
    Ordinal,
    /// `%U`, week number, Sunday-first.
    WeekFromSun,
    /// `%W`, week number, Monday-first.
    WeekFromMon,
}

impl Specifier {
    /// The fixed output width of the specifier, or 0 when the width depends
    /// on the formatted value.
    pub(crate) fn constant_size(&self) -> usize {
        use Specifier::*;
        match *self {
            WeekdayNameShort | MonthNameShort | OrdinalPadded => 3,
            WeekdayDecimal => 1,
            DayPadded | MonthPadded | YearMod100Padded | Hour24Padded | Hour12Padded | AmPm
            | MinutePadded | SecondPadded | WeekFromSun | WeekFromMon => 2,
            Microsecond => 6,
            _ => 0,
        }
    }

    /// Whether formatting the specifier needs the [`Date`] itself rather
    /// than the already-extracted calendar fields.
    pub(crate) fn is_date_specifier(&self) -> bool {
        use Specifier::*;
        matches!(
            *self,
            WeekdayNameShort
                | WeekdayNameLong
                | WeekdayDecimal
                | OrdinalPadded
                | Ordinal
                | WeekFromSun
                | WeekFromMon
        )
    }

    /// Whether the parser consumes a run of ASCII digits for this specifier
    /// rather than a named token.
    pub(crate) fn is_numeric(&self) -> bool {
        use Specifier::*;
        !matches!(
            *self,
            WeekdayNameShort
                | WeekdayNameLong
                | MonthNameShort
                | MonthNameLong
                | AmPm
                | UtcOffset
                | TimezoneName
        )
    }
}

/// The shared core of a compiled program: literal fragments interleaved
/// with specifiers, plus the summed constant output size.
///
/// `literals.len() == specifiers.len() + 1` holds after compilation; the
/// output is `literals[0] specifiers[0] literals[1] ... literals[n]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Program {
    pub(crate) literals: Vec<String>,
    pub(crate) specifiers: Vec<Specifier>,
    pub(crate) constant_size: usize,
}

/// Receives the (literal, specifier) stream produced by the compiler.
///
/// The `strftime` and `strptime` programs both implement this, recording
/// their own execution metadata as specifiers arrive; `strptime` rejects
/// the specifiers it cannot invert.
pub(crate) trait FormatBuilder {
    /// Appends a trailing literal fragment.
    fn add_literal(&mut self, literal: String);

    /// Appends a specifier along with the literal fragment preceding it.
    fn add_format_specifier(&mut self, literal: String, specifier: Specifier)
        -> Result<(), Error>;
}

impl FormatBuilder for Program {
    fn add_literal(&mut self, literal: String) {
        self.constant_size += literal.len();
        self.literals.push(literal);
    }

    fn add_format_specifier(
        &mut self,
        literal: String,
        specifier: Specifier,
    ) -> Result<(), Error> {
        self.add_literal(literal);
        self.specifiers.push(specifier);
        Ok(())
    }
}

/// Compiles `format` into `builder`, one literal/specifier pair at a time.
///
/// Composite specifiers (`%c`, `%x`, `%X`) are compiled recursively into a
/// standalone subprogram whose pairs are then spliced into the parent, with
/// the pending literal prepended to the subprogram's first literal.
pub(crate) fn parse_format_specifier<B: FormatBuilder>(
    format: &str,
    builder: &mut B,
) -> Result<(), Error> {
    let mut current_literal = String::new();
    let mut pos = 0;
    let mut chars = format.char_indices();
    while let Some((percent, ch)) = chars.next() {
        if ch != '%' {
            continue;
        }
        current_literal.push_str(&format[pos..percent]);
        let format_char = match chars.next() {
            Some((_, format_char)) => format_char,
            None => return Err(Error::TrailingFormatCharacter),
        };
        pos = percent + 1 + format_char.len_utf8();
        if format_char == '%' {
            current_literal.push('%');
            continue;
        }
        let specifier = if format_char == '-' {
            match chars.next() {
                Some((_, dashed_char)) => {
                    pos += dashed_char.len_utf8();
                    match dashed_char {
                        'd' => Specifier::Day,
                        'm' => Specifier::Month,
                        'y' => Specifier::YearMod100,
                        'H' => Specifier::Hour24,
                        'I' => Specifier::Hour12,
                        'M' => Specifier::Minute,
                        'S' => Specifier::Second,
                        'j' => Specifier::Ordinal,
                        _ => {
                            return Err(Error::UnrecognizedSpecifier {
                                ch: dashed_char,
                                dashed: true,
                            })
                        }
                    }
                }
                None => return Err(Error::UnrecognizedSpecifier { ch: '-', dashed: false }),
            }
        } else {
            match format_char {
                'a' => Specifier::WeekdayNameShort,
                'A' => Specifier::WeekdayNameLong,
                'w' => Specifier::WeekdayDecimal,
                'd' => Specifier::DayPadded,
                'b' | 'h' => Specifier::MonthNameShort,
                'B' => Specifier::MonthNameLong,
                'm' => Specifier::MonthPadded,
                'y' => Specifier::YearMod100Padded,
                'Y' => Specifier::Year,
                'H' => Specifier::Hour24Padded,
                'I' => Specifier::Hour12Padded,
                'p' => Specifier::AmPm,
                'M' => Specifier::MinutePadded,
                'S' => Specifier::SecondPadded,
                'f' => Specifier::Microsecond,
                'z' => Specifier::UtcOffset,
                'Z' => Specifier::TimezoneName,
                'j' => Specifier::OrdinalPadded,
                'U' => Specifier::WeekFromSun,
                'W' => Specifier::WeekFromMon,
                'c' | 'x' | 'X' => {
                    let subformat = match format_char {
                        'c' => "%Y-%m-%d %H:%M:%S",
                        'x' => "%Y-%m-%d",
                        _ => "%H:%M:%S",
                    };
                    let mut subprogram = Program::default();
                    parse_format_specifier(subformat, &mut subprogram)?;
                    let mut literals = subprogram.literals;
                    let pending = mem::take(&mut current_literal);
                    literals[0].insert_str(0, &pending);
                    // The subprogram's trailing literal is empty and dropped
                    // by the zip.
                    for (literal, specifier) in literals.into_iter().zip(subprogram.specifiers) {
                        builder.add_format_specifier(literal, specifier)?;
                    }
                    continue;
                }
                _ => {
                    return Err(Error::UnrecognizedSpecifier { ch: format_char, dashed: false })
                }
            }
        };
        builder.add_format_specifier(mem::take(&mut current_literal), specifier)?;
    }
    current_literal.push_str(&format[pos..]);
    builder.add_literal(current_literal);
    Ok(())
}

/// The working record exchanged between the parser, the formatter and the
/// calendar constructors: one slot per calendar/clock field.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CalendarFields {
    /// Proleptic Gregorian year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
    /// Day of the month, 1 through 31.
    pub day: u32,
    /// Hour, 0 through 23.
    pub hour: u32,
    /// Minute, 0 through 59.
    pub minute: u32,
    /// Second, 0 through 59.
    pub second: u32,
    /// Microsecond, 0 through 999999.
    pub microsecond: u32,
}

impl CalendarFields {
    /// The parser's initial state: 1900-01-01 00:00:00.000000.
    pub fn new() -> CalendarFields {
        CalendarFields { year: 1900, month: 1, day: 1, hour: 0, minute: 0, second: 0, microsecond: 0 }
    }

    /// Extracts all fields of a date and a time of day.
    pub fn from_date_time(date: Date, time: Time) -> CalendarFields {
        let (year, month, day) = date.to_ymd();
        let (hour, minute, second, microsecond) = time.convert();
        CalendarFields { year, month, day, hour, minute, second, microsecond }
    }

    /// Builds a timestamp out of the fields, validating that they name a
    /// real point in time.
    pub fn to_timestamp(&self) -> Result<Timestamp, Error> {
        let date = Date::from_ymd(self.year, self.month, self.day)?;
        let time = Time::from_hms_micro(self.hour, self.minute, self.second, self.microsecond)?;
        Timestamp::new(date, time)
    }
}

impl Default for CalendarFields {
    fn default() -> CalendarFields {
        CalendarFields::new()
    }
}

/// An error from parsing an input string against a compiled program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte position in the input string where the failure was detected.
    pub position: usize,
}

/// The category of a [`ParseError`], carrying the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input does not contain the required literal fragment.
    LiteralMismatch {
        /// The literal fragment that was expected.
        expected: String,
    },
    /// A numeric specifier found no digit.
    ExpectedNumber,
    /// A digit run accumulated past the largest value any specifier accepts.
    NumberOutOfRange,
    /// A parsed number lies outside the specifier's domain.
    OutOfRange {
        /// Display name of the field.
        field: &'static str,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `%p` did not find `AM` or `PM`.
    ExpectedAmPm,
    /// `%a` did not find an abbreviated weekday name.
    ExpectedAbbreviatedDayName,
    /// `%A` did not find a full weekday name.
    ExpectedFullDayName,
    /// `%b` did not find an abbreviated month name.
    ExpectedAbbreviatedMonthName,
    /// `%B` did not find a full month name.
    ExpectedFullMonthName,
    /// The program reached a specifier that has no parsing rule.
    UnsupportedSpecifier,
    /// Input remained after the whole program was consumed.
    TrailingCharacters,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseErrorKind::LiteralMismatch { ref expected } => {
                write!(f, "Literal does not match, expected {}", expected)
            }
            ParseErrorKind::ExpectedNumber => write!(f, "Expected a number"),
            ParseErrorKind::NumberOutOfRange => {
                write!(f, "Number is out of range of format specifier")
            }
            ParseErrorKind::OutOfRange { field, min, max } => {
                write!(f, "{} out of range, expected a value between {} and {}", field, min, max)
            }
            ParseErrorKind::ExpectedAmPm => write!(f, "Expected AM/PM"),
            ParseErrorKind::ExpectedAbbreviatedDayName => {
                write!(f, "Expected an abbreviated day name (Mon, Tue, Wed, Thu, Fri, Sat, Sun)")
            }
            ParseErrorKind::ExpectedFullDayName => {
                write!(f, "Expected a full day name (Monday, Tuesday, etc...)")
            }
            ParseErrorKind::ExpectedAbbreviatedMonthName => {
                write!(f, "Expected an abbreviated month name (Jan, Feb, Mar, etc..)")
            }
            ParseErrorKind::ExpectedFullMonthName => {
                write!(f, "Expected a full month name (January, February, etc...)")
            }
            ParseErrorKind::UnsupportedSpecifier => {
                write!(f, "Unsupported specifier for strptime")
            }
            ParseErrorKind::TrailingCharacters => {
                write!(f, "Full specifier did not match: trailing characters")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (at position {})", self.kind, self.position)
    }
}

impl std::error::Error for ParseError {}
