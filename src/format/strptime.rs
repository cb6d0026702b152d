// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! Parsing of strings back into calendar fields through a compiled program.

use crate::date::Date;
use crate::error::Error;

use super::scan;
use super::{
    parse_format_specifier, CalendarFields, FormatBuilder, ParseError, ParseErrorKind, Program,
    Specifier,
};

/// A format program compiled for the parsing direction.
///
/// Specifiers without a parsing inverse (`%j`, `%-j`, `%w`, `%U`, `%W`)
/// are rejected at compile time. The original format string is retained
/// for error rendering.
///
/// The program is immutable after compilation and can be shared by
/// reference across rows and threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrpTimeFormat {
    program: Program,
    /// Parallel to the specifier sequence: whether the specifier consumes
    /// a run of ASCII digits.
    is_numeric: Vec<bool>,
    format_string: String,
}

/// The tri-state `%p` flag, resolved after the whole program has run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Meridiem {
    None,
    Am,
    Pm,
}

impl FormatBuilder for StrpTimeFormat {
    fn add_literal(&mut self, literal: String) {
        self.program.add_literal(literal);
    }

    fn add_format_specifier(
        &mut self,
        literal: String,
        specifier: Specifier,
    ) -> Result<(), Error> {
        use Specifier::*;
        if matches!(specifier, OrdinalPadded | Ordinal | WeekdayDecimal | WeekFromSun | WeekFromMon)
        {
            return Err(Error::UnsupportedSpecifier);
        }
        self.is_numeric.push(specifier.is_numeric());
        self.program.add_format_specifier(literal, specifier)
    }
}

impl StrpTimeFormat {
    /// Compiles a format string for parsing.
    pub fn compile(format: &str) -> Result<StrpTimeFormat, Error> {
        let mut compiled = StrpTimeFormat::default();
        parse_format_specifier(format, &mut compiled)?;
        compiled.format_string = format.to_owned();
        Ok(compiled)
    }

    /// The original format string this program was compiled from.
    pub fn format_string(&self) -> &str {
        &self.format_string
    }

    /// The literal fragments of the program; one more than the specifiers.
    pub fn literals(&self) -> &[String] {
        &self.program.literals
    }

    /// The specifier opcodes of the program, in input order.
    pub fn specifiers(&self) -> &[Specifier] {
        &self.program.specifiers
    }

    /// Parses an input string, yielding the extracted calendar fields with
    /// the 12-hour clock already resolved against `%p`.
    ///
    /// Leading and trailing ASCII whitespace is tolerated; interior
    /// whitespace must match the literal fragments exactly. Error positions
    /// are byte offsets into `input`.
    pub fn parse(&self, input: &str) -> Result<CalendarFields, ParseError> {
        let data = input.as_bytes();
        let specifiers = &self.program.specifiers;
        let mut fields = CalendarFields::new();
        let mut meridiem = Meridiem::None;
        let mut pos = 0;
        scan::skip_whitespace(data, &mut pos);

        for (i, literal) in self.program.literals.iter().enumerate() {
            let expected = literal.as_bytes();
            if pos + expected.len() > data.len() || &data[pos..pos + expected.len()] != expected {
                return Err(ParseError {
                    kind: ParseErrorKind::LiteralMismatch { expected: literal.clone() },
                    position: pos,
                });
            }
            pos += expected.len();
            if i == specifiers.len() {
                break;
            }
            if self.is_numeric[i] {
                let start = pos;
                let number = scan::parse_number(data, &mut pos)
                    .map_err(|kind| ParseError { kind, position: start })?;
                set_numeric_field(specifiers[i], number, &mut fields)
                    .map_err(|kind| ParseError { kind, position: start })?;
            } else {
                match specifiers[i] {
                    Specifier::AmPm => {
                        meridiem = parse_meridiem(data, &mut pos)
                            .ok_or(ParseError { kind: ParseErrorKind::ExpectedAmPm, position: pos })?;
                    }
                    // Weekday names are validated but carry no field.
                    Specifier::WeekdayNameShort => {
                        if scan::parse_collection(data, &mut pos, &Date::DAY_NAMES_ABBREVIATED)
                            .is_none()
                        {
                            return Err(ParseError {
                                kind: ParseErrorKind::ExpectedAbbreviatedDayName,
                                position: pos,
                            });
                        }
                    }
                    Specifier::WeekdayNameLong => {
                        if scan::parse_collection(data, &mut pos, &Date::DAY_NAMES).is_none() {
                            return Err(ParseError {
                                kind: ParseErrorKind::ExpectedFullDayName,
                                position: pos,
                            });
                        }
                    }
                    Specifier::MonthNameShort => {
                        match scan::parse_collection(data, &mut pos, &Date::MONTH_NAMES_ABBREVIATED)
                        {
                            Some(month) => fields.month = month as u32 + 1,
                            None => {
                                return Err(ParseError {
                                    kind: ParseErrorKind::ExpectedAbbreviatedMonthName,
                                    position: pos,
                                })
                            }
                        }
                    }
                    Specifier::MonthNameLong => {
                        match scan::parse_collection(data, &mut pos, &Date::MONTH_NAMES) {
                            Some(month) => fields.month = month as u32 + 1,
                            None => {
                                return Err(ParseError {
                                    kind: ParseErrorKind::ExpectedFullMonthName,
                                    position: pos,
                                })
                            }
                        }
                    }
                    // `%z`/`%Z` have no parsing rule yet.
                    _ => {
                        return Err(ParseError {
                            kind: ParseErrorKind::UnsupportedSpecifier,
                            position: pos,
                        })
                    }
                }
            }
        }

        scan::skip_whitespace(data, &mut pos);
        if pos != data.len() {
            return Err(ParseError { kind: ParseErrorKind::TrailingCharacters, position: pos });
        }

        match meridiem {
            Meridiem::None => {}
            // AM: 12AM = 0, 1AM..11AM unchanged.
            Meridiem::Am => {
                if fields.hour == 12 {
                    fields.hour = 0;
                }
            }
            // PM: 12PM = 12, 1PM..11PM shifted to 13..23.
            Meridiem::Pm => {
                if fields.hour != 12 {
                    fields.hour += 12;
                }
            }
        }
        Ok(fields)
    }
}

/// Consumes a case-insensitive `AM`/`PM` token.
fn parse_meridiem(data: &[u8], pos: &mut usize) -> Option<Meridiem> {
    if *pos + 2 > data.len() {
        return None;
    }
    if data[*pos + 1].to_ascii_lowercase() != b'm' {
        return None;
    }
    let meridiem = match data[*pos].to_ascii_lowercase() {
        b'a' => Meridiem::Am,
        b'p' => Meridiem::Pm,
        _ => return None,
    };
    *pos += 2;
    Some(meridiem)
}

fn out_of_range(field: &'static str, min: u32, max: u32) -> ParseErrorKind {
    ParseErrorKind::OutOfRange { field, min, max }
}

/// Validates a parsed number against the specifier's domain and stores it
/// into its calendar-field slot.
fn set_numeric_field(
    specifier: Specifier,
    number: u64,
    fields: &mut CalendarFields,
) -> Result<(), ParseErrorKind> {
    use Specifier::*;
    match specifier {
        DayPadded | Day => {
            if !(1..=31).contains(&number) {
                return Err(out_of_range("Day", 1, 31));
            }
            fields.day = number as u32;
        }
        MonthPadded | Month => {
            if !(1..=12).contains(&number) {
                return Err(out_of_range("Month", 1, 12));
            }
            fields.month = number as u32;
        }
        YearMod100Padded | YearMod100 => {
            if number >= 100 {
                return Err(out_of_range("Year without century", 0, 99));
            }
            // 69 is the pivot: >= 69 is 19xx, < 69 is 20xx.
            fields.year = if number >= 69 { 1900 + number as i32 } else { 2000 + number as i32 };
        }
        Year => {
            fields.year = number as i32;
        }
        Hour24Padded | Hour24 => {
            if number >= 24 {
                return Err(out_of_range("Hour", 0, 23));
            }
            fields.hour = number as u32;
        }
        Hour12Padded | Hour12 => {
            if !(1..=12).contains(&number) {
                return Err(out_of_range("Hour12", 1, 12));
            }
            // Stored as-is; the 12/24 resolution happens once `%p` is known.
            fields.hour = number as u32;
        }
        MinutePadded | Minute => {
            if number >= 60 {
                return Err(out_of_range("Minutes", 0, 59));
            }
            fields.minute = number as u32;
        }
        SecondPadded | Second => {
            if number >= 60 {
                return Err(out_of_range("Seconds", 0, 59));
            }
            fields.second = number as u32;
        }
        Microsecond => {
            if number >= 1_000_000 {
                return Err(out_of_range("Microseconds", 0, 999999));
            }
            fields.microsecond = number as u32;
        }
        // Non-numeric and rejected specifiers never reach this point.
        _ => return Err(ParseErrorKind::UnsupportedSpecifier),
    }
    Ok(())
}
