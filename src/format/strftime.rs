// This is a part of datefmt.
// See README.md and LICENSE.txt for details.

//! Formatting of dates and timestamps through a compiled program.

use crate::date::Date;
use crate::error::Error;
use crate::time::Time;

use super::write::{signed_len, unsigned_len, ByteWriter};
use super::{parse_format_specifier, CalendarFields, FormatBuilder, Program, Specifier};

/// A format program compiled for the formatting direction.
///
/// Alongside the shared literal/specifier sequences it keeps the subset of
/// specifiers whose output width depends on the formatted value, and which
/// specifiers need the [`Date`] itself (weekday, day of year, week number)
/// rather than the extracted calendar fields.
///
/// The program is immutable after compilation and can be shared by
/// reference across rows and threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrfTimeFormat {
    program: Program,
    /// To determine the total output size, these need to be probed per row.
    var_length_specifiers: Vec<Specifier>,
    /// Parallel to the specifier sequence.
    is_date_specifier: Vec<bool>,
}

impl FormatBuilder for StrfTimeFormat {
    fn add_literal(&mut self, literal: String) {
        self.program.add_literal(literal);
    }

    fn add_format_specifier(
        &mut self,
        literal: String,
        specifier: Specifier,
    ) -> Result<(), Error> {
        self.is_date_specifier.push(specifier.is_date_specifier());
        match specifier.constant_size() {
            0 => self.var_length_specifiers.push(specifier),
            size => self.program.constant_size += size,
        }
        self.program.add_format_specifier(literal, specifier)
    }
}

impl StrfTimeFormat {
    /// Compiles a format string for formatting.
    pub fn compile(format: &str) -> Result<StrfTimeFormat, Error> {
        let mut compiled = StrfTimeFormat::default();
        parse_format_specifier(format, &mut compiled)?;
        Ok(compiled)
    }

    /// The literal fragments of the program; one more than the specifiers.
    pub fn literals(&self) -> &[String] {
        &self.program.literals
    }

    /// The specifier opcodes of the program, in output order.
    pub fn specifiers(&self) -> &[Specifier] {
        &self.program.specifiers
    }

    /// The exact number of bytes [`format_into`](Self::format_into) will
    /// write for this date and time.
    pub fn formatted_len(&self, date: Date, time: Time) -> usize {
        let mut size = self.program.constant_size;
        for &specifier in &self.var_length_specifiers {
            size += specifier_len(specifier, date, time);
        }
        size
    }

    /// Formats into a buffer whose length must equal
    /// [`formatted_len`](Self::formatted_len) for the same inputs.
    pub fn format_into(&self, date: Date, time: Time, target: &mut [u8]) {
        let expected = target.len();
        let fields = CalendarFields::from_date_time(date, time);
        let mut writer = ByteWriter::new(target);
        for (i, &specifier) in self.program.specifiers.iter().enumerate() {
            writer.write_str(&self.program.literals[i]);
            if self.is_date_specifier[i] {
                write_date_specifier(specifier, date, &mut writer);
            } else {
                write_standard_specifier(specifier, &fields, &mut writer);
            }
        }
        writer.write_str(&self.program.literals[self.program.specifiers.len()]);
        debug_assert_eq!(writer.written(), expected);
    }

    /// Formats into a freshly allocated string of the predicted length.
    pub fn format(&self, date: Date, time: Time) -> String {
        let mut buf = vec![0; self.formatted_len(date, time)];
        self.format_into(date, time, &mut buf);
        // Only fragments of the UTF-8 format string and ASCII field output
        // are written, so the buffer is valid UTF-8.
        String::from_utf8(buf).expect("formatted output is valid UTF-8")
    }
}

/// Maps a 24-hour clock hour into 1..=12.
fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        hour => hour,
    }
}

/// The output width of a variable-length specifier for the given values.
fn specifier_len(specifier: Specifier, date: Date, time: Time) -> usize {
    use Specifier::*;
    match specifier {
        WeekdayNameLong => {
            Date::DAY_NAMES[date.weekday().num_days_from_sunday() as usize].len()
        }
        MonthNameLong => Date::MONTH_NAMES[(date.month() - 1) as usize].len(),
        Year => {
            let year = date.year();
            if (0..=9999).contains(&year) {
                4
            } else {
                signed_len(year)
            }
        }
        Month => 1 + (date.month() >= 10) as usize,
        UtcOffset | TimezoneName => {
            // empty for now
            0
        }
        Hour24 | Hour12 | Minute | Second => {
            let (hour, minute, second, _) = time.convert();
            let value = match specifier {
                Hour24 => hour,
                Hour12 => hour12(hour),
                Minute => minute,
                _ => second,
            };
            1 + (value >= 10) as usize
        }
        Day => unsigned_len(date.day()),
        Ordinal => unsigned_len(date.ordinal()),
        YearMod100 => unsigned_len(date.year().rem_euclid(100) as u32),
        // Constant-size specifiers never land in the variable-length list.
        _ => 0,
    }
}

/// Writes a specifier that needs the date itself.
fn write_date_specifier(specifier: Specifier, date: Date, writer: &mut ByteWriter) {
    use Specifier::*;
    match specifier {
        WeekdayNameShort => {
            let dow = date.weekday();
            writer.write_str(Date::DAY_NAMES_ABBREVIATED[dow.num_days_from_sunday() as usize]);
        }
        WeekdayNameLong => {
            let dow = date.weekday();
            writer.write_str(Date::DAY_NAMES[dow.num_days_from_sunday() as usize]);
        }
        WeekdayDecimal => {
            writer.push(b'0' + date.weekday().num_days_from_sunday() as u8);
        }
        OrdinalPadded => writer.write_padded3(date.ordinal()),
        Ordinal => writer.write_unsigned(date.ordinal()),
        WeekFromSun => writer.write_padded2(date.week_number_regular(false)),
        WeekFromMon => writer.write_padded2(date.week_number_regular(true)),
        // The remaining specifiers format from the calendar fields.
        _ => {}
    }
}

/// Writes a specifier that formats from the extracted calendar fields.
fn write_standard_specifier(
    specifier: Specifier,
    fields: &CalendarFields,
    writer: &mut ByteWriter,
) {
    use Specifier::*;
    match specifier {
        DayPadded => writer.write_padded2(fields.day),
        MonthNameShort => {
            writer.write_str(Date::MONTH_NAMES_ABBREVIATED[(fields.month - 1) as usize])
        }
        MonthNameLong => writer.write_str(Date::MONTH_NAMES[(fields.month - 1) as usize]),
        MonthPadded => writer.write_padded2(fields.month),
        YearMod100Padded => writer.write_padded2(fields.year.rem_euclid(100) as u32),
        Year => {
            if (0..=9999).contains(&fields.year) {
                writer.write_padded(fields.year as u32, 4);
            } else {
                if fields.year < 0 {
                    writer.push(b'-');
                }
                writer.write_unsigned(fields.year.unsigned_abs());
            }
        }
        Hour24Padded => writer.write_padded2(fields.hour),
        Hour12Padded => writer.write_padded2(hour12(fields.hour)),
        AmPm => {
            writer.push(if fields.hour >= 12 { b'P' } else { b'A' });
            writer.push(b'M');
        }
        MinutePadded => writer.write_padded2(fields.minute),
        SecondPadded => writer.write_padded2(fields.second),
        Microsecond => writer.write_padded(fields.microsecond, 6),
        UtcOffset | TimezoneName => {
            // always empty until timestamps carry a time zone
        }
        Day => writer.write2(fields.day % 100),
        Month => writer.write2(fields.month),
        YearMod100 => writer.write2(fields.year.rem_euclid(100) as u32),
        Hour24 => writer.write2(fields.hour),
        Hour12 => writer.write2(hour12(fields.hour)),
        Minute => writer.write2(fields.minute),
        Second => writer.write2(fields.second),
        // The remaining specifiers are date specifiers.
        _ => {}
    }
}
