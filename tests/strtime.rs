//! End-to-end scenarios for the strftime/strptime engine, driven through
//! the public SQL-facing surface.

use datefmt::format::strftime::StrfTimeFormat;
use datefmt::format::strptime::StrpTimeFormat;
use datefmt::func::{bind_strftime, bind_strptime, FormatArg};
use datefmt::{Date, Time, Timestamp};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn time(h: u32, mi: u32, s: u32) -> Time {
    Time::from_hms_micro(h, mi, s, 0).unwrap()
}

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    Timestamp::new(date(y, mo, d), time(h, mi, s)).unwrap()
}

fn constant(format: &str) -> FormatArg {
    FormatArg::Constant(Some(format.to_owned()))
}

fn strftime_date(d: Date, format: &str) -> String {
    let bound = bind_strftime(&constant(format)).unwrap();
    bound.execute_date(&[Some(d)]).remove(0).unwrap()
}

fn strftime_timestamp(ts: Timestamp, format: &str) -> String {
    let bound = bind_strftime(&constant(format)).unwrap();
    bound.execute_timestamp(&[Some(ts)]).remove(0).unwrap()
}

fn strptime(input: &str, format: &str) -> Timestamp {
    let bound = bind_strptime(&constant(format)).unwrap();
    bound.execute(&[Some(input)]).unwrap().remove(0).unwrap()
}

#[test]
fn scenario_date_with_names() {
    assert_eq!(strftime_date(date(1992, 1, 1), "%a, %-d %B %Y"), "Wed, 1 January 1992");
}

#[test]
fn scenario_iso_timestamp() {
    assert_eq!(
        strftime_timestamp(timestamp(1992, 3, 2, 7, 8, 9), "%Y-%m-%d %H:%M:%S"),
        "1992-03-02 07:08:09"
    );
}

#[test]
fn scenario_twelve_hour_clock() {
    assert_eq!(strftime_timestamp(timestamp(1992, 3, 2, 19, 8, 9), "%I:%M %p"), "07:08 PM");
}

#[test]
fn scenario_negative_year() {
    assert_eq!(strftime_date(date(-1, 12, 31), "%Y"), "-1");
}

#[test]
fn scenario_strptime_month_name() {
    assert_eq!(strptime("5 Dec 1992", "%-d %b %Y"), timestamp(1992, 12, 5, 0, 0, 0));
}

#[test]
fn scenario_strptime_hour12_failure() {
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
fn scenario_week_number() {
    assert_eq!(strftime_date(date(1992, 9, 20), "%U"), "38");
}

#[test]
fn length_exactness_through_format_into() {
    let program = StrfTimeFormat::compile("%a %-d %B %Y, %-I:%M %p (day %-j, week %U)").unwrap();
    for &d in &[date(1992, 1, 1), date(2000, 12, 31), date(-44, 3, 15)] {
        for &t in &[Time::midnight(), time(12, 0, 0), time(23, 59, 59)] {
            let len = program.formatted_len(d, t);
            let mut buffer = vec![0u8; len];
            program.format_into(d, t, &mut buffer);
            let text = String::from_utf8(buffer).unwrap();
            assert_eq!(text.len(), len);
            assert_eq!(text, program.format(d, t));
        }
    }
}

#[test]
fn literal_framing_invariant() {
    for format in ["", "%Y-%m-%d", "a%%b%c", "%p%p%p"] {
        let strf = StrfTimeFormat::compile(format).unwrap();
        assert_eq!(strf.literals().len(), strf.specifiers().len() + 1);
        let strp = StrpTimeFormat::compile(format).unwrap();
        assert_eq!(strp.literals().len(), strp.specifiers().len() + 1);
    }
}

#[test]
fn composite_specifiers_match_explicit_patterns() {
    let cases = [("X%cY", "X%Y-%m-%d %H:%M:%SY"), ("X%xY", "X%Y-%m-%dY"), ("X%XY", "X%H:%M:%SY")];
    let ts = timestamp(2013, 9, 30, 7, 6, 5);
    for (composite, explicit) in cases {
        assert_eq!(
            strftime_timestamp(ts, composite),
            strftime_timestamp(ts, explicit),
            "for {:?}",
            composite
        );
    }
}

#[test]
fn roundtrip_iso_format() {
    let format = "%Y-%m-%d %H:%M:%S";
    for year in [1969, 1970, 1992, 2000, 2038] {
        for month in 1..=12 {
            for day in [1, 15, 28] {
                for (hour, minute, second) in [(0, 0, 0), (11, 30, 59), (12, 0, 1), (23, 59, 59)] {
                    let ts = timestamp(year, month, day, hour, minute, second);
                    assert_eq!(strptime(&strftime_timestamp(ts, format), format), ts);
                }
            }
        }
    }
}

#[test]
fn roundtrip_twelve_hour_format() {
    let format = "%Y-%m-%d %I:%M:%S %p";
    for hour in 0..24 {
        let ts = timestamp(1992, 3, 2, hour, 4, 5);
        assert_eq!(strptime(&strftime_timestamp(ts, format), format), ts);
    }
}

#[test]
fn roundtrip_microseconds() {
    let format = "%Y-%m-%d %H:%M:%S.%f";
    let ts = Timestamp::new(date(1992, 3, 2), Time::from_hms_micro(7, 8, 9, 123456).unwrap())
        .unwrap();
    let text = strftime_timestamp(ts, format);
    assert_eq!(text, "1992-03-02 07:08:09.123456");
    assert_eq!(strptime(&text, format), ts);
}

#[test]
fn parser_tolerates_surrounding_whitespace() {
    let format = "%Y-%m-%d %H:%M:%S";
    let plain = strptime("1992-03-02 07:08:09", format);
    assert_eq!(strptime("   1992-03-02 07:08:09", format), plain);
    assert_eq!(strptime("1992-03-02 07:08:09   ", format), plain);
    assert_eq!(strptime(" \t1992-03-02 07:08:09\t ", format), plain);
}

#[test]
fn strptime_rejects_non_invertible_specifiers() {
    for format in ["%j", "%-j", "%w", "%U", "%W"] {
        let error = bind_strptime(&constant(format)).unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("Failed to parse format specifier {}: Unimplemented specifier for strptime", format),
        );
        assert!(bind_strftime(&constant(format)).is_ok());
    }
}

#[test]
fn null_format_propagates_as_constant_null() {
    let bound = bind_strftime(&FormatArg::Constant(None)).unwrap();
    assert_eq!(bound.execute_date(&[Some(date(1992, 1, 1)), None]), [None, None]);
    let bound = bind_strptime(&FormatArg::Constant(None)).unwrap();
    assert_eq!(bound.execute(&[Some("1992")]).unwrap(), [None]);
}

#[test]
fn shared_program_across_threads() {
    let bound = bind_strftime(&constant("%Y-%m-%d")).unwrap();
    let bound = std::sync::Arc::new(bound);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let bound = std::sync::Arc::clone(&bound);
            std::thread::spawn(move || {
                bound.execute_date(&[Some(date(1992, 1, 1 + i))]).remove(0).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("1992-01-0{}", i + 1));
    }
}
