//! Partial time and date extraction from unix millisecond timestamps.
//!
//! Each helper comes in two shapes: a joined string for display and a
//! record for prefilling the editor's publish-time inputs. The plain
//! functions use the local time zone; the `_in` variants take any
//! [`TimeZone`].

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use crate::models::{PartialDateRecord, PartialTimeRecord, Period};

/// Rendered in place of every field when the timestamp cannot be
/// represented as a date.
const INVALID_FIELD: &str = "NaN";

fn datetime_in<Tz: TimeZone>(unix_millis: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(unix_millis).single()
}

/// Local time as `H:M:S`, 24-hour and unpadded (09:05:03 is `"9:5:3"`).
pub fn partial_time(unix_millis: i64) -> String {
    partial_time_in(unix_millis, &Local)
}

/// [`partial_time`] in the given time zone.
pub fn partial_time_in<Tz: TimeZone>(unix_millis: i64, tz: &Tz) -> String {
    match datetime_in(unix_millis, tz) {
        Some(dt) => format!("{}:{}:{}", dt.hour(), dt.minute(), dt.second()),
        None => [INVALID_FIELD; 3].join(":"),
    }
}

/// Local time as a 12-hour record.
///
/// Returns `None` when the timestamp is out of range.
pub fn partial_time_record(unix_millis: i64) -> Option<PartialTimeRecord> {
    partial_time_record_in(unix_millis, &Local)
}

/// [`partial_time_record`] in the given time zone.
pub fn partial_time_record_in<Tz: TimeZone>(
    unix_millis: i64,
    tz: &Tz,
) -> Option<PartialTimeRecord> {
    let dt = datetime_in(unix_millis, tz)?;
    let hour = dt.hour();

    // padding happens before the afternoon shift, and midnight is not
    // mapped to 12
    let mut hh = format!("{:02}", hour);
    let pd = if hour >= 12 { Period::Pm } else { Period::Am };
    if hour > 12 {
        hh = (hour - 12).to_string();
    }

    Some(PartialTimeRecord {
        hh,
        mm: format!("{:02}", dt.minute()),
        pd,
    })
}

/// Local date as `YYYY-MM-DD`.
pub fn partial_date(unix_millis: i64) -> String {
    partial_date_in(unix_millis, &Local)
}

/// [`partial_date`] in the given time zone.
pub fn partial_date_in<Tz: TimeZone>(unix_millis: i64, tz: &Tz) -> String {
    match datetime_in(unix_millis, tz) {
        Some(dt) => format!("{}-{:02}-{:02}", dt.year(), dt.month(), dt.day()),
        None => [INVALID_FIELD; 3].join("-"),
    }
}

/// Local date as a record.
///
/// Returns `None` when the timestamp is out of range.
pub fn partial_date_record(unix_millis: i64) -> Option<PartialDateRecord> {
    partial_date_record_in(unix_millis, &Local)
}

/// [`partial_date_record`] in the given time zone.
pub fn partial_date_record_in<Tz: TimeZone>(
    unix_millis: i64,
    tz: &Tz,
) -> Option<PartialDateRecord> {
    let dt = datetime_in(unix_millis, tz)?;
    Some(PartialDateRecord {
        yyyy: dt.year(),
        mm: dt.month(),
        dd: format!("{:02}", dt.day()),
    })
}
