//! Calendar dates, times of day and Unix timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldKind};
use crate::macros::field_decoder;

/// Parse two ASCII digits at `offset`.
fn parse_two_digits(bytes: &[u8], offset: usize) -> Option<u8> {
    if offset + 2 > bytes.len() {
        return None;
    }
    let d1 = bytes[offset].wrapping_sub(b'0');
    let d2 = bytes[offset + 1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

// ============================================================================
// DATE
// ============================================================================

/// A calendar date written `YYYY-MM-DD`.
///
/// The shape is fixed (no week dates, no time component) and the date must
/// exist, so `2023-02-29` is rejected while `2024-02-29` is accepted.
///
/// ```
/// use gbfs_fields::types::Date;
///
/// let date: Date = "2024-02-29".parse().unwrap();
/// assert_eq!(date.to_string(), "2024-02-29");
/// assert!("2023-02-29".parse::<Date>().is_err());
/// assert!("2024-2-9".parse::<Date>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(input: &str) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidDateFormat {
            input: input.to_owned(),
        };
        let bytes = input.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }

        let century = parse_two_digits(bytes, 0).ok_or_else(invalid)?;
        let year_of_century = parse_two_digits(bytes, 2).ok_or_else(invalid)?;
        let month = parse_two_digits(bytes, 5).ok_or_else(invalid)?;
        let day = parse_two_digits(bytes, 8).ok_or_else(invalid)?;

        let year = i32::from(century) * 100 + i32::from(year_of_century);
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or_else(invalid)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Date {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Date {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

field_decoder!(Date as Date via decode_string);

// ============================================================================
// TIME
// ============================================================================

/// A 24-hour time of day written `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time(NaiveTime);

impl Time {
    /// Parses `HH:MM:SS` with hours `00..=23` and minutes and seconds `00..=59`.
    pub fn new(input: &str) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidTimeFormat {
            input: input.to_owned(),
        };
        let bytes = input.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return Err(invalid());
        }

        let hour = parse_two_digits(bytes, 0).ok_or_else(invalid)?;
        let minute = parse_two_digits(bytes, 3).ok_or_else(invalid)?;
        let second = parse_two_digits(bytes, 6).ok_or_else(invalid)?;

        // from_hms_opt rejects 60 for seconds, so leap seconds never pass.
        NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            .map(Self)
            .ok_or_else(invalid)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveTime {
        self.0
    }

    /// Seconds elapsed since midnight.
    #[must_use]
    pub fn seconds_from_midnight(self) -> u32 {
        self.0.num_seconds_from_midnight()
    }
}

impl FromStr for Time {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Time {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Time> for String {
    fn from(time: Time) -> Self {
        time.to_string()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0.hour(),
            self.0.minute(),
            self.0.second()
        )
    }
}

field_decoder!(Time as Time via decode_string);

// ============================================================================
// TIMESTAMP
// ============================================================================

/// A POSIX timestamp in whole seconds, such as `last_updated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from seconds since the Unix epoch.
    ///
    /// Fails only when the instant is outside what `chrono` can represent.
    pub fn from_epoch_seconds(seconds: i64) -> Result<Self, FieldError> {
        DateTime::from_timestamp(seconds, 0)
            .map(Self)
            .ok_or_else(|| {
                FieldError::malformed(
                    FieldKind::Timestamp,
                    format!("{seconds} seconds is outside the representable range"),
                )
            })
    }

    #[must_use]
    pub fn epoch_seconds(self) -> i64 {
        self.0.timestamp()
    }

    #[must_use]
    pub const fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_epoch_seconds(value)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.epoch_seconds()
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.epoch_seconds(), f)
    }
}

field_decoder!(Timestamp as Timestamp via decode_i64);

// ============================================================================
// TESTS
// ============================================================================
