use std::fmt::{self, Debug, Display};
use thiserror::Error as ThisError;
use time::{
    Date as TimeDate, Duration as TimeDuration, Month,
    format_description::BorrowedFormatItem,
    macros::{date, format_description},
};

const FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const EPOCH: TimeDate = date!(1970 - 01 - 01);

///
/// DateParseError
///

#[derive(Debug, ThisError)]
pub enum DateParseError {
    #[error("expected a calendar date 'YYYY-MM-DD', got '{input}' ({reason})")]
    Malformed { input: String, reason: String },
}

///
/// Date
///
/// Calendar date without a time component, stored as days since 1970-01-01.
/// Only dates the proleptic calendar can render (years -9999..=9999) exist.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);

    /// Construct from days since the epoch, if the day is on the calendar.
    #[must_use]
    pub fn try_from_days(days: i32) -> Option<Self> {
        EPOCH
            .checked_add(TimeDuration::days(i64::from(days)))
            .map(|_| Self(days))
    }

    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        let date = TimeDate::from_calendar_date(year, month, day).ok()?;

        Self::from_time_date(date)
    }

    /// Parse an ISO `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let malformed = |reason: String| DateParseError::Malformed {
            input: s.to_string(),
            reason,
        };
        let date = TimeDate::parse(s, FORMAT).map_err(|err| malformed(err.to_string()))?;

        Self::from_time_date(date).ok_or_else(|| malformed("date out of range".to_string()))
    }

    /// Days since the epoch.
    #[must_use]
    pub const fn days(self) -> i32 {
        self.0
    }

    /// Returns the year component (e.g. 2025)
    #[must_use]
    pub fn year(self) -> i32 {
        self.to_time_date().year()
    }

    /// Returns the month component (1–12)
    #[must_use]
    pub fn month(self) -> u8 {
        self.to_time_date().month().into()
    }

    /// Returns the day-of-month component (1–31)
    #[must_use]
    pub fn day(self) -> u8 {
        self.to_time_date().day()
    }

    fn from_time_date(date: TimeDate) -> Option<Self> {
        i32::try_from((date - EPOCH).whole_days()).ok().map(Self)
    }

    fn to_time_date(self) -> TimeDate {
        let delta = TimeDuration::days(self.0.into());
        EPOCH.checked_add(delta).unwrap_or({
            if self.0 >= 0 {
                TimeDate::MAX
            } else {
                TimeDate::MIN
            }
        })
    }
}

impl Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.to_time_date();
        let sign = if d.year() < 0 { "-" } else { "" };
        let month: u8 = d.month().into();

        write!(
            f,
            "{sign}{:04}-{month:02}-{:02}",
            d.year().unsigned_abs(),
            d.day()
        )
    }
}

///
/// TESTS
///
