use std::fmt::{self, Debug, Display};
use thiserror::Error as ThisError;
use time::{
    Time as TimeTime, format_description::BorrowedFormatItem, macros::format_description,
};

const FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[hour]:[minute]:[second][optional [.[subsecond]]]");

///
/// TimeParseError
///

#[derive(Debug, ThisError)]
pub enum TimeParseError {
    #[error("expected a time of day 'HH:MM:SS[.fffffffff]', got '{input}' ({reason})")]
    Malformed { input: String, reason: String },
}

///
/// Time
///
/// Time of day with nanosecond resolution, stored as nanoseconds since
/// midnight. Always in `[0, 86_400s)`.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Time(u64);

impl Time {
    pub const MIDNIGHT: Self = Self(0);

    const NANOS_PER_SEC: u64 = 1_000_000_000;
    const NANOS_PER_MIN: u64 = 60 * Self::NANOS_PER_SEC;
    const NANOS_PER_HOUR: u64 = 60 * Self::NANOS_PER_MIN;
    pub const NANOS_PER_DAY: u64 = 24 * Self::NANOS_PER_HOUR;

    #[must_use]
    pub const fn try_from_nanos(nanos: u64) -> Option<Self> {
        if nanos < Self::NANOS_PER_DAY {
            Some(Self(nanos))
        } else {
            None
        }
    }

    #[must_use]
    pub fn from_hms_nano(hour: u8, minute: u8, second: u8, nano: u32) -> Option<Self> {
        TimeTime::from_hms_nano(hour, minute, second, nano)
            .ok()
            .map(Self::from_time_time)
    }

    /// Parse `HH:MM:SS` with an optional fraction of one to nine digits.
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        TimeTime::parse(s, FORMAT)
            .map(Self::from_time_time)
            .map_err(|err| TimeParseError::Malformed {
                input: s.to_string(),
                reason: err.to_string(),
            })
    }

    /// Nanoseconds since midnight.
    #[must_use]
    pub const fn nanos(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u64 {
        self.0 / Self::NANOS_PER_HOUR
    }

    #[must_use]
    pub const fn minute(self) -> u64 {
        (self.0 % Self::NANOS_PER_HOUR) / Self::NANOS_PER_MIN
    }

    #[must_use]
    pub const fn second(self) -> u64 {
        (self.0 % Self::NANOS_PER_MIN) / Self::NANOS_PER_SEC
    }

    #[must_use]
    pub const fn subsec_nanos(self) -> u64 {
        self.0 % Self::NANOS_PER_SEC
    }

    fn from_time_time(time: TimeTime) -> Self {
        let (hour, minute, second, nano) = time.as_hms_nano();

        Self(
            u64::from(hour) * Self::NANOS_PER_HOUR
                + u64::from(minute) * Self::NANOS_PER_MIN
                + u64::from(second) * Self::NANOS_PER_SEC
                + u64::from(nano),
        )
    }
}

impl Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({self})")
    }
}

// The fraction is printed in groups of three digits, using the shortest
// group that represents the value exactly.
impl Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )?;

        match self.subsec_nanos() {
            0 => Ok(()),
            n if n % 1_000_000 == 0 => write!(f, ".{:03}", n / 1_000_000),
            n if n % 1_000 == 0 => write!(f, ".{:06}", n / 1_000),
            n => write!(f, ".{n:09}"),
        }
    }
}

///
/// TESTS
///
