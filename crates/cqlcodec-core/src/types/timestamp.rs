use std::fmt::{self, Display};
use thiserror::Error as ThisError;
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

///
/// TimestampParseError
///

#[derive(Debug, ThisError)]
pub enum TimestampParseError {
    #[error(
        "expected an ISO-8601 date-time with an explicit UTC offset, got '{input}' ({reason})"
    )]
    Malformed { input: String, reason: String },

    #[error("'{input}' has sub-millisecond precision")]
    SubMillisecond { input: String },

    #[error("'{input}' falls outside years 0000..=9999 in UTC")]
    OutOfRange { input: String },
}

impl TimestampParseError {
    /// Precision errors are domain violations, not grammar errors.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(
            self,
            Self::SubMillisecond { .. } | Self::OutOfRange { .. }
        )
    }
}

///
/// Timestamp
/// (milliseconds since the Unix epoch)
///
/// An instant only; the offset used to render it is chosen by the caller.
/// Limited to instants whose UTC year is four digits, so every rendering
/// reads back.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    /// `0000-01-01T00:00:00.000Z`
    pub const MIN: Self = Self(-62_167_219_200_000);

    /// `9999-12-31T23:59:59.999Z`
    pub const MAX: Self = Self(253_402_300_799_999);

    const NANOS_PER_MILLI: i128 = 1_000_000;

    #[must_use]
    pub const fn try_from_millis(millis: i64) -> Option<Self> {
        if millis >= Self::MIN.0 && millis <= Self::MAX.0 {
            Some(Self(millis))
        } else {
            None
        }
    }

    /// Parse an RFC 3339 date-time. The offset is mandatory; `Z` counts as one.
    pub fn parse(s: &str) -> Result<Self, TimestampParseError> {
        let dt = OffsetDateTime::parse(s, &Rfc3339).map_err(|err| {
            TimestampParseError::Malformed {
                input: s.to_string(),
                reason: err.to_string(),
            }
        })?;

        if dt.nanosecond() % 1_000_000 != 0 {
            return Err(TimestampParseError::SubMillisecond {
                input: s.to_string(),
            });
        }

        let millis = dt.unix_timestamp_nanos() / Self::NANOS_PER_MILLI;
        i64::try_from(millis)
            .ok()
            .and_then(Self::try_from_millis)
            .ok_or_else(|| TimestampParseError::OutOfRange {
                input: s.to_string(),
            })
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Render at a fixed offset.
    #[must_use]
    pub const fn at(self, offset: UtcOffset) -> OffsetTimestamp {
        OffsetTimestamp {
            timestamp: self,
            offset,
        }
    }

    // None when the local year at `offset` is not four digits.
    fn to_date_time(self, offset: UtcOffset) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * Self::NANOS_PER_MILLI)
            .ok()?
            .checked_to_offset(offset)
            .filter(|dt| (0..=9999).contains(&dt.year()))
    }
}

///
/// OffsetTimestamp
///
/// Display adapter producing `YYYY-MM-DDTHH:MM:SS.mmm±HH:MM`.
/// Falls back to UTC when the shifted year would leave `0000..=9999`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OffsetTimestamp {
    timestamp: Timestamp,
    offset: UtcOffset,
}

impl Display for OffsetTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(dt) = self
            .timestamp
            .to_date_time(self.offset)
            .or_else(|| self.timestamp.to_date_time(UtcOffset::UTC))
        else {
            return Err(fmt::Error);
        };

        let month: u8 = dt.month().into();
        write!(
            f,
            "{:04}-{month:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            dt.year(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.millisecond(),
        )?;

        let (hours, minutes, _) = dt.offset().as_hms();
        let offset_sign = if dt.offset().is_negative() { '-' } else { '+' };
        write!(
            f,
            "{offset_sign}{:02}:{:02}",
            hours.unsigned_abs(),
            minutes.unsigned_abs()
        )
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(hours: i8, minutes: i8) -> UtcOffset {
        UtcOffset::from_hms(hours, minutes, 0).unwrap()
    }

    #[test]
    fn canonical_utc_round_trip() {
        let s = "2020-01-03T10:15:31.123+00:00";
        let ts = Timestamp::parse(s).expect("valid timestamp");
        assert_eq!(ts.millis(), 1_578_046_531_123);
        assert_eq!(ts.at(UtcOffset::UTC).to_string(), s);
    }

    #[test]
    fn equivalent_offsets_name_the_same_instant() {
        let utc = Timestamp::parse("2020-01-03T10:15:31.123Z").unwrap();
        let cest = Timestamp::parse("2020-01-03T12:15:31.123+02:00").unwrap();
        assert_eq!(utc, cest);
        assert_eq!(cest.at(UtcOffset::UTC).to_string(), "2020-01-03T10:15:31.123+00:00");
    }

    #[test]
    fn renders_at_requested_offset() {
        let ts = Timestamp::parse("2020-01-03T10:15:31.123+00:00").unwrap();
        assert_eq!(
            ts.at(offset(-5, -30)).to_string(),
            "2020-01-03T04:45:31.123-05:30"
        );
        assert_eq!(ts.at(offset(9, 0)).to_string(), "2020-01-03T19:15:31.123+09:00");
    }

    #[test]
    fn millis_are_always_three_digits() {
        let ts = Timestamp::parse("2020-01-03T10:15:31+00:00").unwrap();
        assert_eq!(ts.at(UtcOffset::UTC).to_string(), "2020-01-03T10:15:31.000+00:00");
        let ts = Timestamp::parse("2020-01-03T10:15:31.5+00:00").unwrap();
        assert_eq!(ts.at(UtcOffset::UTC).to_string(), "2020-01-03T10:15:31.500+00:00");
    }

    #[test]
    fn offset_is_mandatory() {
        let err = Timestamp::parse("2020-01-03T10:15:31.123").unwrap_err();
        assert!(!err.is_range());
        assert!(Timestamp::parse("2020-01-03 10:15:31.123").is_err());
        assert!(Timestamp::parse("2020-01-03").is_err());
    }

    #[test]
    fn sub_millisecond_digits_are_a_range_error() {
        let err = Timestamp::parse("2020-01-03T10:15:31.1234+00:00").unwrap_err();
        assert!(err.is_range());
        assert!(Timestamp::parse("2020-01-03T10:15:31.123000+00:00").is_ok());
    }

    #[test]
    fn pre_epoch_instants_render() {
        let ts = Timestamp::parse("1969-12-31T23:59:59.999+00:00").unwrap();
        assert_eq!(ts.millis(), -1);
        assert_eq!(ts.at(UtcOffset::UTC).to_string(), "1969-12-31T23:59:59.999+00:00");
    }

    #[test]
    fn out_of_calendar_millis_are_rejected() {
        assert!(Timestamp::try_from_millis(i64::MAX).is_none());
        assert!(Timestamp::try_from_millis(Timestamp::MIN.millis() - 1).is_none());
        assert!(Timestamp::try_from_millis(Timestamp::MAX.millis() + 1).is_none());
        assert_eq!(Timestamp::try_from_millis(0), Some(Timestamp::EPOCH));
    }

    #[test]
    fn year_zero_bounds_are_range_errors() {
        let err = Timestamp::parse("0000-01-01T00:00:00.000+01:00").unwrap_err();
        assert!(err.is_range(), "{err}");

        let min = Timestamp::parse("0000-01-01T00:00:00.000+00:00").unwrap();
        assert_eq!(min, Timestamp::MIN);
        assert_eq!(Timestamp::parse("9999-12-31T23:59:59.999+00:00").unwrap(), Timestamp::MAX);
    }

    #[test]
    fn edge_instants_render_in_utc_when_the_offset_leaves_four_digit_years() {
        assert_eq!(
            Timestamp::MIN.at(offset(-5, 0)).to_string(),
            "0000-01-01T00:00:00.000+00:00"
        );
        assert_eq!(
            Timestamp::MAX.at(offset(14, 0)).to_string(),
            "9999-12-31T23:59:59.999+00:00"
        );

        let rendered = Timestamp::MIN.at(offset(5, 0)).to_string();
        assert_eq!(rendered, "0000-01-01T05:00:00.000+05:00");
        assert_eq!(Timestamp::parse(&rendered).unwrap(), Timestamp::MIN);
    }
}
