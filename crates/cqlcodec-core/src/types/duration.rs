use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// DurationParseError
///

#[derive(Debug, ThisError)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,

    #[error("malformed duration '{input}': {reason}")]
    Malformed { input: String, reason: String },

    #[error("duration '{input}' overflows its {field} component")]
    Overflow { input: String, field: &'static str },
}

impl DurationParseError {
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

///
/// Duration
///
/// Signed duration made of three independent components. A day is not 24
/// hours and a month has no fixed length, so nothing is carried between
/// fields and equality is component-wise (`1d != 24h`).
///
/// All non-zero components share the same sign.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Duration {
    months: i32,
    days: i32,
    nanoseconds: i64,
}

impl Duration {
    pub const ZERO: Self = Self {
        months: 0,
        days: 0,
        nanoseconds: 0,
    };

    const NANOS_PER_MICRO: u128 = 1_000;
    const NANOS_PER_MILLI: u128 = 1_000_000;
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    const NANOS_PER_MIN: u128 = 60 * Self::NANOS_PER_SEC;
    const NANOS_PER_HOUR: u128 = 60 * Self::NANOS_PER_MIN;

    /// Build from components, or `None` if their signs disagree.
    #[must_use]
    pub const fn new(months: i32, days: i32, nanoseconds: i64) -> Option<Self> {
        let any_negative = months < 0 || days < 0 || nanoseconds < 0;
        let any_positive = months > 0 || days > 0 || nanoseconds > 0;
        if any_negative && any_positive {
            return None;
        }

        Some(Self {
            months,
            days,
            nanoseconds,
        })
    }

    #[must_use]
    pub const fn months(self) -> i32 {
        self.months
    }

    #[must_use]
    pub const fn days(self) -> i32 {
        self.days
    }

    #[must_use]
    pub const fn nanoseconds(self) -> i64 {
        self.nanoseconds
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.months < 0 || self.days < 0 || self.nanoseconds < 0
    }

    /// Parse either the unit form (`-1y2mo3d4h5m6s7ms8us9ns`) or the ISO-8601
    /// designator form (`P1Y2M3DT4H5M6S`).
    pub fn parse(s: &str) -> Result<Self, DurationParseError> {
        if s.is_empty() {
            return Err(DurationParseError::Empty);
        }

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let builder = match body.strip_prefix(['P', 'p']) {
            Some(designators) => parse_iso(s, designators)?,
            None => parse_units(s, body)?,
        };

        builder.build(s, negative)
    }
}

// Canonical unit form; months split into years, nanoseconds split all the
// way down. Weeks are never emitted.
impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ZERO {
            return f.write_str("0s");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }

        let months = self.months.unsigned_abs();
        let days = self.days.unsigned_abs();
        let nanos = u128::from(self.nanoseconds.unsigned_abs());

        let parts: [(u128, &str); 9] = [
            (u128::from(months / 12), "y"),
            (u128::from(months % 12), "mo"),
            (u128::from(days), "d"),
            (nanos / Self::NANOS_PER_HOUR, "h"),
            (nanos % Self::NANOS_PER_HOUR / Self::NANOS_PER_MIN, "m"),
            (nanos % Self::NANOS_PER_MIN / Self::NANOS_PER_SEC, "s"),
            (nanos % Self::NANOS_PER_SEC / Self::NANOS_PER_MILLI, "ms"),
            (nanos % Self::NANOS_PER_MILLI / Self::NANOS_PER_MICRO, "us"),
            (nanos % Self::NANOS_PER_MICRO, "ns"),
        ];

        for (amount, unit) in parts {
            if amount != 0 {
                write!(f, "{amount}{unit}")?;
            }
        }

        Ok(())
    }
}

///
/// Unit
///
/// Declaration order is the required input order.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl Unit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        let unit = match symbol.to_lowercase().as_str() {
            "y" => Self::Years,
            "mo" => Self::Months,
            "w" => Self::Weeks,
            "d" => Self::Days,
            "h" => Self::Hours,
            "m" => Self::Minutes,
            "s" => Self::Seconds,
            "ms" => Self::Millis,
            "us" | "µs" => Self::Micros,
            "ns" => Self::Nanos,
            _ => return None,
        };

        Some(unit)
    }

    // (component, multiplier)
    const fn scale(self) -> (Component, u128) {
        match self {
            Self::Years => (Component::Months, 12),
            Self::Months => (Component::Months, 1),
            Self::Weeks => (Component::Days, 7),
            Self::Days => (Component::Days, 1),
            Self::Hours => (Component::Nanos, Duration::NANOS_PER_HOUR),
            Self::Minutes => (Component::Nanos, Duration::NANOS_PER_MIN),
            Self::Seconds => (Component::Nanos, Duration::NANOS_PER_SEC),
            Self::Millis => (Component::Nanos, Duration::NANOS_PER_MILLI),
            Self::Micros => (Component::Nanos, Duration::NANOS_PER_MICRO),
            Self::Nanos => (Component::Nanos, 1),
        }
    }
}

#[derive(Clone, Copy)]
enum Component {
    Months,
    Days,
    Nanos,
}

///
/// Builder
/// accumulates unsigned magnitudes, enforcing unit order
///

#[derive(Default)]
struct Builder {
    months: u128,
    days: u128,
    nanos: u128,
    last: Option<Unit>,
}

impl Builder {
    fn add(&mut self, input: &str, amount: u128, unit: Unit) -> Result<(), DurationParseError> {
        if self.last.is_some_and(|last| unit <= last) {
            return Err(malformed(input, "units must be unique and in descending order"));
        }
        self.last = Some(unit);

        let (component, multiplier) = unit.scale();
        let (slot, field) = match component {
            Component::Months => (&mut self.months, "months"),
            Component::Days => (&mut self.days, "days"),
            Component::Nanos => (&mut self.nanos, "nanoseconds"),
        };
        let total = amount
            .checked_mul(multiplier)
            .and_then(|value| slot.checked_add(value))
            .ok_or_else(|| overflow(input, field))?;
        *slot = total;

        Ok(())
    }

    fn build(self, input: &str, negative: bool) -> Result<Duration, DurationParseError> {
        if self.last.is_none() {
            return Err(malformed(input, "no components"));
        }

        Ok(Duration {
            months: signed(self.months, negative).ok_or_else(|| overflow(input, "months"))?,
            days: signed(self.days, negative).ok_or_else(|| overflow(input, "days"))?,
            nanoseconds: signed(self.nanos, negative)
                .ok_or_else(|| overflow(input, "nanoseconds"))?,
        })
    }
}

fn signed<T: TryFrom<i128>>(magnitude: u128, negative: bool) -> Option<T> {
    let value = i128::try_from(magnitude).ok()?;

    T::try_from(if negative { -value } else { value }).ok()
}

fn malformed(input: &str, reason: impl Into<String>) -> DurationParseError {
    DurationParseError::Malformed {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn overflow(input: &str, field: &'static str) -> DurationParseError {
    DurationParseError::Overflow {
        input: input.to_string(),
        field,
    }
}

// Splits `body` at the first char not matching `pred`.
fn take_while(body: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = body.find(|c: char| !pred(c)).unwrap_or(body.len());

    body.split_at(end)
}

fn parse_amount(input: &str, digits: &str) -> Result<u128, DurationParseError> {
    if digits.is_empty() {
        return Err(malformed(input, "expected a number"));
    }

    digits
        .parse::<u64>()
        .map(u128::from)
        .map_err(|_| overflow(input, "amount"))
}

fn parse_units(input: &str, mut body: &str) -> Result<Builder, DurationParseError> {
    let mut builder = Builder::default();

    while !body.is_empty() {
        let (digits, rest) = take_while(body, |c| c.is_ascii_digit());
        let amount = parse_amount(input, digits)?;

        let (symbol, rest) = take_while(rest, char::is_alphabetic);
        let unit = Unit::from_symbol(symbol)
            .ok_or_else(|| malformed(input, format!("unknown unit '{symbol}'")))?;

        builder.add(input, amount, unit)?;
        body = rest;
    }

    Ok(builder)
}

fn parse_iso(input: &str, designators: &str) -> Result<Builder, DurationParseError> {
    let (date_part, time_part) = match designators.split_once(['T', 't']) {
        Some((date, time)) if !time.is_empty() => (date, Some(time)),
        Some(_) => return Err(malformed(input, "empty time part")),
        None => (designators, None),
    };

    let mut builder = Builder::default();
    parse_designators(input, date_part, false, &mut builder)?;
    if let Some(time_part) = time_part {
        parse_designators(input, time_part, true, &mut builder)?;
    }

    Ok(builder)
}

fn parse_designators(
    input: &str,
    mut part: &str,
    time: bool,
    builder: &mut Builder,
) -> Result<(), DurationParseError> {
    while !part.is_empty() {
        let (digits, rest) = take_while(part, |c| c.is_ascii_digit());
        let amount = parse_amount(input, digits)?;

        let mut chars = rest.chars();
        let designator = chars.next().map(|c| c.to_ascii_uppercase());
        let unit = match (time, designator) {
            (false, Some('Y')) => Unit::Years,
            (false, Some('M')) => Unit::Months,
            (false, Some('W')) => Unit::Weeks,
            (false, Some('D')) => Unit::Days,
            (true, Some('H')) => Unit::Hours,
            (true, Some('M')) => Unit::Minutes,
            (true, Some('S')) => Unit::Seconds,
            _ => return Err(malformed(input, "unexpected ISO-8601 designator")),
        };

        builder.add(input, amount, unit)?;
        part = chars.as_str();
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const NANOS_PER_HOUR: i64 = 3_600_000_000_000;

    fn parts(d: Duration) -> (i32, i32, i64) {
        (d.months(), d.days(), d.nanoseconds())
    }

    #[test]
    fn unit_form_decomposes_without_normalizing() {
        let d = Duration::parse("12h30m").unwrap();
        assert_eq!(parts(d), (0, 0, 12 * NANOS_PER_HOUR + 30 * 60_000_000_000));

        let d = Duration::parse("1y2mo3w4d").unwrap();
        assert_eq!(parts(d), (14, 25, 0));
    }

    #[test]
    fn a_day_is_not_24_hours() {
        let day = Duration::parse("1d").unwrap();
        let hours = Duration::parse("24h").unwrap();
        assert_ne!(day, hours);
        assert_eq!(parts(day), (0, 1, 0));
        assert_eq!(parts(hours), (0, 0, 24 * NANOS_PER_HOUR));
    }

    #[test]
    fn negative_sign_applies_to_every_component() {
        let d = Duration::parse("-1mo2d3s").unwrap();
        assert_eq!(parts(d), (-1, -2, -3_000_000_000));
        assert_eq!(d.to_string(), "-1mo2d3s");
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!(
            Duration::parse("1MO2D3MS").unwrap(),
            Duration::parse("1mo2d3ms").unwrap()
        );
        assert_eq!(
            Duration::parse("5µs").unwrap(),
            Duration::parse("5us").unwrap()
        );
    }

    #[test]
    fn canonical_display() {
        assert_eq!(Duration::ZERO.to_string(), "0s");
        assert_eq!(Duration::parse("0h").unwrap().to_string(), "0s");
        assert_eq!(Duration::parse("14mo").unwrap().to_string(), "1y2mo");
        assert_eq!(Duration::parse("2w").unwrap().to_string(), "14d");
        assert_eq!(Duration::parse("90m").unwrap().to_string(), "1h30m");
        assert_eq!(
            Duration::parse("1h2m3s4ms5us6ns").unwrap().to_string(),
            "1h2m3s4ms5us6ns"
        );
    }

    #[test]
    fn iso_designator_form() {
        let d = Duration::parse("P1Y2M3DT4H5M6S").unwrap();
        assert_eq!(
            parts(d),
            (14, 3, 4 * NANOS_PER_HOUR + 5 * 60_000_000_000 + 6_000_000_000)
        );
        assert_eq!(Duration::parse("P2W").unwrap(), Duration::parse("14d").unwrap());
        assert_eq!(Duration::parse("-PT1M").unwrap(), Duration::parse("-1m").unwrap());
    }

    #[test]
    fn malformed_input_is_rejected() {
        for s in [
            "", "-", "P", "PT", "1", "h", "1x", "1h1h", "1m1h", "1d 2h", "1.5h", "P1H", "PT1D",
            "--1h",
        ] {
            let err = Duration::parse(s).unwrap_err();
            assert!(!err.is_overflow(), "{s:?} should be malformed, got {err}");
        }
    }

    #[test]
    fn overflow_is_reported() {
        assert!(Duration::parse("2147483648mo").unwrap_err().is_overflow());
        assert!(Duration::parse("178956971y").unwrap_err().is_overflow());
        assert!(Duration::parse("9223372036854775808ns").unwrap_err().is_overflow());
        assert!(Duration::parse("99999999999999999999d").unwrap_err().is_overflow());

        // magnitude of i64::MIN is only reachable with a sign
        let d = Duration::parse("-9223372036854775808ns").unwrap();
        assert_eq!(d.nanoseconds(), i64::MIN);
        assert_eq!(Duration::parse(&d.to_string()).unwrap(), d);
    }

    #[test]
    fn mixed_signs_are_not_constructible() {
        assert!(Duration::new(1, -1, 0).is_none());
        assert!(Duration::new(-1, 0, -5).is_some());
    }
}
