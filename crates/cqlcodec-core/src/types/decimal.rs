use num_bigint::{BigInt, Sign};
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// DecimalParseError
///

#[derive(Debug, ThisError)]
pub enum DecimalParseError {
    #[error("malformed decimal '{input}': {reason}")]
    Malformed { input: String, reason: &'static str },

    #[error("decimal '{input}' has a scale outside the 32-bit range")]
    ScaleOverflow { input: String },
}

impl DecimalParseError {
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::ScaleOverflow { .. })
    }
}

///
/// Decimal
///
/// Arbitrary-precision decimal: `unscaled × 10^-scale`.
/// The scale is part of the value, so `1.0` and `1.00` are distinct.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i32,
}

impl Decimal {
    #[must_use]
    pub const fn new(unscaled: BigInt, scale: i32) -> Self {
        Self { unscaled, scale }
    }

    #[must_use]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`, keeping every digit.
    pub fn parse(s: &str) -> Result<Self, DecimalParseError> {
        let malformed = |reason| DecimalParseError::Malformed {
            input: s.to_string(),
            reason,
        };

        let (mantissa, exponent) = match s.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (s, None),
        };

        let (negative, mantissa) = split_sign(mantissa);
        let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(malformed("missing digits"));
        }
        if !int_digits.bytes().chain(frac_digits.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed("unexpected character"));
        }

        let exponent = match exponent {
            Some(exp) => {
                let (exp_negative, digits) = split_sign(exp);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed("invalid exponent"));
                }
                let magnitude = digits.parse::<i64>().map_err(|_| {
                    DecimalParseError::ScaleOverflow {
                        input: s.to_string(),
                    }
                })?;
                if exp_negative { -magnitude } else { magnitude }
            }
            None => 0,
        };

        let frac_len =
            i64::try_from(frac_digits.len()).map_err(|_| DecimalParseError::ScaleOverflow {
                input: s.to_string(),
            })?;
        let scale = frac_len
            .checked_sub(exponent)
            .and_then(|scale| i32::try_from(scale).ok())
            .ok_or_else(|| DecimalParseError::ScaleOverflow {
                input: s.to_string(),
            })?;

        let digits = format!("{int_digits}{frac_digits}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| malformed("unexpected character"))?;
        let unscaled = if negative { -magnitude } else { magnitude };

        Ok(Self { unscaled, scale })
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

// Plain notation unless the scale is negative or the value is very small,
// then `d.dddE±n`; both forms parse back to the same unscaled digits and scale.
impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unscaled.sign() == Sign::Minus {
            f.write_str("-")?;
        }

        let coefficient = self.unscaled.magnitude().to_string();
        let digits = i64::try_from(coefficient.len()).map_err(|_| fmt::Error)?;
        let scale = i64::from(self.scale);
        let adjusted = digits - 1 - scale;

        if scale == 0 {
            return f.write_str(&coefficient);
        }

        if scale > 0 && adjusted >= -6 {
            let scale = usize::try_from(scale).map_err(|_| fmt::Error)?;
            return if coefficient.len() > scale {
                let (int_part, frac_part) = coefficient.split_at(coefficient.len() - scale);
                write!(f, "{int_part}.{frac_part}")
            } else {
                let zeros = "0".repeat(scale - coefficient.len());
                write!(f, "0.{zeros}{coefficient}")
            };
        }

        let (lead, rest) = coefficient.split_at(1);
        f.write_str(lead)?;
        if !rest.is_empty() {
            write!(f, ".{rest}")?;
        }
        let sign = if adjusted >= 0 { "+" } else { "-" };

        write!(f, "E{sign}{}", adjusted.unsigned_abs())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(unscaled: i64, scale: i32) -> Decimal {
        Decimal::new(BigInt::from(unscaled), scale)
    }

    #[test]
    fn scale_is_preserved() {
        assert_eq!(Decimal::parse("0.99").unwrap(), dec(99, 2));
        assert_eq!(Decimal::parse("-0.123456").unwrap(), dec(-123_456, 6));
        assert_eq!(Decimal::parse("10.00").unwrap(), dec(1000, 2));
        assert_ne!(Decimal::parse("1.0").unwrap(), Decimal::parse("1.00").unwrap());
    }

    #[test]
    fn plain_display_round_trips() {
        for s in ["0.99", "-0.123456", "10.00", "0", "-7", "123456789012345678901234567890.5", "0.000001"] {
            assert_eq!(Decimal::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn exponents_shift_the_scale() {
        let d = Decimal::parse("1.5e3").unwrap();
        assert_eq!(d, dec(15, -2));
        assert_eq!(d.to_string(), "1.5E+3");

        let d = Decimal::parse("25E-9").unwrap();
        assert_eq!(d, dec(25, 9));
        assert_eq!(d.to_string(), "2.5E-8");
        assert_eq!(Decimal::parse(&d.to_string()).unwrap(), d);

        assert_eq!(Decimal::parse("12e+0").unwrap(), dec(12, 0));
        assert_eq!(dec(1, -3).to_string(), "1E+3");
    }

    #[test]
    fn leading_plus_and_bare_points() {
        assert_eq!(Decimal::parse("+1.25").unwrap(), dec(125, 2));
        assert_eq!(Decimal::parse(".5").unwrap(), dec(5, 1));
        assert_eq!(Decimal::parse("5.").unwrap(), dec(5, 0));
    }

    #[test]
    fn malformed_input_is_rejected() {
        for s in ["", "-", ".", "1.2.3", "abc", "1e", "1e+", "e5", "1_000", " 1", "1,5", "0x10", "NaN"] {
            let err = Decimal::parse(s).unwrap_err();
            assert!(!err.is_range(), "{s:?}: {err}");
        }
    }

    #[test]
    fn scale_overflow_is_a_range_error() {
        assert!(Decimal::parse("1e-2147483648").unwrap_err().is_range());
        assert!(Decimal::parse("1e99999999999999999999").unwrap_err().is_range());
        assert_eq!(Decimal::parse("1e-2147483647").unwrap().scale(), i32::MAX);
    }
}
