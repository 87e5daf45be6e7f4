//! External value → native value, one rule set per column type.

use crate::{
    error::CodecError,
    types::{Date, Decimal, Duration, Time, TimeUuid, Timestamp, parse_inet},
    value::{ExternalValue, NativeValue},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use cqlcodec_primitives::ColumnType;
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use std::fmt::Display;
use uuid::Uuid;

const UUID_TEXT_LEN: usize = 36;

/// Parse a non-null external value into the native domain of `ty`.
/// `Null` is not a value of any type here; the dispatcher deals with it.
pub(crate) fn parse(ty: ColumnType, value: &ExternalValue) -> Result<NativeValue, CodecError> {
    let native = match ty {
        ColumnType::Ascii => NativeValue::Ascii(parse_ascii(value)?),
        ColumnType::Bigint => NativeValue::Bigint(parse_fixed(ty, value, i64::MIN, i64::MAX)?),
        ColumnType::Blob => NativeValue::Blob(parse_blob(value)?),
        ColumnType::Boolean => match value {
            ExternalValue::Boolean(v) => NativeValue::Boolean(*v),
            _ => return Err(mismatch(ty, "a boolean", value)),
        },
        ColumnType::Date => {
            NativeValue::Date(Date::parse(text(ty, value)?).map_err(|e| CodecError::syntax(ty, e))?)
        }
        ColumnType::Decimal => NativeValue::Decimal(parse_decimal(value)?),
        ColumnType::Double => NativeValue::Double(parse_double(ty, value)?),
        ColumnType::Duration => NativeValue::Duration(parse_duration(value)?),
        ColumnType::Float => NativeValue::Float(parse_float(value)?),
        ColumnType::Inet => NativeValue::Inet(
            parse_inet(text(ty, value)?)
                .map_err(|e| CodecError::syntax(ty, format!("expected an IP address ({e})")))?,
        ),
        ColumnType::Int => NativeValue::Int(parse_fixed(ty, value, i32::MIN, i32::MAX)?),
        ColumnType::Smallint => {
            NativeValue::Smallint(parse_fixed(ty, value, i16::MIN, i16::MAX)?)
        }
        ColumnType::Text => NativeValue::Text(text(ty, value)?.to_string()),
        ColumnType::Time => {
            NativeValue::Time(Time::parse(text(ty, value)?).map_err(|e| CodecError::syntax(ty, e))?)
        }
        ColumnType::Timestamp => NativeValue::Timestamp(parse_timestamp(value)?),
        ColumnType::Tinyint => NativeValue::Tinyint(parse_fixed(ty, value, i8::MIN, i8::MAX)?),
        ColumnType::Timeuuid => NativeValue::Timeuuid(parse_timeuuid(value)?),
        ColumnType::Uuid => NativeValue::Uuid(parse_uuid(ty, value)?),
        ColumnType::Varchar => NativeValue::Varchar(text(ty, value)?.to_string()),
        ColumnType::Varint => NativeValue::Varint(parse_varint(value)?),
    };

    Ok(native)
}

// ---- shape helpers ----

fn mismatch(ty: ColumnType, expected: &str, value: &ExternalValue) -> CodecError {
    CodecError::syntax(
        ty,
        format!("expected {expected}, got {} {value}", value.kind_label()),
    )
}

fn text(ty: ColumnType, value: &ExternalValue) -> Result<&str, CodecError> {
    value.as_str().ok_or_else(|| mismatch(ty, "a string", value))
}

// `[+-]?[0-9]+`, checked up front so big-integer parsing never sees
// separators or whitespace.
fn is_integer_text(s: &str, allow_plus: bool) -> bool {
    let digits = match s.as_bytes().first() {
        Some(b'-') => &s[1..],
        Some(b'+') if allow_plus => &s[1..],
        _ => s,
    };

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// ---- numeric ----

fn integer_value(ty: ColumnType, value: &ExternalValue) -> Result<BigInt, CodecError> {
    match value {
        ExternalValue::Integer(v) => Ok(BigInt::from(*v)),
        ExternalValue::Float(v) if v.is_finite() && v.fract() == 0.0 => BigInt::from_f64(*v)
            .ok_or_else(|| mismatch(ty, "an integer", value)),
        ExternalValue::String(s) if is_integer_text(s, true) => BigInt::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| mismatch(ty, "an integer", value)),
        _ => Err(mismatch(ty, "an integer", value)),
    }
}

fn parse_fixed<T>(ty: ColumnType, value: &ExternalValue, min: T, max: T) -> Result<T, CodecError>
where
    T: for<'a> TryFrom<&'a BigInt> + Display,
{
    let big = integer_value(ty, value)?;

    T::try_from(&big).map_err(|_| CodecError::out_of_bounds(ty, &big, min, max))
}

fn parse_varint(value: &ExternalValue) -> Result<BigInt, CodecError> {
    let ty = ColumnType::Varint;
    match value {
        ExternalValue::Integer(v) => Ok(BigInt::from(*v)),
        ExternalValue::String(s) if is_integer_text(s, false) => BigInt::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| mismatch(ty, "an integer string", value)),
        _ => Err(mismatch(ty, "an integer string", value)),
    }
}

fn parse_decimal(value: &ExternalValue) -> Result<Decimal, CodecError> {
    let ty = ColumnType::Decimal;
    match value {
        ExternalValue::Integer(v) => Ok(Decimal::from(*v)),
        ExternalValue::String(s) => Decimal::parse(s).map_err(|e| {
            if e.is_range() {
                CodecError::range(ty, e)
            } else {
                CodecError::syntax(ty, e)
            }
        }),
        _ => Err(mismatch(ty, "a decimal string", value)),
    }
}

#[expect(clippy::cast_precision_loss)]
fn finite_number(ty: ColumnType, value: &ExternalValue) -> Result<f64, CodecError> {
    let v = match value {
        ExternalValue::Integer(v) => *v as f64,
        ExternalValue::Float(v) => *v,
        _ => return Err(mismatch(ty, "a number", value)),
    };
    if !v.is_finite() {
        return Err(CodecError::range(ty, format!("{v} is not finite")));
    }

    Ok(v)
}

fn parse_double(ty: ColumnType, value: &ExternalValue) -> Result<f64, CodecError> {
    finite_number(ty, value)
}

#[expect(clippy::cast_possible_truncation)]
fn parse_float(value: &ExternalValue) -> Result<f32, CodecError> {
    let ty = ColumnType::Float;
    let v = finite_number(ty, value)?;

    // Rounds to nearest, so the shortest text of `f32::MAX` still fits.
    let narrowed = v as f32;
    if narrowed.is_infinite() {
        return Err(CodecError::range(
            ty,
            format!("{v:?} exceeds the 32-bit float range"),
        ));
    }

    Ok(narrowed)
}

// ---- text ----

fn parse_ascii(value: &ExternalValue) -> Result<String, CodecError> {
    let ty = ColumnType::Ascii;
    let s = text(ty, value)?;
    if let Some((offset, c)) = s.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(CodecError::syntax(
            ty,
            format!("non-ASCII character {c:?} at offset {offset}"),
        ));
    }

    Ok(s.to_string())
}

fn parse_blob(value: &ExternalValue) -> Result<Vec<u8>, CodecError> {
    let ty = ColumnType::Blob;
    STANDARD
        .decode(text(ty, value)?)
        .map_err(|e| CodecError::syntax(ty, format!("expected base64 ({e})")))
}

// ---- temporal ----

fn parse_timestamp(value: &ExternalValue) -> Result<Timestamp, CodecError> {
    let ty = ColumnType::Timestamp;
    Timestamp::parse(text(ty, value)?).map_err(|e| {
        if e.is_range() {
            CodecError::range(ty, e)
        } else {
            CodecError::syntax(ty, e)
        }
    })
}

fn parse_duration(value: &ExternalValue) -> Result<Duration, CodecError> {
    let ty = ColumnType::Duration;
    Duration::parse(text(ty, value)?).map_err(|e| {
        if e.is_overflow() {
            CodecError::range(ty, e)
        } else {
            CodecError::syntax(ty, e)
        }
    })
}

// ---- identifiers ----

fn parse_uuid(ty: ColumnType, value: &ExternalValue) -> Result<Uuid, CodecError> {
    let s = text(ty, value)?;
    if s.len() != UUID_TEXT_LEN {
        return Err(CodecError::syntax(
            ty,
            format!("expected a hyphenated UUID, got '{s}'"),
        ));
    }

    Uuid::parse_str(s).map_err(|e| CodecError::syntax(ty, e))
}

fn parse_timeuuid(value: &ExternalValue) -> Result<TimeUuid, CodecError> {
    let ty = ColumnType::Timeuuid;
    let uuid = parse_uuid(ty, value)?;

    TimeUuid::try_from_uuid(uuid)
        .map_err(|found| CodecError::version(ty, TimeUuid::VERSION, found))
}
