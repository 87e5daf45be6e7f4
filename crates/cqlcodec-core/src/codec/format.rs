//! Native value → canonical text and query literal.
//!
//! Both directions of the codec share `canonical_text`, so the literal a
//! statement carries and the string a client reads back never disagree.

use crate::{
    types::InetText,
    value::{NativeValue, QueryLiteral},
};
use std::{borrow::Cow, fmt::Write as _};
use time::UtcOffset;

/// Query literal for a value. Quoting follows the registry.
pub(crate) fn format(value: &NativeValue, offset: UtcOffset) -> QueryLiteral {
    let text = canonical_text(value, offset);

    if value.column_type().is_quoted_literal() {
        QueryLiteral::quoted(&text)
    } else {
        QueryLiteral::raw(text.into_owned())
    }
}

/// Canonical unquoted text of a value. Blobs render as `0x` hex here;
/// the row decoder substitutes base64.
pub(crate) fn canonical_text(value: &NativeValue, offset: UtcOffset) -> Cow<'_, str> {
    match value {
        NativeValue::Ascii(s) | NativeValue::Text(s) | NativeValue::Varchar(s) => {
            Cow::Borrowed(s.as_str())
        }
        NativeValue::Bigint(v) => v.to_string().into(),
        NativeValue::Blob(bytes) => hex_text(bytes).into(),
        NativeValue::Boolean(v) => Cow::Borrowed(if *v { "true" } else { "false" }),
        NativeValue::Date(v) => v.to_string().into(),
        NativeValue::Decimal(v) => v.to_string().into(),
        NativeValue::Double(v) => float_text(*v, *v).into(),
        NativeValue::Duration(v) => v.to_string().into(),
        NativeValue::Float(v) => float_text(*v, f64::from(*v)).into(),
        NativeValue::Inet(v) => InetText(v).to_string().into(),
        NativeValue::Int(v) => v.to_string().into(),
        NativeValue::Smallint(v) => v.to_string().into(),
        NativeValue::Time(v) => v.to_string().into(),
        NativeValue::Timestamp(v) => v.at(offset).to_string().into(),
        NativeValue::Tinyint(v) => v.to_string().into(),
        NativeValue::Timeuuid(v) => v.to_string().into(),
        NativeValue::Uuid(v) => v.hyphenated().to_string().into(),
        NativeValue::Varint(v) => v.to_string().into(),
    }
}

// Shortest round-trip digits of the value's own width, with an upper-case
// exponent marker. Non-finite values use the CQL spellings.
fn float_text(v: impl std::fmt::Debug, wide: f64) -> String {
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    format!("{v:?}").replace('e', "E")
}

fn hex_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }

    out
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Decimal, Duration};
    use num_bigint::BigInt;

    fn literal(value: NativeValue) -> String {
        format(&value, UtcOffset::UTC).into_string()
    }

    #[test]
    fn integers_are_bare_digits() {
        assert_eq!(literal(NativeValue::Tinyint(i8::MIN)), "-128");
        assert_eq!(literal(NativeValue::Bigint(i64::MAX)), "9223372036854775807");
        assert_eq!(
            literal(NativeValue::Varint("-123456789012345678901234567890".parse().unwrap())),
            "-123456789012345678901234567890"
        );
    }

    #[test]
    fn floats_use_shortest_digits_and_upper_case_exponent() {
        assert_eq!(literal(NativeValue::Double(-1.0)), "-1.0");
        assert_eq!(literal(NativeValue::Float(f32::MAX)), "3.4028235E38");
        assert_eq!(literal(NativeValue::Double(f64::MIN_POSITIVE * f64::EPSILON)), "5E-324");
        assert_eq!(literal(NativeValue::Double(0.1)), "0.1");
        assert_eq!(literal(NativeValue::Float(0.1)), "0.1");
    }

    #[test]
    fn non_finite_floats_use_cql_spellings() {
        assert_eq!(literal(NativeValue::Double(f64::NAN)), "NaN");
        assert_eq!(literal(NativeValue::Float(f32::NEG_INFINITY)), "-Infinity");
    }

    #[test]
    fn decimals_keep_their_scale() {
        assert_eq!(literal(NativeValue::Decimal(Decimal::parse("10.00").unwrap())), "10.00");
        assert_eq!(
            literal(NativeValue::Decimal(Decimal::new(BigInt::from(5), -2))),
            "5E+2"
        );
    }

    #[test]
    fn text_is_quoted_and_escaped() {
        assert_eq!(literal(NativeValue::Text("it's".to_string())), "'it''s'");
        assert_eq!(literal(NativeValue::Ascii(String::new())), "''");
        assert_eq!(literal(NativeValue::Duration(Duration::ZERO)), "'0s'");
    }

    #[test]
    fn blobs_are_lower_case_hex() {
        assert_eq!(literal(NativeValue::Blob(vec![])), "0x");
        assert_eq!(literal(NativeValue::Blob(vec![0xAB, 0x01])), "0xab01");
    }

    #[test]
    fn booleans_are_bare() {
        assert_eq!(literal(NativeValue::Boolean(true)), "true");
        assert_eq!(literal(NativeValue::Boolean(false)), "false");
    }
}
