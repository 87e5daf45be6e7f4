//! Query literal → native value.
//!
//! Accepts exactly what the formatter emits, so a literal can be checked
//! by reading it back.

use super::parse::parse;
use crate::{
    error::CodecError,
    value::{ExternalValue, NativeValue, unquote},
};
use cqlcodec_primitives::ColumnType;

/// Read a non-null literal of column type `ty`.
pub(crate) fn read_literal(ty: ColumnType, literal: &str) -> Result<NativeValue, CodecError> {
    if ty.is_quoted_literal() {
        let text = unquote(literal).ok_or_else(|| {
            CodecError::syntax(ty, format!("expected a quoted literal, got {literal}"))
        })?;

        return parse(ty, &ExternalValue::String(text));
    }

    match ty {
        ColumnType::Boolean => match literal {
            "true" => Ok(NativeValue::Boolean(true)),
            "false" => Ok(NativeValue::Boolean(false)),
            _ => Err(CodecError::syntax(
                ty,
                format!("expected true or false, got {literal}"),
            )),
        },
        ColumnType::Blob => read_hex(literal).map(NativeValue::Blob),
        ColumnType::Double => read_float::<f64>(ty, literal).map(NativeValue::Double),
        ColumnType::Float => read_float::<f32>(ty, literal).map(NativeValue::Float),
        _ => parse(ty, &ExternalValue::String(literal.to_string())),
    }
}

fn read_hex(literal: &str) -> Result<Vec<u8>, CodecError> {
    let ty = ColumnType::Blob;
    let invalid = || CodecError::syntax(ty, format!("expected 0x-prefixed hex, got {literal}"));

    let digits = literal.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        })
        .collect()
}

// Float literals are read at their own width so no digit is re-rounded.
fn read_float<F>(ty: ColumnType, literal: &str) -> Result<F, CodecError>
where
    F: std::str::FromStr + From<f32>,
{
    match literal {
        "NaN" => Ok(F::from(f32::NAN)),
        "Infinity" => Ok(F::from(f32::INFINITY)),
        "-Infinity" => Ok(F::from(f32::NEG_INFINITY)),
        _ if literal.bytes().any(|b| b.is_ascii_alphabetic() && b != b'E') => Err(
            CodecError::syntax(ty, format!("expected a float literal, got {literal}")),
        ),
        _ => literal
            .parse::<F>()
            .map_err(|_| CodecError::syntax(ty, format!("expected a float literal, got {literal}"))),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn hex_blobs_read_back() {
        assert_eq!(read_hex("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(read_hex("0x00ff10").unwrap(), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn broken_hex_is_rejected() {
        for s in ["", "ff", "0xf", "0xzz", "0x+f", "'0xff'"] {
            assert_eq!(read_hex(s).unwrap_err().kind, ErrorKind::Syntax, "{s:?}");
        }
    }

    #[test]
    fn float_literals_read_at_their_width() {
        assert_eq!(read_float::<f32>(ColumnType::Float, "3.4028235E38").unwrap(), f32::MAX);
        assert_eq!(read_float::<f64>(ColumnType::Double, "5E-324").unwrap(), 5e-324);
        assert!(read_float::<f64>(ColumnType::Double, "NaN").unwrap().is_nan());
        assert!(read_float::<f64>(ColumnType::Double, "inf").is_err());
        assert!(read_float::<f64>(ColumnType::Double, "'1.0'").is_err());
    }

    #[test]
    fn quoted_types_require_quotes() {
        let err = read_literal(ColumnType::Text, "abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(
            read_literal(ColumnType::Text, "'it''s'").unwrap(),
            NativeValue::Text("it's".to_string())
        );
    }

    #[test]
    fn unquoted_types_reject_quotes() {
        assert!(read_literal(ColumnType::Int, "'1'").is_err());
        assert!(read_literal(ColumnType::Boolean, "'true'").is_err());
        assert_eq!(read_literal(ColumnType::Int, "-7").unwrap(), NativeValue::Int(-7));
    }
}
