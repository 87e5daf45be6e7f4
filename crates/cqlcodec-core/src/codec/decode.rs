//! Native value → external value, as returned to clients in result rows.

use super::format::canonical_text;
use crate::value::{ExternalValue, NativeValue};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use time::UtcOffset;

/// Decode a stored value for a client. Small integers, floats and booleans
/// stay native JSON values; everything else, including 64-bit and
/// arbitrary-precision numbers, travels as canonical text.
pub(crate) fn decode(value: &NativeValue, offset: UtcOffset) -> ExternalValue {
    match value {
        NativeValue::Boolean(v) => ExternalValue::Boolean(*v),
        NativeValue::Tinyint(v) => ExternalValue::Integer(i64::from(*v)),
        NativeValue::Smallint(v) => ExternalValue::Integer(i64::from(*v)),
        NativeValue::Int(v) => ExternalValue::Integer(i64::from(*v)),
        NativeValue::Float(v) => ExternalValue::Float(widen_float(*v)),
        NativeValue::Double(v) => ExternalValue::Float(*v),
        NativeValue::Blob(bytes) => ExternalValue::String(STANDARD.encode(bytes)),
        other => ExternalValue::String(canonical_text(other, offset).into_owned()),
    }
}

// The f64 nearest the shortest decimal of `v`, so `1.1234f32` decodes to
// `1.1234` rather than its exact binary expansion.
fn widen_float(v: f32) -> f64 {
    v.to_string().parse().unwrap_or_else(|_| f64::from(v))
}
