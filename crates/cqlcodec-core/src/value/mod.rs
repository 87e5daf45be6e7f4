mod external;
mod literal;

#[cfg(test)]
mod tests;

use crate::types::{Date, Decimal, Duration, Time, TimeUuid, Timestamp};
use cqlcodec_primitives::{ColumnType, column_type_registry};
use num_bigint::BigInt;
use std::net::IpAddr;
use uuid::Uuid;

// re-exports
pub use external::ExternalValue;
pub use literal::{Lit, QueryLiteral};
pub(crate) use literal::unquote;

///
/// NativeValue
///
/// Strongly typed cell value, one variant per column type. The variant
/// alone determines the column type; there is no null variant because a
/// missing cell is `Option::None` at the codec boundary.
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    Ascii(String),
    Bigint(i64),
    Blob(Vec<u8>),
    Boolean(bool),
    Date(Date),
    Decimal(Decimal),
    Double(f64),
    Duration(Duration),
    Float(f32),
    Inet(IpAddr),
    Int(i32),
    Smallint(i16),
    Text(String),
    Time(Time),
    Timestamp(Timestamp),
    Tinyint(i8),
    Timeuuid(TimeUuid),
    Uuid(Uuid),
    Varchar(String),
    Varint(BigInt),
}

// Variant names mirror the registry, so the mapping is generated from it.
macro_rules! native_column_type_from_registry {
    ( @args $value:expr; @entries $( ($ty:ident, $($meta:tt)*) ),* $(,)? ) => {
        match $value {
            $( NativeValue::$ty(_) => ColumnType::$ty, )*
        }
    };
}

impl NativeValue {
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        column_type_registry!(native_column_type_from_registry, self)
    }

    /// Whether this value may be stored in a column of type `ty`.
    #[must_use]
    pub fn fits(&self, ty: ColumnType) -> bool {
        self.column_type() == ty
    }
}

macro_rules! impl_from_native {
    ( $( $variant:ident => $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for NativeValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

// Text-backed variants are ambiguous, so `String` maps to `Text` only.
impl_from_native! {
    Bigint => i64,
    Blob => Vec<u8>,
    Boolean => bool,
    Date => Date,
    Decimal => Decimal,
    Double => f64,
    Duration => Duration,
    Float => f32,
    Inet => IpAddr,
    Int => i32,
    Smallint => i16,
    Text => String,
    Time => Time,
    Timestamp => Timestamp,
    Tinyint => i8,
    Timeuuid => TimeUuid,
    Uuid => Uuid,
    Varint => BigInt,
}
