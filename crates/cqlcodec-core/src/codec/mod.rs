//! Codec dispatcher: routes every conversion through an exhaustive match
//! on the column type.

mod decode;
mod format;
mod parse;
mod read;


use crate::{
    descriptor::TypeDescriptor,
    error::CodecError,
    value::{ExternalValue, NativeValue, QueryLiteral},
};
use cqlcodec_config::CodecConfig;
use cqlcodec_primitives::ColumnType;

///
/// Codec
///
/// Immutable after construction; cheap to clone and share across threads.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    ///
    /// WRITE PATH
    ///

    /// Parse an external value. `Null` is valid for every type and yields `None`.
    pub fn parse(
        &self,
        ty: ColumnType,
        value: &ExternalValue,
    ) -> Result<Option<NativeValue>, CodecError> {
        if value.is_null() {
            return Ok(None);
        }

        parse::parse(ty, value).map(Some).inspect_err(|err| {
            tracing::debug!(
                column_type = %ty,
                kind = %err.kind,
                message = %err.message,
                "rejected external value"
            );
        })
    }

    /// Format a native value as a query literal. Total.
    #[must_use]
    pub fn format(&self, value: &NativeValue) -> QueryLiteral {
        let literal = format::format(value, self.config.timestamp.offset);
        tracing::trace!(column_type = %value.column_type(), literal = %literal, "emitted literal");

        literal
    }

    /// Format a value destined for a column of type `ty`.
    pub fn format_column(
        &self,
        ty: ColumnType,
        value: &NativeValue,
    ) -> Result<QueryLiteral, CodecError> {
        Self::check_fits(ty, value)?;

        Ok(self.format(value))
    }

    /// External value straight to a query literal; `Null` becomes `null`.
    /// Either the whole literal is produced or an error is returned.
    pub fn to_literal(
        &self,
        ty: ColumnType,
        value: &ExternalValue,
    ) -> Result<QueryLiteral, CodecError> {
        match self.parse(ty, value)? {
            Some(native) => Ok(self.format(&native)),
            None => Ok(QueryLiteral::NULL),
        }
    }

    ///
    /// READ PATH
    ///

    /// Decode a stored value for a client. Total.
    #[must_use]
    pub fn decode(&self, value: &NativeValue) -> ExternalValue {
        decode::decode(value, self.config.timestamp.offset)
    }

    /// Decode a result cell of a column of type `ty`; a missing cell is `Null`.
    pub fn decode_column(
        &self,
        ty: ColumnType,
        value: Option<&NativeValue>,
    ) -> Result<ExternalValue, CodecError> {
        match value {
            Some(value) => {
                Self::check_fits(ty, value)?;
                Ok(self.decode(value))
            }
            None => Ok(ExternalValue::Null),
        }
    }

    /// Read a query literal back into a native value; `null` yields `None`.
    pub fn read_literal(
        &self,
        ty: ColumnType,
        literal: &str,
    ) -> Result<Option<NativeValue>, CodecError> {
        if literal == QueryLiteral::NULL.as_str() {
            return Ok(None);
        }

        read::read_literal(ty, literal).map(Some)
    }

    ///
    /// TYPE RESOLUTION
    ///

    /// Column type of a descriptor; only scalars are convertible.
    pub fn resolve(descriptor: &TypeDescriptor) -> Result<ColumnType, CodecError> {
        descriptor
            .as_scalar()
            .ok_or_else(|| CodecError::unsupported(descriptor))
    }

    pub fn resolve_definition(definition: &str) -> Result<ColumnType, CodecError> {
        Self::resolve(&TypeDescriptor::parse(definition)?)
    }

    /// Resolve a CQL type definition, then parse `value` against it.
    pub fn parse_definition(
        &self,
        definition: &str,
        value: &ExternalValue,
    ) -> Result<Option<NativeValue>, CodecError> {
        let ty = Self::resolve_definition(definition)?;

        self.parse(ty, value)
    }

    fn check_fits(ty: ColumnType, value: &NativeValue) -> Result<(), CodecError> {
        if value.fits(ty) {
            return Ok(());
        }

        let found = value.column_type();
        tracing::error!(expected = %ty, found = %found, "column type and value disagree");

        Err(CodecError::invariant(format!(
            "{ty} column received a {found} value"
        )))
    }
}
