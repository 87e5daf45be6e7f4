//! Closed registry of the scalar column types understood by the codec.
#[macro_use]
mod macros;

use std::fmt::{self, Display};

///
/// ColumnType
///
/// Canonical scalar column type tag. Carries no state; every property lives
/// in the registry table.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ColumnType {
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Date,
    Decimal,
    Double,
    Duration,
    Float,
    Inet,
    Int,
    Smallint,
    Text,
    Time,
    Timestamp,
    Tinyint,
    Timeuuid,
    Uuid,
    Varchar,
    Varint,
}

impl ColumnType {
    /// Return the full metadata descriptor for one column type.
    #[must_use]
    pub const fn metadata(self) -> TypeMetadata {
        column_type_registry!(metadata_from_registry, self)
    }

    /// Return the coarse family of this column type.
    #[must_use]
    pub const fn family(self) -> TypeFamily {
        self.metadata().family
    }

    /// Return the storage width in bytes, or `None` for variable-width types.
    #[must_use]
    pub const fn fixed_width(self) -> Option<u8> {
        self.metadata().fixed_width
    }

    /// Return the external kind emitted when a stored value is decoded.
    #[must_use]
    pub const fn external_kind(self) -> ExternalKind {
        self.metadata().external
    }

    /// Return whether query literals of this type are single-quoted.
    #[must_use]
    pub const fn is_quoted_literal(self) -> bool {
        self.metadata().quoted_literal
    }

    /// Lower-case CQL type name.
    #[must_use]
    pub const fn cql_name(self) -> &'static str {
        self.metadata().cql_name
    }

    /// GraphQL scalar exposed for columns of this type.
    #[must_use]
    pub const fn graphql_scalar(self) -> &'static str {
        self.metadata().graphql_scalar
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self.family(), TypeFamily::Numeric)
    }

    #[must_use]
    pub const fn is_fixed_width(self) -> bool {
        self.fixed_width().is_some()
    }

    /// Look up a column type by its CQL name, ignoring ASCII case.
    #[must_use]
    pub fn from_cql_name(name: &str) -> Option<Self> {
        ALL_COLUMN_TYPES
            .iter()
            .copied()
            .find(|ty| ty.cql_name().eq_ignore_ascii_case(name))
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cql_name())
    }
}

///
/// TypeMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeMetadata {
    pub family: TypeFamily,
    pub fixed_width: Option<u8>,
    pub external: ExternalKind,
    pub quoted_literal: bool,
    pub cql_name: &'static str,
    pub graphql_scalar: &'static str,
}

///
/// TypeFamily
///
/// Coarse classification used for diagnostics and listings.
/// It MUST NOT be used to decide how a value is parsed or rendered.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeFamily {
    Numeric,
    Textual,
    Temporal,
    Binary,
    Identifier,
    Bool,
}

impl TypeFamily {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Textual => "textual",
            Self::Temporal => "temporal",
            Self::Binary => "binary",
            Self::Identifier => "identifier",
            Self::Bool => "bool",
        }
    }
}

///
/// ExternalKind
///
/// Shape of the external value produced for a column type on the read path.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExternalKind {
    Boolean,
    Integer,
    Float,
    String,
}

impl ExternalKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

/// Ordered list of all column types in registry order.
pub const ALL_COLUMN_TYPES: [ColumnType; 20] = column_type_registry!(all_types_from_registry);

///
/// TESTS
///
