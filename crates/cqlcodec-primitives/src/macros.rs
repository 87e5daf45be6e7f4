///
/// Column type registry
///
/// Single source of truth for scalar column metadata. Every expansion below
/// turns the table into an exhaustive `match`, so a new entry must be handled
/// by each consumer before the workspace compiles again.
///

// NOTE: Bigint, Varint and Decimal are Numeric by family but leave the codec
// as strings. Their values do not survive a trip through a JSON number.
#[macro_export]
macro_rules! column_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Ascii,
                Textual,
                fixed_width = None,
                external = String,
                quoted_literal = true,
                cql_name = "ascii",
                graphql_scalar = "Ascii"
            ),
            (
                Bigint,
                Numeric,
                fixed_width = Some(8),
                external = String,
                quoted_literal = false,
                cql_name = "bigint",
                graphql_scalar = "BigInt"
            ),
            (
                Blob,
                Binary,
                fixed_width = None,
                external = String,
                quoted_literal = false,
                cql_name = "blob",
                graphql_scalar = "Blob"
            ),
            (
                Boolean,
                Bool,
                fixed_width = Some(1),
                external = Boolean,
                quoted_literal = false,
                cql_name = "boolean",
                graphql_scalar = "Boolean"
            ),
            (
                Date,
                Temporal,
                fixed_width = Some(4),
                external = String,
                quoted_literal = true,
                cql_name = "date",
                graphql_scalar = "Date"
            ),
            (
                Decimal,
                Numeric,
                fixed_width = None,
                external = String,
                quoted_literal = false,
                cql_name = "decimal",
                graphql_scalar = "Decimal"
            ),
            (
                Double,
                Numeric,
                fixed_width = Some(8),
                external = Float,
                quoted_literal = false,
                cql_name = "double",
                graphql_scalar = "Float"
            ),
            (
                Duration,
                Temporal,
                fixed_width = None,
                external = String,
                quoted_literal = true,
                cql_name = "duration",
                graphql_scalar = "Duration"
            ),
            (
                Float,
                Numeric,
                fixed_width = Some(4),
                external = Float,
                quoted_literal = false,
                cql_name = "float",
                graphql_scalar = "Float32"
            ),
            (
                Inet,
                Identifier,
                fixed_width = None,
                external = String,
                quoted_literal = true,
                cql_name = "inet",
                graphql_scalar = "Inet"
            ),
            (
                Int,
                Numeric,
                fixed_width = Some(4),
                external = Integer,
                quoted_literal = false,
                cql_name = "int",
                graphql_scalar = "Int"
            ),
            (
                Smallint,
                Numeric,
                fixed_width = Some(2),
                external = Integer,
                quoted_literal = false,
                cql_name = "smallint",
                graphql_scalar = "SmallInt"
            ),
            (
                Text,
                Textual,
                fixed_width = None,
                external = String,
                quoted_literal = true,
                cql_name = "text",
                graphql_scalar = "String"
            ),
            (
                Time,
                Temporal,
                fixed_width = Some(8),
                external = String,
                quoted_literal = true,
                cql_name = "time",
                graphql_scalar = "Time"
            ),
            (
                Timestamp,
                Temporal,
                fixed_width = Some(8),
                external = String,
                quoted_literal = true,
                cql_name = "timestamp",
                graphql_scalar = "Timestamp"
            ),
            (
                Tinyint,
                Numeric,
                fixed_width = Some(1),
                external = Integer,
                quoted_literal = false,
                cql_name = "tinyint",
                graphql_scalar = "TinyInt"
            ),
            (
                Timeuuid,
                Identifier,
                fixed_width = Some(16),
                external = String,
                quoted_literal = true,
                cql_name = "timeuuid",
                graphql_scalar = "TimeUuid"
            ),
            (
                Uuid,
                Identifier,
                fixed_width = Some(16),
                external = String,
                quoted_literal = true,
                cql_name = "uuid",
                graphql_scalar = "Uuid"
            ),
            (
                Varchar,
                Textual,
                fixed_width = None,
                external = String,
                quoted_literal = true,
                cql_name = "varchar",
                graphql_scalar = "String"
            ),
            (
                Varint,
                Numeric,
                fixed_width = None,
                external = String,
                quoted_literal = false,
                cql_name = "varint",
                graphql_scalar = "Varint"
            ),
        }
    };
}

#[macro_export]
macro_rules! column_type_registry {
    ($macro:ident) => {
        $crate::column_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::column_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $column_type:expr; @entries $( ($ty:ident, $family:ident, fixed_width = $fixed_width:expr, external = $external:ident, quoted_literal = $quoted:expr, cql_name = $cql:literal, graphql_scalar = $gql:literal) ),* $(,)? ) => {
        match $column_type {
            $(
                $crate::ColumnType::$ty => $crate::TypeMetadata {
                    family: $crate::TypeFamily::$family,
                    fixed_width: $fixed_width,
                    external: $crate::ExternalKind::$external,
                    quoted_literal: $quoted,
                    cql_name: $cql,
                    graphql_scalar: $gql,
                },
            )*
        }
    };
}

macro_rules! all_types_from_registry {
    ( @entries $( ($ty:ident, $family:ident, fixed_width = $fixed_width:expr, external = $external:ident, quoted_literal = $quoted:expr, cql_name = $cql:literal, graphql_scalar = $gql:literal) ),* $(,)? ) => {
        [ $( $crate::ColumnType::$ty ),* ]
    };
}
