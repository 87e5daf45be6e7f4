use cqlcodec_primitives::ALL_COLUMN_TYPES;
use std::fmt::Write as _;

/// Registry table, one column type per line.
pub fn run() -> String {
    let mut out = format!(
        "{:<10} {:<10} {:<11} {:<6} {}",
        "TYPE", "GRAPHQL", "FAMILY", "WIDTH", "EXTERNAL"
    );

    for ty in ALL_COLUMN_TYPES {
        let width = ty
            .fixed_width()
            .map_or_else(|| "-".to_string(), |w| w.to_string());
        let _ = write!(
            out,
            "\n{:<10} {:<10} {:<11} {:<6} {}",
            ty.cql_name(),
            ty.graphql_scalar(),
            ty.family().label(),
            width,
            ty.external_kind().label(),
        );
    }

    out
}
