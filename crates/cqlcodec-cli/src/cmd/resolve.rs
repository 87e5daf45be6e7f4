use crate::{cli::ResolveArgs, error::CliError};
use cqlcodec_core::{codec::Codec, descriptor::TypeDescriptor};

/// Print the normalized definition and the column type it maps to.
pub fn run(args: &ResolveArgs) -> Result<String, CliError> {
    let descriptor = TypeDescriptor::parse(&args.definition)?;
    let ty = Codec::resolve(&descriptor)?;

    Ok(format!(
        "{descriptor} => {} (graphql: {})",
        ty.cql_name(),
        ty.graphql_scalar()
    ))
}
