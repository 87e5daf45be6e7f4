use crate::{cli::ReadArgs, error::CliError};
use cqlcodec_core::{codec::Codec, value::ExternalValue};

/// Read a literal back and print the decoded client value as JSON.
pub fn run(codec: &Codec, args: &ReadArgs) -> Result<String, CliError> {
    let ty = Codec::resolve_definition(&args.column_type)?;
    let external = codec
        .read_literal(ty, &args.literal)?
        .map_or(ExternalValue::Null, |native| codec.decode(&native));

    Ok(serde_json::Value::from(external).to_string())
}
