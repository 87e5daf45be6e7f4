use crate::{cli::LiteralArgs, error::CliError};
use cqlcodec_core::{codec::Codec, value::ExternalValue};

pub fn run(codec: &Codec, args: &LiteralArgs) -> Result<String, CliError> {
    let ty = Codec::resolve_definition(&args.column_type)?;
    let json: serde_json::Value = serde_json::from_str(&args.value)?;
    let value = ExternalValue::try_from(json)?;

    Ok(codec.to_literal(ty, &value)?.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(column_type: &str, value: &str) -> Result<String, CliError> {
        let args = LiteralArgs {
            column_type: column_type.to_string(),
            value: value.to_string(),
        };
        run(&Codec::default(), &args)
    }

    #[test]
    fn json_values_become_literals() {
        assert_eq!(literal("bigint", "\"-1\"").unwrap(), "-1");
        assert_eq!(literal("text", "\"it's\"").unwrap(), "'it''s'");
        assert_eq!(literal("blob", "\"/w==\"").unwrap(), "0xff");
        assert_eq!(literal("frozen<int>", "null").unwrap(), "null");
    }

    #[test]
    fn validation_errors_are_reported_as_such() {
        let err = literal("tinyint", "128").unwrap_err();
        assert_eq!(
            err.report(),
            "Validation error: tinyint value out of range: 128 is outside [-128, 127]"
        );
    }

    #[test]
    fn bad_json_is_not_a_validation_error() {
        let err = literal("int", "{").unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
        assert!(err.report().starts_with("Error: invalid JSON value"));
    }
}
