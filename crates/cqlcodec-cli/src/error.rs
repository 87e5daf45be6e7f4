use cqlcodec_config::ConfigError;
use cqlcodec_core::error::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid JSON value: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Codec(#[from] CodecError),
}

impl CliError {
    /// Line printed to stderr. Client input errors use the validation form.
    pub fn report(&self) -> String {
        match self {
            Self::Codec(err) => err
                .to_validation_message()
                .unwrap_or_else(|| format!("Error: {err}")),
            other => format!("Error: {other}"),
        }
    }
}
