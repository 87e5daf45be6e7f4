use clap::{Args, Parser, Subcommand};
use cqlcodec_config::{CodecConfig, ConfigError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cqlcodec", version, about = "Convert scalar column values between JSON, native and CQL literal form")]
pub struct Cli {
    /// Path to a TOML codec config file
    #[arg(long, global = true, env = "CQLCODEC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config from `--config`, or the defaults when none is given.
    pub fn load_config(&self) -> Result<CodecConfig, ConfigError> {
        self.config
            .as_ref()
            .map_or_else(|| Ok(CodecConfig::default()), CodecConfig::load)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the supported column types
    Types,

    /// Convert a JSON value into a query literal
    Literal(LiteralArgs),

    /// Read a query literal back and print it as JSON
    Read(ReadArgs),

    /// Resolve a CQL type definition to a column type
    Resolve(ResolveArgs),
}

#[derive(Args, Clone, Debug)]
pub struct LiteralArgs {
    /// Column type definition, e.g. `bigint` or `frozen<uuid>`
    pub column_type: String,

    /// JSON value, e.g. `"-1"`, `42` or `null`
    pub value: String,
}

#[derive(Args, Clone, Debug)]
pub struct ReadArgs {
    /// Column type definition
    pub column_type: String,

    /// Query literal, e.g. `'2020-01-03T10:15:31.123+00:00'`
    pub literal: String,
}

#[derive(Args, Clone, Debug)]
pub struct ResolveArgs {
    /// CQL type definition, e.g. `map<text, frozen<list<int>>>`
    pub definition: String,
}
