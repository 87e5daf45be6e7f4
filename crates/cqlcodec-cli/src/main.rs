mod cli;
mod cmd;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use cqlcodec_core::codec::Codec;
use error::CliError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{}", err.report());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let codec = Codec::new(cli.load_config()?);

    match cli.command {
        Commands::Types => Ok(cmd::types::run()),
        Commands::Literal(args) => cmd::literal::run(&codec, &args),
        Commands::Read(args) => cmd::read::run(&codec, &args),
        Commands::Resolve(args) => cmd::resolve::run(&args),
    }
}
