use std::io::Read;

use anyvalue::{Codec, Value};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("anyvalue=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let codec = cli.codec.codec();
    let document = read_document(&cli, &codec)?;

    match &cli.command {
        Commands::Get(args) => commands::get::run(args, &codec, &document),
        Commands::Set(args) => commands::set::run(args, &codec, document),
        Commands::Fmt(args) => commands::fmt::run(args, &codec, &document),
        Commands::Bytes(args) => commands::bytes::run(args, &document),
        Commands::Show(args) => commands::show::run(args, &document),
    }
}

/// Reads and decodes the input document from `--input` or stdin
fn read_document(cli: &Cli, codec: &Codec) -> Result<Value, Box<dyn std::error::Error>> {
    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let document = codec.from_json_str(&text)?;
    tracing::debug!(
        kind = document.type_name(),
        len = document.len(),
        "decoded input document"
    );
    Ok(document)
}
