//! Fmt command - re-encodes the document.

use anyvalue::{Codec, Value};

use crate::cli::FmtArgs;

/// Run the fmt command
pub fn run(
    args: &FmtArgs,
    codec: &Codec,
    document: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = if args.pretty {
        codec.to_json_string_pretty(document)?
    } else {
        codec.to_json_string(document)?
    };
    println!("{output}");
    Ok(())
}
