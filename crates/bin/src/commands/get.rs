//! Get command - prints the value at a key path as JSON.

use anyvalue::{Codec, Value};

use crate::cli::GetArgs;

/// Run the get command
pub fn run(
    args: &GetArgs,
    codec: &Codec,
    document: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = document
        .get_path(args.path.as_str())
        .ok_or_else(|| format!("no value at '{}'", args.path))?;

    println!("{}", codec.to_json_string(value)?);
    Ok(())
}
