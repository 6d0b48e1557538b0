//! Set command - writes a JSON value at a key path.

use anyvalue::{Codec, Value};

use crate::cli::SetArgs;

/// Run the set command
pub fn run(
    args: &SetArgs,
    codec: &Codec,
    mut document: Value,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = codec.from_json_str(&args.value)?;
    tracing::debug!(path = %args.path, kind = value.type_name(), "writing value");

    document.set_path(args.path.as_str(), value)?;

    let output = if args.pretty {
        codec.to_json_string_pretty(&document)?
    } else {
        codec.to_json_string(&document)?
    };
    println!("{output}");
    Ok(())
}
