//! Bytes command - decodes a text or bytes value and prints it as hex.

use anyvalue::{
    Value,
    strategy::{BytesDecodingStrategy, bytes::encode_hex},
};

use crate::cli::BytesArgs;

/// Run the bytes command
pub fn run(args: &BytesArgs, document: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let value = document
        .get_path(args.path.as_str())
        .ok_or_else(|| format!("no value at '{}'", args.path))?;

    let strategy = BytesDecodingStrategy::from(args.decoding);
    let bytes = strategy.decode(value)?;

    println!("{}", encode_hex(&bytes, false));
    Ok(())
}
