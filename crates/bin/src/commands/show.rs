//! Show command - prints the debug rendering of a value.

use anyvalue::Value;

use crate::cli::ShowArgs;

/// Run the show command
pub fn run(args: &ShowArgs, document: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let value = match &args.path {
        Some(path) => document
            .get_path(path.as_str())
            .ok_or_else(|| format!("no value at '{path}'"))?,
        None => document,
    };

    println!("{value}");
    Ok(())
}
