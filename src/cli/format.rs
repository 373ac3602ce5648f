//! Output formatting for CLI display.

use serde::Serialize;

/// Print `value` to stdout as pretty JSON.
pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json = to_json(value)?;
    println!("{json}");
    Ok(())
}

pub(super) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to format output: {e}"))
}
