use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

use crate::command::CommandError;

/// Reads a JSON document from `path`, or from stdin when no path is given.
pub fn read_payload(path: Option<&Path>) -> Result<Value, CommandError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CommandError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(CommandError::ReadStdin)?;
            text
        }
    };
    Ok(serde_json::from_str(&text)?)
}
