use std::{
    fs::{self, File},
    io::{BufReader, Write},
    path::Path,
};

use log::debug;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::FlattenError;

/// Load and parse the editor export at `path`.
pub fn read_document(path: &Path) -> Result<JsonValue, FlattenError> {
    if !path.exists() {
        return Err(FlattenError::InputNotFound(path.to_path_buf()));
    }
    debug!("reading {}", path.display());
    let document = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Ok(document)
}

/// Serialize `value` to `path`, creating parent directories as needed.
pub fn write_summary<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), FlattenError> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');

    // ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    debug!("wrote {} bytes to {}", json.len(), path.display());

    Ok(())
}
