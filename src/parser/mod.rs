use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::model::ConfigDocument;

/// Read and parse the configuration document at `path`.
pub fn load(path: &Path) -> Result<ConfigDocument> {
    let json = fs::read_to_string(path).map_err(|source| GenError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("config loaded, size: {} bytes", json.len());

    load_from_json(&json, path)
}

/// Parse a configuration document from a JSON string.
///
/// `origin` only labels errors; nothing is read from it.
///
/// The document is expected to carry a top-level `type_list` array and an
/// `output_header_file` string. Malformed JSON and a missing top-level key
/// both come back as `InputFormat` with serde_json's line and column.
pub fn load_from_json(json: &str, origin: &Path) -> Result<ConfigDocument> {
    let doc: ConfigDocument = serde_json::from_str(json).map_err(|e| {
        let message = e.to_string();
        // serde_json appends " at line N column M"; we report those separately.
        let message = match message.rfind(" at line ") {
            Some(idx) if e.line() > 0 => message[..idx].to_string(),
            _ => message,
        };
        GenError::InputFormat {
            path: origin.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message,
        }
    })?;

    if doc.output_header_file.as_os_str().is_empty() {
        return Err(GenError::MissingOutputTarget {
            path: doc.output_header_file,
            source: io::Error::new(io::ErrorKind::InvalidInput, "`output_header_file` is empty"),
        });
    }

    tracing::debug!("found {} type_list entries", doc.type_list.len());
    Ok(doc)
}
