//! Error types for header generation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = GenError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GenError {
    /// The configuration document could not be opened.
    #[error("failed to open config file {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration document is not well-formed.
    #[error("parser error in {} line {line} col {column} : {message}", path.display())]
    InputFormat {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A `type_list` item does not have the shape the registry expects.
    #[error("type_list[{index}]{}: {detail}", type_name.as_deref().map(|n| format!(" ({n})")).unwrap_or_default())]
    Shape {
        index: usize,
        type_name: Option<String>,
        detail: String,
    },

    /// Only raised in strict mode; permissive runs skip the entry.
    #[error("type `{type_name}` has unrecognized format `{format}`")]
    UnrecognizedFormat { type_name: String, format: String },

    /// Formatting a type into the emit buffers failed.
    #[error("failed to render generated code: {0}")]
    Render(#[from] fmt::Error),

    #[error("cannot write output header {}: {source}", path.display())]
    MissingOutputTarget {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    pub(crate) fn shape(index: usize, type_name: Option<&str>, detail: impl Into<String>) -> Self {
        Self::Shape {
            index,
            type_name: type_name.map(str::to_owned),
            detail: detail.into(),
        }
    }
}
