//! Assemble the final C++ header and write it to disk.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tempfile::NamedTempFile;

use crate::error::{GenError, Result};
use crate::model::EmitContext;
use crate::processor::BANNER;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SYSTEM_INCLUDES: [&str; 4] = ["string", "cstring", "cstdint", "iostream"];

/// Provenance recorded in the header comment.
#[derive(Debug, Clone)]
pub struct HeaderMeta {
    /// Where the header will be written; only its file name matters here.
    pub target: PathBuf,
    /// Configuration document the types came from.
    pub source: PathBuf,
    pub generated_at: NaiveDateTime,
}

impl HeaderMeta {
    pub fn now(target: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
            generated_at: chrono::Local::now().naive_local(),
        }
    }
}

/// Include-guard token for `target`: its last `/`-separated component with
/// every `.` and `\` replaced by `_`.
///
/// Only `/` separates components, on every host, so a `\` in the name
/// survives into the token as `_`.
pub fn guard_token(target: &Path) -> String {
    let raw = target.to_string_lossy();
    let base = raw.rsplit('/').next().unwrap_or_default();
    base.replace(['.', '\\'], "_")
}

/// Wrap the emitted buffers into a complete header.
pub fn assemble(ctx: &EmitContext, meta: &HeaderMeta) -> String {
    let guard = format!("__{}__", guard_token(&meta.target));
    let mut out = String::with_capacity(ctx.prototypes.len() + ctx.definitions.len() + 1024);

    let mut line = |s: &str| {
        out.push_str(s);
        out.push('\n');
    };

    line("// auto generated file, edits may be overwritten.");
    line(&format!(
        "// generated from source json file {} at {}",
        meta.source.display(),
        meta.generated_at.format(TIMESTAMP_FORMAT)
    ));
    line(&format!("#ifndef {guard}"));
    line(&format!("#define {guard}"));
    line("");
    line("// standard include files..");
    for header in SYSTEM_INCLUDES {
        line(&format!("#include <{header}>"));
    }
    line("");

    line(BANNER);
    line("// Prototypes for defined datatypes and helper functions");
    line(BANNER);
    line(&ctx.prototypes);

    line(BANNER);
    line("// definitions for all data types and helper functions");
    line(BANNER);
    line(&ctx.definitions);
    line("");

    line("#endif  // end include guard");
    out
}

/// Write `contents` to `target` in one step.
///
/// The text goes to a uniquely named temp file in the target's directory and
/// is persisted over the target. The temp file is removed on any failure, so
/// neither a truncated header nor a stray temp file is left behind.
pub fn write_atomic(target: &Path, contents: &str) -> Result<()> {
    let fail = |source: io::Error| GenError::MissingOutputTarget {
        path: target.to_path_buf(),
        source,
    };

    if target.file_name().is_none() {
        return Err(fail(io::Error::new(io::ErrorKind::InvalidInput, "no file name")));
    }
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tmp.write_all(contents.as_bytes()).map_err(fail)?;
    tmp.persist(target).map_err(|e| fail(e.error))?;
    Ok(())
}

/// Assemble and write the header described by `meta`.
pub fn emit(ctx: &EmitContext, meta: &HeaderMeta) -> Result<()> {
    let text = assemble(ctx, meta);
    write_atomic(&meta.target, &text)?;
    tracing::info!("wrote {} ({} bytes)", meta.target.display(), text.len());
    Ok(())
}
