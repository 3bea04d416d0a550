pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub use error::GenError;
pub use processor::FormatPolicy;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.log_filter());

    let target = generate(&args.config, args.format_policy())
        .with_context(|| format!("Generating header from {}", args.config.display()))?;
    tracing::debug!("done: {}", target.display());

    Ok(())
}

/// Load `config`, emit every type and write the header named by its
/// `output_header_file`. Returns the path written.
///
/// Nothing is written unless every stage before the write succeeds.
pub fn generate(config: &Path, policy: FormatPolicy) -> error::Result<PathBuf> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let doc = parser::load(config)?;

    // 2. ── Emit ───────────────────────────────────────────────────────
    let ctx = processor::run(&doc, policy)?;

    // 3. ── Write ──────────────────────────────────────────────────────
    let meta = writer::c::HeaderMeta::now(&doc.output_header_file, config);
    writer::c::emit(&ctx, &meta)?;

    Ok(doc.output_header_file)
}

fn init_tracing(filter: &str) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
