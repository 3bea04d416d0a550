use clap::Parser;
use std::path::PathBuf;

use crate::processor::FormatPolicy;

/// Generate a C++ header of enum classes and structs from a JSON type list.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .json config describing `type_list` and `output_header_file`
    #[arg(default_value = "config.json")]
    pub config: PathBuf,

    /// Fail on type entries whose `format` is not recognised instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "log_level")]
    pub quiet: bool,

    /// Log filter directive, e.g. `debug` or `cpp_typegen=trace`
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn format_policy(&self) -> FormatPolicy {
        if self.strict {
            FormatPolicy::Strict
        } else {
            FormatPolicy::Permissive
        }
    }

    pub fn log_filter(&self) -> &str {
        if self.quiet { "warn" } else { &self.log_level }
    }
}
