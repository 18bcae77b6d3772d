//! `json2tm` command line.
//!
//! Converts JSON files to TextMate plist files next to them.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{CommandFactory, Parser};
use json2tm::types::constants::DEFAULT_EXTENSION;
use json2tm::{convert_all, ConvertOptions, FileOptions, ScalarStyle};

#[derive(Parser)]
#[command(name = "json2tm")]
#[command(about = "Convert JSON files to TextMate compliant XML", long_about = None)]
#[command(version)]
struct Cli {
    /// Add a generated UUID to the json data
    #[arg(short, long)]
    uuid: bool,

    /// Override existing files
    #[arg(short, long = "override")]
    override_existing: bool,

    /// Change the extension of the generated files
    #[arg(
        short,
        long = "ext",
        value_name = "EXT",
        default_value = DEFAULT_EXTENSION,
        value_parser = NonEmptyStringValueParser::new()
    )]
    extension: String,

    /// Write true/false/null as True/False/None
    #[arg(long)]
    legacy_scalars: bool,

    /// JSON files to convert
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn file_options(&self) -> FileOptions {
        FileOptions {
            extension: self.extension.clone(),
            override_existing: self.override_existing,
            convert: ConvertOptions {
                uuid: self.uuid.into(),
                scalar_style: if self.legacy_scalars {
                    ScalarStyle::Legacy
                } else {
                    ScalarStyle::Canonical
                },
                ..ConvertOptions::default()
            },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.files.is_empty() {
        // Nothing to convert is not an error
        if let Err(e) = Cli::command().print_help() {
            log::warn!("failed to print help: {}", e);
        }
        return;
    }

    let report = convert_all(&cli.files, &cli.file_options());
    for (path, error) in &report.failed {
        println!("{}: {}", path.display(), error);
    }
    log::debug!(
        "converted {} of {} files",
        report.converted.len(),
        report.converted.len() + report.failed.len()
    );
}
