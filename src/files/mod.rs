//! Reading JSON files and writing the converted plist next to them.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::converter::{convert_with_options, ConvertOptions};
use crate::error::{Error, Result};
use crate::types::constants::DEFAULT_EXTENSION;

pub use paths::output_path;

/// Options for converting files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOptions {
    /// Extension of the generated files, without the leading dot.
    pub extension: String,
    /// Replace output files that already exist.
    pub override_existing: bool,
    pub convert: ConvertOptions,
}

impl Default for FileOptions {
    fn default() -> Self {
        FileOptions {
            extension: DEFAULT_EXTENSION.to_string(),
            override_existing: false,
            convert: ConvertOptions::default(),
        }
    }
}

/// Convert the JSON file at `path` and write the result next to it.
///
/// Returns the path that was written. The input file is never modified.
pub fn convert_file(path: impl AsRef<Path>, options: &FileOptions) -> Result<PathBuf> {
    let path = path.as_ref();
    let json_text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let xml = convert_with_options(&json_text, &options.convert)?;

    let output = output_path(path, &options.extension);
    debug!("{} -> {}", path.display(), output.display());
    if output == path {
        return Err(Error::SameFile(output));
    }
    if output.exists() && !options.override_existing {
        return Err(Error::FileExists(output));
    }

    fs::write(&output, xml).map_err(|e| Error::io(&output, e))?;
    info!("wrote {}", output.display());
    Ok(output)
}

/// Outcome of converting several files.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(input, output)` pairs that were written.
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// Inputs that failed, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
}

/// Convert every path in order. A failure is recorded and does not stop the batch.
pub fn convert_all<I, P>(paths: I, options: &FileOptions) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        match convert_file(path, options) {
            Ok(output) => report.converted.push((path.to_path_buf(), output)),
            Err(e) => report.failed.push((path.to_path_buf(), e)),
        }
    }
    report
}
