use std::path::{Path, PathBuf};

/// Derive the output path for `input`: the last extension of the file name is
/// replaced by `extension`.
///
/// Only the file name is considered, so dots in directory names are left alone
/// and a leading dot (`.hidden`) is not treated as an extension.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}
