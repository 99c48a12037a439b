/// Helpers shared by the batch driver and the per-icon pipeline.
use crate::constants::{ICON_FILE_EXTENSION, ICON_FILE_PREFIX, PROGRESS_SPINNER_TEMPLATE};
use crate::error::{IconError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the icon with the given 1-based index, e.g. `icon-3.png`.
pub fn icon_file_name(index: u32) -> String {
    format!("{}{}.{}", ICON_FILE_PREFIX, index, ICON_FILE_EXTENSION)
}

/// Input and output paths for one icon index.
pub fn icon_paths(input_dir: &Path, output_dir: &Path, index: u32) -> (PathBuf, PathBuf) {
    let name = icon_file_name(index);
    (input_dir.join(&name), output_dir.join(name))
}

/// Create the output directory and its parents. Succeeds if it already exists.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| IconError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a spinner for slow steps. Hidden in quiet mode.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
