use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Write the generated stylesheet to its output path, creating parent
/// directories as needed.
///
/// Any failure is an [`AppError::Output`]; the caller treats it as fatal
/// and exits non-zero, since a build without its stylesheet is broken.
pub fn write_stylesheet(path: &Path, css: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Output(format!(
                    "failed to create output directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }
    }

    fs::write(path, css).map_err(|e| {
        AppError::Output(format!(
            "failed to write stylesheet to '{}': {e}",
            path.display()
        ))
    })?;

    log::info!("Stylesheet written to {}", path.display());
    Ok(())
}
