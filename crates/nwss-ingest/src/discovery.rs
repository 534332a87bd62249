//! Resolving command-line inputs to CSV files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// List the `.csv` files directly inside `dir`, sorted by file name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("read directory: {}", dir.display()))?
            .path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Expand files and directories into the CSV files to read, in argument
/// order. Directories contribute their CSV files sorted by name.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(list_csv_files(path)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            bail!("input not found: {}", path.display());
        }
    }
    Ok(files)
}
