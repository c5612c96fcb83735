//! Discovery of the Java files to check.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// Expands `paths` into a list of Java files.
///
/// Files are taken as given. Directories are walked recursively for `.java`
/// files in file name order, so the list is the same on every run.
pub(crate) fn collect_java_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && is_java_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            bail!("path does not exist: {}", path.display());
        }
    }

    Ok(files)
}

fn is_java_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "java")
}
