//! Filesystem infrastructure: implements `JarLocator`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::application::ports::JarLocator;
use crate::domain::InstallerError;
use crate::domain::installer::{INSTALLER_JAR_PREFIX, INSTALLER_LIB_DIR, pick_installer_jar};

/// Searches `<install>/tools/lib` recursively for the installer jar.
///
/// Directory symlinks are not descended into, so a link pointing back up the
/// tree is not walked. Symlinks to files are candidates like regular files.
pub struct FsJarLocator;

impl JarLocator for FsJarLocator {
    fn locate(&self, install_path: &Path) -> Result<PathBuf> {
        if !install_path.exists() {
            return Err(InstallerError::InvalidInstallDir {
                path: install_path.display().to_string(),
            }
            .into());
        }
        let mut lib_dir = install_path.to_path_buf();
        lib_dir.extend(INSTALLER_LIB_DIR);

        let files = if lib_dir.is_dir() {
            collect_files(&lib_dir)?
        } else {
            Vec::new()
        };
        let jar = pick_installer_jar(files).ok_or_else(|| InstallerError::JarNotFound {
            dir: lib_dir.display().to_string(),
            pattern: INSTALLER_JAR_PREFIX.to_string(),
        })?;
        tracing::debug!(jar = %jar.display(), "located installer jar");
        Ok(jar)
    }
}

/// Collect every file under `dir`, recursively, without following directory
/// links.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.with_context(|| format!("reading directory {}", dir.display()))?;
        let file_type = entry.file_type();
        if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
