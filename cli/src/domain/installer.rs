//! Installer artifact naming.

use std::path::{Path, PathBuf};

/// File-name prefix of the service installer jar.
pub const INSTALLER_JAR_PREFIX: &str = "clarify-service-installer-";

/// Directory, relative to the install path, that holds the installer jar.
pub const INSTALLER_LIB_DIR: [&str; 2] = ["tools", "lib"];

/// `true` if `path`'s file name carries the installer prefix.
#[must_use]
pub fn is_installer_jar(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(INSTALLER_JAR_PREFIX))
}

/// Choose the installer jar among directory entries.
///
/// When several match, the lexicographically last path wins so the choice
/// does not depend on directory enumeration order.
#[must_use]
pub fn pick_installer_jar(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().filter(|p| is_installer_jar(p)).max()
}
