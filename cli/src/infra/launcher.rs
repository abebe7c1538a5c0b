//! Infrastructure implementation of the `InstallerLauncher` port.
//!
//! `TokioInstallerLauncher` spawns the installer with inherited stdio and
//! waits for it. No timeout: the installer runs until it finishes.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::InstallerLauncher;

/// Production `InstallerLauncher`: passes arguments as a literal argv,
/// never through a shell.
pub struct TokioInstallerLauncher;

impl InstallerLauncher for TokioInstallerLauncher {
    async fn launch(&self, program: &Path, args: &[String]) -> Result<ExitStatus> {
        tracing::info!(program = %program.display(), args = args.len(), "spawning installer");
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {}", program.display()))
    }
}
