//! `clarify-launch launch`: plan the invocation and run the installer.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::TopologyStore;
use crate::application::services::invocation::{launch, plan_invocation};

/// Run the launch command.
///
/// The process exits with the installer's exit code.
///
/// # Errors
///
/// Returns an error if planning fails or the installer cannot be spawned.
/// No process is started when planning fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let topology = app.topology_store.load()?;
    let reporter = app.reporter();
    let plan = plan_invocation(
        &app.host_ports(),
        &app.jars,
        &topology,
        &app.plan_options(&reporter),
    )?;

    let status = launch(&app.launcher, &plan, &reporter).await?;
    Ok(ExitCode::from(exit_byte(status.code())))
}

/// Map a child exit code to ours. Signal deaths (no code) become 1.
fn exit_byte(code: Option<i32>) -> u8 {
    code.map_or(1, |c| u8::try_from(c).unwrap_or(1))
}
