//! `clarify-launch plan`: build the installer invocation without running it.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::TopologyStore;
use crate::application::services::invocation::plan_invocation;
use crate::output::json;

/// Run the plan command.
///
/// # Errors
///
/// Returns an error if any resolution, validation or jar lookup step fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let topology = app.topology_store.load()?;
    let reporter = app.reporter();
    let plan = plan_invocation(
        &app.host_ports(),
        &app.jars,
        &topology,
        &app.plan_options(&reporter),
    )?;

    if app.is_json() {
        println!("{}", json::to_pretty(&plan)?);
    } else {
        app.human().render_plan(&plan, app.topology_store.path());
    }
    Ok(ExitCode::SUCCESS)
}
