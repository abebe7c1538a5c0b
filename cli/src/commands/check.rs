//! `clarify-launch check`: resolve this host and verify its interface binding.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::TopologyStore;
use crate::application::services::invocation::check_node;
use crate::output::json;

/// Run the check command.
///
/// # Errors
///
/// Returns an error if the topology cannot be loaded, the host is not in it,
/// or the interface binding does not hold.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let topology = app.topology_store.load()?;
    let reporter = app.reporter();
    let check = check_node(&app.host_ports(), &topology, &reporter)?;

    if app.is_json() {
        println!("{}", json::to_pretty(&check)?);
    } else {
        app.human().render_check(&check, app.topology_store.path());
        app.output.success("Node identity verified");
    }
    Ok(ExitCode::SUCCESS)
}
