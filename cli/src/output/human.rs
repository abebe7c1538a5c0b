//! Human-readable terminal renderer.

use std::path::Path;

use crate::application::services::invocation::{LaunchPlan, NodeCheck};
use crate::output::OutputContext;

/// Renders plans and checks as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        self.ctx.info(&format!("clarify-launch v{version}"));
    }

    /// Render the resolved identity of this host.
    pub fn render_check(&self, check: &NodeCheck, topology: &Path) {
        self.ctx.header("Local node:");
        self.ctx.kv("Topology: ", &topology.display().to_string());
        self.ctx.kv("Hostname: ", &check.hostname);
        self.ctx.kv("Interface:", &check.net_interface);
        self.ctx.kv("Address:  ", &check.address.to_string());
    }

    /// Render a full launch plan without running it.
    ///
    /// The argument vector is printed one token per line, since tokens may
    /// contain spaces.
    pub fn render_plan(&self, plan: &LaunchPlan, topology: &Path) {
        self.render_check(&plan.node, topology);
        let peers = if plan.peers.is_empty() {
            "(none)".to_string()
        } else {
            plan.peers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.ctx.kv("Peers:    ", &peers);
        println!();
        self.ctx.header("Installer:");
        self.ctx.kv("Program:  ", &plan.program.display().to_string());
        for arg in plan.args.args() {
            self.ctx.kv("          ", arg);
        }
    }
}
