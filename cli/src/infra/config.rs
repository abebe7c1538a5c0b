//! Infrastructure implementation of the `TopologyStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::TopologyStore;
use crate::domain::Topology;

/// Production implementation of `TopologyStore` that reads a YAML file on disk.
pub struct YamlTopologyStore {
    path: PathBuf,
}

impl YamlTopologyStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TopologyStore for YamlTopologyStore {
    fn load(&self) -> Result<Topology> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("unable to read {}", self.path.display()))?;
        let topology: Topology = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), nodes = topology.nodes.len(), "loaded topology");
        Ok(topology)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
