//! Host network infrastructure: implements `HostIdentity`, `NameResolver`
//! and `InterfaceInspector` against the operating system.

use std::net::{IpAddr, ToSocketAddrs};

use anyhow::{Context, Result};
use if_addrs::IfAddr;
use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

use crate::application::ports::{HostIdentity, InterfaceInspector, NameResolver};

/// Production implementation that queries the real host on every call.
pub struct SystemHost;

impl HostIdentity for SystemHost {
    fn hostname(&self) -> Result<String> {
        let name = hostname::get().context("gethostname failed")?;
        name.into_string()
            .map_err(|raw| anyhow::anyhow!("host name is not valid UTF-8: {raw:?}"))
    }
}

impl NameResolver for SystemHost {
    fn lookup(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        // Port is required by the resolver API and discarded.
        let addrs = (hostname, 0)
            .to_socket_addrs()
            .with_context(|| format!("cannot resolve {hostname}"))?;
        Ok(addrs.map(|sa| sa.ip()).collect())
    }
}

impl InterfaceInspector for SystemHost {
    fn interface_addresses(&self, name: &str) -> Result<Option<Vec<IpNetwork>>> {
        let all = if_addrs::get_if_addrs().context("cannot enumerate network interfaces")?;
        let networks = all
            .iter()
            .filter(|iface| iface.name == name)
            .map(|iface| {
                network(&iface.addr)
                    .with_context(|| format!("interface {name} reports an invalid netmask"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok((!networks.is_empty()).then_some(networks))
    }
}

fn network(addr: &IfAddr) -> Result<IpNetwork, ipnetwork::IpNetworkError> {
    Ok(match addr {
        IfAddr::V4(v4) => IpNetwork::V4(Ipv4Network::with_netmask(v4.ip, v4.netmask)?),
        IfAddr::V6(v6) => IpNetwork::V6(Ipv6Network::with_netmask(v6.ip, v6.netmask)?),
    })
}
