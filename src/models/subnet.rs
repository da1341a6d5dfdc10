//! Subnetting result model.

use super::{HostRange, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

/// One child network produced by splitting a larger block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetEntry {
    /// Child network in CIDR notation.
    pub network: Ipv4,
    /// Highest address of the child.
    pub broadcast_address: Ipv4Addr,
    /// Subnet mask of the child.
    pub mask: Ipv4Addr,
    /// Usable host addresses.
    pub host_range: HostRange,
}

impl From<Ipv4> for SubnetEntry {
    fn from(network: Ipv4) -> Self {
        SubnetEntry {
            network,
            broadcast_address: network.broadcast(),
            mask: network.netmask(),
            host_range: network.host_range(),
        }
    }
}

/// A network split into all children of a longer prefix.
#[derive(Serialize, Debug, Clone)]
pub struct SubnettingResult {
    /// The (normalized) network that was split.
    pub original_network: Ipv4,
    /// Dotted-quad mask of the original prefix.
    pub original_mask: String,
    /// Prefix length of every child.
    pub new_prefix: u8,
    /// Dotted-quad mask of the new prefix.
    pub new_mask: String,
    /// Number of children, `2^(new_prefix - original prefix)`.
    pub num_subnets: usize,
    /// Usable hosts in each child.
    pub hosts_per_subnet: u64,
    /// Children in ascending address order.
    pub subnets: Vec<SubnetEntry>,
}
