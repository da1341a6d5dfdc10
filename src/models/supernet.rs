//! Supernet, covering block and next subnet result models.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A collapsed network, split into its parts for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SupernetEntry {
    pub network: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
}

impl From<Ipv4> for SupernetEntry {
    fn from(net: Ipv4) -> Self {
        SupernetEntry {
            network: net.addr(),
            prefix: net.prefix(),
            mask: net.netmask(),
        }
    }
}

/// Result of collapsing a list of networks.
#[derive(Serialize, Debug, Clone)]
pub struct SupernetResult {
    pub count: usize,
    pub supernets: Vec<SupernetEntry>,
}

impl From<Vec<Ipv4>> for SupernetResult {
    fn from(nets: Vec<Ipv4>) -> Self {
        SupernetResult {
            count: nets.len(),
            supernets: nets.into_iter().map(SupernetEntry::from).collect(),
        }
    }
}

/// The single smallest block covering a list of networks.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CoverResult {
    pub supernet: Ipv4,
    pub prefix: u8,
    pub mask: Ipv4Addr,
}

impl From<Ipv4> for CoverResult {
    fn from(net: Ipv4) -> Self {
        CoverResult {
            supernet: net,
            prefix: net.prefix(),
            mask: net.netmask(),
        }
    }
}

/// The block directly after a network, of the same size.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NextSubnetResult {
    pub network: Ipv4Addr,
    pub prefix: u8,
    pub broadcast: Ipv4Addr,
}

impl From<Ipv4> for NextSubnetResult {
    fn from(net: Ipv4) -> Self {
        NextSubnetResult {
            network: net.addr(),
            prefix: net.prefix(),
            broadcast: net.broadcast(),
        }
    }
}
