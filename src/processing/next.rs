//! Walking to the next block of the same size.

use crate::error::CidrError;
use crate::models::{ip_after_subnet, Ipv4, NextSubnetResult};

/// The network directly after `network`, with the same prefix length.
///
/// Fails with [`CidrError::NoNextSubnet`] when `network` ends at
/// 255.255.255.255.
pub fn next_subnet(network: Ipv4) -> Result<Ipv4, CidrError> {
    let next = ip_after_subnet(network.addr(), network.prefix())?
        .ok_or(CidrError::NoNextSubnet(network))?;
    Ipv4::from_parts(next, network.prefix())
}

/// Next subnet for a network given as text; a bare address counts as a /32.
pub fn next_subnet_from_str(network: &str) -> Result<NextSubnetResult, CidrError> {
    let network = Ipv4::parse_host_or_cidr(network)?;
    Ok(NextSubnetResult::from(next_subnet(network)?))
}
