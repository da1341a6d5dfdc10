//! Splitting a network into equal-size children.

use crate::error::CidrError;
use crate::models::{
    block_size, check_prefix, ip_after_subnet, mask_to_dotted_quad, parse_address, parse_prefix,
    usable_hosts, Ipv4, SubnetEntry, SubnettingResult,
};

/// Split `network` into every child network of length `new_prefix`.
///
/// # Arguments
/// * `network` - The block to split
/// * `new_prefix` - Prefix length of the children, must be longer than the network's
/// * `max_subnets` - Ceiling on the number of children
///
/// # Returns
/// * `Ok(SubnettingResult)` - Children in ascending address order
/// * `Err(CidrError::PrefixNotLarger)` - If `new_prefix` is not longer
/// * `Err(CidrError::TooManySubnets)` - If the split would exceed `max_subnets`
pub fn subnet(
    network: Ipv4,
    new_prefix: u8,
    max_subnets: usize,
) -> Result<SubnettingResult, CidrError> {
    let new_prefix = check_prefix(new_prefix as i64)?;
    if new_prefix <= network.prefix() {
        return Err(CidrError::PrefixNotLarger {
            current: network.prefix(),
            new: new_prefix,
        });
    }

    let count = 1u64 << (new_prefix - network.prefix());
    if count > max_subnets as u64 {
        return Err(CidrError::TooManySubnets {
            count,
            limit: max_subnets,
        });
    }
    log::debug!("subnet({network}) into {count} x /{new_prefix}");

    let mut subnets = Vec::with_capacity(count as usize);
    let mut next = Some(network.addr());
    while let Some(addr) = next {
        if subnets.len() as u64 == count {
            break;
        }
        let child = Ipv4::from_parts(addr, new_prefix)?;
        subnets.push(SubnetEntry::from(child));
        next = ip_after_subnet(addr, new_prefix)?;
    }
    debug_assert_eq!(subnets.len() as u64, count);
    debug_assert_eq!(
        count * block_size(new_prefix)?,
        network.size(),
        "children must tile the parent"
    );

    Ok(SubnettingResult {
        original_network: network,
        original_mask: mask_to_dotted_quad(network.prefix())?,
        new_prefix,
        new_mask: mask_to_dotted_quad(new_prefix)?,
        num_subnets: subnets.len(),
        hosts_per_subnet: usable_hosts(new_prefix)?,
        subnets,
    })
}

/// Split a network given as separate address and prefix texts.
///
/// The address may carry host bits; it is cut down to the network address for
/// `current_prefix` first.
pub fn subnet_from_parts(
    network_ip: &str,
    current_prefix: &str,
    new_prefix: &str,
    max_subnets: usize,
) -> Result<SubnettingResult, CidrError> {
    let addr = parse_address(network_ip)?;
    let current_prefix = parse_prefix(current_prefix)?;
    let new_prefix = parse_prefix(new_prefix)?;
    let network = Ipv4::from_parts(addr, current_prefix)?;
    subnet(network, new_prefix, max_subnets)
}
