//! Domain models for subnet calculations.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - canonical IPv4 network in CIDR notation
//! - [`SubnettingResult`] - a network split into equal children
//! - [`SupernetResult`], [`CoverResult`], [`NextSubnetResult`] - merge and walk results

mod ipv4;
mod subnet;
mod supernet;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, check_prefix, cut_addr, get_cidr_mask, ip_after_subnet,
    mask_to_dotted_quad, netmask, parse_address, parse_prefix, usable_hosts, HostRange, Ipv4,
    MAX_LENGTH,
};
pub use subnet::{SubnetEntry, SubnettingResult};
pub use supernet::{CoverResult, NextSubnetResult, SupernetEntry, SupernetResult};
