//! Subnet calculations.
//!
//! Every operation here is a pure function over [`crate::models::Ipv4`] values:
//! - [`subnetting`] - Splitting a network into equal children
//! - [`collapse`] - Merging networks into the fewest supernets
//! - [`cover`] - The single smallest block covering a set of networks
//! - [`next`] - The following block of the same size
//! - [`input`] - Splitting free-text network lists

mod collapse;
mod cover;
mod input;
mod next;
mod subnetting;

// Re-export public functions
pub use collapse::{collapse, supernet};
pub use cover::{minimal_cover, minimal_cover_supernet};
pub use input::{flatten_network_args, split_network_list};
pub use next::{next_subnet, next_subnet_from_str};
pub use subnetting::{subnet, subnet_from_parts};
