//! IPv4 CIDR calculator.
//!
//! Splits networks into subnets, collapses network lists into supernets, finds
//! the smallest covering block and walks to the next block of the same size.
//!
//! # Modules
//! - [`models`] - The [`models::Ipv4`] network type and result payloads
//! - [`processing`] - The calculations
//! - [`output`] - JSON and terminal rendering
//! - [`config`] - Runtime configuration
//! - [`error`] - [`CidrError`]
//!
//! ```
//! use subnet_calc::processing::supernet;
//!
//! let result = supernet(&["192.168.0.0/25", "192.168.0.128/25"]).unwrap();
//! assert_eq!(result.count, 1);
//! assert_eq!(result.supernets[0].prefix, 24);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CidrError;
