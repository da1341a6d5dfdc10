//! Error types for CIDR calculations.

use crate::models::Ipv4;
use thiserror::Error;

/// Failures returned by the subnet calculator.
///
/// Every operation either returns its full result or one of these; nothing is
/// partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Invalid prefix length (expected 0-32): {0}")]
    InvalidPrefix(String),

    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("New prefix must be larger than the current prefix (/{new} <= /{current})")]
    PrefixNotLarger { current: u8, new: u8 },

    #[error("No networks provided")]
    NoNetworksProvided,

    #[error("No next subnet available after {0}")]
    NoNextSubnet(Ipv4),

    #[error("Splitting into {count} subnets exceeds the limit of {limit}")]
    TooManySubnets { count: u64, limit: usize },
}

impl CidrError {
    /// Stable name of the failure kind, for mapping at the caller's boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            CidrError::InvalidAddress(_) => "InvalidAddress",
            CidrError::InvalidPrefix(_) => "InvalidPrefix",
            CidrError::InvalidNetwork(_) => "InvalidNetwork",
            CidrError::PrefixNotLarger { .. } => "PrefixNotLarger",
            CidrError::NoNetworksProvided => "NoNetworksProvided",
            CidrError::NoNextSubnet(_) => "NoNextSubnet",
            CidrError::TooManySubnets { .. } => "TooManySubnets",
        }
    }
}
