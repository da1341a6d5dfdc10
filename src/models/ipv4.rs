//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] network type, always held in canonical form (host bits
//! cleared), along with the bit-level helpers used by every calculation.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-quad IPv4 address.
///
/// Exactly four decimal octets in 0-255 are accepted, surrounding whitespace is
/// ignored.
///
/// # Examples
/// ```
/// use subnet_calc::models::parse_address;
/// assert_eq!(parse_address(" 10.1.2.3 ").unwrap().octets(), [10, 1, 2, 3]);
/// assert!(parse_address("10.1.2").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, CidrError> {
    let text = text.trim();
    Ipv4Addr::from_str(text).map_err(|_| CidrError::InvalidAddress(text.to_string()))
}

/// Parse a prefix length given as text.
pub fn parse_prefix(text: &str) -> Result<u8, CidrError> {
    let text = text.trim();
    let len: i64 = text
        .parse()
        .map_err(|_| CidrError::InvalidPrefix(text.to_string()))?;
    check_prefix(len)
}

/// Validate an already decoded prefix length.
pub fn check_prefix(len: i64) -> Result<u8, CidrError> {
    if (0..=MAX_LENGTH as i64).contains(&len) {
        Ok(len as u8)
    } else {
        Err(CidrError::InvalidPrefix(len.to_string()))
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefix(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// The subnet mask for a prefix length as an address, e.g. /24 => 255.255.255.0.
pub fn netmask(len: u8) -> Result<Ipv4Addr, CidrError> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Render the subnet mask for a prefix length as a dotted quad.
pub fn mask_to_dotted_quad(len: u8) -> Result<String, CidrError> {
    Ok(netmask(len)?.to_string())
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> Result<u64, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefix(len.to_string()))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Returns the first address following the block `addr/len`, if there is one.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Result<Option<Ipv4Addr>, CidrError> {
    let network_bits = u32::from(cut_addr(addr, len)?) as u64;
    let next_bits = network_bits + block_size(len)?;
    Ok(u32::try_from(next_bits).ok().map(Ipv4Addr::from))
}

/// Number of usable hosts in a block.
///
/// /31 counts both addresses (point-to-point links) and /32 is a single host.
pub fn usable_hosts(len: u8) -> Result<u64, CidrError> {
    match len {
        31 => Ok(2),
        32 => Ok(1),
        _ => Ok(block_size(len)? - 2),
    }
}

/// IPv4 network in CIDR notation.
///
/// The address is always the network address for the prefix: constructors
/// clear any host bits instead of rejecting them, so `10.1.2.3/24` becomes
/// `10.1.2.0/24`. Ordering is by address, then prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl Ipv4 {
    /// Create a network from an address and prefix, clearing host bits.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, CidrError> {
        Ok(Ipv4 {
            addr: cut_addr(addr, mask)?,
            mask,
        })
    }

    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The `/prefix` part is mandatory.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let invalid = || CidrError::InvalidNetwork(addr_cidr.to_string());

        let (addr, mask) = addr_cidr.split_once('/').ok_or_else(invalid)?;
        let addr = parse_address(addr).map_err(|_| invalid())?;
        let mask = parse_prefix(mask).map_err(|_| invalid())?;
        Ipv4::from_parts(addr, mask)
    }

    /// Like [`Ipv4::new`], but a bare address is read as a /32 host route.
    pub fn parse_host_or_cidr(text: &str) -> Result<Ipv4, CidrError> {
        let text = text.trim();
        if text.contains('/') {
            Ipv4::new(text)
        } else {
            let addr =
                parse_address(text).map_err(|_| CidrError::InvalidNetwork(text.to_string()))?;
            Ipv4::from_parts(addr, MAX_LENGTH)
        }
    }

    /// The network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.mask
    }

    /// The subnet mask, e.g. 255.255.255.0 for a /24.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    fn mask_bits(&self) -> u32 {
        // mask is range checked on construction
        get_cidr_mask(self.mask).unwrap_or(u32::MAX)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Alias for [`Ipv4::hi`].
    pub fn broadcast(&self) -> Ipv4Addr {
        self.hi()
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Usable host range of the block.
    pub fn host_range(&self) -> HostRange {
        let lo = u32::from(self.lo());
        let hi = u32::from(self.hi());
        match self.mask {
            32 => HostRange::Single(self.lo()),
            31 => HostRange::Span(self.lo(), self.hi()),
            _ => HostRange::Span(Ipv4Addr::from(lo + 1), Ipv4Addr::from(hi - 1)),
        }
    }

    /// Number of usable hosts, following the same rule as [`Ipv4::host_range`].
    pub fn usable_hosts(&self) -> u64 {
        usable_hosts(self.mask).unwrap_or(0)
    }

    /// Whether `ip` falls inside this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// Whether `other` lies entirely inside this block.
    pub fn contains_net(&self, other: &Ipv4) -> bool {
        self.mask <= other.mask && self.contains(other.addr)
    }

    /// The enclosing block one bit shorter, `None` for /0.
    pub fn parent(&self) -> Option<Ipv4> {
        let mask = self.mask.checked_sub(1)?;
        Ipv4::from_parts(self.addr, mask).ok()
    }

    /// Whether `self` and `other` are the two halves of the same parent block.
    ///
    /// `self` must be the lower half.
    pub fn is_lower_sibling_of(&self, other: &Ipv4) -> bool {
        match self.parent() {
            Some(parent) => {
                self.mask == other.mask
                    && parent.addr == self.addr
                    && other.parent() == Some(parent)
                    && other.addr != self.addr
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

/// Usable host addresses of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRange {
    /// A /32: the one address is the host.
    Single(Ipv4Addr),
    /// First and last usable address, both inclusive.
    Span(Ipv4Addr, Ipv4Addr),
}

impl HostRange {
    pub fn first(&self) -> Ipv4Addr {
        match *self {
            HostRange::Single(ip) | HostRange::Span(ip, _) => ip,
        }
    }

    pub fn last(&self) -> Ipv4Addr {
        match *self {
            HostRange::Single(ip) | HostRange::Span(_, ip) => ip,
        }
    }
}

impl Serialize for HostRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            HostRange::Single(ip) => [ip].serialize(serializer),
            HostRange::Span(first, last) => [first, last].serialize(serializer),
        }
    }
}

impl std::fmt::Display for HostRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HostRange::Single(ip) => write!(f, "{ip}"),
            HostRange::Span(first, last) => write!(f, "{first}-{last}"),
        }
    }
}
