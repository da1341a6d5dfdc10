//! Smallest single block covering a set of networks.

use super::collapse::parse_networks;
use crate::error::CidrError;
use crate::models::{CoverResult, Ipv4};
use std::net::Ipv4Addr;

/// Find the smallest CIDR block containing every address of `networks`.
///
/// The result spans from the lowest network address to the highest broadcast
/// address, so it may include addresses that are in none of the inputs.
pub fn minimal_cover(networks: &[Ipv4]) -> Result<Ipv4, CidrError> {
    let low = networks
        .iter()
        .map(|n| u32::from(n.lo()))
        .min()
        .ok_or(CidrError::NoNetworksProvided)?;
    let high = networks
        .iter()
        .map(|n| u32::from(n.hi()))
        .max()
        .ok_or(CidrError::NoNetworksProvided)?;

    // common leading bits of the two extremes
    let prefix = (low ^ high).leading_zeros() as u8;
    let cover = Ipv4::from_parts(Ipv4Addr::from(low), prefix)?;
    log::debug!(
        "minimal_cover: {} networks [{}..{}] => {cover}",
        networks.len(),
        Ipv4Addr::from(low),
        Ipv4Addr::from(high)
    );
    Ok(cover)
}

/// Covering block for networks given in CIDR notation.
pub fn minimal_cover_supernet<S: AsRef<str>>(entries: &[S]) -> Result<CoverResult, CidrError> {
    let networks = parse_networks(entries)?;
    Ok(CoverResult::from(minimal_cover(&networks)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(list: &[&str]) -> Vec<Ipv4> {
        list.iter().map(|s| Ipv4::new(s).unwrap()).collect()
    }

    #[test]
    fn test_cover_two_27s() {
        let cover = minimal_cover(&nets(&["192.168.1.0/27", "192.168.2.0/27"])).unwrap();
        assert_eq!(cover, Ipv4::new("192.168.0.0/22").unwrap());
    }

    #[test]
    fn test_cover_single_network_is_itself() {
        let cover = minimal_cover(&nets(&["10.20.30.0/24"])).unwrap();
        assert_eq!(cover, Ipv4::new("10.20.30.0/24").unwrap());

        let cover = minimal_cover(&nets(&["10.20.30.40/32"])).unwrap();
        assert_eq!(cover.prefix(), 32);
    }

    #[test]
    fn test_cover_far_apart() {
        let cover = minimal_cover(&nets(&["0.0.0.0/32", "255.255.255.255/32"])).unwrap();
        assert_eq!(cover, Ipv4::new("0.0.0.0/0").unwrap());

        // sparse inputs give a bounding box, not an exact union
        let cover = minimal_cover(&nets(&["10.0.0.0/24", "10.0.255.0/24"])).unwrap();
        assert_eq!(cover, Ipv4::new("10.0.0.0/16").unwrap());
    }

    #[test]
    fn test_cover_bounds_and_tightness() {
        let input = nets(&["172.16.5.0/24", "172.16.9.128/25", "172.16.6.7/32"]);
        let cover = minimal_cover(&input).unwrap();
        assert_eq!(cover, Ipv4::new("172.16.0.0/20").unwrap());
        for n in &input {
            assert!(cover.contains_net(n), "{cover} should contain {n}");
        }

        // one bit longer at the same address no longer reaches the top input
        let tighter = Ipv4::from_parts(cover.addr(), cover.prefix() + 1).unwrap();
        assert!(input.iter().any(|n| !tighter.contains_net(n)));
    }

    #[test]
    fn test_cover_errors() {
        assert_eq!(minimal_cover(&[]), Err(CidrError::NoNetworksProvided));
        assert_eq!(
            minimal_cover_supernet(&["10.0.0.0/8", "bogus"]).unwrap_err(),
            CidrError::InvalidNetwork("bogus".to_string())
        );
        assert_eq!(
            minimal_cover_supernet(&["10.0.0.1"]).unwrap_err(),
            CidrError::InvalidNetwork("10.0.0.1".to_string())
        );
        assert_eq!(
            minimal_cover_supernet::<String>(&[]).unwrap_err(),
            CidrError::NoNetworksProvided
        );
    }

    #[test]
    fn test_minimal_cover_supernet() {
        let result = minimal_cover_supernet(&["192.168.1.0/27", "192.168.2.0/27"]).unwrap();
        assert_eq!(result.supernet.to_string(), "192.168.0.0/22");
        assert_eq!(result.prefix, 22);
        assert_eq!(result.mask, Ipv4Addr::new(255, 255, 252, 0));
    }
}
