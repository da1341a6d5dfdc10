//! Collapsing networks into the fewest equivalent supernets.

use crate::error::CidrError;
use crate::models::{Ipv4, SupernetResult};
use itertools::Itertools;

/// Merge `networks` into the minimal set of disjoint blocks with the same
/// address union.
///
/// Networks are sorted by (address, prefix). Walking that order, a network
/// already covered by the last kept block is dropped; otherwise it is kept and
/// the last two kept blocks are merged into their parent for as long as they
/// are aligned, equal-size siblings.
///
/// # Returns
/// * `Ok(Vec<Ipv4>)` - Collapsed networks in ascending address order
/// * `Err(CidrError::NoNetworksProvided)` - If `networks` is empty
pub fn collapse(networks: &[Ipv4]) -> Result<Vec<Ipv4>, CidrError> {
    if networks.is_empty() {
        return Err(CidrError::NoNetworksProvided);
    }

    let mut kept: Vec<Ipv4> = Vec::with_capacity(networks.len());
    for net in networks.iter().copied().sorted().dedup() {
        if kept.last().is_some_and(|last| last.contains_net(&net)) {
            log::trace!("collapse: {net} already covered");
            continue;
        }
        kept.push(net);

        while kept.len() >= 2 {
            let upper = kept[kept.len() - 1];
            let lower = kept[kept.len() - 2];
            match lower.parent() {
                Some(parent) if lower.is_lower_sibling_of(&upper) => {
                    log::trace!("collapse: {lower} + {upper} => {parent}");
                    kept.truncate(kept.len() - 2);
                    kept.push(parent);
                }
                _ => break,
            }
        }
    }

    log::debug!("collapse: {} networks => {}", networks.len(), kept.len());
    Ok(kept)
}

/// Collapse networks given in CIDR notation.
///
/// Every entry must carry a `/prefix`; host bits are cleared. Blank entries
/// are skipped.
pub fn supernet<S: AsRef<str>>(entries: &[S]) -> Result<SupernetResult, CidrError> {
    let networks = parse_networks(entries)?;
    Ok(SupernetResult::from(collapse(&networks)?))
}

/// Parse CIDR entries, skipping blanks.
pub(crate) fn parse_networks<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Ipv4>, CidrError> {
    let networks = entries
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(Ipv4::new)
        .collect::<Result<Vec<_>, _>>()?;
    if networks.is_empty() {
        return Err(CidrError::NoNetworksProvided);
    }
    Ok(networks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(list: &[&str]) -> Vec<Ipv4> {
        list.iter().map(|s| Ipv4::new(s).unwrap()).collect()
    }

    /// Address ranges covered by `networks`, merged where they touch.
    fn union(networks: &[Ipv4]) -> Vec<(u64, u64)> {
        let mut ranges: Vec<(u64, u64)> = networks
            .iter()
            .map(|n| (u32::from(n.lo()) as u64, u32::from(n.hi()) as u64))
            .collect();
        ranges.sort();
        let mut merged: Vec<(u64, u64)> = Vec::new();
        for (lo, hi) in ranges {
            match merged.last_mut() {
                Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        merged
    }

    #[test]
    fn test_collapse_two_halves() {
        let result = collapse(&nets(&["192.168.0.0/25", "192.168.0.128/25"])).unwrap();
        assert_eq!(result, nets(&["192.168.0.0/24"]));
    }

    #[test]
    fn test_collapse_cascades() {
        let input = nets(&[
            "10.0.0.96/27",
            "10.0.0.0/26",
            "10.0.0.64/27",
            "10.0.0.128/25",
        ]);
        assert_eq!(collapse(&input).unwrap(), nets(&["10.0.0.0/24"]));
    }

    #[test]
    fn test_collapse_adjacent_not_aligned() {
        let input = nets(&["192.168.0.128/25", "192.168.1.0/25"]);
        assert_eq!(collapse(&input).unwrap(), input);
    }

    #[test]
    fn test_collapse_contained_and_duplicates() {
        let input = nets(&[
            "10.1.2.0/24",
            "10.0.0.0/8",
            "10.0.0.0/8",
            "10.255.255.255/32",
            "11.0.0.0/8",
        ]);
        assert_eq!(collapse(&input).unwrap(), nets(&["10.0.0.0/7"]));
    }

    #[test]
    fn test_collapse_host_addresses_normalized() {
        let input = nets(&["1.1.1.1/25", "1.1.1.200/25"]);
        assert_eq!(collapse(&input).unwrap(), nets(&["1.1.1.0/24"]));
    }

    #[test]
    fn test_collapse_unrelated_sorted() {
        let input = nets(&["192.168.2.0/24", "10.0.0.0/24", "172.16.0.0/12"]);
        assert_eq!(
            collapse(&input).unwrap(),
            nets(&["10.0.0.0/24", "172.16.0.0/12", "192.168.2.0/24"])
        );
    }

    #[test]
    fn test_collapse_whole_space() {
        let input = nets(&["0.0.0.0/1", "128.0.0.0/1"]);
        assert_eq!(collapse(&input).unwrap(), nets(&["0.0.0.0/0"]));
    }

    #[test]
    fn test_collapse_empty() {
        assert_eq!(collapse(&[]), Err(CidrError::NoNetworksProvided));
    }

    #[test]
    fn test_collapse_idempotent_and_preserves_union() {
        let input = nets(&[
            "10.0.0.0/25",
            "10.0.0.128/26",
            "10.0.0.192/27",
            "10.0.0.224/28",
            "10.0.0.240/28",
            "10.0.2.0/24",
            "10.0.3.0/24",
            "10.0.3.17/32",
            "10.0.5.0/31",
            "10.0.5.2/31",
            "10.0.4.0/24",
        ]);
        let once = collapse(&input).unwrap();
        assert_eq!(
            once,
            nets(&["10.0.0.0/24", "10.0.2.0/23", "10.0.4.0/24", "10.0.5.0/30"])
        );
        assert_eq!(collapse(&once).unwrap(), once);
        assert_eq!(union(&once), union(&input));

        for pair in once.windows(2) {
            assert!(pair[0].hi() < pair[1].lo(), "{} overlaps {}", pair[0], pair[1]);
            assert!(!pair[0].is_lower_sibling_of(&pair[1]));
        }
    }

    #[test]
    fn test_supernet() {
        let result = supernet(&["192.168.0.0/25", " 192.168.0.128/25 ", ""]).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.supernets[0].prefix, 24);
        assert_eq!(result.supernets[0].mask.to_string(), "255.255.255.0");
    }

    #[test]
    fn test_supernet_requires_cidr() {
        assert_eq!(
            supernet(&["192.168.0.0/25", "192.168.1.0"]).unwrap_err(),
            CidrError::InvalidNetwork("192.168.1.0".to_string())
        );
        assert_eq!(
            supernet::<&str>(&[]).unwrap_err(),
            CidrError::NoNetworksProvided
        );
        assert_eq!(
            supernet(&["  ", ""]).unwrap_err(),
            CidrError::NoNetworksProvided
        );
    }
}
