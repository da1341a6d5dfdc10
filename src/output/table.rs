//! CSV-style table rendering of results.

use super::terminal::{format_field, header};
use crate::models::{CoverResult, NextSubnetResult, SubnettingResult, SupernetResult};
use colored::Colorize;
use itertools::Itertools;

/// Render a subnetting result: a summary line, a header, then one row per child.
pub fn render_subnetting(result: &SubnettingResult) -> String {
    let mut lines = vec![
        format!(
            "# {original} ({original_mask}) => {num} x /{new_prefix} ({new_mask}), {hosts} hosts each",
            original = result.original_network.to_string().green(),
            original_mask = result.original_mask,
            num = result.num_subnets,
            new_prefix = result.new_prefix,
            new_mask = result.new_mask,
            hosts = result.hosts_per_subnet,
        ),
        header(&[
            ("cnt", 6),
            ("network", 18),
            ("broadcast", 17),
            ("mask", 17),
            ("host_range", 33),
        ]),
    ];

    lines.extend(result.subnets.iter().enumerate().map(|(i, s)| {
        format!(
            "{j},{network},{broadcast},{mask},{host_range}",
            j = format_field(i + 1, 6),
            network = format_field(s.network, 18),
            broadcast = format_field(s.broadcast_address, 17),
            mask = format_field(s.mask, 17),
            host_range = format_field(s.host_range, 33),
        )
    }));

    lines.join("\n")
}

/// Render collapsed supernets, one row per block.
pub fn render_supernets(result: &SupernetResult) -> String {
    let rows = result.supernets.iter().map(|s| {
        format!(
            "{network},{prefix},{mask}",
            network = format_field(s.network, 17),
            prefix = format_field(s.prefix, 8),
            mask = format_field(s.mask, 17),
        )
    });

    std::iter::once(format!("# {} supernet(s)", result.count))
        .chain(std::iter::once(header(&[
            ("network", 17),
            ("prefix", 8),
            ("mask", 17),
        ])))
        .chain(rows)
        .join("\n")
}

/// Render the covering block as a single line.
pub fn render_cover(result: &CoverResult) -> String {
    format!(
        "{supernet},{prefix},{mask}",
        supernet = format_field(result.supernet.to_string().green(), 20),
        prefix = format_field(result.prefix, 4),
        mask = format_field(result.mask, 17),
    )
}

/// Render the next subnet as a single line.
pub fn render_next_subnet(result: &NextSubnetResult) -> String {
    format!(
        "{network},{prefix},{broadcast}",
        network = format_field(result.network.to_string().green(), 17),
        prefix = format_field(result.prefix, 4),
        broadcast = format_field(format!("{}_br", result.broadcast), 20),
    )
}
