//! Text reports for the divide and explain commands.

use super::terminal::{format_number, Painter};
use crate::models::{AddressSpace, IpFamily};
use crate::processing::{NetworkDetails, UsableRange};
use itertools::Itertools;

/// Networks shown in full before the list is cut down to its head and tail.
pub const MAX_LISTED_NETWORKS: usize = 50;
const HEAD_TAIL: usize = MAX_LISTED_NETWORKS / 2;

/// Equal-division result, one network per line.
pub fn render_partitions(networks: &[AddressSpace]) -> String {
    let mut lines = vec!["  [Networks]".to_string()];
    if networks.len() <= MAX_LISTED_NETWORKS {
        lines.extend(networks.iter().map(|n| n.to_string()));
    } else {
        lines.extend(networks[..HEAD_TAIL].iter().map(|n| n.to_string()));
        lines.push("......".to_string());
        lines.extend(
            networks[networks.len() - HEAD_TAIL..]
                .iter()
                .map(|n| n.to_string()),
        );
    }
    lines.join("\n")
}

/// Capacity-division result: requested hosts next to the usable hosts of
/// each block. `networks` and `hosts` line up by position.
pub fn render_capacity(networks: &[AddressSpace], hosts: &[u64]) -> String {
    let mut lines = vec!["  [Networks]            [Used]  [Total]".to_string()];
    for (network, used) in networks.iter().zip_eq(hosts) {
        lines.push(format!(
            "{network:<18}{used:>10}{total:>9}",
            network = network.to_string(),
            total = network.usable_host_count()
        ));
    }
    lines.join("\n")
}

/// Multi-line description of a network, as printed by `explain`.
pub fn render_explain(details: &NetworkDetails, painter: &Painter) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}{}",
        painter.heading("Base Address:\t\t "),
        details.base_address
    ));

    match &details.usable_range {
        UsableRange::Range { first, last } => lines.push(format!(
            "{}{first} to {last} ({hosts})",
            painter.heading("Usable Address Range:\t "),
            hosts = format_number(&details.host_count)
        )),
        UsableRange::Unavailable(_) => lines.push(format!(
            "{}unable to calculate usable address range",
            painter.failure("Usable Address Range:\t ")
        )),
    }

    if details.family == IpFamily::V4 {
        match &details.broadcast {
            Ok(addr) => lines.push(format!(
                "{}{addr}",
                painter.heading("Broadcast Address:\t ")
            )),
            Err(msg) => lines.push(format!(
                "{}{msg}",
                painter.failure("Broadcast Address:\t ")
            )),
        }
    }

    lines.push(format!(
        "{}{}",
        painter.heading("Addresses:\t\t "),
        format_number(&details.address_count)
    ));

    let unit = if details.prefix_length > 1 { "bits" } else { "bit" };
    lines.push(format!(
        "{}{} (/{} {unit})",
        painter.heading("Netmask:\t\t "),
        details.netmask,
        details.prefix_length
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::processing::{divide_by_capacity, divide_equally, network_details};

    fn cidr(s: &str) -> AddressSpace {
        AddressSpace::parse(s).unwrap()
    }

    fn plain() -> Painter {
        Painter::new(&OutputConfig {
            color: false,
            ..OutputConfig::default()
        })
    }

    #[test]
    fn test_render_partitions() {
        let networks = divide_equally(&cidr("10.0.0.0/16"), 2).unwrap();
        assert_eq!(
            render_partitions(&networks),
            "  [Networks]\n10.0.0.0/17\n10.0.128.0/17"
        );
    }

    #[test]
    fn test_render_partitions_truncated() {
        let networks = divide_equally(&cidr("10.0.0.0/16"), 100).unwrap();
        let out = render_partitions(&networks);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + HEAD_TAIL + 1 + HEAD_TAIL);
        assert_eq!(lines[1], "10.0.0.0/23");
        assert_eq!(lines[1 + HEAD_TAIL], "......");
        assert_eq!(lines.last().copied(), Some(networks[99].to_string().as_str()));
    }

    #[test]
    fn test_render_capacity() {
        let hosts = [23, 10, 125];
        let networks = divide_by_capacity(&cidr("10.0.0.0/16"), &hosts).unwrap();
        let out = render_capacity(&networks, &hosts);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "10.0.0.0/27               23       30");
        assert_eq!(lines[2], "10.0.0.32/28              10       14");
        assert_eq!(lines[3], "10.0.0.48/25             125      126");
    }

    #[test]
    fn test_render_explain_v4() {
        let out = render_explain(&network_details(&cidr("10.1.0.0/16")), &plain());
        assert_eq!(
            out,
            "Base Address:\t\t 10.1.0.0\n\
             Usable Address Range:\t 10.1.0.1 to 10.1.255.254 (65,534)\n\
             Broadcast Address:\t 10.1.255.255\n\
             Addresses:\t\t 65,536\n\
             Netmask:\t\t 255.255.0.0 (/16 bits)"
        );
    }

    #[test]
    fn test_render_explain_v6_skips_broadcast() {
        let out = render_explain(
            &network_details(&cidr("2001:db8:1234:1a00::/106")),
            &plain(),
        );
        assert!(!out.contains("Broadcast"));
        assert!(out.contains("Addresses:\t\t 4,194,304"));
        assert!(out.contains("(/106 bits)"));
    }

    #[test]
    fn test_render_explain_degenerate() {
        let out = render_explain(&network_details(&cidr("10.0.0.1/32")), &plain());
        assert!(out.contains("unable to calculate usable address range"));
        assert!(out.contains("this IPv4 CIDR range has no broadcast address"));

        let out = render_explain(&network_details(&cidr("0.0.0.0/1")), &plain());
        assert!(out.ends_with("(/1 bit)"));
    }
}
