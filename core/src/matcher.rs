//! Membership test of a candidate address against the configured networks.

use grip_common::network::NetworkSpec;

/// True iff `ip` falls inside at least one network in `nets`.
///
/// Linear in the list length, short-circuits on the first hit. All hits are
/// equivalent for the boolean result, so list order never changes the answer.
/// An empty list matches nothing.
pub fn ip_in_netlist(ip: u32, nets: &[NetworkSpec]) -> bool {
    nets.iter().any(|net| net.contains(ip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grip_common::network::NetworkList;

    fn nets(patterns: &[&str]) -> NetworkList {
        patterns.iter().map(|p| p.parse().unwrap()).collect()
    }

    #[test]
    fn empty_list_matches_nothing() {
        assert!(!ip_in_netlist(0x0a14_1e28, &[]));
    }

    #[test]
    fn matches_inside_prefix_boundary() {
        let list = nets(&["172.16.0.0/12"]);
        // 172.31.255.255 is the last address of the /12.
        assert!(ip_in_netlist(u32::from_be_bytes([172, 31, 255, 255]), &list));
        assert!(!ip_in_netlist(u32::from_be_bytes([172, 32, 0, 0]), &list));
    }

    #[test]
    fn any_entry_suffices() {
        let list = nets(&["10.20.0.0/16", "8.8.8.8/32"]);
        assert!(ip_in_netlist(u32::from_be_bytes([8, 8, 8, 8]), &list));
        assert!(ip_in_netlist(u32::from_be_bytes([10, 20, 30, 40]), &list));
        assert!(!ip_in_netlist(u32::from_be_bytes([9, 9, 9, 9]), &list));
    }

    #[test]
    fn zero_prefix_matches_everything() {
        let list = nets(&["0.0.0.0/0"]);
        assert!(ip_in_netlist(0, &list));
        assert!(ip_in_netlist(u32::MAX, &list));
        // Values produced by overflowed octets are addresses like any other.
        assert!(ip_in_netlist((999u32 << 24) | (9 << 16) | (9 << 8) | 9, &list));
    }
}
