use grip_common::network::{NetworkList, NetworkSpec, PatternError};
use grip_core::filter::{line_matches, should_emit};

fn nets(patterns: &[&str]) -> NetworkList {
    patterns.iter().map(|p| p.parse().unwrap()).collect()
}

/// Runs a batch of lines through the full decision pipeline and returns the
/// ones that would be written out.
fn emitted<'a>(lines: &[&'a [u8]], patterns: &[&str], invert: bool) -> Vec<&'a [u8]> {
    let list = nets(patterns);
    lines
        .iter()
        .copied()
        .filter(|line| should_emit(line_matches(line, &list), invert))
        .collect()
}

#[test]
fn selects_lines_with_member_addresses() {
    let lines: Vec<&[u8]> = vec![
        b"server 10.20.30.40 connected from 8.8.8.8",
        b"client 192.168.1.5 idle",
        b"gateway 10.20.0.1 up",
    ];

    let selected = emitted(&lines, &["10.20.0.0/16"], false);
    assert_eq!(selected, vec![lines[0], lines[2]]);

    // Under -v exactly the complement comes out.
    let inverted = emitted(&lines, &["10.20.0.0/16"], true);
    assert_eq!(inverted, vec![lines[1]]);
}

#[test]
fn prefix_boundary_is_exact() {
    let lines: Vec<&[u8]> = vec![b"last 172.31.255.255", b"next 172.32.0.0"];
    let selected = emitted(&lines, &["172.16.0.0/12"], false);
    assert_eq!(selected, vec![lines[0]]);
}

#[test]
fn zero_prefix_selects_every_address_bearing_line() {
    let lines: Vec<&[u8]> = vec![
        b"ok 1.2.3.4",
        b"overflowed 999.0.0.1 still an address",
        b"no address on this line",
    ];
    let selected = emitted(&lines, &["0.0.0.0/0"], false);
    assert_eq!(selected, vec![lines[0], lines[1]]);
}

#[test]
fn union_of_networks_in_argument_order() {
    let lines: Vec<&[u8]> = vec![b"a 10.1.1.1", b"b 8.8.8.8", b"c 9.9.9.9"];
    let selected = emitted(&lines, &["10.0.0.0/8", "8.8.8.8/32"], false);
    assert_eq!(selected, vec![lines[0], lines[1]]);
}

#[test]
fn overflowed_fourth_group_spills_into_third_octet() {
    // "1.2.3.4567" packs as (1<<24)|(2<<16)|(3<<8)|456; the 456 ORs over the
    // third octet's low bits, giving the value of 1.2.3.200.
    let list = nets(&["1.2.3.200/32"]);
    assert!(line_matches(b"1.2.3.4567", &list));
}

#[test]
fn misaligned_pattern_fails_before_any_scanning() {
    assert!(matches!(
        "10.20.0.5/16".parse::<NetworkSpec>(),
        Err(PatternError::Misaligned(_))
    ));
}

#[test]
fn base_address_always_matches_its_own_network() {
    for pattern in ["10.20.0.0/16", "172.25.11.32/27", "8.8.8.8/32", "0.0.0.0/0"] {
        let net: NetworkSpec = pattern.parse().unwrap();
        assert!(net.contains(net.address), "{pattern}");
    }
}
