//! Per-line match decision: scanner feeding matcher.

use grip_common::network::NetworkSpec;

use crate::matcher;
use crate::scanner;

/// True iff some candidate address in `line` belongs to some network in
/// `nets`. Stops scanning at the first member candidate; the remaining
/// candidates cannot change an existential result.
pub fn line_matches(line: &[u8], nets: &[NetworkSpec]) -> bool {
    scanner::candidates(line).any(|c| matcher::ip_in_netlist(c.value, nets))
}

/// Whether a line should be written out, given the invert flag.
pub fn should_emit(matched: bool, invert: bool) -> bool {
    matched != invert
}
