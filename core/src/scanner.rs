//! # In-line Address Scanner
//!
//! Finds dotted-quad numerals embedded anywhere in a line of bytes and yields
//! the 32-bit value each one encodes.
//!
//! The matching rules are loose on purpose, and downstream behavior depends on
//! keeping them loose:
//! * No boundary anchoring: a quad inside a longer token still matches, so
//!   `x192.168.1.1y` yields a candidate.
//! * No octet range check: `300.1.2.3` is a perfectly good candidate whose
//!   first group spills past eight bits when packed.
//! * Each group reads at most three digits; digits immediately after the
//!   fourth group are ignored, so `1.2.3.4567` yields the value of
//!   `1.2.3.456`.
//!
//! Do not tighten this into a validated IP parser. Lines are searched, not
//! validated, and an over-broad match against a configured network is the
//! documented behavior.

/// One dotted-quad occurrence in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Byte offset of the first digit. Informational only; the matcher never
    /// looks at it.
    pub position: usize,
    /// The packed value `(b1<<24)|(b2<<16)|(b3<<8)|b4`, truncated to 32 bits.
    pub value: u32,
}

/// Lazy scan over one line. Fresh state per line, finite, no side effects.
pub fn candidates(line: &[u8]) -> Candidates<'_> {
    Candidates { line, pos: 0 }
}

pub struct Candidates<'a> {
    line: &'a [u8],
    pos: usize,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.pos < self.line.len() {
            if !self.line[self.pos].is_ascii_digit() {
                self.pos += 1;
                continue;
            }
            let start = self.pos;
            match dotted_quad_at(self.line, start) {
                Some((value, first_group_len)) => {
                    // Resume past the first group and its dot. A second quad
                    // starting at the next group is still found, so
                    // "1.2.3.4.5" yields 1.2.3.4 and then 2.3.4.5.
                    self.pos = start + first_group_len + 1;
                    return Some(Candidate {
                        position: start,
                        value,
                    });
                }
                None => {
                    // Skip the whole digit run the failed attempt started in.
                    // Re-trying from its interior positions would be quadratic
                    // on long digit strings and never anchored anyway.
                    while self.pos < self.line.len() && self.line[self.pos].is_ascii_digit() {
                        self.pos += 1;
                    }
                }
            }
        }
        None
    }
}

/// Attempts `d{1,3}.d{1,3}.d{1,3}.d{1,3}` anchored exactly at `start`, which
/// must sit on an ASCII digit. Returns the packed value and the length of the
/// first group so the caller knows where to resume.
fn dotted_quad_at(line: &[u8], start: usize) -> Option<(u32, usize)> {
    let mut pos = start;
    let mut value = 0u32;
    let mut first_group_len = 0;

    for group in 0..4 {
        let group_start = pos;
        let mut n = 0u32;
        while pos < line.len() && pos - group_start < 3 && line[pos].is_ascii_digit() {
            n = n * 10 + u32::from(line[pos] - b'0');
            pos += 1;
        }
        if pos == group_start {
            return None;
        }
        if group == 0 {
            first_group_len = pos - group_start;
        }
        value = (value << 8) | n;
        if group < 3 {
            if pos >= line.len() || line[pos] != b'.' {
                return None;
            }
            pos += 1;
        }
    }

    Some((value, first_group_len))
}
