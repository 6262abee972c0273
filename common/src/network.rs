//! # Network Specification Model
//!
//! Defines the CIDR networks a search runs against.
//!
//! A network is given on the command line as `a.b.c.d/p`. This module handles:
//! * Classifying an argument as a network pattern vs. a file path (by shape).
//! * Parsing and validating a pattern into a [`NetworkSpec`].
//! * Rejecting patterns whose address bits extend past the stated prefix.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single CIDR network, held as raw 32-bit values.
///
/// `address` is the canonical network address in big-endian octet order
/// (octet `a` occupies the most significant byte). `mask` is a contiguous
/// run of high bits. Construction guarantees `address & mask == address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkSpec {
    pub address: u32,
    pub mask: u32,
}

/// Networks are tested in argument order; order carries no meaning beyond that.
pub type NetworkList = Vec<NetworkSpec>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("not a network pattern: {0}")]
    Shape(String),
    #[error("invalid octet '{octet}' in network pattern '{pattern}'")]
    Octet { pattern: String, octet: String },
    #[error("invalid prefix length '{prefix}' in network pattern '{pattern}' (expected 0-32)")]
    Prefix { pattern: String, prefix: String },
    #[error("network does not match prefix length: {0}")]
    Misaligned(String),
}

impl NetworkSpec {
    pub fn new(address: u32, prefix: u8) -> Result<Self, PatternError> {
        let mask = mask_for_prefix(prefix);
        if address & mask != address {
            return Err(PatternError::Misaligned(format!(
                "{}/{}",
                DottedQuad(address),
                prefix
            )));
        }
        Ok(Self { address, mask })
    }

    /// True iff `ip` falls inside this network.
    pub fn contains(&self, ip: u32) -> bool {
        ip & self.mask == self.address & self.mask
    }

    pub fn prefix_len(&self) -> u8 {
        self.mask.leading_ones() as u8
    }
}

impl fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", DottedQuad(self.address), self.prefix_len())
    }
}

struct DottedQuad(u32);

impl fmt::Display for DottedQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.to_be_bytes();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

/// The mask for a prefix length, `0` for `/0`.
fn mask_for_prefix(prefix: u8) -> u32 {
    debug_assert!(prefix <= 32);
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    }
}

/// Shape test used to classify a command-line argument.
///
/// An argument is treated as a network pattern iff the *whole* string matches
/// `d{1,3}.d{1,3}.d{1,3}.d{1,3}/d{1,2}`. Anything else is a file path. Note
/// this is a shape test only: `999.0.0.0/8` passes here and then fails value
/// validation in [`NetworkSpec::from_str`], which is what makes a bad pattern
/// a fatal configuration error instead of a silently-missing file.
pub fn looks_like_pattern(s: &str) -> bool {
    let Some((quad, prefix)) = s.split_once('/') else {
        return false;
    };
    if prefix.is_empty() || prefix.len() > 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let mut groups = 0;
    for group in quad.split('.') {
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

impl FromStr for NetworkSpec {
    type Err = PatternError;

    /// Parses `a.b.c.d/p` into a validated spec.
    ///
    /// Octets must fit in a byte and the prefix in `0..=32`; an address whose
    /// host bits are set (e.g. `10.20.0.5/16`) is rejected outright.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !looks_like_pattern(s) {
            return Err(PatternError::Shape(s.to_string()));
        }
        let Some((quad, prefix_str)) = s.split_once('/') else {
            return Err(PatternError::Shape(s.to_string()));
        };

        let mut octets = [0u8; 4];
        for (slot, group) in octets.iter_mut().zip(quad.split('.')) {
            *slot = group.parse::<u8>().map_err(|_| PatternError::Octet {
                pattern: s.to_string(),
                octet: group.to_string(),
            })?;
        }

        let prefix = prefix_str
            .parse::<u8>()
            .ok()
            .filter(|p| *p <= 32)
            .ok_or_else(|| PatternError::Prefix {
                pattern: s.to_string(),
                prefix: prefix_str.to_string(),
            })?;

        Self::new(u32::from_be_bytes(octets), prefix)
    }
}
