//! Command-line surface.
//!
//! Positional arguments mix network patterns and file paths in any order;
//! [`classify`] sorts them apart by shape after clap has handled the flag
//! namespace. Auto-help is disabled because usage must go to stderr with a
//! failure status, matching the documented exit-code contract.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use grip_common::network::{self, NetworkList, PatternError};

#[derive(Parser)]
#[command(name = "grip")]
#[command(about = "GRep IP addresses.")]
#[command(disable_help_flag = true)]
pub struct CommandLine {
    /// Inverse search: print lines not containing a matching address
    #[arg(short = 'v')]
    pub invert: bool,

    /// Print usage and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Network patterns (`a.b.c.d/p`) and file paths, in any order
    #[arg(value_name = "PATTERN|FILE")]
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(cmd) => cmd,
            Err(err) => {
                // Unknown options are argument validation failures and exit 1,
                // not clap's usual 2.
                let _ = err.print();
                process::exit(1);
            }
        }
    }
}

/// The classified invocation: networks to match and files to read.
pub struct Invocation {
    pub nets: NetworkList,
    pub files: Vec<PathBuf>,
}

/// Splits positional arguments into network patterns and file paths.
///
/// An argument shaped like `a.b.c.d/p` is a pattern and must validate; a
/// shape-matching argument with a bad octet, bad prefix, or host bits set
/// past the prefix is a fatal configuration error rather than a file path.
pub fn classify(args: &[String]) -> Result<Invocation, PatternError> {
    let mut nets = NetworkList::new();
    let mut files = Vec::new();

    for arg in args {
        if network::looks_like_pattern(arg) {
            nets.push(arg.parse()?);
        } else {
            files.push(PathBuf::from(arg));
        }
    }

    Ok(Invocation { nets, files })
}

pub fn usage() {
    eprint!(
        "\
Usage: grip [-v] a1.b1.c1.d1/p1 [a2.b2.c2.d2/p2 ...] [file1 ...]

GRep IP addresses -
       Prints lines in files that contain an IP address inside
       at least one of the networks specified.
       When no files are given, STDIN is used instead.

Options:
       -v: inverse search: print lines not containing such IP addresses

Example:
       grip 10.20.0.0/16 172.25.11.32/27 logfile
"
    );
}
