//! The driving loop: files (or stdin) in, matching lines out.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use grip_common::config::Config;
use grip_common::network::NetworkSpec;
use grip_core::filter;
use tracing::error;

/// Streams every input source through the line filter, in argument order.
///
/// A file that cannot be opened is reported and skipped; the run as a whole
/// still succeeds. An empty file list means stdin.
pub fn run<W: Write>(
    files: &[PathBuf],
    nets: &[NetworkSpec],
    cfg: &Config,
    out: &mut W,
) -> anyhow::Result<()> {
    if files.is_empty() {
        filter_lines(io::stdin().lock(), nets, cfg, out)?;
    } else {
        for path in files {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(err) => {
                    error!("Error opening file '{}': {}", path.display(), err);
                    continue;
                }
            };
            filter_lines(BufReader::new(file), nets, cfg, out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Reads `input` line by line into a reusable buffer and writes the selected
/// lines verbatim, trailing newline included when the input had one. Lines
/// are raw bytes; nothing here assumes UTF-8.
fn filter_lines<R, W>(mut input: R, nets: &[NetworkSpec], cfg: &Config, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::with_capacity(8192);
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        let matched = filter::line_matches(&line, nets);
        if filter::should_emit(matched, cfg.invert) {
            out.write_all(&line)?;
        }
    }
}
