mod args;
mod run;
mod terminal;

use std::io;
use std::process::ExitCode;

use args::CommandLine;
use grip_common::config::Config;
use tracing::error;

fn main() -> ExitCode {
    let cmd = CommandLine::parse_args();

    terminal::logging::init();

    if cmd.help {
        args::usage();
        return ExitCode::FAILURE;
    }

    let invocation = match args::classify(&cmd.args) {
        Ok(invocation) => invocation,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if invocation.nets.is_empty() {
        args::usage();
        return ExitCode::FAILURE;
    }

    let cfg = Config { invert: cmd.invert };

    let stdout = io::stdout().lock();
    let mut out = io::BufWriter::new(stdout);

    match run::run(&invocation.files, &invocation.nets, &cfg, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
