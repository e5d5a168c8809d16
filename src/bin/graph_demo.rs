use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use graph_walk::cli::{self, DemoConfig};
use log::{debug, error};

fn main() -> ExitCode {
    let config = DemoConfig::parse();

    // RUST_LOG, when set, refines the level chosen on the command line
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
    debug!("Running {:?}", config.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = cli::run(&config.command, &mut out).and_then(|()| Ok(out.flush()?));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
