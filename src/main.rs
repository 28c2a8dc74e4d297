//! roshambo binary
//!
//! `roshambo` or `roshambo play` runs the terminal game.
//! `roshambo serve` exposes sessions over HTTP on --bind, $BIND_ADDR or 127.0.0.1:8080.

use clap::Parser;
use roshambo::cli::*;

fn main() -> anyhow::Result<()> {
    roshambo::log();
    match Args::parse().command {
        None => Console::from(Tuning::default()).run(),
        Some(Command::Play(tuning)) => Console::from(tuning).run(),
        Some(Command::Serve { bind }) => tokio::runtime::Runtime::new()?
            .block_on(roshambo::hosting::Server::run(Command::bind(bind)))
            .map_err(anyhow::Error::from),
    }
}
