use crate::BIND_ADDR;
use crate::Epoch;
use crate::Scalar;
use crate::learning::Hyperparameters;
use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Parser)]
#[command(name = "roshambo", version, about = "Rock-paper-scissors against an opponent that learns your habits")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play at the terminal (the default)
    Play(Tuning),
    /// Serve the session API over HTTP
    Serve {
        /// Address to bind, falls back to $BIND_ADDR then 127.0.0.1:8080
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct Tuning {
    /// Rounds to collect per training session; prompted for when absent
    #[arg(long, value_parser = positive)]
    pub samples: Option<usize>,
    /// Full-batch passes per training run
    #[arg(long)]
    pub epochs: Option<Epoch>,
    /// Adam step size
    #[arg(long)]
    pub learning_rate: Option<Scalar>,
    /// Seed weight initialisation for reproducible models
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Tuning {
    pub fn hyper(&self) -> Hyperparameters {
        let default = Hyperparameters::default();
        Hyperparameters {
            epochs: self.epochs.unwrap_or(default.epochs),
            learning_rate: self.learning_rate.unwrap_or(default.learning_rate),
        }
    }
}

fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(String::from("enter a positive integer")),
    }
}

impl Command {
    pub fn bind(flag: Option<String>) -> String {
        flag.or_else(|| std::env::var("BIND_ADDR").ok())
            .unwrap_or_else(|| BIND_ADDR.to_string())
    }
}
