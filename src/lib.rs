//! Adaptive rock-paper-scissors opponent.
//!
//! The library watches a human's rounds, collects labeled samples of
//! "previous round -> next human move", fits a small feed-forward classifier
//! and plays the counter to whatever it predicts the human will throw next.
pub mod game;
pub mod learning;
pub mod opponent;
pub mod session;

#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod hosting;
#[cfg(feature = "server")]
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Softmax outputs and sampling frequencies.
pub type Probability = f32;
/// Network weights, activations, gradients and losses.
pub type Scalar = f32;
/// Full-batch passes over the sample store.
pub type Epoch = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// NETWORK SHAPE
// ============================================================================
/// Number of choices (moves and outcomes alike).
pub const CHOICES: usize = 3;
/// Input width: one-hot previous human move, opponent move and outcome.
pub const FEATURES: usize = CHOICES * 3;
/// Hidden layer width.
pub const HIDDEN: usize = 32;

// ============================================================================
// TRAINING DEFAULTS
// ============================================================================
/// Default number of full-batch passes per training request.
pub const EPOCHS: Epoch = 500;
/// Default Adam step size.
pub const LEARNING_RATE: Scalar = 0.005;
/// Training loss is logged every this many epochs.
pub const LOG_INTERVAL: Epoch = 50;
/// Adam first-moment decay.
pub const ADAM_BETA1: Scalar = 0.9;
/// Adam second-moment decay.
pub const ADAM_BETA2: Scalar = 0.999;
/// Adam denominator smoothing.
pub const ADAM_EPSILON: Scalar = 1e-8;

// ============================================================================
// HOSTING
// ============================================================================
/// Fallback bind address when neither `--bind` nor `BIND_ADDR` is set.
pub const BIND_ADDR: &str = "127.0.0.1:8080";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory for per-run log files.
#[cfg(feature = "server")]
pub const LOG_DIR: &str = "logs";

/// Terminal logging at INFO plus a DEBUG file `logs/roshambo-<unix secs>.log`
/// holding every round and training epoch of the run.
#[cfg(feature = "server")]
pub fn log() {
    use simplelog::*;
    std::fs::create_dir_all(LOG_DIR).expect("create log directory");
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = format!("{}/roshambo-{}.log", LOG_DIR, stamp);
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Debug,
            config,
            std::fs::File::create(&path).expect("create log file"),
        ),
    ])
    .expect("initialize logger");
}
