use crate::Epoch;
use crate::Scalar;

/// Reasons a training request leaves the model as it was.
/// None of them are fatal to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainError {
    /// Non-positive epoch count, or a learning rate that is not a positive finite number.
    InvalidHyperparameter { epochs: Epoch, learning_rate: Scalar },
    /// Nothing to learn from.
    InsufficientData,
    /// Loss went non-finite after this epoch's update (0: before any update).
    Diverged { epoch: Epoch },
}

impl std::fmt::Display for TrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHyperparameter {
                epochs,
                learning_rate,
            } => write!(
                f,
                "invalid hyperparameters: epochs {} learning rate {} (both must be positive)",
                epochs, learning_rate
            ),
            Self::InsufficientData => write!(f, "no samples collected, nothing to train on"),
            Self::Diverged { epoch } => write!(f, "training diverged at epoch {}", epoch),
        }
    }
}

impl std::error::Error for TrainError {}
