use super::*;
use crate::EPOCHS;
use crate::Epoch;
use crate::LEARNING_RATE;
use crate::Scalar;
use serde::Deserialize;
use serde::Serialize;

/// Knobs for one training request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    pub epochs: Epoch,
    pub learning_rate: Scalar,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            epochs: EPOCHS,
            learning_rate: LEARNING_RATE,
        }
    }
}

impl Hyperparameters {
    pub fn validate(self) -> Result<Self, TrainError> {
        if self.epochs > 0 && self.learning_rate.is_finite() && self.learning_rate > 0. {
            Ok(self)
        } else {
            Err(TrainError::InvalidHyperparameter {
                epochs: self.epochs,
                learning_rate: self.learning_rate,
            })
        }
    }
}

impl std::fmt::Display for Hyperparameters {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "epochs {} lr {}", self.epochs, self.learning_rate)
    }
}
