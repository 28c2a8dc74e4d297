use crate::game::*;
use crate::learning::Training;
use serde::Serialize;

/// Snapshot of a session for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Status {
    pub trained: bool,
    pub samples: usize,
    pub context: Option<Round>,
    pub training: Option<Training>,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.training {
            Some(ref training) => write!(f, "Model Status: Trained (AI Active), {}", training),
            None => write!(
                f,
                "Model Status: Untrained (Random Play), {} samples collected",
                self.samples
            ),
        }
    }
}
