use super::SessionId;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize)]
pub struct Opened {
    pub session: SessionId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Failure {
    pub error: String,
}

impl Failure {
    pub fn new(e: impl std::fmt::Display) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}
