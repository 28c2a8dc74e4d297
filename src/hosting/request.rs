use crate::game::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EvaluateQuery {
    pub player: Move,
    pub program: Move,
}

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    pub last_player_move: Move,
    pub last_program_move: Move,
    pub last_result: Outcome,
}

#[derive(Debug, Deserialize)]
pub struct RoundQuery {
    pub player: Move,
}
