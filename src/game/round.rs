use super::*;

/// A played round: what each side threw and how it went for the human.
/// Also serves as the context the model conditions its next prediction on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub human: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

impl Round {
    /// Plays `human` against `opponent` and records the evaluated outcome.
    pub fn play(human: Move, opponent: Move) -> Self {
        Self {
            human,
            opponent,
            outcome: evaluate(human, opponent),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "You chose {}. The program chose {}. {}",
            self.human.word(),
            self.opponent.word(),
            self.outcome.message()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_evaluates() {
        let round = Round::play(Move::Paper, Move::Scissors);
        assert_eq!(round.outcome, Outcome::Lose);
        assert_eq!(
            round.to_string(),
            "You chose Paper. The program chose Scissors. The program wins!"
        );
    }
}
