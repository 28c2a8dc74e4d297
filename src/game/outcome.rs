use super::*;
use crate::CHOICES;

/// Result of a round, always from the human player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Outcome {
    Win = 0,
    Lose = 1,
    Tie = 2,
}

impl Outcome {
    pub const ALL: [Self; CHOICES] = [Self::Win, Self::Lose, Self::Tie];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn onehot(self) -> [f32; CHOICES] {
        let mut slots = [0.; CHOICES];
        slots[self.index()] = 1.;
        slots
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Lose => "The program wins!",
            Self::Tie => "It's a tie!",
        }
    }
}

/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
impl From<(Move, Move)> for Outcome {
    fn from((human, opponent): (Move, Move)) -> Self {
        if human == opponent {
            Self::Tie
        } else if human.beats() == opponent {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

/// Outcome of `human` against `opponent`.
pub fn evaluate(human: Move, opponent: Move) -> Outcome {
    Outcome::from((human, opponent))
}

/// Accepts "w", "l", "t" or "win", "lose", "tie", ignoring case.
impl TryFrom<&str> for Outcome {
    type Error = TokenError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "win" => Ok(Self::Win),
            "l" | "lose" => Ok(Self::Lose),
            "t" | "tie" => Ok(Self::Tie),
            _ => Err(TokenError::Outcome(s.to_string())),
        }
    }
}
impl TryFrom<String> for Outcome {
    type Error = TokenError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Outcome> for String {
    fn from(o: Outcome) -> String {
        o.to_string()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Win => "w",
                Self::Lose => "l",
                Self::Tie => "t",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_moves_tie() {
        for m in Move::ALL {
            assert_eq!(evaluate(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn distinct_moves_are_antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL.into_iter().filter(|b| *b != a) {
                match (evaluate(a, b), evaluate(b, a)) {
                    (Outcome::Win, Outcome::Lose) | (Outcome::Lose, Outcome::Win) => {}
                    pair => panic!("{:?} vs {:?} gave {:?}", a, b, pair),
                }
            }
        }
    }

    #[test]
    fn canonical_dominance() {
        assert_eq!(evaluate(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(evaluate(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(evaluate(Move::Paper, Move::Rock), Outcome::Win);
        assert_eq!(evaluate(Move::Scissors, Move::Rock), Outcome::Lose);
        assert_eq!(evaluate(Move::Paper, Move::Scissors), Outcome::Lose);
        assert_eq!(evaluate(Move::Rock, Move::Paper), Outcome::Lose);
    }

    #[test]
    fn counter_always_wins() {
        for m in Move::ALL {
            assert_eq!(evaluate(m, m.counter()), Outcome::Lose);
        }
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(Outcome::try_from("w"), Ok(Outcome::Win));
        assert_eq!(Outcome::try_from("L"), Ok(Outcome::Lose));
        assert_eq!(Outcome::try_from("t"), Ok(Outcome::Tie));
        assert_eq!(
            Outcome::try_from("r"),
            Err(TokenError::Outcome("r".into()))
        );
        assert_eq!(Outcome::try_from("Tie"), Ok(Outcome::Tie));
    }

    #[test]
    fn reject_words_outside_the_token_set() {
        for junk in ["lemon", "wx", "tiger", ""] {
            assert_eq!(
                Outcome::try_from(junk),
                Err(TokenError::Outcome(junk.into()))
            );
        }
    }
}
