use super::*;
use crate::Arbitrary;
use crate::CHOICES;

/// One of the three throws. Declaration order is the canonical class order
/// used for one-hot slots and for breaking ties between equal logits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const ALL: [Self; CHOICES] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The move this one defeats under cyclic dominance.
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }

    /// The move that defeats this one.
    pub const fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    /// Canonical class index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-hot vector at the canonical slot.
    pub fn onehot(self) -> [f32; CHOICES] {
        let mut slots = [0.; CHOICES];
        slots[self.index()] = 1.;
        slots
    }

    pub const fn word(self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::random_range(0..CHOICES as u8))
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Paper,
            2 => Self::Scissors,
            _ => panic!("invalid move index: {}", n),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// Accepts the boundary tokens "r", "p", "s" or the full words, ignoring
/// case and surrounding whitespace. Anything else is rejected.
impl TryFrom<&str> for Move {
    type Error = TokenError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(TokenError::Move(s.to_string())),
        }
    }
}
impl TryFrom<String> for Move {
    type Error = TokenError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Move> for String {
    fn from(m: Move) -> String {
        m.to_string()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "r",
                Self::Paper => "p",
                Self::Scissors => "s",
            }
        )
    }
}
