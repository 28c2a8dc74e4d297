/// A boundary token outside the closed move or outcome vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Move(String),
    Outcome(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Move(s) => write!(f, "invalid move token {:?}, expected r, p or s", s),
            Self::Outcome(s) => write!(f, "invalid outcome token {:?}, expected w, l or t", s),
        }
    }
}

impl std::error::Error for TokenError {}
