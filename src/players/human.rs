use crate::game::*;
use crate::session::Player;
use colored::*;
use dialoguer::Input;

/// A person at the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    /// Prompts until a valid move is typed. `None` if the terminal is gone.
    pub fn throw(prompt: &str) -> Option<Move> {
        Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|i: &String| -> Result<(), String> {
                Self::read(i).map(|_| ()).map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()
            .inspect_err(|e| log::warn!("prompt failed: {}", e))
            .ok()
            .and_then(|i| Self::read(&i).ok())
    }

    /// At the prompt only the first typed character counts.
    fn read(input: &str) -> Result<Move, TokenError> {
        Move::try_from(input.trim().chars().take(1).collect::<String>())
    }

    /// Prints a round with the outcome coloured from the human's side.
    pub fn show(round: &Round) {
        let message = match round.outcome {
            Outcome::Win => round.outcome.message().green(),
            Outcome::Lose => round.outcome.message().red(),
            Outcome::Tie => round.outcome.message().yellow(),
        };
        println!(
            "You chose {}. The program chose {}. {}",
            round.human.word(),
            round.opponent.word(),
            message
        );
    }
}

impl Player for Human {
    fn decide(&mut self, index: usize, total: usize) -> Option<Move> {
        Self::throw(&format!(
            "Sample {}/{}: pick Rock (r), Paper (p), or Scissors (s)",
            index + 1,
            total
        ))
    }
    fn notify(&mut self, round: &Round) {
        Self::show(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_reads_first_character() {
        assert_eq!(Human::read("rock"), Ok(Move::Rock));
        assert_eq!(Human::read("  Paper"), Ok(Move::Paper));
        assert_eq!(Human::read("sure"), Ok(Move::Scissors));
        assert!(Human::read("x").is_err());
        assert!(Human::read("").is_err());
    }
}
