use super::*;
use crate::learning::*;
use crate::players::Human;
use crate::session::*;
use colored::*;
use dialoguer::Input;
use dialoguer::Select;

const MENU: [&str; 5] = [
    "Train a new model",
    "Play a game",
    "Reset the model",
    "Show model status",
    "Quit",
];

/// Terminal front-end over a single session.
pub struct Console {
    session: Controller,
    training: Tuning,
}

impl From<Tuning> for Console {
    fn from(training: Tuning) -> Self {
        let session = match training.seed {
            Some(seed) => Controller::from(Model::seeded(seed)),
            None => Controller::default(),
        };
        Self { session, training }
    }
}

impl Console {
    pub fn run(mut self) -> anyhow::Result<()> {
        println!("Welcome to the AI-powered rock-paper-scissors engine!");
        loop {
            let choice = Select::new()
                .with_prompt("\nWhat would you like to do?")
                .report(false)
                .items(&MENU)
                .default(1)
                .interact()?;
            match choice {
                0 => self.train()?,
                1 => self.play(),
                2 => self.reset(),
                3 => println!("{}", self.session.status()),
                _ => break,
            }
        }
        Ok(())
    }

    /// Starts over, collects rounds from the human, then fits the model.
    fn train(&mut self) -> anyhow::Result<()> {
        let count = match self.training.samples {
            Some(n) => n,
            None => Input::<usize>::new()
                .with_prompt("How many samples would you like the model to train on?")
                .validate_with(|n: &usize| -> Result<(), &str> {
                    match *n > 0 {
                        true => Ok(()),
                        false => Err("Please enter a positive integer."),
                    }
                })
                .interact_text()?,
        };
        self.session.reset();
        println!("Starting interactive training with {} samples.", count);
        match self
            .session
            .run_training_session(count, &mut Human, self.training.hyper())
        {
            Ok(_) => println!(
                "{}",
                "Model training complete! You can now play against the AI.".green()
            ),
            Err(e) => println!("{} {}", "Model training failed:".red(), e),
        }
        Ok(())
    }

    fn play(&mut self) {
        let Some(human) = Human::throw("Please pick Rock (r), Paper (p), or Scissors (s)") else {
            return;
        };
        let play = self.session.play_round(human);
        if play.mode == Mode::Model {
            println!("{}", play.mode.to_string().cyan());
        }
        Human::show(&play.round);
    }

    fn reset(&mut self) {
        self.session.reset();
        println!("Model has been reset. Program will now play randomly.");
    }
}
