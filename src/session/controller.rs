use super::*;
use crate::game::*;
use crate::learning::*;
use crate::opponent::*;

/// Whether a round has been played since the session started or was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    HasContext,
}

/// One game session against the adaptive opponent.
///
/// Owns the collected samples, the model fit to them and the last played
/// round. Samples and model share a lifecycle: resetting one always
/// resets the other.
///
/// Training takes `&mut self`, so a session never trains while it is also
/// predicting. Callers sharing a session across threads wrap it in a lock.
#[derive(Debug, Default)]
pub struct Controller {
    store: SampleStore,
    model: Model,
    context: Option<Round>,
}

impl From<Model> for Controller {
    fn from(model: Model) -> Self {
        Self {
            store: SampleStore::default(),
            model,
            context: None,
        }
    }
}

impl Controller {
    pub fn state(&self) -> State {
        match self.context {
            None => State::Idle,
            Some(_) => State::HasContext,
        }
    }
    pub fn context(&self) -> Option<Round> {
        self.context
    }
    pub fn store(&self) -> &SampleStore {
        &self.store
    }
    pub fn model(&self) -> &Model {
        &self.model
    }
    pub fn status(&self) -> Status {
        Status {
            trained: self.model.trained(),
            samples: self.store.size(),
            context: self.context,
            training: self.model.training(),
        }
    }
}

impl Controller {
    /// Clears samples, model and last round. Idempotent.
    pub fn reset(&mut self) {
        self.store.reset();
        self.model.reset();
        self.context = None;
        log::info!("session reset");
    }

    pub fn add_datum(&mut self, sample: Sample) {
        self.store.append(sample);
    }

    /// Fits the model to every sample collected so far.
    pub fn train_model(&mut self, hyper: Hyperparameters) -> Result<Training, TrainError> {
        self.model
            .train(self.store.all(), hyper)
            .inspect(|training| log::info!("model trained: {}", training))
            .inspect_err(|e| log::warn!("model left as it was: {}", e))
    }

    /// The model's guess at the human's next move; random when untrained.
    pub fn predict_move(&self, human: Move, opponent: Move, outcome: Outcome) -> Move {
        self.model.predict(human, opponent, outcome)
    }

    pub fn play(&self) -> Move {
        RandomOpponent.play()
    }

    pub fn evaluate(&self, human: Move, opponent: Move) -> Outcome {
        evaluate(human, opponent)
    }
}

impl Controller {
    /// Plays one round against `human`. The opponent counters the model's
    /// prediction when there is both a trained model and a previous round,
    /// and throws randomly otherwise.
    pub fn play_round(&mut self, human: Move) -> Play {
        let (opponent, mode) = match (self.model.trained(), self.context) {
            (true, Some(ctx)) => (
                counter_for(self.predict_move(ctx.human, ctx.opponent, ctx.outcome)),
                Mode::Model,
            ),
            _ => (self.play(), Mode::Random),
        };
        let round = Round::play(human, opponent);
        self.context = Some(round);
        log::debug!("{:?} {}", mode, round);
        Play { round, mode }
    }

    /// Collects up to `count` rounds from `player` against a random opponent,
    /// storing a sample for every consecutive pair of rounds, then trains.
    ///
    /// Only rounds of this session pair up: the round played before the
    /// session started never becomes the context of a sample.
    pub fn run_training_session<P: Player>(
        &mut self,
        count: usize,
        player: &mut P,
        hyper: Hyperparameters,
    ) -> Result<Training, TrainError> {
        log::info!("collecting {} rounds", count);
        let mut previous = None::<Round>;
        for index in 0..count {
            let Some(human) = player.decide(index, count) else {
                log::warn!("player left after {} of {} rounds", index, count);
                break;
            };
            let round = Round::play(human, self.play());
            if let Some(ctx) = previous {
                self.store.append(Sample {
                    context: ctx,
                    next: human,
                });
            }
            previous = Some(round);
            self.context = Some(round);
            player.notify(&round);
        }
        self.train_model(hyper)
    }
}
