use super::*;
use crate::CHOICES;
use crate::Epoch;
use crate::LOG_INTERVAL;
use crate::Probability;
use crate::Scalar;
use crate::game::*;
use crate::opponent::RandomOpponent;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

/// Summary of the last successful training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Training {
    pub samples: usize,
    pub hyper: Hyperparameters,
    pub loss: Scalar,
}

impl std::fmt::Display for Training {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} samples, {}, final loss {:.4}",
            self.samples, self.hyper, self.loss
        )
    }
}

#[derive(Debug, Clone)]
struct Fit {
    network: Network,
    training: Training,
}

/// Predicts the human's next move from the previous round.
///
/// Every call to [`Model::train`] starts from freshly initialised weights;
/// nothing carries over between runs. Until a run completes the model has
/// no opinion and [`Model::predict`] throws randomly instead.
#[derive(Debug, Clone, Default)]
pub struct Model {
    seed: Option<u64>,
    fit: Option<Fit>,
}

impl Model {
    /// Model whose weight initialisation is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            fit: None,
        }
    }

    pub fn trained(&self) -> bool {
        self.fit.is_some()
    }

    pub fn training(&self) -> Option<Training> {
        self.fit.as_ref().map(|fit| fit.training)
    }

    pub fn reset(&mut self) {
        self.fit = None;
    }

    /// Full-batch Adam over `samples` for `hyper.epochs` passes.
    /// The loss is checked after every update, the last one included, and
    /// the reported loss is that of the network being committed.
    /// On any error the previous fit, if there was one, stays in place.
    pub fn train(
        &mut self,
        samples: &[Sample],
        hyper: Hyperparameters,
    ) -> Result<Training, TrainError> {
        let hyper = hyper.validate()?;
        if samples.is_empty() {
            return Err(TrainError::InsufficientData);
        }
        log::info!("training on {} samples ({})", samples.len(), hyper);
        let ref mut rng = self.rng();
        let mut network = Network::random(rng);
        let mut adam = Adam::new(hyper.learning_rate);
        let (mut loss, mut grad) = network.gradient(samples);
        guard(0, loss)?;
        for epoch in 1..=hyper.epochs {
            adam.step(&mut network, &grad);
            (loss, grad) = network.gradient(samples);
            guard(epoch, loss)?;
            if epoch % LOG_INTERVAL == 0 {
                log::info!("epoch {:>5} loss {:.4}", epoch, loss);
            }
        }
        let training = Training {
            samples: samples.len(),
            hyper,
            loss,
        };
        self.fit = Some(Fit { network, training });
        Ok(training)
    }

    /// Most likely next human move given the previous round. Ties go to the
    /// earlier move in Rock, Paper, Scissors order. Untrained models throw
    /// uniformly at random.
    pub fn predict(&self, human: Move, opponent: Move, outcome: Outcome) -> Move {
        match self.fit {
            None => RandomOpponent.play(),
            Some(ref fit) => {
                let x = encode(&Round {
                    human,
                    opponent,
                    outcome,
                });
                argmax(&fit.network.logits(&x))
            }
        }
    }

    /// Softmax over the next human move, in canonical move order.
    pub fn distribution(
        &self,
        human: Move,
        opponent: Move,
        outcome: Outcome,
    ) -> Option<[Probability; CHOICES]> {
        self.fit.as_ref().map(|fit| {
            fit.network.probabilities(&encode(&Round {
                human,
                opponent,
                outcome,
            }))
        })
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

fn argmax(logits: &[Scalar; CHOICES]) -> Move {
    let mut best = 0;
    for (i, z) in logits.iter().enumerate().skip(1) {
        if *z > logits[best] {
            best = i;
        }
    }
    Move::from(best as u8)
}

fn guard(epoch: Epoch, loss: Scalar) -> Result<(), TrainError> {
    if loss.is_finite() {
        Ok(())
    } else {
        log::warn!("non-finite loss {} at epoch {}, aborting", loss, epoch);
        Err(TrainError::Diverged { epoch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Sample> {
        vec![
            Sample::new(Move::Paper, Move::Scissors, Outcome::Lose, Move::Scissors),
            Sample::new(Move::Scissors, Move::Rock, Outcome::Lose, Move::Rock),
        ]
    }

    /// The human always throws what would have beaten their own last move.
    fn cycling() -> Vec<Sample> {
        let mut samples = Vec::new();
        for human in Move::ALL {
            for opponent in Move::ALL {
                let round = Round::play(human, opponent);
                samples.push(Sample::new(human, opponent, round.outcome, human.counter()));
            }
        }
        samples
    }

    #[test]
    fn untrained_predicts_without_error() {
        let model = Model::default();
        assert!(!model.trained());
        for _ in 0..100 {
            assert!(Move::ALL.contains(&model.predict(Move::Rock, Move::Paper, Outcome::Win)));
        }
        assert_eq!(model.distribution(Move::Rock, Move::Paper, Outcome::Win), None);
    }

    /// Over many calls the fallback hits every move, as a random throw would.
    #[test]
    fn untrained_fallback_covers_all_moves() {
        let model = Model::default();
        let seen = (0..300)
            .map(|_| model.predict(Move::Rock, Move::Paper, Outcome::Win))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), CHOICES);
    }

    #[test]
    fn empty_training_is_insufficient() {
        let mut model = Model::seeded(1);
        assert_eq!(
            model.train(&[], Hyperparameters::default()),
            Err(TrainError::InsufficientData)
        );
        assert!(!model.trained());
    }

    #[test]
    fn invalid_hyperparameters_change_nothing() {
        let mut model = Model::seeded(1);
        let hyper = Hyperparameters {
            epochs: 0,
            learning_rate: 0.005,
        };
        assert!(matches!(
            model.train(&scenario(), hyper),
            Err(TrainError::InvalidHyperparameter { .. })
        ));
        assert!(!model.trained());
    }

    #[test]
    fn scenario_trains_and_predicts() {
        let mut model = Model::seeded(3);
        let hyper = Hyperparameters {
            epochs: 50,
            ..Default::default()
        };
        let training = model.train(&scenario(), hyper).unwrap();
        assert!(model.trained());
        assert_eq!(training.samples, 2);
        assert_eq!(training.hyper.epochs, 50);
        assert!(training.loss.is_finite());
        let prediction = model.predict(Move::Scissors, Move::Rock, Outcome::Lose);
        assert!(Move::ALL.contains(&prediction));
        let p = model
            .distribution(Move::Scissors, Move::Rock, Outcome::Lose)
            .unwrap();
        assert!((p.iter().sum::<f32>() - 1.).abs() < 1e-5);
    }

    #[test]
    fn learns_a_deterministic_habit() {
        let mut model = Model::seeded(11);
        let training = model.train(&cycling(), Hyperparameters::default()).unwrap();
        assert!(training.loss < 0.5, "loss {}", training.loss);
        for sample in cycling() {
            let ctx = sample.context;
            assert_eq!(
                model.predict(ctx.human, ctx.opponent, ctx.outcome),
                sample.next,
                "{}",
                sample
            );
        }
    }

    #[test]
    fn retraining_starts_from_scratch() {
        let hyper = Hyperparameters {
            epochs: 20,
            ..Default::default()
        };
        let mut once = Model::seeded(5);
        once.train(&scenario(), hyper).unwrap();
        let mut twice = Model::seeded(5);
        twice.train(&cycling(), hyper).unwrap();
        twice.train(&scenario(), hyper).unwrap();
        let a = once.distribution(Move::Paper, Move::Scissors, Outcome::Lose);
        let b = twice.distribution(Move::Paper, Move::Scissors, Outcome::Lose);
        assert_eq!(a, b);
    }

    #[test]
    fn reset_forgets() {
        let mut model = Model::seeded(2);
        model.train(&scenario(), Hyperparameters::default()).unwrap();
        model.reset();
        assert!(!model.trained());
        assert_eq!(model.training(), None);
        model.reset();
        assert!(!model.trained());
    }

    #[test]
    fn argmax_breaks_ties_canonically() {
        assert_eq!(argmax(&[1., 1., 1.]), Move::Rock);
        assert_eq!(argmax(&[0., 2., 2.]), Move::Paper);
        assert_eq!(argmax(&[0., 1., 2.]), Move::Scissors);
    }

    #[test]
    fn overflowing_update_diverges_and_keeps_prior_fit() {
        let mut model = Model::seeded(3);
        let before = model.train(&scenario(), Hyperparameters::default()).unwrap();
        let explosive = Hyperparameters {
            epochs: 1,
            learning_rate: 1e20,
        };
        assert_eq!(
            model.train(&scenario(), explosive),
            Err(TrainError::Diverged { epoch: 1 })
        );
        assert!(model.trained());
        assert_eq!(model.training(), Some(before));
        let p = model
            .distribution(Move::Scissors, Move::Rock, Outcome::Lose)
            .unwrap();
        assert!(p.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn diverging_from_untrained_stays_untrained() {
        let mut model = Model::seeded(3);
        let explosive = Hyperparameters {
            epochs: 1,
            learning_rate: 1e20,
        };
        assert!(matches!(
            model.train(&scenario(), explosive),
            Err(TrainError::Diverged { .. })
        ));
        assert!(!model.trained());
        assert_eq!(model.distribution(Move::Rock, Move::Rock, Outcome::Tie), None);
    }

    #[test]
    fn reported_loss_is_that_of_committed_network() {
        let mut model = Model::seeded(3);
        let training = model.train(&scenario(), Hyperparameters::default()).unwrap();
        let fit = model.fit.as_ref().unwrap();
        let (loss, _) = fit.network.gradient(&scenario());
        assert_eq!(training.loss, loss);
    }

    #[test]
    fn guard_rejects_non_finite_loss() {
        assert_eq!(guard(7, 0.3), Ok(()));
        assert_eq!(guard(7, Scalar::NAN), Err(TrainError::Diverged { epoch: 7 }));
        assert_eq!(
            guard(9, Scalar::INFINITY),
            Err(TrainError::Diverged { epoch: 9 })
        );
    }
}
