use super::*;
use crate::CHOICES;
use crate::FEATURES;
use crate::HIDDEN;
use crate::Probability;
use crate::Scalar;
use rand::Rng;

/// Feed-forward classifier: features -> ReLU hidden layer -> move logits.
///
/// The same type doubles as a gradient buffer and as Adam's moment
/// estimates, since all three share the parameter layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    hidden: Layer<FEATURES, HIDDEN>,
    output: Layer<HIDDEN, CHOICES>,
}

impl Network {
    pub const fn zeros() -> Self {
        Self {
            hidden: Layer::zeros(),
            output: Layer::zeros(),
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            hidden: Layer::random(rng),
            output: Layer::random(rng),
        }
    }

    pub fn logits(&self, x: &[Scalar; FEATURES]) -> [Scalar; CHOICES] {
        self.output.forward(&relu(self.hidden.forward(x)))
    }

    pub fn probabilities(&self, x: &[Scalar; FEATURES]) -> [Probability; CHOICES] {
        softmax(&self.logits(x))
    }

    /// Mean cross-entropy over the batch and its gradient.
    pub fn gradient(&self, samples: &[Sample]) -> (Scalar, Self) {
        let n = samples.len() as Scalar;
        let mut grad = Self::zeros();
        let mut loss = 0.;
        for sample in samples {
            let x = sample.features();
            let y = sample.label();
            let pre = self.hidden.forward(&x);
            let act = relu(pre);
            let logits = self.output.forward(&act);
            loss += logsumexp(&logits) - logits[y];
            let mut dz = softmax(&logits);
            dz[y] -= 1.;
            dz.iter_mut().for_each(|d| *d /= n);
            let mut dh = grad.output.accumulate(&self.output, &act, &dz);
            dh.iter_mut()
                .zip(pre.iter())
                .filter(|(_, p)| **p <= 0.)
                .for_each(|(d, _)| *d = 0.);
            grad.hidden.accumulate(&self.hidden, &x, &dh);
        }
        (loss / n, grad)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Scalar> {
        self.hidden.parameters().chain(self.output.parameters())
    }

    pub fn parameters_mut(&mut self) -> impl Iterator<Item = &mut Scalar> {
        self.hidden
            .parameters_mut()
            .chain(self.output.parameters_mut())
    }
}

fn relu<const N: usize>(mut x: [Scalar; N]) -> [Scalar; N] {
    x.iter_mut().for_each(|v| *v = v.max(0.));
    x
}

fn logsumexp(z: &[Scalar; CHOICES]) -> Scalar {
    let max = z.iter().copied().fold(Scalar::NEG_INFINITY, Scalar::max);
    max + z.iter().map(|v| (v - max).exp()).sum::<Scalar>().ln()
}

fn softmax(z: &[Scalar; CHOICES]) -> [Probability; CHOICES] {
    let max = z.iter().copied().fold(Scalar::NEG_INFINITY, Scalar::max);
    let mut p = z.map(|v| (v - max).exp());
    let sum = p.iter().sum::<Scalar>();
    p.iter_mut().for_each(|v| *v /= sum);
    p
}
