use crate::Scalar;
use rand::Rng;

/// Dense affine map from `I` inputs to `O` outputs. Weights are stored
/// row-major by output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<const I: usize, const O: usize> {
    weights: [[Scalar; I]; O],
    bias: [Scalar; O],
}

impl<const I: usize, const O: usize> Layer<I, O> {
    pub const fn zeros() -> Self {
        Self {
            weights: [[0.; I]; O],
            bias: [0.; O],
        }
    }

    /// Uniform in ±1/sqrt(fan_in) for weights and biases alike.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let bound = 1. / (I as Scalar).sqrt();
        let mut layer = Self::zeros();
        layer
            .parameters_mut()
            .for_each(|p| *p = rng.random_range(-bound..bound));
        layer
    }

    pub fn forward(&self, x: &[Scalar; I]) -> [Scalar; O] {
        let mut y = self.bias;
        for (y, row) in y.iter_mut().zip(self.weights.iter()) {
            *y += row.iter().zip(x.iter()).map(|(w, x)| w * x).sum::<Scalar>();
        }
        y
    }

    /// Accumulates the parameter gradient for upstream gradient `dy` at
    /// input `x` into `self`, returning the gradient w.r.t. the input as
    /// seen through `through` (the layer whose parameters produced `y`).
    pub fn accumulate(
        &mut self,
        through: &Self,
        x: &[Scalar; I],
        dy: &[Scalar; O],
    ) -> [Scalar; I] {
        let mut dx = [0.; I];
        for o in 0..O {
            self.bias[o] += dy[o];
            for i in 0..I {
                self.weights[o][i] += dy[o] * x[i];
                dx[i] += dy[o] * through.weights[o][i];
            }
        }
        dx
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Scalar> {
        self.weights.as_flattened().iter().chain(self.bias.iter())
    }

    pub fn parameters_mut(&mut self) -> impl Iterator<Item = &mut Scalar> {
        self.weights
            .as_flattened_mut()
            .iter_mut()
            .chain(self.bias.iter_mut())
    }
}
