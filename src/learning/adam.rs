use super::*;
use crate::ADAM_BETA1;
use crate::ADAM_BETA2;
use crate::ADAM_EPSILON;
use crate::Scalar;

/// Adam with bias-corrected first and second moment estimates, one pair
/// per network parameter.
pub struct Adam {
    lr: Scalar,
    t: i32,
    m: Network,
    v: Network,
}

impl Adam {
    pub fn new(lr: Scalar) -> Self {
        Self {
            lr,
            t: 0,
            m: Network::zeros(),
            v: Network::zeros(),
        }
    }

    pub fn step(&mut self, params: &mut Network, grads: &Network) {
        self.t += 1;
        let bias_correction1 = 1. - ADAM_BETA1.powi(self.t);
        let bias_correction2 = 1. - ADAM_BETA2.powi(self.t);
        for (((p, g), m), v) in params
            .parameters_mut()
            .zip(grads.parameters())
            .zip(self.m.parameters_mut())
            .zip(self.v.parameters_mut())
        {
            *m = ADAM_BETA1 * *m + (1. - ADAM_BETA1) * g;
            *v = ADAM_BETA2 * *v + (1. - ADAM_BETA2) * g * g;
            let m_hat = *m / bias_correction1;
            let v_hat = *v / bias_correction2;
            *p -= self.lr * m_hat / (v_hat.sqrt() + ADAM_EPSILON);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The first bias-corrected step moves every parameter with a nonzero
    /// gradient by lr against the gradient's sign.
    #[test]
    fn first_step_is_signed_lr() {
        let mut params = Network::zeros();
        let mut grads = Network::zeros();
        grads
            .parameters_mut()
            .enumerate()
            .for_each(|(i, g)| *g = if i % 2 == 0 { 0.5 } else { -2. });
        let mut adam = Adam::new(0.01);
        adam.step(&mut params, &grads);
        for (i, p) in params.parameters().enumerate() {
            let expected = if i % 2 == 0 { -0.01 } else { 0.01 };
            assert!((p - expected).abs() < 1e-5, "{}: {}", i, p);
        }
    }

    #[test]
    fn zero_gradient_leaves_parameters() {
        let mut params = Network::zeros();
        params.parameters_mut().for_each(|p| *p = 1.);
        let mut adam = Adam::new(0.01);
        adam.step(&mut params, &Network::zeros());
        assert!(params.parameters().all(|p| *p == 1.));
    }
}
