use std::ops::RangeInclusive;

use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::{Uniform, uniform::Error as UniformError};

/// How the connection weights of a new network are drawn.
#[derive(Debug, Clone)]
pub enum WeightInit {
    /// Every weight takes the same value.
    Const(f32),
    /// Weights are drawn uniformly from `[low, high)`.
    Uniform(Uniform<f32>),
}

impl WeightInit {
    /// Picks the initializer for `range`, a single point yields constant weights.
    ///
    /// # Errors
    /// If the range is inverted, not finite or too wide to sample from.
    pub fn from_range(range: RangeInclusive<f32>) -> Result<Self, UniformError> {
        let (low, high) = range.into_inner();

        if low == high {
            return Ok(Self::Const(low));
        }

        Ok(Self::Uniform(Uniform::new(low, high)?))
    }

    /// Draws the weight matrix of a layer with `shape.0` neurons fed by `shape.1` inputs.
    pub fn matrix<R: Rng + ?Sized>(&self, shape: (usize, usize), rng: &mut R) -> Array2<f32> {
        match self {
            WeightInit::Const(value) => Array2::from_elem(shape, *value),
            WeightInit::Uniform(distribution) => Array2::random_using(shape, distribution, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn uniform_weights_stay_in_range() {
        let init = WeightInit::from_range(-0.1..=0.1).unwrap();
        let weights = init.matrix((40, 25), &mut StdRng::seed_from_u64(42));

        assert_eq!(weights.dim(), (40, 25));
        assert!(weights.iter().all(|w| (-0.1..0.1).contains(w)));
    }

    #[test]
    fn single_point_range_is_constant() {
        let init = WeightInit::from_range(0.25..=0.25).unwrap();
        assert!(matches!(init, WeightInit::Const(v) if v == 0.25));

        let weights = init.matrix((3, 4), &mut StdRng::seed_from_u64(0));
        assert!(weights.iter().all(|&w| w == 0.25));
    }

    #[test]
    fn rejects_unusable_ranges() {
        assert!(WeightInit::from_range(1.0..=-1.0).is_err());
        assert!(WeightInit::from_range(-3e38..=3e38).is_err());
    }

    #[test]
    fn same_seed_same_weights() {
        let init = WeightInit::from_range(-1.0..=1.0).unwrap();

        let a = init.matrix((4, 4), &mut StdRng::seed_from_u64(7));
        let b = init.matrix((4, 4), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
