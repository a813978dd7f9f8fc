use ndarray::Array2;

use super::ActFn;

/// A fully connected layer.
///
/// `weights` has one row per neuron of this layer and one column per neuron of the previous
/// layer, where the last column belongs to the previous layer's bias neuron.
#[derive(Debug, Clone)]
pub struct Dense {
    weights: Array2<f32>,
    act_fn: ActFn,
    steepness: f32,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `weights` - The incoming connection weights, shaped `(neurons, prev_neurons + 1)`.
    /// * `act_fn` - The activation function of every neuron in the layer.
    /// * `steepness` - The activation steepness of every neuron in the layer.
    pub fn new(weights: Array2<f32>, act_fn: ActFn, steepness: f32) -> Self {
        Self {
            weights,
            act_fn,
            steepness,
        }
    }

    /// Returns the amount of neurons, bias excluded.
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Returns the amount of incoming connections of each neuron, previous bias included.
    pub fn fan_in(&self) -> usize {
        self.weights.ncols()
    }

    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    pub fn act_fn(&self) -> ActFn {
        self.act_fn
    }

    pub fn steepness(&self) -> f32 {
        self.steepness
    }
}
