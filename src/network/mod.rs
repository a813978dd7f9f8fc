mod activation;
mod layer;

use ndarray::Array2;

pub use activation::ActFn;
pub use layer::Dense;

/// A fully connected feed-forward network.
///
/// Every layer owns a bias neuron after its regular ones. The input layer has no incoming
/// connections, so it is described by its size alone.
#[derive(Debug, Clone)]
pub struct Network {
    inputs: usize,
    layers: Vec<Dense>,
}

impl Network {
    /// Creates a new `Network`.
    ///
    /// # Arguments
    /// * `inputs` - The amount of input neurons, bias excluded.
    /// * `layers` - The hidden and output layers, in order.
    pub fn new<I>(inputs: usize, layers: I) -> Self
    where
        I: IntoIterator<Item = Dense>,
    {
        Self {
            inputs,
            layers: layers.into_iter().collect(),
        }
    }

    /// Returns the amount of input neurons, bias excluded.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Returns the hidden and output layers.
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Returns the amount of layers, input included.
    pub fn num_layers(&self) -> usize {
        self.layers.len() + 1
    }

    /// Returns the neuron count of every layer, input first and bias neurons excluded.
    pub fn layer_sizes(&self) -> Vec<usize> {
        std::iter::once(self.inputs)
            .chain(self.layers.iter().map(Dense::size))
            .collect()
    }

    /// Returns the total amount of connections.
    pub fn num_connections(&self) -> usize {
        self.layers.iter().map(|layer| layer.weights().len()).sum()
    }

    /// Iterates over every weight matrix, see `Dense::weights`.
    pub fn weights(&self) -> impl Iterator<Item = &Array2<f32>> {
        self.layers.iter().map(Dense::weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net() -> Network {
        Network::new(
            3,
            [
                Dense::new(Array2::zeros((5, 4)), ActFn::SigmoidStepwise, 0.5),
                Dense::new(Array2::zeros((2, 6)), ActFn::Linear, 1.0),
            ],
        )
    }

    #[test]
    fn layer_sizes_exclude_bias() {
        let net = net();

        assert_eq!(net.num_layers(), 3);
        assert_eq!(net.layer_sizes(), vec![3, 5, 2]);
    }

    #[test]
    fn connections_count_bias() {
        assert_eq!(net().num_connections(), 5 * 4 + 2 * 6);
    }
}
