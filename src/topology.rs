/// The shape of a feed-forward network: the neuron count of each layer, input first.
///
/// A `Topology` is a plain accumulator, sizes are appended as they come and nothing is validated
/// until the network gets built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    layers: Vec<u32>,
}

impl Topology {
    /// Creates a new empty `Topology`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer of `size` neurons after the last one.
    pub fn add_layer(&mut self, size: u32) {
        self.layers.push(size);
    }

    /// Returns the amount of layers added so far.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layer sizes in insertion order.
    pub fn as_slice(&self) -> &[u32] {
        &self.layers
    }
}

impl FromIterator<u32> for Topology {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_topology_is_empty() {
        let topology = Topology::new();

        assert_eq!(topology.layer_count(), 0);
        assert!(topology.as_slice().is_empty());
    }

    #[test]
    fn add_layer_keeps_insertion_order() {
        let mut topology = Topology::new();
        for size in [3, 5, 2] {
            topology.add_layer(size);
        }

        assert_eq!(topology.layer_count(), 3);
        assert_eq!(topology.as_slice(), &[3, 5, 2]);
    }

    #[test]
    fn grows_past_any_initial_capacity() {
        let mut topology = Topology::new();
        for size in 1..=1000 {
            topology.add_layer(size);
        }

        assert_eq!(topology.layer_count(), 1000);
        assert!(topology.as_slice().iter().copied().eq(1..=1000));
    }

    #[test]
    fn zero_sized_layers_are_accepted() {
        let mut topology = Topology::new();
        topology.add_layer(0);

        assert_eq!(topology.as_slice(), &[0]);
    }
}
