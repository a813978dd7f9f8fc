use std::{fs, path::Path};

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{decimal_point, write_network, NetworkBackend};
use crate::{
    config::{Activation, Format, GenConfig},
    initialization::WeightInit,
    network::{Dense, Network},
    topology::Topology,
    FannErr, Result,
};

/// Builds standard FANN networks and saves them in FANN's text format.
pub struct FannBackend<R: Rng = StdRng> {
    config: GenConfig,
    rng: R,
}

impl FannBackend {
    /// Creates a new `FannBackend` following `config`.
    ///
    /// The random number generator is seeded from `config.seed()` when present, from the OS
    /// otherwise.
    pub fn new(config: GenConfig) -> Self {
        let rng = Self::generate_rng(config.seed());
        Self::with_rng(config, rng)
    }

    fn generate_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> FannBackend<R> {
    /// Creates a new `FannBackend` drawing weights from `rng`.
    pub fn with_rng(config: GenConfig, rng: R) -> Self {
        Self { config, rng }
    }

    fn weight_init(&self) -> Result<WeightInit> {
        WeightInit::from_range(self.config.weight_range())
            .map_err(|e| FannErr::Construction(format!("invalid weight range: {e}")))
    }

    /// Checks the topology and returns its sizes along with the amount of connections it needs.
    ///
    /// The count also guards the weight matrices against sizes that can't be allocated.
    fn plan(topology: &Topology) -> Result<(Vec<usize>, usize)> {
        let sizes: Vec<usize> = topology.as_slice().iter().map(|&s| s as usize).collect();

        if sizes.len() < 2 {
            return Err(FannErr::Construction(format!(
                "a network needs at least two layers, got {}",
                sizes.len()
            )));
        }

        if let Some(i) = sizes.iter().position(|&s| s == 0) {
            return Err(FannErr::Construction(format!("layer {i} has no neurons")));
        }

        let connections = sizes
            .windows(2)
            .try_fold(0usize, |acc, pair| {
                (pair[0] + 1)
                    .checked_mul(pair[1])
                    .and_then(|n| acc.checked_add(n))
            })
            .ok_or_else(|| FannErr::Construction("too many connections".into()))?;

        Ok((sizes, connections))
    }
}

impl<R: Rng> NetworkBackend for FannBackend<R> {
    fn build(&mut self, topology: &Topology) -> Result<Network> {
        let (sizes, connections) = Self::plan(topology)?;
        let (hidden, output) = (self.config.hidden(), self.config.output());
        debug!(
            "building network {sizes:?} with {connections} connections, {} hidden and {} output \
             neurons",
            hidden.act_fn, output.act_fn
        );

        let weight_init = self.weight_init()?;
        let nlayers = sizes.len();
        let mut layers = Vec::with_capacity(nlayers - 1);

        for (i, pair) in sizes.windows(2).enumerate() {
            let weights = weight_init.matrix((pair[1], pair[0] + 1), &mut self.rng);
            let Activation { act_fn, steepness } = if i + 2 == nlayers { output } else { hidden };

            layers.push(Dense::new(weights, act_fn, steepness));
        }

        Ok(Network::new(sizes[0], layers))
    }

    fn save(&self, network: &Network, path: &Path, format: Format) -> Result<()> {
        if format == Format::Fixed && decimal_point(network).is_none() {
            return Err(FannErr::Construction(
                "weights are too large for a fixed point network".into(),
            ));
        }

        let mut buf = Vec::new();
        write_network(network, format, &mut buf).map_err(|source| FannErr::Io {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, &buf).map_err(|source| FannErr::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "wrote {format} network {:?} ({} connections, {} bytes) to {}",
            network.layer_sizes(),
            network.num_connections(),
            buf.len(),
            path.display()
        );

        Ok(())
    }
}
