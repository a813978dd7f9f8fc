mod fann;
mod format;

use std::path::Path;

use crate::{config::Format, network::Network, topology::Topology, Result};

pub use fann::FannBackend;
pub use format::{decimal_point, write_network, FIX_VERSION, FLO_VERSION};

/// Something that knows how to create networks and persist them.
///
/// The emitter only talks to networks through this trait, it never looks inside them.
pub trait NetworkBackend {
    /// Builds a fully connected network shaped after `topology`, with freshly initialized weights.
    ///
    /// # Errors
    /// `FannErr::Construction` if the topology can't be turned into a network.
    fn build(&mut self, topology: &Topology) -> Result<Network>;

    /// Writes `network` to `path` using `format`, creating or truncating the file.
    ///
    /// # Errors
    /// `FannErr::Io` if the file can't be written, `FannErr::Construction` if `network` can't be
    /// encoded in `format`.
    fn save(&self, network: &Network, path: &Path, format: Format) -> Result<()>;
}
