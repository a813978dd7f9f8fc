use std::path::{Path, PathBuf};

use log::debug;

use crate::{backend::NetworkBackend, config::Format, topology::Topology, FannErr, Result};

/// Checks that a run has exactly one output path and a topology of at least two layers.
///
/// # Returns
/// The output path, or a usage error.
pub fn validate<'a>(topology: &Topology, paths: &'a [PathBuf]) -> Result<&'a Path> {
    let [path] = paths else {
        return Err(FannErr::Usage(format!(
            "missing or extra output file path, got {} paths",
            paths.len()
        )));
    };

    if topology.layer_count() < 2 {
        return Err(FannErr::Usage(format!(
            "network needs at least two layers, got {}",
            topology.layer_count()
        )));
    }

    Ok(path.as_path())
}

/// Builds a network shaped after `topology` and writes it to `path`.
///
/// The network is dropped before returning, whether the write succeeded or not.
///
/// # Errors
/// `FannErr::Construction` if `backend` rejects the topology, `FannErr::Io` if the file couldn't
/// be written.
pub fn construct_and_save<B>(
    backend: &mut B,
    topology: &Topology,
    path: &Path,
    format: Format,
) -> Result<()>
where
    B: NetworkBackend + ?Sized,
{
    debug!("topology: {:?}", topology.as_slice());

    let network = backend.build(topology)?;
    backend.save(&network, path, format)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::network::Network;

    /// Records what it was asked to do instead of building anything.
    #[derive(Default)]
    struct Recorder {
        built: Vec<Vec<u32>>,
        saved: RefCell<Vec<(PathBuf, Format)>>,
        fail_build: bool,
    }

    impl NetworkBackend for Recorder {
        fn build(&mut self, topology: &Topology) -> Result<Network> {
            if self.fail_build {
                return Err(FannErr::Construction("nope".into()));
            }

            self.built.push(topology.as_slice().to_vec());
            Ok(Network::new(topology.as_slice()[0] as usize, Vec::new()))
        }

        fn save(&self, _network: &Network, path: &Path, format: Format) -> Result<()> {
            self.saved.borrow_mut().push((path.to_path_buf(), format));
            Ok(())
        }
    }

    fn topology(sizes: &[u32]) -> Topology {
        sizes.iter().copied().collect()
    }

    #[test]
    fn validate_accepts_single_path_and_two_layers() {
        let paths = vec![PathBuf::from("out.net")];
        let path = validate(&topology(&[2, 1]), &paths).unwrap();

        assert_eq!(path, Path::new("out.net"));
    }

    #[test]
    fn validate_rejects_missing_or_extra_paths() {
        let t = topology(&[2, 1]);

        assert!(validate(&t, &[]).unwrap_err().is_usage());

        let two = vec![PathBuf::from("a.net"), PathBuf::from("b.net")];
        assert!(validate(&t, &two).unwrap_err().is_usage());
    }

    #[test]
    fn validate_rejects_single_layer() {
        let paths = vec![PathBuf::from("out.net")];
        let err = validate(&topology(&[4]), &paths).unwrap_err();

        assert!(err.to_string().contains("at least two layers"));
    }

    #[test]
    fn construct_and_save_builds_then_saves() {
        let mut backend = Recorder::default();
        let path = Path::new("out.net");

        construct_and_save(&mut backend, &topology(&[3, 5, 2]), path, Format::Fixed).unwrap();

        assert_eq!(backend.built, vec![vec![3, 5, 2]]);
        assert_eq!(
            backend.saved.into_inner(),
            vec![(PathBuf::from("out.net"), Format::Fixed)]
        );
    }

    #[test]
    fn construction_failure_skips_save() {
        let mut backend = Recorder {
            fail_build: true,
            ..Default::default()
        };

        let err = construct_and_save(&mut backend, &topology(&[3, 2]), Path::new("x"), Format::Float)
            .unwrap_err();

        assert!(matches!(err, FannErr::Construction(_)));
        assert!(backend.saved.into_inner().is_empty());
    }
}
