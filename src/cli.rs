use std::{ffi::OsStr, path::PathBuf};

use clap::{CommandFactory, Parser};
use log::{debug, info};

use crate::{
    backend::FannBackend,
    config::{ExitPolicy, Format, GenConfig, DEFAULT_STEEPNESS},
    emitter,
    network::ActFn,
    topology::Topology,
    FannErr, Result,
};

/// Command line of `fann-random`.
///
/// Clap's own help flag is disabled: `-h` has to win over every other argument, malformed ones
/// included, so it's handled by `run`.
#[derive(Debug, Parser)]
#[command(
    name = "fann-random",
    about = "Generate a random fann network with a specific topology and write it to the \
             specified file.",
    override_usage = "fann-random -l <SIZE> -l <SIZE> [-l <SIZE>]... [OPTIONS] <FILE>",
    after_help = "The network must have at least two layers.",
    disable_help_flag = true
)]
pub struct Cli {
    /// Write output file as fixed point
    #[arg(short = 'f', long = "fixed-point")]
    pub fixed_point: bool,

    /// Print this help and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Add a layer of a specific size to the network, input layer first
    #[arg(
        short = 'l',
        long = "add-layer",
        visible_alias = "layers",
        value_name = "SIZE",
        allow_hyphen_values = true
    )]
    pub layers: Vec<String>,

    /// Seed the weight initialization, repeated runs then write identical files
    #[arg(long, value_name = "SEED", env = "FANN_RANDOM_SEED")]
    pub seed: Option<u64>,

    /// Lower bound of the initial weights
    #[arg(long, value_name = "WEIGHT", default_value_t = -0.1, allow_hyphen_values = true)]
    pub min_weight: f32,

    /// Upper bound of the initial weights
    #[arg(long, value_name = "WEIGHT", default_value_t = 0.1, allow_hyphen_values = true)]
    pub max_weight: f32,

    /// Activation function of hidden neurons
    #[arg(long, value_enum, value_name = "FUNCTION", default_value_t = ActFn::SigmoidStepwise)]
    pub activation_hidden: ActFn,

    /// Activation function of output neurons
    #[arg(long, value_enum, value_name = "FUNCTION", default_value_t = ActFn::SigmoidStepwise)]
    pub activation_output: ActFn,

    /// Activation steepness of hidden neurons
    #[arg(long, value_name = "STEEPNESS", default_value_t = DEFAULT_STEEPNESS)]
    pub steepness_hidden: f32,

    /// Activation steepness of output neurons
    #[arg(long, value_name = "STEEPNESS", default_value_t = DEFAULT_STEEPNESS)]
    pub steepness_output: f32,

    /// Exit with status 2 on usage errors and 1 on any other failure instead of always 0
    #[arg(long)]
    pub strict_exit: bool,

    /// The file to write the network to
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// What a successful run did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Help was requested, nothing was written.
    Help,
    /// The network was written to this path.
    Written(PathBuf),
}

impl Cli {
    /// Parses every `-l` value into a topology.
    ///
    /// # Errors
    /// `FannErr::Parse` on the first value that isn't an unsigned integer.
    pub fn topology(&self) -> Result<Topology> {
        let mut topology = Topology::new();

        for value in &self.layers {
            let size = value.trim().parse().map_err(|source| FannErr::Parse {
                value: value.clone(),
                source,
            })?;

            topology.add_layer(size);
        }

        Ok(topology)
    }

    /// Builds the generation settings out of the options.
    ///
    /// # Errors
    /// A usage error if the weight range or a steepness is invalid.
    pub fn config(&self) -> Result<GenConfig> {
        let format = if self.fixed_point {
            Format::Fixed
        } else {
            Format::Float
        };

        GenConfig::new()
            .with_format(format)
            .with_seed(self.seed)
            .with_weight_range(self.min_weight, self.max_weight)?
            .with_hidden(self.activation_hidden, self.steepness_hidden)?
            .with_output(self.activation_output, self.steepness_output)
    }

    pub fn exit_policy(&self) -> ExitPolicy {
        if self.strict_exit {
            ExitPolicy::Strict
        } else {
            ExitPolicy::Lenient
        }
    }

    /// Generates the network this command line describes.
    ///
    /// # Errors
    /// Any `FannErr`, nothing is written in that case.
    pub fn execute(&self) -> Result<Outcome> {
        if self.help {
            return Ok(Outcome::Help);
        }

        let topology = self.topology()?;
        let path = emitter::validate(&topology, &self.files)?;
        let config = self.config()?;

        if let Some(seed) = config.seed() {
            debug!("seeding weights with {seed}");
        }

        let format = config.format();
        let mut backend = FannBackend::new(config);
        emitter::construct_and_save(&mut backend, &topology, path, format)?;
        info!("network saved to {}", path.display());

        Ok(Outcome::Written(path.to_path_buf()))
    }
}

/// Parses `args` (program name first) and runs them.
///
/// # Returns
/// The exit policy requested by `args` along with the outcome of the run.
pub fn run<T: AsRef<OsStr>>(args: &[T]) -> (ExitPolicy, Result<Outcome>) {
    let cli = match Cli::try_parse_from(args.iter().map(AsRef::<OsStr>::as_ref)) {
        Ok(cli) => cli,
        Err(e) => {
            // Nothing was parsed, fall back to looking at the raw flags.
            let policy = if has_flag(args, &["--strict-exit"]) {
                ExitPolicy::Strict
            } else {
                ExitPolicy::Lenient
            };

            if has_flag(args, &["-h", "--help"]) {
                return (policy, Ok(Outcome::Help));
            }

            return (policy, Err(e.into()));
        }
    };

    (cli.exit_policy(), cli.execute())
}

/// Returns the usage text.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

fn has_flag<T: AsRef<OsStr>>(args: &[T], flags: &[&str]) -> bool {
    args.iter()
        .skip(1)
        .map(AsRef::<OsStr>::as_ref)
        .take_while(|&a| a != OsStr::new("--"))
        .any(|a| flags.iter().any(|&f| a == OsStr::new(f)))
}
