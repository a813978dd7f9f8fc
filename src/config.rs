use std::{fmt, ops::RangeInclusive};

use crate::{network::ActFn, FannErr, Result};

/// Default weight range of freshly created FANN networks.
pub const DEFAULT_WEIGHT_RANGE: RangeInclusive<f32> = -0.1..=0.1;

/// Default activation steepness of hidden and output neurons.
pub const DEFAULT_STEEPNESS: f32 = 0.5;

/// How the numbers of a network are encoded on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Native floating point values.
    #[default]
    Float,
    /// Integers scaled by a power of two, see `backend::write_network`.
    Fixed,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Float => write!(f, "floating point"),
            Format::Fixed => write!(f, "fixed point"),
        }
    }
}

/// Which exit status a failed run reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Every run exits with status 0, failed or not.
    #[default]
    Lenient,
    /// Usage errors exit with 2, any other failure with 1.
    Strict,
}

impl ExitPolicy {
    /// Returns the process exit status for the outcome of a run.
    pub fn status(&self, err: Option<&FannErr>) -> u8 {
        match (self, err) {
            (_, None) | (ExitPolicy::Lenient, Some(_)) => 0,
            (ExitPolicy::Strict, Some(e)) if e.is_usage() => 2,
            (ExitPolicy::Strict, Some(_)) => 1,
        }
    }
}

/// Activation settings shared by every neuron of a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub act_fn: ActFn,
    pub steepness: f32,
}

impl Default for Activation {
    fn default() -> Self {
        Self {
            act_fn: ActFn::SigmoidStepwise,
            steepness: DEFAULT_STEEPNESS,
        }
    }
}

/// Immutable settings of a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    format: Format,
    seed: Option<u64>,
    weight_range: RangeInclusive<f32>,
    hidden: Activation,
    output: Activation,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            seed: None,
            weight_range: DEFAULT_WEIGHT_RANGE,
            hidden: Activation::default(),
            output: Activation::default(),
        }
    }
}

impl GenConfig {
    /// Creates a new `GenConfig` with FANN's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the range initial weights are drawn from.
    ///
    /// # Errors
    /// A usage error if `min > max` or either bound isn't finite.
    pub fn with_weight_range(mut self, min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FannErr::Usage(format!(
                "weight range bounds must be finite, got {min} and {max}"
            )));
        }

        if min > max {
            return Err(FannErr::Usage(format!(
                "minimum weight ({min}) is greater than maximum weight ({max})"
            )));
        }

        self.weight_range = min..=max;
        Ok(self)
    }

    /// Sets the activation of hidden neurons.
    ///
    /// # Errors
    /// A usage error if `steepness` isn't finite.
    pub fn with_hidden(mut self, act_fn: ActFn, steepness: f32) -> Result<Self> {
        self.hidden = Self::activation("hidden", act_fn, steepness)?;
        Ok(self)
    }

    /// Sets the activation of output neurons.
    ///
    /// # Errors
    /// A usage error if `steepness` isn't finite.
    pub fn with_output(mut self, act_fn: ActFn, steepness: f32) -> Result<Self> {
        self.output = Self::activation("output", act_fn, steepness)?;
        Ok(self)
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn weight_range(&self) -> RangeInclusive<f32> {
        self.weight_range.clone()
    }

    pub fn hidden(&self) -> Activation {
        self.hidden
    }

    pub fn output(&self) -> Activation {
        self.output
    }

    fn activation(what: &str, act_fn: ActFn, steepness: f32) -> Result<Activation> {
        if !steepness.is_finite() {
            return Err(FannErr::Usage(format!(
                "{what} steepness must be finite, got {steepness}"
            )));
        }

        Ok(Activation { act_fn, steepness })
    }
}
