//! The FANN 2.1 text format.
//!
//! A saved network is a list of `key=value` lines: training parameters, cascade parameters, the
//! layer sizes (bias neurons included) and finally one line listing every neuron and one line
//! listing every connection. Fixed point files additionally carry a `decimal_point` and store
//! every real number as `round(x * 2^decimal_point)`.

use std::io::{self, Write};

use log::debug;

use crate::{
    config::Format,
    network::{ActFn, Network},
};

pub const FLO_VERSION: &str = "FANN_FLO_2.1";
pub const FIX_VERSION: &str = "FANN_FIX_2.1";

/// Training parameters of a freshly created network, in file order.
const LEARNING_RATE: f32 = 0.7;
const CONNECTION_RATE: f32 = 1.0;
const NETWORK_TYPE: u32 = 0;
const LEARNING_MOMENTUM: f32 = 0.0;
const TRAINING_ALGORITHM: u32 = 2;
const TRAIN_ERROR_FUNCTION: u32 = 1;
const TRAIN_STOP_FUNCTION: u32 = 0;
const CASCADE_OUTPUT_CHANGE_FRACTION: f32 = 0.01;
const QUICKPROP_DECAY: f32 = -0.0001;
const QUICKPROP_MU: f32 = 1.75;
const RPROP_INCREASE_FACTOR: f32 = 1.2;
const RPROP_DECREASE_FACTOR: f32 = 0.5;
const RPROP_DELTA_MIN: f32 = 0.0;
const RPROP_DELTA_MAX: f32 = 50.0;
const RPROP_DELTA_ZERO: f32 = 0.1;
const CASCADE_OUTPUT_STAGNATION_EPOCHS: u32 = 12;
const CASCADE_CANDIDATE_CHANGE_FRACTION: f32 = 0.01;
const CASCADE_CANDIDATE_STAGNATION_EPOCHS: u32 = 12;
const CASCADE_MAX_OUT_EPOCHS: u32 = 150;
const CASCADE_MIN_OUT_EPOCHS: u32 = 50;
const CASCADE_MAX_CAND_EPOCHS: u32 = 150;
const CASCADE_MIN_CAND_EPOCHS: u32 = 50;
const CASCADE_NUM_CANDIDATE_GROUPS: u32 = 2;
const BIT_FAIL_LIMIT: f32 = 0.35;
const CASCADE_CANDIDATE_LIMIT: f32 = 1000.0;
const CASCADE_WEIGHT_MULTIPLIER: f32 = 0.4;
const CASCADE_STEEPNESSES: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

/// How real numbers get printed.
#[derive(Clone, Copy)]
enum Encoder {
    Float,
    Fixed { multiplier: f32 },
}

impl Encoder {
    /// Formats a real number that may be negative.
    fn signed(&self, x: f32) -> String {
        match self {
            Encoder::Float => sci(x),
            Encoder::Fixed { multiplier } => scale(x, *multiplier).to_string(),
        }
    }

    /// Formats a real number that is expected to be non negative.
    fn unsigned(&self, x: f32) -> String {
        match self {
            Encoder::Float => sci(x),
            Encoder::Fixed { multiplier } => (scale(x, *multiplier) as u32).to_string(),
        }
    }
}

fn scale(x: f32, multiplier: f32) -> i32 {
    (x * multiplier + 0.5).floor() as i32
}

/// Formats like C's `%.20e`: Rust writes `1.5e-1` where C writes `1.5e-01`.
fn sci(x: f32) -> String {
    let s = format!("{:.20e}", f64::from(x));
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s;
    };

    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Integer bits a fixed point number can use: 32 minus the sign and one guard bit.
const FIXED_BITS: u32 = i32::BITS - 2;

/// Computes how many fractional bits a fixed point network can afford.
///
/// The largest absolute sum of incoming weights of any neuron bounds the integer part, the
/// remaining bits of a 32 bit signed integer (minus one guard bit) are halved so that two fixed
/// point numbers can be multiplied without overflowing.
///
/// # Returns
/// `None` if that sum doesn't fit in the integer part even without fractional bits.
pub fn decimal_point(network: &Network) -> Option<u32> {
    // f32 magnitudes summed as f64 stay finite.
    let mut max_sum = network
        .weights()
        .flat_map(|w| {
            w.rows()
                .into_iter()
                .map(|row| row.iter().map(|&x| f64::from(x.abs())).sum::<f64>())
        })
        .fold(0.0_f64, f64::max);

    let mut bits_for_max = 0;
    while max_sum >= 1.0 {
        max_sum /= 2.0;
        bits_for_max += 1;
    }

    FIXED_BITS.checked_sub(bits_for_max).map(|bits| bits / 2)
}

/// Writes `network` to `w` in the FANN 2.1 text format.
///
/// # Errors
/// Whatever `w` fails with, `InvalidInput` if a fixed point `network` has no usable decimal point.
pub fn write_network<W: Write>(network: &Network, format: Format, w: &mut W) -> io::Result<()> {
    let encoder = match format {
        Format::Float => {
            writeln!(w, "{FLO_VERSION}")?;
            Encoder::Float
        }
        Format::Fixed => {
            let decimal_point = decimal_point(network).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "weights are too large for a fixed point network",
                )
            })?;
            debug!("fixed point network uses decimal point {decimal_point}");
            writeln!(w, "{FIX_VERSION}")?;
            writeln!(w, "decimal_point={decimal_point}")?;
            Encoder::Fixed {
                multiplier: (1u32 << decimal_point) as f32,
            }
        }
    };

    write_parameters(network, encoder, w)?;
    write_neurons(network, encoder, w)?;
    write_connections(network, encoder, w)
}

fn write_parameters<W: Write>(network: &Network, encoder: Encoder, w: &mut W) -> io::Result<()> {
    writeln!(w, "num_layers={}", network.num_layers())?;
    writeln!(w, "learning_rate={LEARNING_RATE:.6}")?;
    writeln!(w, "connection_rate={CONNECTION_RATE:.6}")?;
    writeln!(w, "network_type={NETWORK_TYPE}")?;
    writeln!(w, "learning_momentum={LEARNING_MOMENTUM:.6}")?;
    writeln!(w, "training_algorithm={TRAINING_ALGORITHM}")?;
    writeln!(w, "train_error_function={TRAIN_ERROR_FUNCTION}")?;
    writeln!(w, "train_stop_function={TRAIN_STOP_FUNCTION}")?;
    writeln!(w, "cascade_output_change_fraction={CASCADE_OUTPUT_CHANGE_FRACTION:.6}")?;
    writeln!(w, "quickprop_decay={QUICKPROP_DECAY:.6}")?;
    writeln!(w, "quickprop_mu={QUICKPROP_MU:.6}")?;
    writeln!(w, "rprop_increase_factor={RPROP_INCREASE_FACTOR:.6}")?;
    writeln!(w, "rprop_decrease_factor={RPROP_DECREASE_FACTOR:.6}")?;
    writeln!(w, "rprop_delta_min={RPROP_DELTA_MIN:.6}")?;
    writeln!(w, "rprop_delta_max={RPROP_DELTA_MAX:.6}")?;
    writeln!(w, "rprop_delta_zero={RPROP_DELTA_ZERO:.6}")?;
    writeln!(w, "cascade_output_stagnation_epochs={CASCADE_OUTPUT_STAGNATION_EPOCHS}")?;
    writeln!(w, "cascade_candidate_change_fraction={CASCADE_CANDIDATE_CHANGE_FRACTION:.6}")?;
    writeln!(w, "cascade_candidate_stagnation_epochs={CASCADE_CANDIDATE_STAGNATION_EPOCHS}")?;
    writeln!(w, "cascade_max_out_epochs={CASCADE_MAX_OUT_EPOCHS}")?;
    writeln!(w, "cascade_min_out_epochs={CASCADE_MIN_OUT_EPOCHS}")?;
    writeln!(w, "cascade_max_cand_epochs={CASCADE_MAX_CAND_EPOCHS}")?;
    writeln!(w, "cascade_min_cand_epochs={CASCADE_MIN_CAND_EPOCHS}")?;
    writeln!(w, "cascade_num_candidate_groups={CASCADE_NUM_CANDIDATE_GROUPS}")?;
    writeln!(w, "bit_fail_limit={}", encoder.unsigned(BIT_FAIL_LIMIT))?;
    writeln!(w, "cascade_candidate_limit={}", encoder.unsigned(CASCADE_CANDIDATE_LIMIT))?;
    writeln!(w, "cascade_weight_multiplier={}", encoder.unsigned(CASCADE_WEIGHT_MULTIPLIER))?;

    writeln!(w, "cascade_activation_functions_count={}", ActFn::CASCADE_CANDIDATES.len())?;
    write!(w, "cascade_activation_functions=")?;
    for act_fn in ActFn::CASCADE_CANDIDATES {
        write!(w, "{} ", act_fn.code())?;
    }
    writeln!(w)?;

    writeln!(w, "cascade_activation_steepnesses_count={}", CASCADE_STEEPNESSES.len())?;
    write!(w, "cascade_activation_steepnesses=")?;
    for steepness in CASCADE_STEEPNESSES {
        write!(w, "{} ", encoder.unsigned(steepness))?;
    }
    writeln!(w)?;

    write!(w, "layer_sizes=")?;
    for size in network.layer_sizes() {
        write!(w, "{} ", size + 1)?;
    }
    writeln!(w)?;

    writeln!(w, "scale_included=0")
}

fn write_neurons<W: Write>(network: &Network, encoder: Encoder, w: &mut W) -> io::Result<()> {
    write!(w, "neurons (num_inputs, activation_function, activation_steepness)=")?;

    // Input neurons and the input bias have neither connections nor activation.
    for _ in 0..=network.inputs() {
        write!(w, "(0, 0, {}) ", encoder.unsigned(0.0))?;
    }

    for layer in network.layers() {
        let code = layer.act_fn().code();
        let steepness = encoder.unsigned(layer.steepness());

        for _ in 0..layer.size() {
            write!(w, "({}, {code}, {steepness}) ", layer.fan_in())?;
        }

        // bias
        write!(w, "(0, {code}, {steepness}) ")?;
    }

    writeln!(w)
}

fn write_connections<W: Write>(network: &Network, encoder: Encoder, w: &mut W) -> io::Result<()> {
    write!(w, "connections (connected_to_neuron, weight)=")?;

    // Index of the first neuron of the layer feeding the current one.
    let mut first = 0;
    for layer in network.layers() {
        for row in layer.weights().rows() {
            for (i, &weight) in row.iter().enumerate() {
                write!(w, "({}, {}) ", first + i, encoder.signed(weight))?;
            }
        }

        first += layer.fan_in();
    }

    writeln!(w)
}
