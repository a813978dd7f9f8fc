#![allow(dead_code)]

use std::{fs, path::Path};

/// What a FANN reader needs out of a saved network.
#[derive(Debug)]
pub struct Saved {
    pub version: String,
    pub decimal_point: Option<u32>,
    pub num_layers: usize,
    /// Neuron count of each layer, bias excluded.
    pub layer_sizes: Vec<usize>,
    pub neurons: Vec<(usize, u32)>,
    /// `(connected_to_neuron, weight)`, fixed point weights already scaled back.
    pub connections: Vec<(usize, f64)>,
}

fn value<'a>(text: &'a str, key: &str) -> &'a str {
    text.lines()
        .find_map(|l| l.strip_prefix(key).and_then(|l| l.strip_prefix('=')))
        .unwrap_or_else(|| panic!("missing {key}"))
}

fn tuples(line: &str) -> Vec<Vec<&str>> {
    line.split(") ")
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.trim_start_matches('(').split(", ").collect())
        .collect()
}

pub fn read(path: &Path) -> Saved {
    let text = fs::read_to_string(path).unwrap();
    let version = text.lines().next().unwrap().to_string();

    let decimal_point = match version.as_str() {
        "FANN_FLO_2.1" => None,
        "FANN_FIX_2.1" => Some(value(&text, "decimal_point").parse().unwrap()),
        other => panic!("unknown version {other}"),
    };
    let multiplier = decimal_point.map_or(1.0, |dp| f64::from(1u32 << dp));

    let layer_sizes: Vec<usize> = value(&text, "layer_sizes")
        .split_whitespace()
        .map(|s| s.parse::<usize>().unwrap() - 1)
        .collect();

    let neurons = tuples(value(
        &text,
        "neurons (num_inputs, activation_function, activation_steepness)",
    ))
    .into_iter()
    .map(|t| (t[0].parse().unwrap(), t[1].parse().unwrap()))
    .collect();

    let connections = tuples(value(&text, "connections (connected_to_neuron, weight)"))
        .into_iter()
        .map(|t| (t[0].parse().unwrap(), t[1].parse::<f64>().unwrap() / multiplier))
        .collect();

    Saved {
        version,
        decimal_point,
        num_layers: value(&text, "num_layers").parse().unwrap(),
        layer_sizes,
        neurons,
        connections,
    }
}
