//! Generates randomly initialized feed-forward networks and saves them in the FANN text format.
//!
//! A run accumulates a [`Topology`] out of repeated layer sizes, checks it with
//! [`emitter::validate`] and hands it to a [`NetworkBackend`] through
//! [`emitter::construct_and_save`], which builds the network and writes it in floating or fixed
//! point.

pub mod backend;
pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod initialization;
pub mod network;
pub mod topology;

pub use backend::{FannBackend, NetworkBackend};
pub use config::{ExitPolicy, Format, GenConfig};
pub use error::{FannErr, Result};
pub use topology::Topology;
