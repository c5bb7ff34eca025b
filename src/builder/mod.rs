//! Fluent construction of validated statecharts.
//!
//! The builders assemble the raw tree and transition list, then hand
//! the result to the semantic layer for normalization and validation.
//! A [`StatechartBuilder::build`] that returns `Ok` always yields a
//! chart every semantic query accepts.

mod chart;
mod error;
mod state;
mod transition;

pub use chart::StatechartBuilder;
pub use error::BuildError;
pub use state::{state, StateBuilder};
pub use transition::TransitionBuilder;
