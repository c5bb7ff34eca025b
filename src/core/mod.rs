//! Core statechart data model.
//!
//! This module contains the immutable input types of the engine:
//! - State tree: [`State`], [`StateType`], [`Statechart`]
//! - Transitions: [`Transition`], [`Guard`], [`Action`], [`Event`]
//! - Execution state: [`Configuration`], [`Context`], [`Machine`]
//!
//! Raw trees built from these types are not yet trusted: they must pass
//! through normalization and validation (see [`crate::semantics::Chart`])
//! before any semantic query is answered over them.

mod configuration;
mod context;
mod label;
mod machine;
mod state;
mod transition;

pub use configuration::Configuration;
pub use context::Context;
pub use label::{labels, StateLabel, ROOT_LABEL};
pub use machine::{Machine, MachineStatus, StepRecord};
pub use state::{State, StateType, Statechart};
pub use transition::{Action, Event, Guard, Transition};
