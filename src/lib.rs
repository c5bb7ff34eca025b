//! Harel: a hierarchical statechart semantics engine
//!
//! Harel models statecharts in the Eshuis formalization: a labelled
//! state tree with OR-composition (exactly one active child) and
//! AND-composition (all children active), configurations of
//! simultaneously active states, and event-driven steps over labelled
//! transitions.
//!
//! # Core Concepts
//!
//! - **Chart**: a normalized, validated state tree answering semantic
//!   queries (ancestry, orthogonality, default completion)
//! - **Configuration**: the set of active state labels, kept in the
//!   chart's canonical order
//! - **Machine**: a chart instance with a configuration, a context,
//!   and a step history
//! - **Stepper**: drives one event through a machine, consulting
//!   caller-supplied guard and action collaborators
//!
//! # Example
//!
//! ```rust
//! use harel::builder::{state, StatechartBuilder, TransitionBuilder};
//! use harel::core::Machine;
//! use harel::step::Stepper;
//! use std::sync::Arc;
//!
//! let chart = StatechartBuilder::new()
//!     .state(state("Off").initial())
//!     .state(
//!         state("On")
//!             .parallel()
//!             .child(state("Control").child(state("Idle").initial()))
//!             .child(state("Display").child(state("Dark").initial())),
//!     )
//!     .transition(
//!         TransitionBuilder::new().on("TURN_ON").from(["Off"]).to(["On"]),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(Arc::new(chart)).unwrap();
//! let fired = Stepper::default().step(&mut machine, "TURN_ON").unwrap();
//!
//! assert!(fired);
//! assert!(machine.configuration().contains("Idle"));
//! assert!(machine.configuration().contains("Dark"));
//! ```

pub mod builder;
pub mod core;
pub mod semantics;
pub mod step;

// Re-export commonly used types
pub use builder::{state, StatechartBuilder, TransitionBuilder};
pub use core::{Configuration, Context, Machine, StateLabel};
pub use semantics::Chart;
pub use step::Stepper;
