//! Machine instances: a statechart definition plus live execution state.

use crate::core::{Configuration, Context};
use crate::semantics::{Chart, SemanticsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Lifecycle state of a machine instance.
///
/// `Unspecified` is an invalid starting state for stepping; the stepper
/// only accepts `Running` machines.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    #[default]
    Unspecified,
    Running,
    Stopped,
}

/// Record of a single delivered event, fired or not.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// Event name as delivered to the stepper.
    pub event: String,
    /// Whether any transition fired.
    pub fired: bool,
    /// Label of the fired transition, when one fired.
    pub transition: Option<String>,
    /// When the step was taken.
    pub timestamp: DateTime<Utc>,
}

/// A live instance of a statechart.
///
/// Many machines may share one immutable [`Chart`]; each machine owns
/// its configuration, context, and step history. The stepper replaces
/// the configuration wholesale on each fired event and mutates the
/// context in place through the action executor.
///
/// Callers must serialize steps per machine: the stepper performs
/// read-then-write on the configuration and context with no internal
/// locking. Distinct machines sharing a chart may step concurrently.
///
/// # Example
///
/// ```rust
/// use harel::builder::{state, StatechartBuilder, TransitionBuilder};
/// use harel::core::Machine;
/// use std::sync::Arc;
///
/// let chart = StatechartBuilder::new()
///     .state(state("Off").initial())
///     .state(state("On"))
///     .transition(
///         TransitionBuilder::new().on("TURN_ON").from(["Off"]).to(["On"]),
///     )
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let machine = Machine::new(Arc::new(chart)).unwrap();
/// assert_eq!(machine.configuration().primary().unwrap().as_str(), "Off");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    id: String,
    status: MachineStatus,
    chart: Arc<Chart>,
    configuration: Configuration,
    context: Context,
    history: Vec<StepRecord>,
}

impl Machine {
    /// Create a running machine with the chart's initial configuration
    /// (the default completion of the root) and an empty context.
    pub fn new(chart: Arc<Chart>) -> Result<Self, SemanticsError> {
        let configuration = chart.initial_configuration()?;
        Ok(Machine {
            id: Uuid::new_v4().to_string(),
            status: MachineStatus::Running,
            chart,
            configuration,
            context: Context::new(),
            history: Vec::new(),
        })
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the initial context.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Replace the initial configuration.
    ///
    /// The configuration is not re-validated here; pass it through
    /// [`Chart::validate_configuration`] first if it comes from outside.
    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> MachineStatus {
        self.status
    }

    /// The shared, immutable statechart definition.
    pub fn chart(&self) -> &Arc<Chart> {
        &self.chart
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Step records in delivery order, oldest first.
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Stop the machine; stopped machines reject further steps.
    pub fn stop(&mut self) {
        self.status = MachineStatus::Stopped;
    }

    pub(crate) fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    pub(crate) fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub(crate) fn record_step(&mut self, record: StepRecord) {
        self.history.push(record);
    }
}
