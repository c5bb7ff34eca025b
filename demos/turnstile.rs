//! Turnstile Statechart
//!
//! This example demonstrates the turnstile chart from the Eshuis
//! formalization: an OR-root with a two-region AND-state.
//!
//! Key concepts:
//! - AND-state (parallel) composition with independent regions
//! - Default completion filling in region defaults
//! - Event stepping with a context-mutating action executor
//!
//! Run with: cargo run --example turnstile

use harel::builder::{state, StatechartBuilder, TransitionBuilder};
use harel::core::{Context, Machine};
use harel::step::{EvalError, NoCollaborators, Stepper};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chart = StatechartBuilder::new()
        .state(state("Off").initial())
        .state(
            state("On")
                .parallel()
                .child(
                    state("Turnstile Control")
                        .child(state("Blocked").initial())
                        .child(state("Unblocked")),
                )
                .child(
                    state("Card Reader Control")
                        .child(state("Ready").initial())
                        .child(state("Card Entered"))
                        .child(state("Turnstile Unblocked")),
                ),
        )
        .transition(
            TransitionBuilder::new()
                .label("turn on")
                .on("TURN_ON")
                .from(["Off"])
                .to(["On"])
                .action("count_power_cycle"),
        )?
        .transition(
            TransitionBuilder::new()
                .label("turn off")
                .on("TURN_OFF")
                .from(["On"])
                .to(["Off"]),
        )?
        .event("TURN_ON")
        .event("TURN_OFF")
        .build()?;

    println!("Blocked and Ready are orthogonal: {}", chart.orthogonal("Blocked", "Ready")?);
    println!(
        "LCA(Blocked, Ready) = {}",
        chart.least_common_ancestor(["Blocked", "Ready"])?
    );

    let mut context = Context::new();
    context.set("power_cycles", 0);
    let mut machine = Machine::new(Arc::new(chart))?.with_context(context);
    println!("initial configuration: {:?}", machine.configuration().states());

    let actions = |action: &str, context: &mut Context| {
        if action != "count_power_cycle" {
            return Err(EvalError::new(format!("unknown action '{action}'")));
        }
        let cycles = context
            .get("power_cycles")
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        context.set("power_cycles", cycles + 1);
        Ok(())
    };
    let stepper = Stepper::new(NoCollaborators, actions);

    for event in ["TURN_ON", "TURN_ON", "TURN_OFF"] {
        let fired = stepper.step(&mut machine, event)?;
        println!(
            "{event}: fired={fired}, configuration={:?}",
            machine.configuration().states()
        );
    }

    println!(
        "power cycles recorded: {}",
        machine.context().get("power_cycles").unwrap()
    );
    println!("steps in history: {}", machine.history().len());
    Ok(())
}
