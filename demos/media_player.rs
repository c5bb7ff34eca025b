//! Media Player Statechart
//!
//! This example demonstrates orthogonal regions: playback state and
//! volume control evolve independently under one AND-state.
//!
//! Key concepts:
//! - Orthogonal (AND) composition of independent regions
//! - Consistency of concurrent configurations
//! - Default completion from partial seed sets
//!
//! Run with: cargo run --example media_player

use harel::builder::{state, StatechartBuilder, TransitionBuilder};
use harel::semantics::Chart;

fn media_player_chart() -> Result<Chart, harel::builder::BuildError> {
    StatechartBuilder::new()
        .state(
            state("PlaybackControl")
                .initial()
                .parallel()
                .child(
                    state("PlaybackState")
                        .child(state("Playing"))
                        .child(state("Paused").initial())
                        .child(state("Stopped")),
                )
                .child(
                    state("VolumeControl")
                        .child(state("Normal").initial())
                        .child(state("Muted")),
                ),
        )
        .transition(
            TransitionBuilder::new()
                .label("Play")
                .on("PLAY")
                .from(["Paused"])
                .to(["Playing"]),
        )?
        .transition(
            TransitionBuilder::new()
                .label("Pause")
                .on("PAUSE")
                .from(["Playing"])
                .to(["Paused"]),
        )?
        .transition(
            TransitionBuilder::new()
                .label("Mute")
                .on("MUTE")
                .from(["Normal"])
                .to(["Muted"]),
        )?
        .transition(
            TransitionBuilder::new()
                .label("Unmute")
                .on("UNMUTE")
                .from(["Muted"])
                .to(["Normal"]),
        )?
        .event("PLAY")
        .event("PAUSE")
        .event("MUTE")
        .event("UNMUTE")
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chart = media_player_chart()?;

    let initial = chart.initial_configuration()?;
    println!("initial configuration: {:?}", initial.states());

    // Playback and volume are independent regions.
    println!(
        "Playing and Muted are orthogonal: {}",
        chart.orthogonal("Playing", "Muted")?
    );
    println!(
        "Playing and Paused can coexist: {}",
        chart.consistent(["Playing", "Paused"])?
    );

    // Seeding one leaf per region completes to a full snapshot.
    let muted_playback = chart.default_completion(["Playing", "Muted"])?;
    println!(
        "completion of [Playing, Muted]: {:?}",
        muted_playback.states()
    );
    println!(
        "that snapshot is consistent: {}",
        chart.is_consistent_configuration(&muted_playback)?
    );

    // The definition is plain data; wire formats come for free.
    let json = serde_json::to_string_pretty(chart.definition())?;
    println!("chart definition as JSON:\n{json}");
    Ok(())
}
