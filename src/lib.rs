//! This crate contains the application logic for qmaze, a terminal maze visualizer that hunts for
//! an exit with a quantum-inspired random walk.
//!
//! The walk is memoryless apart from a visited set: at each cell it shuffles the four cardinal
//! moves and takes the first one that stays inside the maze, lands on a path cell and has not been
//! stepped on during the current attempt. A walk that runs out of moves, or past its optional step
//! cap, is abandoned and retried from the start cell until the attempt budget runs out.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod events;
mod grid;
mod loader;
mod maze;
mod quantum;
mod search;
mod types;
mod ui;

pub use app::App;
pub use cli::{Cli, Preset};
pub use quantum::run_circuit_demo;
