//! This crate contains the source code for the qmaze binary.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use qmaze::{run_circuit_demo, App, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();

    if cli.circuit_demo {
        run_circuit_demo(cli.seed);
        return Ok(());
    }

    let mut terminal = ratatui::init();
    let result = App::from_cli(&cli).run(&mut terminal);
    ratatui::restore();

    result
}
