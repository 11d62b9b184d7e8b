//! Command line interface for the maze walker.

use std::num::NonZeroUsize;

use clap::{Parser, ValueEnum};

use crate::search::{SearchConfig, DEFAULT_ATTEMPTS};

/// Command line options accepted by the qmaze binary.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Seed for the pseudo-random walk; a fresh entropy seed is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Named bundle of per-attempt step caps and attempt counts.
    #[arg(long, value_enum, default_value_t)]
    pub preset: Preset,

    /// Overrides the number of independent walk attempts of the chosen preset.
    #[arg(long)]
    pub attempts: Option<NonZeroUsize>,

    /// Overrides the per-attempt step cap of the chosen preset.
    #[arg(long)]
    pub max_steps: Option<NonZeroUsize>,

    /// Prints the decorative circuit histogram to stdout and exits.
    #[arg(long)]
    pub circuit_demo: bool,
}

impl Cli {
    /// Resolves the preset and the individual overrides into a search configuration.
    pub(crate) fn search_config(&self) -> SearchConfig {
        let mut config = self.preset.config();

        if let Some(attempts) = self.attempts {
            config.max_attempts = attempts;
        }
        if self.max_steps.is_some() {
            config.max_steps = self.max_steps;
        }

        config
    }
}

/// Walk limit presets.
///
/// A preset trades walk depth against runtime; none of them is canonical, which is why each lives
/// on as a selectable option instead of one of them being hardcoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// No per-attempt step cap, 100 attempts.
    #[default]
    Unbounded,
    /// Per-attempt cap of 20 steps, 100 attempts.
    ShortWalk,
    /// Per-attempt cap of 10000 steps, 100 attempts.
    LongWalk,
}

impl Preset {
    /// Expands the preset into its concrete search configuration.
    pub(crate) fn config(self) -> SearchConfig {
        match self {
            Self::Unbounded => SearchConfig::default(),
            Self::ShortWalk => SearchConfig {
                max_steps: NonZeroUsize::new(20),
                max_attempts: DEFAULT_ATTEMPTS,
            },
            Self::LongWalk => SearchConfig {
                max_steps: NonZeroUsize::new(10_000),
                max_attempts: DEFAULT_ATTEMPTS,
            },
        }
    }
}
