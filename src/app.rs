//! Core application state and logic for the maze walker.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    cli::Cli,
    events,
    maze::Maze,
    search::{PathSearcher, SearchConfig, SearchOutcome, SearchStats, WalkAnimation},
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze walker.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the screens and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Currently active maze, rendered and searched on the in-game screen.
    pub(crate) maze: Maze,
    /// Collection of all selectable mazes.
    ///
    /// This field holds the built-in maze plus every valid `.maze` file found in the current
    /// working directory, stored in the order they are listed in the maze menu.
    pub(crate) mazes: Vec<Maze>,
    /// Maze currently under the cursor in the maze menu viewport.
    pub(crate) viewport_maze: Option<Maze>,
    /// Scrolling offset for the maze list viewport.
    pub(crate) viewport_offset: usize,
    /// Height of the maze list rendering area during the last redraw.
    pub(crate) viewport_height: usize,
    /// The randomized walker, owning its seedable pseudo-random source.
    pub(crate) searcher: PathSearcher,
    /// Step and attempt limits applied to every search.
    pub(crate) config: SearchConfig,
    /// Outcome of the most recent search over the active maze, if one ran yet.
    pub(crate) outcome: Option<SearchOutcome>,
    /// Counters aggregated from the most recent search's event stream.
    pub(crate) stats: SearchStats,
    /// Replay of the most recent solved walk.
    pub(crate) animation: WalkAnimation,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None, SearchConfig::default())
    }
}

impl App {
    /// Creates an application from parsed command line options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.seed, cli.search_config())
    }

    /// Creates a new instance of the App structure with safe defaults.
    pub(crate) fn new(seed: Option<u64>, config: SearchConfig) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::RunSearch),
            maze: Maze::default(),
            mazes: Vec::new(),
            viewport_maze: None,
            viewport_offset: 0,
            viewport_height: 0,
            searcher: match seed {
                Some(seed) => PathSearcher::seeded(seed),
                None => PathSearcher::from_entropy(),
            },
            config,
            outcome: None,
            stats: SearchStats::default(),
            animation: WalkAnimation::new(),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues
    /// until the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Runs one full search over the active maze and refreshes the outcome, stats and replay.
    ///
    /// # Errors
    ///
    /// Returns an error when the active maze's start cell is not traversable. Parsed mazes
    /// guarantee a traversable start, so this only fires for hand-built state.
    pub(crate) fn run_search(&mut self) -> Result<()> {
        self.stats.reset();

        let stats = &mut self.stats;
        let outcome = self.searcher.search(
            self.maze.grid(),
            self.maze.start(),
            self.maze.exits(),
            self.config,
            |event| stats.record(event),
        )?;

        match &outcome {
            SearchOutcome::Solved { path, .. } => self.animation.load(path.clone()),
            SearchOutcome::Unsolved { .. } => self.animation.clear(),
        }
        self.outcome = Some(outcome);

        Ok(())
    }
}
