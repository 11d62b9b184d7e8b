//! Randomized walk search over a maze grid.
//!
//! This module contains the path searcher together with its configuration, outcome and event
//! types, and the replay manager that animates a solved walk on the in-game screen. The search is
//! deliberately memoryless: each step shuffles the four cardinal moves and greedily takes the
//! first traversable, unvisited candidate, so a single attempt can dead-end even when an exit is
//! reachable. Retrying whole attempts, not backtracking, is what makes the walker find exits.

use std::{
    collections::{BTreeSet, HashSet},
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, seq::SliceRandom as _, SeedableRng as _};
use thiserror::Error;

use crate::grid::{Cell, Grid};

/// Candidate moves tried on every step: right, down, left, up.
const MOVES: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Replay frame delay in milliseconds.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 120;

/// Number of independent attempts shared by all configuration presets.
pub(crate) const DEFAULT_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(value) => value,
    None => panic!("default attempt count must be non-zero"),
};

/// Errors that stop a search before any attempt runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SearchError {
    /// The designated start cell lies outside the grid or sits on a wall.
    #[error("start cell ({}, {}) is out of bounds or a wall", .0.row, .0.col)]
    InvalidStart(Cell),
}

/// The way a single attempt ended without reaching an exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FailureReason {
    /// The walker ran out of unvisited neighbours at the given cell.
    DeadEnd(Cell),
    /// The walker hit the per-attempt step cap at the given cell.
    StepBudgetExhausted(Cell),
}

/// Terminal result of a full search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// An attempt reached an exit; the path runs from the start cell to that exit.
    Solved {
        /// The successful walk, start cell first, exit cell last, no cell repeated.
        path: Vec<Cell>,
        /// The 1-based index of the attempt that succeeded.
        attempts: usize,
    },
    /// Every attempt failed.
    Unsolved {
        /// Total number of attempts that ran.
        attempts: usize,
        /// The failure reason preserved from the final attempt.
        last_failure: FailureReason,
    },
}

/// Progress notifications emitted while a search runs.
///
/// Events are informational only and never influence the control flow of the search; the
/// application aggregates them into [`SearchStats`] for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchEvent {
    /// A new attempt with freshly randomized move order has begun (1-based index).
    AttemptStarted(usize),
    /// The walker stepped onto the given cell.
    Moved(Cell),
    /// The walker ran out of unvisited neighbours at the given cell.
    DeadEnd(Cell),
    /// The walker hit the per-attempt step cap at the given cell.
    StepBudgetReached(Cell),
    /// The walker reached an exit cell.
    ExitFound(Cell),
}

/// Counters aggregated from a search's event stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Total number of attempts started.
    pub(crate) attempts: usize,
    /// Total number of steps taken across all attempts.
    pub(crate) moves: usize,
    /// Number of attempts that ended in a dead end.
    pub(crate) dead_ends: usize,
    /// Number of attempts that exhausted their step budget.
    pub(crate) budget_hits: usize,
}

impl SearchStats {
    /// Resets all counters to zero.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Folds a single search event into the counters.
    pub(crate) fn record(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::AttemptStarted(_) => self.attempts += 1,
            SearchEvent::Moved(_) => self.moves += 1,
            SearchEvent::DeadEnd(_) => self.dead_ends += 1,
            SearchEvent::StepBudgetReached(_) => self.budget_hits += 1,
            SearchEvent::ExitFound(_) => {}
        }
    }
}

/// Per-search limits.
///
/// The caps are the only bounded-resource guarantee the search makes, so they are mandatory upper
/// bounds on the work performed, never advisory hints. `max_steps` caps the length of the path
/// built within one attempt; `max_attempts` caps how many independent attempts run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    /// Cap on the path length per attempt; unbounded when absent.
    pub(crate) max_steps: Option<NonZeroUsize>,
    /// Number of independent randomized attempts.
    pub(crate) max_attempts: NonZeroUsize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// Randomized walker that hunts for a boundary exit.
///
/// The searcher owns its pseudo-random source, so whole runs can be reproduced by seeding it; no
/// other state survives between searches.
#[derive(Debug)]
pub(crate) struct PathSearcher {
    /// Pseudo-random source used to shuffle the candidate moves on every step.
    rng: StdRng,
}

impl PathSearcher {
    /// Creates a searcher with a fresh entropy-seeded random source.
    pub(crate) fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a searcher with a fixed seed for reproducible walks.
    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Searches for a path from `start` to any cell of `exits`.
    ///
    /// Runs up to `config.max_attempts` independent attempts, re-randomizing the move order for
    /// every step, and short-circuits on the first success. When every attempt fails, the failure
    /// reason of the final attempt is preserved in the outcome. The observer receives progress
    /// events as they happen; it is purely informational.
    ///
    /// An empty exit set is legal: every attempt then fails by dead end or step budget and the
    /// search still terminates, because the no-repeat rule bounds each attempt by the cell count
    /// of the grid.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidStart`] when `start` is out of bounds or a wall; no attempts run.
    pub(crate) fn search<F>(
        &mut self,
        grid: &Grid,
        start: Cell,
        exits: &BTreeSet<Cell>,
        config: SearchConfig,
        mut on_event: F,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&SearchEvent),
    {
        if !grid.is_path(start) {
            return Err(SearchError::InvalidStart(start));
        }

        let mut last_failure = FailureReason::DeadEnd(start);
        for attempt in 1..=config.max_attempts.get() {
            on_event(&SearchEvent::AttemptStarted(attempt));

            match self.attempt(grid, start, exits, config.max_steps, &mut on_event) {
                Ok(path) => {
                    return Ok(SearchOutcome::Solved {
                        path,
                        attempts: attempt,
                    })
                }
                Err(reason) => last_failure = reason,
            }
        }

        Ok(SearchOutcome::Unsolved {
            attempts: config.max_attempts.get(),
            last_failure,
        })
    }

    /// Runs one greedy, non-backtracking walk from `start`.
    ///
    /// Each iteration shuffles the four cardinal moves uniformly and takes the first candidate
    /// that is in-bounds, traversable and unvisited. There is no backtracking: when no candidate
    /// qualifies the attempt dies where it stands, and its partial path is discarded by the
    /// caller rather than recycled into the next attempt.
    fn attempt<F>(
        &mut self,
        grid: &Grid,
        start: Cell,
        exits: &BTreeSet<Cell>,
        max_steps: Option<NonZeroUsize>,
        on_event: &mut F,
    ) -> Result<Vec<Cell>, FailureReason>
    where
        F: FnMut(&SearchEvent),
    {
        let mut path = vec![start];
        let mut visited = HashSet::new();
        let _ = visited.insert(start);
        let mut position = start;

        if exits.contains(&start) {
            on_event(&SearchEvent::ExitFound(start));
            return Ok(path);
        }

        loop {
            if let Some(cap) = max_steps {
                if path.len() >= cap.get() {
                    on_event(&SearchEvent::StepBudgetReached(position));
                    return Err(FailureReason::StepBudgetExhausted(position));
                }
            }

            let mut moves = MOVES;
            moves.shuffle(&mut self.rng);

            let next = moves.iter().find_map(|&delta| {
                position
                    .step(delta)
                    .filter(|cell| grid.is_path(*cell) && !visited.contains(cell))
            });

            match next {
                None => {
                    on_event(&SearchEvent::DeadEnd(position));
                    return Err(FailureReason::DeadEnd(position));
                }
                Some(cell) => {
                    path.push(cell);
                    let _ = visited.insert(cell);
                    position = cell;
                    on_event(&SearchEvent::Moved(cell));

                    if exits.contains(&cell) {
                        on_event(&SearchEvent::ExitFound(cell));
                        return Ok(path);
                    }
                }
            }
        }
    }
}

/// Replays a solved walk cell by cell for the in-game screen.
///
/// The walk never backtracks, so the replay is a growing prefix of the recorded path; it restarts
/// from the beginning once the whole walk has been shown.
pub(crate) struct WalkAnimation {
    /// Full walk to replay, in the order the searcher took it.
    steps: Vec<Cell>,
    /// Number of walk cells currently visible on screen.
    visible_len: usize,
    /// Timestamp of the last replay frame update.
    last_update: Instant,
}

impl Default for WalkAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkAnimation {
    /// Creates an empty replay.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            visible_len: 0,
            last_update: Instant::now(),
        }
    }

    /// Loads a freshly solved walk and restarts the replay from its first cell.
    pub(crate) fn load(&mut self, steps: Vec<Cell>) {
        self.steps = steps;
        self.reset();
    }

    /// Restarts the replay from the beginning.
    pub(crate) fn reset(&mut self) {
        self.visible_len = 0;
        self.last_update = Instant::now();
    }

    /// Drops the loaded walk entirely.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Returns the prefix of the walk that should be on screen right now.
    pub(crate) fn visible(&self) -> &[Cell] {
        self.steps.get(..self.visible_len).unwrap_or_default()
    }

    /// Advances the replay by one cell once the frame delay has elapsed, looping at the end.
    pub(crate) fn update(&mut self) {
        if self.last_update.elapsed() >= Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            self.last_update = Instant::now();

            if self.visible_len < self.steps.len() {
                self.visible_len += 1;
            } else {
                self.visible_len = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;

    /// 9x7 maze with a single boundary exit at (8, 2); start is (1, 1).
    const SCENARIO: [&str; 9] = [
        "1111111",
        "1000011",
        "1011111",
        "1011111",
        "1011001",
        "1000011",
        "1011111",
        "1001111",
        "1101111",
    ];

    fn grid_from(rows: &[&str]) -> Grid {
        let cells = rows
            .iter()
            .map(|row| {
                row.bytes()
                    .map(|byte| {
                        if byte == b'1' {
                            CellKind::Wall
                        } else {
                            CellKind::Path
                        }
                    })
                    .collect()
            })
            .collect();

        Grid::from_rows(cells).expect("test grid should be rectangular")
    }

    fn attempts(max_attempts: usize) -> SearchConfig {
        SearchConfig {
            max_steps: None,
            max_attempts: NonZeroUsize::new(max_attempts).expect("attempt count must be non-zero"),
        }
    }

    /// Checks every validity property a successful path must satisfy.
    fn assert_valid_path(path: &[Cell], grid: &Grid, start: Cell, exits: &BTreeSet<Cell>) {
        assert_eq!(
            path.first().copied(),
            Some(start),
            "path must begin at the start cell"
        );

        for window in path.windows(2) {
            if let [from, to] = window {
                let row_delta = from.row.abs_diff(to.row);
                let col_delta = from.col.abs_diff(to.col);
                assert_eq!(
                    row_delta + col_delta,
                    1,
                    "consecutive cells must differ by exactly one cardinal step"
                );
            }
        }

        let mut seen = HashSet::new();
        for cell in path {
            assert!(grid.is_path(*cell), "every path cell must be traversable");
            assert!(seen.insert(*cell), "no cell may repeat within a path");
        }

        assert!(
            exits.contains(path.last().expect("path must not be empty")),
            "a successful path must end on an exit cell"
        );
    }

    #[test]
    fn test_scenario_exit_set() {
        let grid = grid_from(&SCENARIO);

        let exits = grid.exit_cells();

        assert_eq!(exits.len(), 1, "scenario maze has a single boundary exit");
        assert!(exits.contains(&Cell::new(8, 2)));
    }

    #[test]
    fn test_scenario_solved_within_hundred_attempts() {
        let grid = grid_from(&SCENARIO);
        let start = Cell::new(1, 1);
        let exits = grid.exit_cells();
        let mut searcher = PathSearcher::seeded(7);

        let outcome = searcher
            .search(&grid, start, &exits, attempts(100), |_| {})
            .expect("start cell is traversable");

        match outcome {
            SearchOutcome::Solved { path, attempts } => {
                assert!(attempts >= 1 && attempts <= 100);
                assert_eq!(path.last().copied(), Some(Cell::new(8, 2)));
                assert_valid_path(&path, &grid, start, &exits);
            }
            SearchOutcome::Unsolved { .. } => {
                panic!("scenario maze must be solved within 100 attempts")
            }
        }
    }

    #[test]
    fn test_invalid_start_on_wall() {
        let grid = grid_from(&SCENARIO);
        let mut searcher = PathSearcher::seeded(0);

        let result = searcher.search(&grid, Cell::new(0, 0), &grid.exit_cells(), attempts(3), |_| {});

        assert_eq!(result, Err(SearchError::InvalidStart(Cell::new(0, 0))));
    }

    #[test]
    fn test_invalid_start_out_of_bounds() {
        let grid = grid_from(&SCENARIO);
        let mut searcher = PathSearcher::seeded(0);

        let result = searcher.search(&grid, Cell::new(9, 9), &grid.exit_cells(), attempts(3), |_| {});

        assert_eq!(result, Err(SearchError::InvalidStart(Cell::new(9, 9))));
    }

    #[test]
    fn test_start_on_exit_short_circuits() {
        let grid = grid_from(&["111", "001", "111"]);
        let start = Cell::new(1, 0);
        let exits = grid.exit_cells();
        assert!(exits.contains(&start));
        let mut searcher = PathSearcher::seeded(11);

        let outcome = searcher
            .search(&grid, start, &exits, attempts(5), |_| {})
            .expect("start cell is traversable");

        assert_eq!(
            outcome,
            SearchOutcome::Solved {
                path: vec![start],
                attempts: 1,
            }
        );
    }

    #[test]
    fn test_empty_exit_set_always_fails_and_terminates() {
        // A ring of path cells with a fully walled boundary: no exit exists and the walk cycles
        // until the visited check starves it, so this doubles as the termination test.
        let grid = grid_from(&["11111", "10001", "10101", "10001", "11111"]);
        let exits = grid.exit_cells();
        assert!(exits.is_empty());
        let mut searcher = PathSearcher::seeded(23);

        let outcome = searcher
            .search(&grid, Cell::new(1, 1), &exits, attempts(5), |_| {})
            .expect("start cell is traversable");

        match outcome {
            SearchOutcome::Solved { .. } => panic!("a maze without exits must never be solved"),
            SearchOutcome::Unsolved { attempts, .. } => assert_eq!(attempts, 5),
        }
    }

    #[test]
    fn test_isolated_start_dead_ends_immediately() {
        let grid = grid_from(&["111", "101", "111"]);
        let start = Cell::new(1, 1);
        let mut searcher = PathSearcher::seeded(5);

        let outcome = searcher
            .search(&grid, start, &grid.exit_cells(), attempts(4), |_| {})
            .expect("start cell is traversable");

        assert_eq!(
            outcome,
            SearchOutcome::Unsolved {
                attempts: 4,
                last_failure: FailureReason::DeadEnd(start),
            }
        );
    }

    #[test]
    fn test_step_budget_failure_is_reported() {
        // A one-way corridor towards the exit at (1, 5); with a cap of two path cells per attempt
        // the walker always stalls one step in.
        let grid = grid_from(&["111111", "100000", "111111"]);
        let config = SearchConfig {
            max_steps: NonZeroUsize::new(2),
            max_attempts: NonZeroUsize::new(3).expect("attempt count must be non-zero"),
        };
        let mut searcher = PathSearcher::seeded(13);

        let outcome = searcher
            .search(&grid, Cell::new(1, 1), &grid.exit_cells(), config, |_| {})
            .expect("start cell is traversable");

        assert_eq!(
            outcome,
            SearchOutcome::Unsolved {
                attempts: 3,
                last_failure: FailureReason::StepBudgetExhausted(Cell::new(1, 2)),
            }
        );
    }

    #[test]
    fn test_same_seed_reproduces_the_walk() {
        let grid = grid_from(&SCENARIO);
        let start = Cell::new(1, 1);
        let exits = grid.exit_cells();

        let first = PathSearcher::seeded(42)
            .search(&grid, start, &exits, attempts(100), |_| {})
            .expect("start cell is traversable");
        let second = PathSearcher::seeded(42)
            .search(&grid, start, &exits, attempts(100), |_| {})
            .expect("start cell is traversable");

        assert_eq!(first, second);
    }

    #[test]
    fn test_events_cover_every_attempt() {
        let grid = grid_from(&["111", "101", "111"]);
        let mut stats = SearchStats::default();
        let mut searcher = PathSearcher::seeded(3);

        let _ = searcher
            .search(&grid, Cell::new(1, 1), &grid.exit_cells(), attempts(7), |event| {
                stats.record(event);
            })
            .expect("start cell is traversable");

        assert_eq!(stats.attempts, 7);
        assert_eq!(stats.dead_ends, 7);
        assert_eq!(stats.moves, 0);
        assert_eq!(stats.budget_hits, 0);
    }

    #[test]
    fn test_exit_found_event_on_trivial_success() {
        let grid = grid_from(&["111", "001", "111"]);
        let start = Cell::new(1, 0);
        let mut events = Vec::new();
        let mut searcher = PathSearcher::seeded(3);

        let _ = searcher
            .search(&grid, start, &grid.exit_cells(), attempts(1), |event| {
                events.push(*event);
            })
            .expect("start cell is traversable");

        assert_eq!(
            events,
            vec![
                SearchEvent::AttemptStarted(1),
                SearchEvent::ExitFound(start),
            ]
        );
    }

    #[test]
    fn test_walk_animation_replays_prefixes() {
        let mut animation = WalkAnimation::new();
        animation.load(vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)]);

        assert!(animation.visible().is_empty());

        // Force the frame timer to fire by backdating the last update.
        animation.last_update = Instant::now() - Duration::from_millis(ANIMATION_FRAME_DELAY_MS);
        animation.update();
        assert_eq!(animation.visible(), &[Cell::new(1, 1)]);

        animation.clear();
        assert!(animation.visible().is_empty());
    }
}
