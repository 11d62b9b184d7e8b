//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    grid::Cell,
    search::{FailureReason, SearchOutcome},
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::OptionsMenu(item) => options_menu(frame, *item),
        Screen::InGame => in_game(app, frame)?,
        Screen::MazeMenu => maze_menu(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both main and options
/// menus. The generic part includes the centered positioning and border styling, while the
/// specific menu content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value() as usize]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Run Search", "Options", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Run Search").centered();
    let mut opt2 = Line::raw("Options").centered();
    let mut opt3 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::RunSearch => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Options => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Quit => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
    frame.render_widget(opt3, inner_layout[2]);
}

/// Renders the options menu screen with configuration choices.
///
/// This function displays the options menu with choices for "Maze" selection and "Return" to the
/// main menu. It provides the same navigation highlighting as the main menu.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn options_menu(frame: &mut Frame, item: OptionsMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::OptionsMenu(2));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Maze").centered();
    let mut opt2 = Line::raw("Return").centered();
    match item {
        OptionsMenuItem::Maze => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
        }
        OptionsMenuItem::Back => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
}

/// Renders the maze selection menu with a scrollable list of available mazes.
///
/// This function displays a viewport containing the built-in maze and every loadable `.maze` file
/// from the current directory. It provides scrolling functionality and visual indicators for the
/// currently selected maze and the maze that is actively being used.
///
/// # Errors
///
/// This function may return errors if the viewport maze cannot be retrieved.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn maze_menu(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .split(frame.area())[1];
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Min(1)]).split(space)[0];
    let block = Block::bordered()
        .title_top("Maze list")
        .title_bottom("(j) down / (k) up / (l) select / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    app.viewport_height = inner_space.height.into();

    let inner_layout = Layout::horizontal([Constraint::Percentage(5), Constraint::Percentage(100)])
        .split(inner_space);
    let inner_selector = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[0]);
    let inner_list = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[1]);

    let mut viewport_mazes: Vec<&crate::maze::Maze> =
        app.mazes.iter().skip(app.viewport_offset).collect();
    viewport_mazes.truncate(inner_space.height.into());

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, maze) in viewport_mazes.into_iter().enumerate() {
        let viewport_maze = app
            .viewport_maze
            .clone()
            .ok_or_eyre("failed to retrieve cursor-selected maze")?;

        let (selector, entry) = if *maze == viewport_maze {
            (
                {
                    if *maze == app.maze {
                        Line::styled(DOT, active_content_style).centered()
                    } else {
                        Line::styled(" ", active_content_style).centered()
                    }
                },
                Line::styled(maze.key.clone(), active_content_style),
            )
        } else {
            (
                {
                    if *maze == app.maze {
                        Line::styled(DOT, content_style).centered()
                    } else {
                        Line::styled(" ", content_style).centered()
                    }
                },
                Line::styled(maze.key.clone(), content_style),
            )
        };

        frame.render_widget(selector, inner_selector[idx]);
        frame.render_widget(entry, inner_list[idx]);
    }

    Ok(())
}

/// Renders the in-game screen with the maze, the walk overlay and the outcome summary.
///
/// This function displays the active maze and the animated replay of the most recent solved walk
/// using [`Canvas`] widgets for precise coordinate-based drawing. The start and exit cells are
/// labeled on the canvas, and a footer line reports how the search ended. Entering the screen
/// without an outcome runs the search once; the 'r' key reruns it on demand.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or from the search when
/// the active maze's start cell is not traversable.
#[expect(
    clippy::too_many_lines,
    reason = "UI rendering function requires many lines for layout and drawing operations."
)]
pub(crate) fn in_game(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    if app.outcome.is_none() {
        app.run_search()?;
    }

    let maze_rows = app.maze.grid().rows();
    let maze_columns = app.maze.grid().cols();

    // Overall layout: maze area plus a footer at the bottom
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let footer_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get footer area from layout")?;

    // Center the maze within the content area
    let main_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area);

    let maze_area = main_layout
        .get(1)
        .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(*maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before the paint closures
    let wall_screen_coords =
        cells_to_screen_coords(&app.maze.wall_cells(), maze_rows, maze_columns)?;
    let walk_screen_coords =
        cells_to_screen_coords(app.animation.visible(), maze_rows, maze_columns)?;
    let start_coords = cells_to_screen_coords(&[app.maze.start()], maze_rows, maze_columns)?;
    let exit_cells: Vec<Cell> = app.maze.exits().iter().copied().collect();
    let exit_coords = cells_to_screen_coords(&exit_cells, maze_rows, maze_columns)?;

    let maze_canvas = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
        });
    let overlay = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &walk_screen_coords,
                color: Color::Red,
            });

            // Labels sit on their own layer so they print over the walk dots
            ctx.layer();
            for &(exit_x, exit_y) in &exit_coords {
                ctx.print(exit_x, exit_y, Line::styled("E", Style::default().fg(Color::Blue)));
            }
            if let Some(&(start_x, start_y)) = start_coords.first() {
                ctx.print(
                    start_x,
                    start_y,
                    Line::styled("S", Style::default().fg(Color::Green)),
                );
            }
        });

    frame.render_widget(maze_canvas, space);
    frame.render_widget(overlay, space);

    // Footer: outcome summary inside a top-bordered block with the key hints as title
    let footer_block = Block::bordered()
        .title("(r) rerun search / (h) return to menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let footer_inner = footer_block.inner(footer_full_area);

    frame.render_widget(footer_block, footer_full_area);
    frame.render_widget(Line::raw(outcome_summary(app)).centered(), footer_inner);

    Ok(())
}

/// Formats the one-line status for the most recent search.
///
/// On success the line reports the attempt count and path length; on failure it names the way the
/// final attempt died. Both variants append counters folded from the search's event stream.
pub(crate) fn outcome_summary(app: &App) -> String {
    match &app.outcome {
        None => "searching...".to_owned(),
        Some(SearchOutcome::Solved { path, attempts }) => format!(
            "exit reached in {attempts} attempt(s) with {} step(s) [{} moves observed]",
            path.len().saturating_sub(1),
            app.stats.moves,
        ),
        Some(SearchOutcome::Unsolved {
            attempts,
            last_failure,
        }) => {
            let reason = match last_failure {
                FailureReason::DeadEnd(cell) => {
                    format!("last walk dead-ended at ({}, {})", cell.row, cell.col)
                }
                FailureReason::StepBudgetExhausted(cell) => {
                    format!("last walk hit the step cap at ({}, {})", cell.row, cell.col)
                }
            };

            format!(
                "no exit found after {attempts} attempt(s); {reason} [{} dead ends, {} capped walks]",
                app.stats.dead_ends, app.stats.budget_hits,
            )
        }
    }
}

/// Transforms maze cells to screen coordinates for canvas rendering.
///
/// This function converts cells to screen coordinates using the standard transformation formulas:
/// coordinate[i] = (n - 1) / 2 - i for rows (ascending order) and coordinate[i] = i - (n - 1) / 2
/// for columns (descending order).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn cells_to_screen_coords(
    cells: &[Cell],
    rows: usize,
    cols: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(cols)?);

    cells
        .iter()
        .map(|cell| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(cell.row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(cell.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchConfig;
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates a deterministic test app for UI testing.
    fn create_test_app() -> App {
        App::new(Some(29), SearchConfig::default())
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::MainMenu(MainMenuItem::RunSearch);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
    }

    #[test]
    fn test_draw_options_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Maze);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing options menu should succeed");
    }

    #[test]
    fn test_draw_maze_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::MazeMenu;
        app.mazes = vec![crate::maze::Maze::default()];
        app.viewport_maze = app.mazes.first().cloned();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing maze menu should succeed");
    }

    #[test]
    fn test_draw_in_game_runs_the_search_lazily() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        assert!(app.outcome.is_none());

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        assert!(
            app.outcome.is_some(),
            "entering the in-game screen must run the search"
        );
    }

    #[test]
    fn test_maze_menu_empty_viewport_maze_error() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.mazes = vec![crate::maze::Maze::default()];
        app.viewport_maze = None;

        let result = terminal.draw(|frame| {
            let menu_result = maze_menu(&mut app, frame);
            assert!(
                menu_result.is_err(),
                "maze menu should fail with an empty viewport maze"
            );
        });

        assert!(
            result.is_ok(),
            "terminal drawing should succeed even if maze_menu fails"
        );
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_layouts() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let main_layout = init_menu(frame, MenuType::MainMenu(3));
            assert_eq!(main_layout.len(), 3, "main menu should have 3 items");

            let options_layout = init_menu(frame, MenuType::OptionsMenu(2));
            assert_eq!(options_layout.len(), 2, "options menu should have 2 items");
        });

        assert!(result.is_ok(), "initializing menus should succeed");
    }

    #[test]
    fn test_outcome_summary_before_any_search() {
        let app = create_test_app();

        assert_eq!(outcome_summary(&app), "searching...");
    }

    #[test]
    fn test_outcome_summary_after_solved_search() {
        let mut app = create_test_app();
        app.run_search().expect("default maze start is traversable");

        let summary = outcome_summary(&app);

        assert!(summary.starts_with("exit reached in"));
    }

    #[test]
    fn test_cells_to_screen_coords_centers_the_grid() {
        let coords = cells_to_screen_coords(&[Cell::new(0, 0), Cell::new(2, 2)], 3, 3)
            .expect("small dimensions always convert");

        assert_eq!(coords, vec![(-1.0, 1.0), (1.0, -1.0)]);
    }
}
