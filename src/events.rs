//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    loader,
    maze::Maze,
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => app.exit = true,
                KeyCode::Char('j') => handle_j_events(app)?,
                KeyCode::Char('k') => handle_k_events(app)?,
                KeyCode::Char('l') => handle_l_events(app)?,
                KeyCode::Char('h') => handle_h_events(app),
                KeyCode::Char('r') => handle_r_events(app)?,
                _ => {}
            }
        }
    }

    // Advance the walk replay while in-game
    if matches!(app.screen, Screen::InGame) {
        app.animation.update();
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus and lists.
/// The behavior varies depending on the current screen, handling menu navigation and viewport
/// scrolling appropriately.
pub(crate) fn handle_j_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::RunSearch) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::OptionsMenu(OptionsMenuItem::Maze) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Back);
        }
        Screen::MazeMenu => {
            let viewport_maze = app
                .viewport_maze
                .clone()
                .ok_or_eyre("failed to retrieve cursor-selected maze")?;

            let index = app
                .mazes
                .iter()
                .position(|maze| *maze == viewport_maze)
                .ok_or_eyre("cursor-selected maze is not in the maze list")?;

            if let Some(next) = app.mazes.get(index + 1) {
                app.viewport_maze = Some(next.clone());

                // Scroll when the cursor walks past the bottom of the viewport
                if index + 1 >= app.viewport_offset + app.viewport_height {
                    app.viewport_offset += 1;
                }
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'k' key press events for upward navigation.
///
/// Like the 'j' handler, behavior varies by screen and includes proper viewport management for
/// scrollable content.
pub(crate) fn handle_k_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::RunSearch);
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Maze);
        }
        Screen::MazeMenu => {
            let viewport_maze = app
                .viewport_maze
                .clone()
                .ok_or_eyre("failed to retrieve cursor-selected maze")?;

            let index = app
                .mazes
                .iter()
                .position(|maze| *maze == viewport_maze)
                .ok_or_eyre("cursor-selected maze is not in the maze list")?;

            if index > 0 {
                if let Some(previous) = app.mazes.get(index - 1) {
                    app.viewport_maze = Some(previous.clone());

                    if index - 1 < app.viewport_offset {
                        app.viewport_offset = app.viewport_offset.saturating_sub(1);
                    }
                }
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow. It handles screen transitions, maze loading, and selection
/// confirmation across different contexts.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::RunSearch) => {
            app.screen = Screen::InGame;
            app.run_search()?;
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Maze);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Maze) => {
            app.screen = Screen::MazeMenu;

            let first = Maze::default();
            app.mazes.clear();
            app.mazes.push(first.clone());
            loader::fetch_files(&mut app.mazes)?;
            app.viewport_maze = Some(first);
            app.viewport_offset = 0;
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::RunSearch);
        }
        Screen::MazeMenu => {
            app.maze = app
                .viewport_maze
                .clone()
                .ok_or_eyre("failed to retrieve cursor-selected maze")?;

            // A new maze invalidates the previous outcome
            app.outcome = None;
            app.animation.clear();
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for returning to previous screens,
/// from the in-game screen to the main menu and from the maze menu to the options menu.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.animation.reset();
            app.screen = Screen::MainMenu(MainMenuItem::RunSearch);
        }
        Screen::MazeMenu => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Maze);
        }
        _ => {}
    }
}

/// Handles 'r' key press events, rerunning the search with fresh move randomness.
///
/// # Errors
///
/// This function may return errors from the search when the active maze's start cell is not
/// traversable.
pub(crate) fn handle_r_events(app: &mut App) -> Result<()> {
    if matches!(app.screen, Screen::InGame) {
        app.run_search()?;
    }

    Ok(())
}
