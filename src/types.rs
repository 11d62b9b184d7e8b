//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. It is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen.
    MainMenu(MainMenuItem),
    /// Options configuration screen.
    OptionsMenu(OptionsMenuItem),
    /// In-game screen where the maze is displayed and searched.
    InGame,
    /// Maze selection screen listing the loadable mazes.
    MazeMenu,
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Run Search" menu option.
    RunSearch,
    /// "Options" menu option.
    Options,
    /// "Quit" menu option.
    Quit,
}

/// Options menu navigation choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// "Back" navigation option.
    Back,
    /// "Maze" selection option.
    Maze,
}

/// Generic menu type configuration.
///
/// This enumeration holds the specifics particular to each generic menu in the interface, which
/// share enough layout to be rendered by one function.
pub(crate) enum MenuType {
    /// Main menu configuration with its item count.
    MainMenu(u8),
    /// Options menu configuration with its item count.
    OptionsMenu(u8),
}

impl MenuType {
    /// Returns the display name of the menu, used as the title in the menu's border.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Returns the number of menu items, used for layout sizing.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) => *value,
            Self::OptionsMenu(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::RunSearch);
        let options_menu = Screen::OptionsMenu(OptionsMenuItem::Back);

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::RunSearch));
        assert_eq!(options_menu, Screen::OptionsMenu(OptionsMenuItem::Back));
        assert_ne!(main_menu, Screen::InGame);
        assert_ne!(options_menu, Screen::MazeMenu);
    }

    #[test]
    fn test_menu_type_repr() {
        assert_eq!(MenuType::MainMenu(3).repr(), "Main Menu");
        assert_eq!(MenuType::OptionsMenu(2).repr(), "Options Menu");
    }

    #[test]
    fn test_menu_type_value() {
        assert_eq!(MenuType::MainMenu(3).value(), 3);
        assert_eq!(MenuType::OptionsMenu(2).value(), 2);
    }
}
