//! File loading and validation utilities for maze files.

use std::fs;

use color_eyre::eyre::{OptionExt as _, Result};

use crate::maze::Maze;

/// Scans the current directory for `.maze` files and loads them.
///
/// This function searches for files with the `.maze` extension in the current working directory,
/// validates their format, and adds them to the maze collection for user selection. Invalid files
/// are skipped and valid ones keep being processed.
pub(crate) fn fetch_files(mazes: &mut Vec<Maze>) -> Result<()> {
    for entry in fs::read_dir(".")? {
        match entry {
            Ok(entry)
                if !entry.file_type()?.is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .ok_or_eyre("failed to convert osstring to string slice")?
                        .ends_with(".maze") =>
            {
                let contents = fs::read_to_string(entry.path())?;

                if validate_contents(contents.trim()) {
                    mazes.push(Maze::new(entry.file_name(), contents.trim())?);
                }
            }
            Err(err) => return Err(err.into()),
            _ => {}
        }
    }

    Ok(())
}

/// Validates the format of maze file contents before parsing.
///
/// This function checks that the contents describe a maze the walker can run on:
/// - at least 3 rows and 3 columns, all rows of the same length
/// - only `0` (path), `1` (wall) and `S` (start) characters
/// - exactly one start marker
///
/// A maze without a boundary exit passes validation on purpose; the search handles an empty exit
/// set by reporting failure instead of refusing to run.
pub(crate) fn validate_contents(input: &str) -> bool {
    let lines: Vec<&str> = input.lines().collect();

    if lines.len() < 3 {
        return false;
    }

    let Some(first_line) = lines.first() else {
        return false;
    };
    let expected_width = first_line.len();
    if expected_width < 3 {
        return false;
    }

    let mut start_counter = 0;
    for line in &lines {
        if line.len() != expected_width {
            return false;
        }

        if !line
            .bytes()
            .all(|byte| matches!(byte, b'0' | b'1' | b'S'))
        {
            return false;
        }

        for byte in line.bytes() {
            if byte == b'S' {
                start_counter += 1;
            }
        }

        if start_counter > 1 {
            return false;
        }
    }

    start_counter == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contents_valid_maze() {
        let valid_maze = "1111\n1S00\n1111";
        assert!(validate_contents(valid_maze));
    }

    #[test]
    fn test_validate_contents_valid_complex_maze() {
        let valid_maze = "11110\n1S010\n10010\n11111";
        assert!(validate_contents(valid_maze));
    }

    #[test]
    fn test_validate_contents_too_small_height() {
        let invalid_maze = "111\n1S0";
        assert!(!validate_contents(invalid_maze));
    }

    #[test]
    fn test_validate_contents_too_small_width() {
        let invalid_maze = "11\n1S\n11";
        assert!(!validate_contents(invalid_maze));
    }

    #[test]
    fn test_validate_contents_inconsistent_row_lengths() {
        let invalid_maze = "1111\n1S0\n1111";
        assert!(!validate_contents(invalid_maze));
    }

    #[test]
    fn test_validate_contents_invalid_characters() {
        let invalid_maze = "1111\n1Sx0\n1111";
        assert!(!validate_contents(invalid_maze));
    }

    #[test]
    fn test_validate_contents_no_start_marker() {
        let invalid_maze = "1111\n1000\n1111";
        assert!(!validate_contents(invalid_maze));
    }

    #[test]
    fn test_validate_contents_multiple_start_markers() {
        let invalid_maze = "1111\n1SS0\n1111";
        assert!(!validate_contents(invalid_maze));
    }

    #[test]
    fn test_validate_contents_empty_input() {
        assert!(!validate_contents(""));
    }

    #[test]
    fn test_validate_contents_single_line() {
        assert!(!validate_contents("111"));
    }

    #[test]
    fn test_validate_contents_allows_exitless_maze() {
        let walled_in = "111\n1S1\n111";
        assert!(validate_contents(walled_in));
    }
}
