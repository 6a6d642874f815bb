use std::io::{self, Write};

use crate::error::Result;

/// Word that ends the interactive finder loop
pub const EXIT_WORD: &str = "exit";

/// Actions reachable from the menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FreeText,
    Genre,
    Category,
    PriceRange,
    FreeToPlay,
    TopRated,
    Quit,
    Invalid,
}

impl MenuChoice {
    /// Map a typed menu line to its action, anything else is Invalid
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::FreeText,
            "2" => MenuChoice::Genre,
            "3" => MenuChoice::Category,
            "4" => MenuChoice::PriceRange,
            "5" => MenuChoice::FreeToPlay,
            "6" => MenuChoice::TopRated,
            "0" => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// True when the typed line is the exit word, in any casing
pub fn is_exit_word(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_WORD)
}

/// Print a prompt and read one trimmed line from stdin
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }

    Ok(input.trim().to_string())
}

/// Keep asking until the line parses as a price
pub fn prompt_f64(prompt: &str) -> Result<f64> {
    loop {
        match prompt_line(prompt)?.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a number"),
        }
    }
}

/// Keep asking until the line parses as a whole number
pub fn prompt_i64(prompt: &str) -> Result<i64> {
    loop {
        match prompt_line(prompt)?.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a whole number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_map_to_menu_numbers() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::FreeText);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::Genre);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Category);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::PriceRange);
        assert_eq!(MenuChoice::parse("5"), MenuChoice::FreeToPlay);
        assert_eq!(MenuChoice::parse("6"), MenuChoice::TopRated);
    }

    #[test]
    fn test_zero_quits() {
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Quit);
        assert_eq!(MenuChoice::parse(" 0 "), MenuChoice::Quit);
    }

    #[test]
    fn test_everything_else_is_invalid() {
        assert_eq!(MenuChoice::parse("7"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("quit"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("1 2"), MenuChoice::Invalid);
    }

    #[test]
    fn test_exit_word_ignores_case_and_spacing() {
        assert!(is_exit_word("exit"));
        assert!(is_exit_word("EXIT"));
        assert!(is_exit_word("  Exit  "));
        assert!(!is_exit_word("exit now"));
        assert!(!is_exit_word("quit"));
        assert!(!is_exit_word(""));
    }
}
