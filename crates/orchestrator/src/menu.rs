//! Launcher menu: pick one of the two flows.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::console::Console;

pub const INVALID_CHOICE: &str = "Invalid choice. Please enter 1 or 2.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GlobalSearch,
    GenreRecommendations,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::GlobalSearch),
            "2" => Some(MenuChoice::GenreRecommendations),
            _ => None,
        }
    }
}

/// Show the menu and read one answer. An invalid answer is reported and
/// yields `None`; there is no second attempt.
pub fn prompt_choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<MenuChoice>> {
    console.say("Welcome to the Movie Recommendation System!".bold())?;
    console.blank()?;
    console.say("1. Search movies by entering its name (Global Search)")?;
    console.blank()?;
    console.say("2. Get movie recommendations based on genre")?;
    console.blank()?;

    let answer = console.prompt("Please enter your choice (1 or 2): ")?;
    console.blank()?;

    let choice = MenuChoice::parse(&answer);
    if choice.is_none() {
        console.say(INVALID_CHOICE.red())?;
        console.blank()?;
    }
    Ok(choice)
}
