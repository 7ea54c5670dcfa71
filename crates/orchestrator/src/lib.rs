//! Interactive flows for the movie recommendation CLI.
//!
//! This crate contains the orchestrator that ties the recommendation
//! sources to a console: the launcher menu, the genre flow and the global
//! title search flow.

pub mod console;
pub mod genre_flow;
pub mod menu;
pub mod orchestrator;
pub mod render;
pub mod search_flow;

pub use console::Console;
pub use menu::{INVALID_CHOICE, MenuChoice, prompt_choice};
pub use orchestrator::{FlowSettings, RecommendationOrchestrator};
