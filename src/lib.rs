//! AstroLab - a branching narrative game about planetary defense
//!
//! An asteroid is coming. You are mission control. Every choice you make
//! steers the story toward one of several endings, and every playthrough
//! leaves its mark in the paths you have unlocked.
//!
//! # Game Mechanics
//!
//! - **Branching story**: five acts of dialogue keyed by (act, scene)
//! - **Choices with consequences**: outcomes accumulate into a decision timeline
//! - **Meta-progression**: ending paths stay unlocked across replays
//! - **Mission data**: asteroid, earthquake, tsunami and crater readouts
//!   collected as the story reveals them
//!
//! # Architecture
//!
//! - `game` - story engine, game state, dialogue reveal, oracle
//! - `data` - story nodes, the authored campaign, environment data feeds
//! - `tui` - terminal user interface with ratatui

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::engine::StoryEngine;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Story node not found: act {0}, scene {1}")]
    NodeNotFound(u32, u32),

    #[error("Duplicate story node: act {0}, scene {1}")]
    DuplicateNode(u32, u32),

    #[error("Choice \"{outcome}\" leads to a missing node: act {act}, scene {scene}")]
    DanglingTransition {
        outcome: String,
        act: u32,
        scene: u32,
    },

    #[error("Invalid choice index {0} for the current node")]
    InvalidChoice(usize),

    #[error("Playthrough has ended; replay to continue")]
    PlaythroughEnded,

    #[error("Invalid story content: {0}")]
    InvalidContent(String),
}
