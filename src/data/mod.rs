//! Data structures for the game world
//!
//! Defines story nodes, characters, threat levels, and environment data.

pub mod content;
pub mod environment;
pub mod story;

pub use content::*;
pub use environment::*;
pub use story::*;

use serde::{Deserialize, Serialize};

/// Planetary threat level, shown to the player and driven by story progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    Safe,
    Warning,
    Critical,
}

impl ThreatLevel {
    pub fn symbol(&self) -> &'static str {
        match self {
            ThreatLevel::Safe => "●",
            ThreatLevel::Warning => "▲",
            ThreatLevel::Critical => "⬤",
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreatLevel::Safe => write!(f, "SAFE"),
            ThreatLevel::Warning => write!(f, "WARNING"),
            ThreatLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Who is speaking in a story node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    Narrator,
    Watcher,
    Seeker,
    Defender,
}

/// Display info for a character
#[derive(Debug, Clone, Copy)]
pub struct CharacterInfo {
    pub name: &'static str,
    pub title: &'static str,
}

impl Character {
    pub fn info(&self) -> CharacterInfo {
        match self {
            Character::Narrator => CharacterInfo {
                name: "MISSION LOG",
                title: "AstroLab Archive",
            },
            Character::Watcher => CharacterInfo {
                name: "Dr. Elara Voss",
                title: "Chief Observer, Near-Earth Survey",
            },
            Character::Seeker => CharacterInfo {
                name: "Kiran Okafor",
                title: "Impact Modeling Lead",
            },
            Character::Defender => CharacterInfo {
                name: "Cmdr. Ada Reyes",
                title: "Planetary Defense Command",
            },
        }
    }
}

/// Categories of mission data surfaced by story nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataPointKind {
    Asteroid,
    Earthquake,
    Tsunami,
    Crater,
}

impl std::fmt::Display for DataPointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataPointKind::Asteroid => write!(f, "ASTEROID"),
            DataPointKind::Earthquake => write!(f, "EARTHQUAKE"),
            DataPointKind::Tsunami => write!(f, "TSUNAMI"),
            DataPointKind::Crater => write!(f, "CRATER"),
        }
    }
}

/// A factual annotation attached to a story node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub kind: DataPointKind,
    pub value: String,
}

impl DataPoint {
    pub fn new(kind: DataPointKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Display info for an unlocked ending path
#[derive(Debug, Clone, Copy)]
pub struct PathInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}
