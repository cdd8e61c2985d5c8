//! Game state and the story engine
//!
//! `GameState` is the serializable record of one playthrough plus the
//! progression that survives replays. The engine in [`engine`] drives it;
//! [`dialogue`] paces the text reveal; [`oracle`] generates flavor analysis.

pub mod dialogue;
pub mod engine;
pub mod oracle;

use crate::{DataPoint, DataPointKind, ThreatLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

/// Where the playthrough currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayPhase {
    /// Dialogue for the current node is being presented
    Dialogue,
    /// Dialogue is fully shown; waiting on a choice
    AwaitingChoice,
    /// An ending was reached; only replay continues
    Ended,
}

/// Audio cue requested by the engine. Emitted as a signal only; whether
/// anything plays is the front end's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    NewAct,
    Narration(u32),
    ImpactWarning,
    ChoiceSelect,
    BadgeUnlock,
}

/// Events the engine emits for the front end to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSignal {
    SceneChanged { act: u32, scene: u32 },
    ThreatChanged(ThreatLevel),
    Sound(SoundCue),
    DataPointObserved(DataPoint),
    Snapshot(SceneSnapshot),
    PathUnlocked(String),
    PlaythroughEnded(String),
}

/// Point-in-time view of the playthrough, for visualizer-style consumers
/// that mirror story progress without holding game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub act: u32,
    pub scene: u32,
    pub last_outcome: Option<String>,
    pub data_point: Option<DataPoint>,
}

/// One recorded decision in the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    pub act: u32,
    pub scene: u32,
    pub outcome: String,
    pub at: DateTime<Utc>,
}

/// Threat level implied by story progress. Acts one and two are the
/// discovery and assessment phase; from act three on the mission is live.
pub fn threat_level(act: u32) -> ThreatLevel {
    match act {
        0 => ThreatLevel::Safe,
        1 | 2 => ThreatLevel::Warning,
        _ => ThreatLevel::Critical,
    }
}

/// The full state of one playthrough plus cross-playthrough progression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Identifier of the current playthrough
    pub playthrough: Uuid,

    pub started_at: DateTime<Utc>,
    pub current_act: u32,
    pub current_scene: u32,
    pub phase: PlayPhase,

    /// Every decision made this playthrough, in order
    pub choice_history: Vec<ChoiceRecord>,

    /// Latest observed data point per kind, this playthrough
    pub data_collected: HashMap<DataPointKind, DataPoint>,

    /// Ending paths unlocked across all playthroughs
    pub unlocked_paths: BTreeSet<String>,

    /// Path key of the ending reached this playthrough, if any
    pub ending: Option<String>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            playthrough: Uuid::new_v4(),
            started_at: Utc::now(),
            current_act: 0,
            current_scene: 0,
            phase: PlayPhase::Dialogue,
            choice_history: Vec::new(),
            data_collected: HashMap::new(),
            unlocked_paths: BTreeSet::new(),
            ending: None,
        }
    }

    /// The threat level implied by the current position
    pub fn threat(&self) -> ThreatLevel {
        threat_level(self.current_act)
    }

    /// Append a decision to the timeline
    pub fn record_choice(&mut self, act: u32, scene: u32, outcome: &str) {
        self.choice_history.push(ChoiceRecord {
            act,
            scene,
            outcome: outcome.to_string(),
            at: Utc::now(),
        });
    }

    /// Record a data point, replacing any earlier one of the same kind
    pub fn collect(&mut self, data_point: DataPoint) {
        self.data_collected.insert(data_point.kind, data_point);
    }

    /// Unlock an ending path. Returns true if it was newly unlocked.
    pub fn unlock_path(&mut self, path: &str) -> bool {
        self.unlocked_paths.insert(path.to_string())
    }

    /// Start a fresh playthrough. Only unlocked paths carry over.
    pub fn replay(&mut self) {
        let unlocked = std::mem::take(&mut self.unlocked_paths);
        *self = Self::new();
        self.unlocked_paths = unlocked;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threat_rises_with_the_acts_and_stays_critical() {
        assert_eq!(threat_level(0), ThreatLevel::Safe);
        assert_eq!(threat_level(1), ThreatLevel::Warning);
        assert_eq!(threat_level(2), ThreatLevel::Warning);
        assert_eq!(threat_level(3), ThreatLevel::Critical);
        assert_eq!(threat_level(5), ThreatLevel::Critical);
    }

    #[test]
    fn replay_keeps_only_unlocked_paths() {
        let mut state = GameState::new();
        let first = state.playthrough;
        state.current_act = 5;
        state.record_choice(5, 1, "end_phoenix");
        state.collect(DataPoint::new(DataPointKind::Asteroid, "780M DIAMETER"));
        state.unlock_path("phoenix_path");
        state.ending = Some("phoenix_path".to_string());

        state.replay();

        assert_ne!(state.playthrough, first);
        assert_eq!(state.current_act, 0);
        assert!(state.choice_history.is_empty());
        assert!(state.data_collected.is_empty());
        assert!(state.ending.is_none());
        assert!(state.unlocked_paths.contains("phoenix_path"));
    }

    #[test]
    fn collecting_the_same_kind_keeps_the_latest_value() {
        let mut state = GameState::new();
        state.collect(DataPoint::new(DataPointKind::Asteroid, "780M DIAMETER"));
        state.collect(DataPoint::new(DataPointKind::Asteroid, "VELOCITY 25.3 KM/S"));
        assert_eq!(state.data_collected.len(), 1);
        assert_eq!(
            state.data_collected[&DataPointKind::Asteroid].value,
            "VELOCITY 25.3 KM/S"
        );
    }

    #[test]
    fn unlock_path_reports_novelty() {
        let mut state = GameState::new();
        assert!(state.unlock_path("guardian_path"));
        assert!(!state.unlock_path("guardian_path"));
    }
}
