//! The story engine
//!
//! Owns the validated content store and the game state, and advances the
//! playthrough one node at a time. Side effects the front end should react
//! to (scene changes, threat changes, sound cues, unlocks) are queued as
//! [`EngineSignal`]s and drained by the caller each frame.

use crate::game::{threat_level, EngineSignal, GameState, PlayPhase, SceneSnapshot, SoundCue};
use crate::{path_key, ContentStore, GameError, StoryNode, ThreatLevel};
use std::collections::VecDeque;

pub struct StoryEngine {
    store: ContentStore,
    state: GameState,
    signals: VecDeque<EngineSignal>,
}

impl StoryEngine {
    /// Create an engine over validated content. No node is loaded yet;
    /// call [`start`](Self::start) to begin the playthrough.
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            state: GameState::new(),
            signals: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The node the playthrough currently sits on, if one has been loaded
    pub fn current_node(&self) -> Option<&StoryNode> {
        self.store.get(self.state.current_act, self.state.current_scene)
    }

    /// Begin the playthrough at the opening node
    pub fn start(&mut self) -> Result<(), GameError> {
        self.load_node(1, 1)
    }

    /// Drain all queued signals, oldest first
    pub fn drain_signals(&mut self) -> Vec<EngineSignal> {
        self.signals.drain(..).collect()
    }

    /// Mark the current node's dialogue as fully presented
    pub fn dialogue_complete(&mut self) {
        if self.state.phase == PlayPhase::Dialogue {
            self.state.phase = PlayPhase::AwaitingChoice;
        }
    }

    /// Apply the player's choice by its index into the current node's
    /// choice list. Either transitions to the chosen node or ends the
    /// playthrough if the choice is an ending.
    pub fn apply_choice(&mut self, index: usize) -> Result<(), GameError> {
        if self.state.phase == PlayPhase::Ended {
            return Err(GameError::PlaythroughEnded);
        }
        let (node_act, node_scene, choice) = {
            let node = self.current_node().ok_or(GameError::NodeNotFound(
                self.state.current_act,
                self.state.current_scene,
            ))?;
            let choice = node
                .choices
                .get(index)
                .ok_or(GameError::InvalidChoice(index))?
                .clone();
            (node.act, node.scene, choice)
        };

        self.state.record_choice(node_act, node_scene, &choice.outcome);
        self.signals
            .push_back(EngineSignal::Sound(SoundCue::ChoiceSelect));
        self.push_snapshot();

        if let Some(path) = path_key(&choice.outcome) {
            if self.state.unlock_path(&path) {
                self.signals
                    .push_back(EngineSignal::PathUnlocked(path.clone()));
                self.signals
                    .push_back(EngineSignal::Sound(SoundCue::BadgeUnlock));
            }
            self.state.ending = Some(path.clone());
            self.state.phase = PlayPhase::Ended;
            self.signals.push_back(EngineSignal::PlaythroughEnded(path));
            return Ok(());
        }

        let (act, scene) = choice.target();
        self.load_node(act, scene)
    }

    /// Start over. Unlocked paths survive; everything else resets.
    pub fn replay(&mut self) -> Result<(), GameError> {
        self.state.replay();
        self.signals.clear();
        self.start()
    }

    fn load_node(&mut self, act: u32, scene: u32) -> Result<(), GameError> {
        let node = self
            .store
            .get(act, scene)
            .ok_or(GameError::NodeNotFound(act, scene))?
            .clone();

        let old_threat = self.state.threat();
        self.state.current_act = act;
        self.state.current_scene = scene;
        self.state.phase = PlayPhase::Dialogue;

        self.signals
            .push_back(EngineSignal::SceneChanged { act, scene });

        let new_threat = threat_level(act);
        if new_threat != old_threat {
            self.signals.push_back(EngineSignal::ThreatChanged(new_threat));
        }

        // A new act opens on scene one with its narration sting
        if scene == 1 {
            self.signals.push_back(EngineSignal::Sound(SoundCue::NewAct));
            self.signals
                .push_back(EngineSignal::Sound(SoundCue::Narration(act)));
        }
        if new_threat == ThreatLevel::Critical {
            self.signals
                .push_back(EngineSignal::Sound(SoundCue::ImpactWarning));
        }

        if let Some(data_point) = node.data_point {
            self.state.collect(data_point.clone());
            self.signals
                .push_back(EngineSignal::DataPointObserved(data_point));
        }
        self.push_snapshot();

        Ok(())
    }

    fn push_snapshot(&mut self) {
        let snapshot = SceneSnapshot {
            act: self.state.current_act,
            scene: self.state.current_scene,
            last_outcome: self
                .state
                .choice_history
                .last()
                .map(|r| r.outcome.clone()),
            data_point: self.current_node().and_then(|n| n.data_point.clone()),
        };
        self.signals.push_back(EngineSignal::Snapshot(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::content::campaign;
    use crate::{Character, Choice, DataPointKind, StoryNode};

    fn engine() -> StoryEngine {
        StoryEngine::new(campaign().unwrap())
    }

    /// Pick the choice whose outcome matches, by index
    fn choose(engine: &mut StoryEngine, outcome: &str) {
        let index = engine
            .current_node()
            .unwrap()
            .choices
            .iter()
            .position(|c| c.outcome == outcome)
            .unwrap_or_else(|| panic!("no choice with outcome {outcome}"));
        engine.apply_choice(index).unwrap();
    }

    #[test]
    fn start_loads_the_opening_and_raises_the_threat() {
        let mut e = engine();
        e.start().unwrap();
        let signals = e.drain_signals();
        assert!(signals.contains(&EngineSignal::SceneChanged { act: 1, scene: 1 }));
        assert!(signals.contains(&EngineSignal::ThreatChanged(ThreatLevel::Warning)));
        assert!(signals.contains(&EngineSignal::Sound(SoundCue::NewAct)));
        assert!(signals.contains(&EngineSignal::Sound(SoundCue::Narration(1))));
        assert_eq!(e.state().phase, PlayPhase::Dialogue);
    }

    #[test]
    fn entering_act_three_sounds_the_impact_warning() {
        let mut e = engine();
        e.start().unwrap();
        choose(&mut e, "observatory_floor");
        choose(&mut e, "run_models");
        choose(&mut e, "confirmed_alert");
        e.drain_signals();

        choose(&mut e, "kinetic_choice");
        let signals = e.drain_signals();
        assert!(signals.contains(&EngineSignal::ThreatChanged(ThreatLevel::Critical)));
        assert!(signals.contains(&EngineSignal::Sound(SoundCue::ImpactWarning)));
    }

    #[test]
    fn data_points_are_collected_and_signaled() {
        let mut e = engine();
        e.start().unwrap();
        e.drain_signals();
        choose(&mut e, "observatory_floor");

        let signals = e.drain_signals();
        assert!(signals
            .iter()
            .any(|s| matches!(s, EngineSignal::DataPointObserved(d) if d.kind == DataPointKind::Asteroid)));
        assert_eq!(
            e.state().data_collected[&DataPointKind::Asteroid].value,
            "780M DIAMETER"
        );
    }

    #[test]
    fn snapshots_track_position_and_last_outcome() {
        let mut e = engine();
        e.start().unwrap();
        let signals = e.drain_signals();
        assert!(signals.iter().any(|s| matches!(
            s,
            EngineSignal::Snapshot(SceneSnapshot {
                act: 1,
                scene: 1,
                last_outcome: None,
                ..
            })
        )));

        choose(&mut e, "observatory_floor");
        let signals = e.drain_signals();
        let outcomes: Vec<_> = signals
            .iter()
            .filter_map(|s| match s {
                EngineSignal::Snapshot(snap) => Some(snap.last_outcome.clone()),
                _ => None,
            })
            .collect();
        // One snapshot at choice time, one after the new node loads
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|o| o.as_deref() == Some("observatory_floor")));
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let mut e = engine();
        e.start().unwrap();
        assert!(matches!(
            e.apply_choice(7),
            Err(GameError::InvalidChoice(7))
        ));
    }

    #[test]
    fn kinetic_route_reaches_the_phoenix_ending() {
        let mut e = engine();
        e.start().unwrap();
        choose(&mut e, "observatory_floor");
        choose(&mut e, "run_models");
        choose(&mut e, "confirmed_alert");
        choose(&mut e, "kinetic_choice");
        choose(&mut e, "impactor_away");
        choose(&mut e, "second_impactor");
        e.drain_signals();

        choose(&mut e, "end_phoenix");

        assert_eq!(e.state().phase, PlayPhase::Ended);
        assert_eq!(e.state().ending.as_deref(), Some("phoenix_path"));
        assert!(e.state().unlocked_paths.contains("phoenix_path"));
        let signals = e.drain_signals();
        assert!(signals.contains(&EngineSignal::PathUnlocked("phoenix_path".to_string())));
        assert!(signals.contains(&EngineSignal::Sound(SoundCue::BadgeUnlock)));
        assert!(signals.contains(&EngineSignal::PlaythroughEnded("phoenix_path".to_string())));

        let outcomes: Vec<&str> = e
            .state()
            .choice_history
            .iter()
            .map(|r| r.outcome.as_str())
            .collect();
        assert_eq!(
            outcomes,
            [
                "observatory_floor",
                "run_models",
                "confirmed_alert",
                "kinetic_choice",
                "impactor_away",
                "second_impactor",
                "end_phoenix"
            ]
        );
    }

    #[test]
    fn choosing_after_the_ending_is_an_error() {
        let mut e = engine();
        e.start().unwrap();
        choose(&mut e, "observatory_floor");
        choose(&mut e, "run_models");
        choose(&mut e, "confirmed_alert");
        choose(&mut e, "kinetic_choice");
        choose(&mut e, "impactor_away");
        choose(&mut e, "second_impactor");
        choose(&mut e, "end_phoenix");

        assert!(matches!(
            e.apply_choice(0),
            Err(GameError::PlaythroughEnded)
        ));
    }

    #[test]
    fn replay_restarts_but_keeps_unlocks() {
        let mut e = engine();
        e.start().unwrap();
        choose(&mut e, "observatory_floor");
        choose(&mut e, "run_models");
        choose(&mut e, "confirmed_alert");
        choose(&mut e, "kinetic_choice");
        choose(&mut e, "impactor_away");
        choose(&mut e, "second_impactor");
        choose(&mut e, "end_phoenix");

        e.replay().unwrap();

        assert_eq!(e.state().current_act, 1);
        assert_eq!(e.state().current_scene, 1);
        assert_eq!(e.state().phase, PlayPhase::Dialogue);
        assert!(e.state().choice_history.is_empty());
        assert!(e.state().data_collected.is_empty());
        assert!(e.state().ending.is_none());
        assert!(e.state().unlocked_paths.contains("phoenix_path"));
    }

    #[test]
    fn unlocking_a_second_time_emits_no_badge() {
        fn run_to_phoenix(e: &mut StoryEngine) -> Vec<EngineSignal> {
            for outcome in [
                "observatory_floor",
                "run_models",
                "confirmed_alert",
                "kinetic_choice",
                "impactor_away",
                "second_impactor",
            ] {
                choose(e, outcome);
            }
            e.drain_signals();
            choose(e, "end_phoenix");
            e.drain_signals()
        }

        let mut e = engine();
        e.start().unwrap();
        let first = run_to_phoenix(&mut e);
        assert!(first
            .iter()
            .any(|s| matches!(s, EngineSignal::PathUnlocked(_))));

        e.replay().unwrap();
        let signals = run_to_phoenix(&mut e);
        assert!(!signals
            .iter()
            .any(|s| matches!(s, EngineSignal::PathUnlocked(_))));
        assert!(signals.contains(&EngineSignal::PlaythroughEnded("phoenix_path".to_string())));
    }

    #[test]
    fn dialogue_complete_moves_to_awaiting_choice() {
        let mut e = engine();
        e.start().unwrap();
        assert_eq!(e.state().phase, PlayPhase::Dialogue);
        e.dialogue_complete();
        assert_eq!(e.state().phase, PlayPhase::AwaitingChoice);
    }

    #[test]
    fn minimal_two_node_story_runs_to_its_ending() {
        let store = ContentStore::new(vec![
            StoryNode::new(1, 1, Character::Narrator, &["Opening."])
                .choice(Choice::new("Strike", "kinetic_choice", 2)),
            StoryNode::new(2, 1, Character::Defender, &["Closing."])
                .choice(Choice::new("Finish", "end_phoenix", 5)),
        ])
        .unwrap();
        let mut e = StoryEngine::new(store);
        e.start().unwrap();

        e.apply_choice(0).unwrap();
        assert_eq!(e.state().current_act, 2);
        assert_eq!(e.state().current_scene, 1);
        assert_eq!(e.state().choice_history.len(), 1);
        assert_eq!(e.state().choice_history[0].outcome, "kinetic_choice");
        assert_ne!(e.state().phase, PlayPhase::Ended);

        e.apply_choice(0).unwrap();
        assert_eq!(e.state().phase, PlayPhase::Ended);
        assert!(e.state().unlocked_paths.contains("phoenix_path"));
        assert_eq!(e.state().unlocked_paths.len(), 1);
    }

    #[test]
    fn missing_node_is_reported_at_transition_time() {
        let node = StoryNode::new(1, 1, Character::Narrator, &["Only node."])
            .choice(Choice::new("End it", "end_phoenix", 1));
        let store = ContentStore::new(vec![node]).unwrap();
        let mut e = StoryEngine::new(store);
        assert!(matches!(
            e.load_node(2, 1),
            Err(GameError::NodeNotFound(2, 1))
        ));
    }
}
