//! Story nodes, choices, and the content store
//!
//! The story is a flat table of nodes addressed by (act, scene). The store
//! validates the table once at load time so that a bad transition is an
//! authoring error, not a runtime surprise.

use crate::{Character, DataPoint, GameError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefix marking a playthrough-terminating outcome token
pub const ENDING_PREFIX: &str = "end_";

/// A choice the player can make at the end of a node's dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown to the player
    pub text: String,

    /// Opaque token recorded in the decision timeline
    pub outcome: String,

    /// Act of the node this choice leads to
    pub next_act: u32,

    /// Scene of the node this choice leads to; absent means scene 1
    pub next_scene: Option<u32>,
}

impl Choice {
    pub fn new(text: &str, outcome: &str, next_act: u32) -> Self {
        Self {
            text: text.to_string(),
            outcome: outcome.to_string(),
            next_act,
            next_scene: None,
        }
    }

    pub fn scene(mut self, scene: u32) -> Self {
        self.next_scene = Some(scene);
        self
    }

    /// Does this choice end the playthrough?
    pub fn is_ending(&self) -> bool {
        self.outcome.starts_with(ENDING_PREFIX)
    }

    /// The (act, scene) key this choice transitions to
    pub fn target(&self) -> (u32, u32) {
        (self.next_act, self.next_scene.unwrap_or(1))
    }
}

/// Derive the unlocked-path key for an ending outcome token
///
/// `"end_phoenix"` becomes `"phoenix_path"`. Returns `None` for
/// non-ending tokens.
pub fn path_key(outcome: &str) -> Option<String> {
    outcome
        .strip_prefix(ENDING_PREFIX)
        .map(|rest| format!("{}_path", rest))
}

/// A single authored unit of dialogue plus choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    pub act: u32,
    pub scene: u32,
    pub character: Character,
    pub dialogue: Vec<String>,
    pub choices: Vec<Choice>,
    pub data_point: Option<DataPoint>,
}

impl StoryNode {
    pub fn new(act: u32, scene: u32, character: Character, dialogue: &[&str]) -> Self {
        Self {
            act,
            scene,
            character,
            dialogue: dialogue.iter().map(|s| s.to_string()).collect(),
            choices: Vec::new(),
            data_point: None,
        }
    }

    pub fn choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn data_point(mut self, data_point: DataPoint) -> Self {
        self.data_point = Some(data_point);
        self
    }

    pub fn key(&self) -> (u32, u32) {
        (self.act, self.scene)
    }
}

/// The validated, read-only table of story nodes
#[derive(Debug, Clone)]
pub struct ContentStore {
    nodes: Vec<StoryNode>,
    index: HashMap<(u32, u32), usize>,
}

impl ContentStore {
    /// Build a store from authored nodes, validating the whole table.
    ///
    /// Rejected at load: non-positive act/scene keys, duplicate (act, scene)
    /// keys, empty dialogue, and non-ending choices whose target node does
    /// not exist. Ending choices are exempt from the target check because
    /// the engine never loads a node after an ending.
    pub fn new(nodes: Vec<StoryNode>) -> Result<Self, GameError> {
        let mut index = HashMap::new();

        for (i, node) in nodes.iter().enumerate() {
            if node.act == 0 || node.scene == 0 {
                return Err(GameError::InvalidContent(format!(
                    "act and scene must be positive, got ({}, {})",
                    node.act, node.scene
                )));
            }
            if node.dialogue.is_empty() {
                return Err(GameError::InvalidContent(format!(
                    "node ({}, {}) has no dialogue",
                    node.act, node.scene
                )));
            }
            if index.insert(node.key(), i).is_some() {
                return Err(GameError::DuplicateNode(node.act, node.scene));
            }
        }

        for node in &nodes {
            for choice in &node.choices {
                if choice.is_ending() {
                    continue;
                }
                let (act, scene) = choice.target();
                if !index.contains_key(&(act, scene)) {
                    return Err(GameError::DanglingTransition {
                        outcome: choice.outcome.clone(),
                        act,
                        scene,
                    });
                }
            }
        }

        Ok(Self { nodes, index })
    }

    /// Look up the node at (act, scene)
    pub fn get(&self, act: u32, scene: u32) -> Option<&StoryNode> {
        self.index.get(&(act, scene)).map(|&i| &self.nodes[i])
    }

    /// All nodes, in authored order
    pub fn nodes(&self) -> &[StoryNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataPointKind;

    fn minimal_node(act: u32, scene: u32) -> StoryNode {
        StoryNode::new(act, scene, Character::Narrator, &["A line."])
    }

    #[test]
    fn lookup_returns_the_matching_node() {
        let store = ContentStore::new(vec![minimal_node(1, 1), minimal_node(1, 2)]).unwrap();
        assert_eq!(store.get(1, 2).unwrap().key(), (1, 2));
        assert!(store.get(2, 1).is_none());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = ContentStore::new(vec![minimal_node(1, 1), minimal_node(1, 1)]).unwrap_err();
        assert!(matches!(err, GameError::DuplicateNode(1, 1)));
    }

    #[test]
    fn dangling_transitions_are_rejected() {
        let node = minimal_node(1, 1).choice(Choice::new("Go", "leap", 9).scene(9));
        let err = ContentStore::new(vec![node]).unwrap_err();
        assert!(matches!(
            err,
            GameError::DanglingTransition { act: 9, scene: 9, .. }
        ));
    }

    #[test]
    fn ending_choices_may_point_anywhere() {
        let node = minimal_node(1, 1).choice(Choice::new("Finish", "end_phoenix", 99));
        assert!(ContentStore::new(vec![node]).is_ok());
    }

    #[test]
    fn zero_keys_are_rejected() {
        let err = ContentStore::new(vec![minimal_node(0, 1)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidContent(_)));
    }

    #[test]
    fn path_key_strips_the_ending_prefix() {
        assert_eq!(path_key("end_phoenix").as_deref(), Some("phoenix_path"));
        assert_eq!(path_key("kinetic_choice"), None);
    }

    #[test]
    fn choice_target_defaults_to_scene_one() {
        assert_eq!(Choice::new("Go", "go", 3).target(), (3, 1));
        assert_eq!(Choice::new("Go", "go", 3).scene(2).target(), (3, 2));
    }

    #[test]
    fn data_point_attaches_to_a_node() {
        let node = minimal_node(1, 1)
            .data_point(DataPoint::new(DataPointKind::Asteroid, "780M DIAMETER"));
        assert_eq!(node.data_point.unwrap().kind, DataPointKind::Asteroid);
    }
}
