//! The authored campaign
//!
//! Five acts: discovery, assessment, deflection mission, crisis, and
//! resolution. Three ending paths can be unlocked across playthroughs.

use crate::{
    Character, Choice, ContentStore, DataPoint, DataPointKind, PathInfo, Result, StoryNode,
};

/// The ending paths a player can unlock
pub const PATHS: [PathInfo; 3] = [
    PathInfo {
        id: "phoenix_path",
        name: "THE PHOENIX PROTOCOL",
        description: "The impactor struck true. Earth rises from the near-miss reborn.",
        badge: "🔥",
    },
    PathInfo {
        id: "guardian_path",
        name: "THE ETERNAL WATCH",
        description: "The sky is never empty. You made sure someone is always looking up.",
        badge: "🛡",
    },
    PathInfo {
        id: "sacrifice_path",
        name: "THE LONG DAWN",
        description: "Not every city could be saved. Humanity endures, and remembers.",
        badge: "🕯",
    },
];

/// Look up display info for an unlocked path key
pub fn path_info(id: &str) -> Option<PathInfo> {
    PATHS.iter().copied().find(|p| p.id == id)
}

/// Build the validated campaign content store
pub fn campaign() -> Result<ContentStore> {
    use Character::*;
    use DataPointKind::*;

    let nodes = vec![
        // ---- Act 1: Discovery ----
        StoryNode::new(
            1,
            1,
            Narrator,
            &[
                "AstroLab Station, 03:17 UTC. The survey array has flagged an automated \
                 alert for the fourth night in a row.",
                "Most alerts are noise. Cosmic ray hits, satellite glints, a moth on the \
                 dome camera, once.",
                "This one has not gone away.",
            ],
        )
        .choice(Choice::new(
            "Walk down to the observatory floor",
            "observatory_floor",
            1,
        ).scene(2)),
        StoryNode::new(
            1,
            2,
            Watcher,
            &[
                "You're here. Good. I didn't want to say this over the intercom.",
                "Object 2025-QX1. Apollo-class, roughly 780 meters across. I've run the \
                 arc twelve times.",
                "Every solution crosses us. Six months out.",
            ],
        )
        .data_point(DataPoint::new(Asteroid, "780M DIAMETER"))
        .choice(Choice::new(
            "Run the trajectory models yourself",
            "run_models",
            1,
        ).scene(3))
        .choice(Choice::new(
            "Alert Planetary Defense Command immediately",
            "early_alert",
            2,
        )),
        StoryNode::new(
            1,
            3,
            Seeker,
            &[
                "I pulled the radar returns while you were climbing the stairs.",
                "Closing velocity 25.3 kilometers per second. That is not a rock, that is \
                 a continent-killer on final approach.",
                "The math doesn't care how we feel about it. Command needs this tonight.",
            ],
        )
        .data_point(DataPoint::new(Asteroid, "VELOCITY 25.3 KM/S"))
        .choice(Choice::new(
            "Send the confirmed solution to Command",
            "confirmed_alert",
            2,
        )),
        // ---- Act 2: Assessment ----
        StoryNode::new(
            2,
            1,
            Defender,
            &[
                "Planetary Defense Command, emergency session. I'll keep this short.",
                "If QX1 arrives intact, the ground shock alone is a magnitude 8.5 \
                 earthquake. Everywhere within the ejecta ring at once.",
                "We have one launch window and three ways to use it. Choose.",
            ],
        )
        .data_point(DataPoint::new(Earthquake, "MAGNITUDE 8.5 EQUIVALENT"))
        .choice(Choice::new(
            "Kinetic impactor - hit it hard, hit it now",
            "kinetic_choice",
            3,
        ))
        .choice(Choice::new(
            "Gravity tractor - slow, steady, reversible",
            "tractor_choice",
            3,
        ).scene(2))
        .choice(Choice::new(
            "Nuclear standoff charge - maximum energy",
            "nuclear_choice",
            3,
        ).scene(3))
        .choice(Choice::new(
            "Ask Modeling for the ocean-impact projection first",
            "ocean_projection",
            2,
        ).scene(2)),
        StoryNode::new(
            2,
            2,
            Seeker,
            &[
                "You want the honest number? Here it is.",
                "A Pacific strike raises a wave forty-five meters high at the two-hour \
                 mark. Coastlines on three continents inside the arrival window.",
                "Whatever you pick, pick it tonight.",
            ],
        )
        .data_point(DataPoint::new(Tsunami, "45M WAVE PROJECTED"))
        .choice(Choice::new(
            "Commit to the kinetic impactor",
            "kinetic_choice",
            3,
        ))
        .choice(Choice::new(
            "Commit to the gravity tractor",
            "tractor_choice",
            3,
        ).scene(2))
        .choice(Choice::new(
            "Commit to the nuclear option",
            "nuclear_choice",
            3,
        ).scene(3)),
        // ---- Act 3: The Mission ----
        StoryNode::new(
            3,
            1,
            Defender,
            &[
                "Impactor HAMMERFALL is away. Nineteen tons of tungsten and spite on an \
                 intercept arc.",
                "If the model holds, we trade a continental catastrophe for a crater \
                 twelve kilometers wide on an empty seabed. I will take that trade.",
                "Terminal guidance in ninety days. Nothing to do now but watch.",
            ],
        )
        .data_point(DataPoint::new(Crater, "12KM PROJECTED CRATER"))
        .choice(Choice::new(
            "Hold station and monitor the intercept",
            "impactor_away",
            4,
        )),
        StoryNode::new(
            3,
            2,
            Watcher,
            &[
                "The tractor craft is on station, eleven hundred meters off QX1's sunlit \
                 face.",
                "A millimeter per second per month. It sounds like nothing. Over six \
                 months it is the difference between a harbor and a grave.",
                "We fly formation with the end of the world, and we pull.",
            ],
        )
        .choice(Choice::new(
            "Maintain the formation burn",
            "tractor_on_station",
            4,
        ).scene(2)),
        StoryNode::new(
            3,
            3,
            Defender,
            &[
                "The standoff charge is mated and the transfer stage is green.",
                "Nobody in this room is proud of the cargo. Pride is not the mission. \
                 The mission is everyone who has never heard of QX1 waking up in March.",
                "Launch authority is yours.",
            ],
        )
        .choice(Choice::new(
            "Authorize the launch",
            "nuclear_away",
            4,
        ).scene(3)),
        // ---- Act 4: Crisis ----
        StoryNode::new(
            4,
            1,
            Seeker,
            &[
                "Intercept confirmed. Clean hit, full momentum transfer... and a problem.",
                "QX1 was a rubble pile. The main mass is deflected, but a shear fragment, \
                 maybe eighty meters, is still on a grazing course.",
                "We have the spare impactor. One more shot, or we let the fragment shave \
                 the atmosphere and pray.",
            ],
        )
        .data_point(DataPoint::new(Crater, "FRAGMENT: 80M BODY"))
        .choice(Choice::new(
            "Commit the spare impactor",
            "second_impactor",
            5,
        ))
        .choice(Choice::new(
            "Hold the spare and ride it out",
            "hold_course",
            5,
        ).scene(2)),
        StoryNode::new(
            4,
            2,
            Watcher,
            &[
                "Four months of tractor data, and the arc has moved nine hundred \
                 kilometers. It is not enough. Not quite.",
                "We can hold the burn and gamble on a miss by the width of a city, or \
                 hand the problem to the standoff charge we hoped never to fly.",
            ],
        )
        .choice(Choice::new(
            "Extend the tractor burn to the last hour",
            "extend_burn",
            5,
        ))
        .choice(Choice::new(
            "Abort to the nuclear contingency",
            "abort_to_nuclear",
            5,
        ).scene(3)),
        StoryNode::new(
            4,
            3,
            Seeker,
            &[
                "Detonation geometry is everything now.",
                "A standoff burst nudges the whole body. A surface burst shatters it, \
                 and the fragment splash zones stretch across an ocean.",
                "Command wants a recommendation. I want to be wrong about all of this.",
            ],
        )
        .data_point(DataPoint::new(Tsunami, "FRAGMENT SPLASH ZONES"))
        .choice(Choice::new(
            "Standoff detonation - push, don't shatter",
            "standoff_detonation",
            5,
        ).scene(3))
        .choice(Choice::new(
            "Surface burst - break it and accept the rain",
            "surface_burst",
            5,
        ).scene(2)),
        // ---- Act 5: Resolution ----
        StoryNode::new(
            5,
            1,
            Defender,
            &[
                "Second intercept confirmed. The fragment is gone, vaporized against its \
                 own shadow.",
                "Two impacts, zero casualties, one very expensive pair of craters on the \
                 far side of nowhere.",
                "The survey array is already sweeping for the next one. That's the job.",
            ],
        )
        .choice(Choice::new(
            "Light the beacon - Earth is clear",
            "end_phoenix",
            5,
        ))
        .choice(Choice::new(
            "Ask what happens to the watch from here",
            "final_review",
            5,
        ).scene(3)),
        StoryNode::new(
            5,
            2,
            Narrator,
            &[
                "The fragment came down in the southern ocean, six hundred kilometers \
                 from the nearest coast. The wave that reached land was four meters, \
                 not forty.",
                "Harbors drowned. Cities did not. The evacuation maps drawn in Act One \
                 saved more lives than any rocket.",
                "History will argue about the choice forever. The survivors will not.",
            ],
        )
        .choice(Choice::new(
            "Stand in the ashes and count the saved",
            "end_sacrifice",
            5,
        )),
        StoryNode::new(
            5,
            3,
            Watcher,
            &[
                "QX1 will pass at four lunar distances, bleeding a tail of dust where \
                 the charge kissed it. A miss, by the margin we made.",
                "The treaty signed this morning funds the survey forever. Every sky, \
                 every night, no gaps.",
                "Someone will always be standing where you stood tonight.",
            ],
        )
        .choice(Choice::new(
            "Take the first watch",
            "end_guardian",
            5,
        )),
    ];

    Ok(ContentStore::new(nodes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn campaign_passes_validation() {
        let store = campaign().unwrap();
        assert!(store.len() >= 12);
        assert!(store.get(1, 1).is_some());
    }

    #[test]
    fn every_ending_path_is_authored() {
        let store = campaign().unwrap();
        let endings: HashSet<String> = store
            .nodes()
            .iter()
            .flat_map(|n| n.choices.iter())
            .filter(|c| c.is_ending())
            .filter_map(|c| crate::path_key(&c.outcome))
            .collect();

        let known: HashSet<String> = PATHS.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(endings, known);
    }

    #[test]
    fn every_node_is_reachable_from_the_opening() {
        let store = campaign().unwrap();
        let mut seen = HashSet::new();
        let mut frontier = vec![(1u32, 1u32)];
        while let Some(key) = frontier.pop() {
            if !seen.insert(key) {
                continue;
            }
            let node = store.get(key.0, key.1).unwrap();
            for choice in node.choices.iter().filter(|c| !c.is_ending()) {
                frontier.push(choice.target());
            }
        }
        assert_eq!(seen.len(), store.len(), "unreachable nodes authored");
    }

    #[test]
    fn all_data_point_kinds_appear_in_the_campaign() {
        let store = campaign().unwrap();
        let kinds: HashSet<_> = store
            .nodes()
            .iter()
            .filter_map(|n| n.data_point.as_ref())
            .map(|d| d.kind)
            .collect();
        assert_eq!(kinds.len(), 4);
    }

    #[test]
    fn path_info_resolves_known_paths() {
        assert_eq!(path_info("phoenix_path").unwrap().name, "THE PHOENIX PROTOCOL");
        assert!(path_info("nonsense_path").is_none());
    }
}
