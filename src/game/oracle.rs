//! Mission oracle
//!
//! Generates the flavor analysis shown in the side panel and the end-of-game
//! report. Values are drawn from small fixed domains so the readouts feel
//! official without ever contradicting the story. The RNG is injected so
//! tests can seed it.

use crate::data::content::path_info;
use crate::game::GameState;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Risk percentages the analysis panel may display
pub const RISK_LEVELS: [u8; 5] = [42, 67, 72, 85, 91];

const SUGGESTIONS: [&str; 6] = [
    "RECOMMEND CONTINUOUS RADAR TRACKING",
    "EVACUATION CORRIDOR MODELS UPDATED",
    "LAUNCH WINDOW HOLDS FOR 72 HOURS",
    "REQUEST INDEPENDENT ORBIT VERIFICATION",
    "DEEP SPACE NETWORK AT FULL COVERAGE",
    "CIVIL DEFENSE LIAISON ON STANDBY",
];

const VERDICTS: [&str; 4] = [
    "MISSION ANALYSIS: DECISIVE ACTION UNDER UNCERTAINTY",
    "MISSION ANALYSIS: MODEL-DRIVEN RESPONSE, NOMINAL EXECUTION",
    "MISSION ANALYSIS: ACCEPTABLE LOSSES WITHIN PROJECTION",
    "MISSION ANALYSIS: PLANETARY DEFENSE DOCTRINE VALIDATED",
];

/// How sure the oracle claims to be. Rises with the acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "LOW"),
            Confidence::Moderate => write!(f, "MODERATE"),
            Confidence::High => write!(f, "HIGH"),
            Confidence::VeryHigh => write!(f, "VERY HIGH"),
        }
    }
}

/// Confidence implied by story progress
pub fn confidence_for_act(act: u32) -> Confidence {
    match act.saturating_sub(1).min(3) {
        0 => Confidence::Low,
        1 => Confidence::Moderate,
        2 => Confidence::High,
        _ => Confidence::VeryHigh,
    }
}

/// One analysis panel readout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub risk_percent: u8,
    pub confidence: Confidence,
    pub suggestion: String,
    pub generated_at: DateTime<Utc>,
}

/// Produce a fresh analysis for the current act
pub fn analyze(act: u32, rng: &mut impl Rng) -> Analysis {
    Analysis {
        risk_percent: RISK_LEVELS[rng.gen_range(0..RISK_LEVELS.len())],
        confidence: confidence_for_act(act),
        suggestion: SUGGESTIONS[rng.gen_range(0..SUGGESTIONS.len())].to_string(),
        generated_at: Utc::now(),
    }
}

/// The end-of-playthrough debrief
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub ending_name: String,
    pub decisions: usize,
    pub data_points: usize,
    pub paths_unlocked: usize,
    pub verdict: String,
    pub generated_at: DateTime<Utc>,
}

/// Build the debrief shown on the report screen after an ending
pub fn final_report(state: &GameState, rng: &mut impl Rng) -> FinalReport {
    let ending_name = state
        .ending
        .as_deref()
        .and_then(path_info)
        .map(|p| p.name.to_string())
        .unwrap_or_else(|| "MISSION INCOMPLETE".to_string());

    FinalReport {
        ending_name,
        decisions: state.choice_history.len(),
        data_points: state.data_collected.len(),
        paths_unlocked: state.unlocked_paths.len(),
        verdict: VERDICTS[rng.gen_range(0..VERDICTS.len())].to_string(),
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn analysis_draws_from_the_fixed_domains() {
        let mut rng = StdRng::seed_from_u64(7);
        for act in 1..=5 {
            let a = analyze(act, &mut rng);
            assert!(RISK_LEVELS.contains(&a.risk_percent));
            assert!(SUGGESTIONS.contains(&a.suggestion.as_str()));
        }
    }

    #[test]
    fn same_seed_gives_the_same_analysis() {
        let a = analyze(3, &mut StdRng::seed_from_u64(42));
        let b = analyze(3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.risk_percent, b.risk_percent);
        assert_eq!(a.suggestion, b.suggestion);
    }

    #[test]
    fn confidence_rises_with_the_acts_and_saturates() {
        assert_eq!(confidence_for_act(1), Confidence::Low);
        assert_eq!(confidence_for_act(2), Confidence::Moderate);
        assert_eq!(confidence_for_act(3), Confidence::High);
        assert_eq!(confidence_for_act(4), Confidence::VeryHigh);
        assert_eq!(confidence_for_act(5), Confidence::VeryHigh);
    }

    #[test]
    fn final_report_names_the_reached_ending() {
        let mut state = GameState::new();
        state.ending = Some("guardian_path".to_string());
        state.record_choice(5, 3, "end_guardian");
        state.unlock_path("guardian_path");

        let report = final_report(&state, &mut StdRng::seed_from_u64(1));
        assert_eq!(report.ending_name, "THE ETERNAL WATCH");
        assert_eq!(report.decisions, 1);
        assert_eq!(report.paths_unlocked, 1);
        assert!(VERDICTS.contains(&report.verdict.as_str()));
    }

    #[test]
    fn final_report_without_an_ending_is_incomplete() {
        let report = final_report(&GameState::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(report.ending_name, "MISSION INCOMPLETE");
    }
}
