//! Full session: raw deck -> design -> validate -> ground truth -> scoring.

use leftturn_core::{
    Crosswalk, Decision, PedestrianState, ResponseOutcome, ResponseRecord, Scene, Signal, Trial,
};
use leftturn_design::{
    attention_check_scenes, design_sequence, score_attention_checks, summarize_accuracy,
    summarize_design, validate_design,
};
use leftturn_judge::{Oracle, score_response};

fn authored_deck(n: usize) -> Vec<Scene> {
    let signals = [Signal::GreenArrow, Signal::Red, Signal::NoLeftTurn, Signal::YellowFlash];
    (0..n)
        .map(|i| {
            Scene::new(
                format!("scene_{i:02}"),
                signals[i % signals.len()],
                0.5 + i as f64 * 0.25,
                if i % 3 == 0 { PedestrianState::Crossing } else { PedestrianState::None },
                if i % 2 == 0 { Crosswalk::South } else { Crosswalk::North },
            )
        })
        .collect()
}

#[test]
fn twenty_one_scene_session() {
    let trials = design_sequence(authored_deck(21));
    assert_eq!(trials.len(), 24);

    let validation = validate_design(&trials);
    assert!(validation.valid, "{:?}", validation.errors);

    let summary = summarize_design(&trials);
    assert_eq!(summary.control_count, 3);
    assert_eq!(summary.primed_count, 18);
    assert_eq!(summary.attention_check_count, 3);

    // A participant who always answers with ground truth.
    let oracle = Oracle::default();
    let logs: Vec<ResponseRecord> = trials
        .iter()
        .map(|t| {
            let choice = oracle.judge(&t.scene);
            let scored = score_response(&t.scene, choice, &oracle);
            ResponseRecord::new(t.scene_id(), scored.correct)
        })
        .collect();

    let checks = score_attention_checks(&logs);
    assert!(checks.passed);
    assert_eq!(checks.total_checks, 3);
    assert_eq!(checks.correct_checks, 3);
    assert_eq!(checks.pass_rate, 1.0);

    let accuracy = summarize_accuracy(&logs);
    assert_eq!(accuracy.total, 24);
    assert_eq!(accuracy.accuracy_percent, 100);
}

#[test]
fn twenty_four_scene_session_places_checks() {
    let trials = design_sequence(authored_deck(24));
    assert_eq!(trials.len(), 27);
    for slot in [6, 14, 22] {
        assert!(
            trials[slot].scene_id().starts_with("attention_check_"),
            "slot {slot} holds {}",
            trials[slot].scene_id()
        );
    }
    assert!(validate_design(&trials).valid);
}

#[test]
fn attention_check_answers_are_unambiguous() {
    // Whatever the canvas, each check is decided by its signal alone.
    let expected = [Decision::Wait, Decision::TurnLeft, Decision::Wait];
    for scale in [0.5, 1.0, 2.0] {
        let geometry = leftturn_judge::CanvasGeometry {
            scale,
            ..Default::default()
        };
        let oracle = Oracle::from_canvas(&geometry, Default::default());
        for (scene, want) in attention_check_scenes().iter().zip(expected) {
            assert_eq!(oracle.judge(scene), want, "{}", scene.scene_id);
        }
    }
}

#[test]
fn inattentive_participant_fails() {
    let oracle = Oracle::default();
    let trials = design_sequence(authored_deck(21));
    // Always turns: misses both "wait" checks.
    let logs: Vec<ResponseRecord> = trials
        .iter()
        .map(|t| {
            let scored = score_response(&t.scene, Decision::TurnLeft, &oracle);
            if scored.correct_choice == Decision::Wait {
                assert_eq!(scored.outcome, ResponseOutcome::RiskyError);
            }
            ResponseRecord::new(t.scene_id(), scored.correct)
        })
        .collect();
    let checks = score_attention_checks(&logs);
    assert_eq!(checks.correct_checks, 1);
    assert!(!checks.passed);
}

#[test]
fn persisted_sequence_audits_clean() {
    let trials = design_sequence(authored_deck(21));
    let json = serde_json::to_string(&trials).unwrap();
    let reloaded: Vec<Trial> = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, trials);
    assert!(validate_design(&reloaded).valid);
}
