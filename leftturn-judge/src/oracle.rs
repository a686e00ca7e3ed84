//! Objective ground truth for a left-turn scene.

use leftturn_core::{Crosswalk, Decision, PedestrianState, ResponseOutcome, Scene, Signal};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{CanvasGeometry, Intersection, JudgeConfig};
use crate::geometry::{aabb_intersects, crosswalk_rect, left_turn_corridor};

/// Whether a pedestrian on `crosswalk` stands in the turn corridor.
pub fn is_pedestrian_blocking(
    pedestrian_state: PedestrianState,
    crosswalk: Crosswalk,
    center_x: f64,
    center_y: f64,
    road_width: f64,
) -> bool {
    if pedestrian_state != PedestrianState::Crossing {
        return false;
    }
    let corridor = left_turn_corridor(center_x, center_y, road_width);
    let pedestrian = crosswalk_rect(center_x, center_y, road_width, crosswalk);
    aabb_intersects(&corridor, &pedestrian)
}

/// The single correct choice for a scene. First matching rule wins:
///
/// 1. green arrow: turn (protected, overrides everything else)
/// 2. no-left-turn sign: wait
/// 3. red: wait
/// 4. oncoming gap `< ttc_threshold_seconds`: wait
/// 5. crossing pedestrian inside the turn corridor: wait
/// 6. otherwise: turn
///
/// Yellow flash has no rule of its own and is decided by 4-6. Inputs are
/// not sanity checked; a negative TTC simply trips rule 4.
#[allow(clippy::too_many_arguments)]
pub fn judge(
    signal: Signal,
    ttc_seconds: f64,
    pedestrian_state: PedestrianState,
    pedestrian_crosswalk: Crosswalk,
    center_x: f64,
    center_y: f64,
    road_width: f64,
    ttc_threshold_seconds: f64,
) -> Decision {
    match signal {
        Signal::GreenArrow => return Decision::TurnLeft,
        Signal::NoLeftTurn | Signal::Red => return Decision::Wait,
        Signal::YellowFlash => {}
    }
    if ttc_seconds < ttc_threshold_seconds {
        return Decision::Wait;
    }
    if is_pedestrian_blocking(
        pedestrian_state,
        pedestrian_crosswalk,
        center_x,
        center_y,
        road_width,
    ) {
        return Decision::Wait;
    }
    Decision::TurnLeft
}

/// [`judge`] over a loaded scene.
pub fn judge_scene(scene: &Scene, intersection: &Intersection, config: &JudgeConfig) -> Decision {
    let decision = judge(
        scene.signal,
        scene.oncoming_ttc_seconds,
        scene.pedestrian_state,
        scene.pedestrian_crosswalk,
        intersection.center_x,
        intersection.center_y,
        intersection.road_width,
        config.ttc_threshold_seconds,
    );
    trace!(scene_id = %scene.scene_id, ?decision, "judged scene");
    decision
}

/// Bundles the intersection layout and thresholds the presentation layer
/// rendered with, so every caller scores against the same ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Oracle {
    intersection: Intersection,
    config: JudgeConfig,
}

impl Oracle {
    pub fn new(intersection: Intersection, config: JudgeConfig) -> Self {
        Self {
            intersection,
            config,
        }
    }

    pub fn from_canvas(geometry: &CanvasGeometry, config: JudgeConfig) -> Self {
        Self::new(geometry.intersection(), config)
    }

    pub fn intersection(&self) -> &Intersection {
        &self.intersection
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    pub fn judge(&self, scene: &Scene) -> Decision {
        judge_scene(scene, &self.intersection, &self.config)
    }
}

impl Default for Oracle {
    fn default() -> Self {
        Self::from_canvas(&CanvasGeometry::default(), JudgeConfig::default())
    }
}

/// A participant response scored against ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResponse {
    pub choice: Decision,
    pub correct_choice: Decision,
    pub correct: bool,
    pub outcome: ResponseOutcome,
}

pub fn score_response(scene: &Scene, choice: Decision, oracle: &Oracle) -> ScoredResponse {
    let correct_choice = oracle.judge(scene);
    let outcome = ResponseOutcome::classify(choice, correct_choice);
    ScoredResponse {
        choice,
        correct_choice,
        correct: outcome.is_correct(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CX: f64 = 400.0;
    const CY: f64 = 225.0;
    const ROAD: f64 = 72.0;
    const THRESHOLD: f64 = 1.5;

    fn judge_default(
        signal: Signal,
        ttc: f64,
        pedestrian: PedestrianState,
        crosswalk: Crosswalk,
    ) -> Decision {
        judge(signal, ttc, pedestrian, crosswalk, CX, CY, ROAD, THRESHOLD)
    }

    #[test]
    fn green_arrow_overrides_everything() {
        assert_eq!(
            judge_default(Signal::GreenArrow, 0.0, PedestrianState::Crossing, Crosswalk::South),
            Decision::TurnLeft
        );
        assert_eq!(
            judge_default(Signal::GreenArrow, -3.0, PedestrianState::None, Crosswalk::North),
            Decision::TurnLeft
        );
    }

    #[test]
    fn red_and_no_left_turn_always_wait() {
        for signal in [Signal::Red, Signal::NoLeftTurn] {
            assert_eq!(
                judge_default(signal, 30.0, PedestrianState::None, Crosswalk::North),
                Decision::Wait
            );
        }
    }

    #[test]
    fn ttc_boundary_is_strict() {
        assert_eq!(
            judge_default(Signal::YellowFlash, 1.5, PedestrianState::None, Crosswalk::North),
            Decision::TurnLeft
        );
        assert_eq!(
            judge_default(Signal::YellowFlash, 1.49, PedestrianState::None, Crosswalk::North),
            Decision::Wait
        );
        assert_eq!(
            judge_default(Signal::YellowFlash, -1.0, PedestrianState::None, Crosswalk::North),
            Decision::Wait
        );
    }

    #[test]
    fn only_south_pedestrian_blocks() {
        assert_eq!(
            judge_default(Signal::YellowFlash, 5.0, PedestrianState::Crossing, Crosswalk::North),
            Decision::TurnLeft
        );
        assert_eq!(
            judge_default(Signal::YellowFlash, 5.0, PedestrianState::Crossing, Crosswalk::South),
            Decision::Wait
        );
        assert_eq!(
            judge_default(Signal::YellowFlash, 5.0, PedestrianState::None, Crosswalk::South),
            Decision::TurnLeft
        );
    }

    #[test]
    fn ttc_rule_precedes_pedestrian_rule() {
        assert!(!is_pedestrian_blocking(
            PedestrianState::Crossing,
            Crosswalk::North,
            CX,
            CY,
            ROAD
        ));
        assert_eq!(
            judge_default(Signal::YellowFlash, 0.5, PedestrianState::Crossing, Crosswalk::North),
            Decision::Wait
        );
    }

    #[test]
    fn oracle_matches_free_function() {
        let oracle = Oracle::default();
        let scene = Scene::new(
            "s12",
            Signal::YellowFlash,
            2.4,
            PedestrianState::Crossing,
            Crosswalk::South,
        );
        assert_eq!(oracle.judge(&scene), Decision::Wait);
        assert_eq!(oracle.judge(&scene), oracle.judge(&scene));
    }

    #[test]
    fn threshold_comes_from_config() {
        let oracle = Oracle::from_canvas(
            &CanvasGeometry::default(),
            JudgeConfig {
                ttc_threshold_seconds: 3.0,
            },
        );
        let scene = Scene::new(
            "s",
            Signal::YellowFlash,
            2.0,
            PedestrianState::None,
            Crosswalk::North,
        );
        assert_eq!(oracle.judge(&scene), Decision::Wait);
        assert_eq!(Oracle::default().judge(&scene), Decision::TurnLeft);
    }

    #[test]
    fn scoring_classifies_errors() {
        let oracle = Oracle::default();
        let safe = Scene::new(
            "s1",
            Signal::YellowFlash,
            4.0,
            PedestrianState::None,
            Crosswalk::North,
        );
        let unsafe_ = Scene::new(
            "s2",
            Signal::Red,
            4.0,
            PedestrianState::None,
            Crosswalk::North,
        );

        let waited = score_response(&safe, Decision::Wait, &oracle);
        assert!(!waited.correct);
        assert_eq!(waited.outcome, ResponseOutcome::ConservativeError);

        let turned = score_response(&unsafe_, Decision::TurnLeft, &oracle);
        assert_eq!(turned.outcome, ResponseOutcome::RiskyError);
        assert_eq!(turned.correct_choice, Decision::Wait);

        assert!(score_response(&safe, Decision::TurnLeft, &oracle).correct);
    }
}
