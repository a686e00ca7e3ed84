//! Fixed attention-check scenes.

use leftturn_core::{ATTENTION_CHECK_PREFIX, Crosswalk, PedestrianState, Scene, Signal};

pub const ATTENTION_CHECK_COUNT: usize = 3;

/// Gap far above any sensible threshold, so only the signal matters.
const CLEAR_GAP_SECONDS: f64 = 10.0;

/// The attention checks in insertion order. Each is decided by its signal
/// alone; ground truth still comes from the oracle like any other scene.
pub fn attention_check_scenes() -> [Scene; ATTENTION_CHECK_COUNT] {
    [
        check("red", Signal::Red),
        check("green_arrow", Signal::GreenArrow),
        check("no_left_turn", Signal::NoLeftTurn),
    ]
}

fn check(name: &str, signal: Signal) -> Scene {
    Scene::new(
        format!("{ATTENTION_CHECK_PREFIX}{name}"),
        signal,
        CLEAR_GAP_SECONDS,
        PedestrianState::None,
        Crosswalk::North,
    )
}
