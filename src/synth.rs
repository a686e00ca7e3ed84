// synth.rs

use leftturn_core::{Crosswalk, PedestrianState, Scene, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A reproducible random deck for rehearsing a session without authored
/// scenes.
pub fn synthetic_deck(len: usize, seed: u64) -> Vec<Scene> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|i| random_scene(&mut rng, i)).collect()
}

fn random_scene<R: Rng>(rng: &mut R, index: usize) -> Scene {
    let signal = match rng.random_range(0..4) {
        0 => Signal::GreenArrow,
        1 => Signal::Red,
        2 => Signal::NoLeftTurn,
        _ => Signal::YellowFlash,
    };
    // Authored decks use one decimal place.
    let ttc = (rng.random_range(0.5..6.0f64) * 10.0).round() / 10.0;
    let pedestrian = if rng.random_bool(0.4) {
        PedestrianState::Crossing
    } else {
        PedestrianState::None
    };
    let crosswalk = if rng.random_bool(0.5) {
        Crosswalk::South
    } else {
        Crosswalk::North
    };
    Scene::new(format!("synthetic_{index:03}"), signal, ttc, pedestrian, crosswalk)
}
