use std::collections::HashMap;

use lazy_static::lazy_static;
use leftturn_core::{ExpectedEffect, Modality, Prime, PrimeId, Trial};

/// Number of primes in the rotation.
pub const ROTATION_LEN: usize = 6;

/// The priming rotation, in assignment order.
pub static PRIMES: [Prime; ROTATION_LEN] = [
    Prime {
        id: PrimeId::from_static("go_arrow"),
        label: "Go-Arrow Prime",
        rotation_index: Some(0),
        modality: Modality::Audiovisual,
        onset_ms: 150,
        duration_ms: 800,
        expected_effect: ExpectedEffect::BiasTurnUp,
    },
    Prime {
        id: PrimeId::from_static("caution_amber"),
        label: "Caution-Amber Prime",
        rotation_index: Some(1),
        modality: Modality::Audiovisual,
        onset_ms: 150,
        duration_ms: 600,
        expected_effect: ExpectedEffect::BiasWaitUp,
    },
    Prime {
        id: PrimeId::from_static("ped_salience"),
        label: "Pedestrian-Salience Prime",
        rotation_index: Some(2),
        modality: Modality::Audiovisual,
        onset_ms: 200,
        duration_ms: 700,
        expected_effect: ExpectedEffect::BiasWaitUp,
    },
    Prime {
        id: PrimeId::from_static("oncoming_speed"),
        label: "Oncoming-Speed Prime",
        rotation_index: Some(3),
        modality: Modality::Audiovisual,
        onset_ms: 150,
        duration_ms: 800,
        expected_effect: ExpectedEffect::BiasWaitUp,
    },
    Prime {
        id: PrimeId::from_static("time_pressure"),
        label: "Time-Pressure Prime",
        rotation_index: Some(4),
        modality: Modality::Audiovisual,
        onset_ms: 100,
        duration_ms: 900,
        expected_effect: ExpectedEffect::BiasTurnUp,
    },
    Prime {
        id: PrimeId::from_static("social_norm"),
        label: "Social-Norm Nudge",
        rotation_index: Some(5),
        modality: Modality::Audiovisual,
        onset_ms: 180,
        duration_ms: 400,
        expected_effect: ExpectedEffect::BiasTurnUp,
    },
];

/// The unprimed baseline. Never part of the rotation.
pub static CONTROL: Prime = Prime {
    id: PrimeId::CONTROL,
    label: "No Prime",
    rotation_index: None,
    modality: Modality::Visual,
    onset_ms: 0,
    duration_ms: 0,
    expected_effect: ExpectedEffect::Neutral,
};

lazy_static! {
    static ref PRIME_INDEX: HashMap<&'static str, &'static Prime> =
        PRIMES.iter().map(|p| (p.id.as_str(), p)).collect();
}

/// Prime assigned to the `block_index`-th priming block.
pub fn rotation(block_index: usize) -> &'static Prime {
    &PRIMES[block_index % ROTATION_LEN]
}

/// Looks up a prime by id. Missing or unknown ids fall back to [`CONTROL`].
pub fn prime_for_id(id: Option<&str>) -> &'static Prime {
    id.and_then(|id| PRIME_INDEX.get(id).copied())
        .unwrap_or(&CONTROL)
}

/// Prime delivered before `trial`, or [`CONTROL`] when it is unprimed.
pub fn prime_for_trial(trial: &Trial) -> &'static Prime {
    if !trial.is_primed || trial.prime_id.is_control() {
        return &CONTROL;
    }
    prime_for_id(Some(trial.prime_id.as_str()))
}

/// Whether `id` names one of the rotation primes.
pub fn is_known_prime(id: &PrimeId) -> bool {
    PRIME_INDEX.contains_key(id.as_str())
}
