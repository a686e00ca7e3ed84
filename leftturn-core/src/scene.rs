use serde::{Deserialize, Serialize};

/// Traffic signal facing the ego vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    GreenArrow,
    Red,
    NoLeftTurn,
    YellowFlash,
}

impl Signal {
    pub fn description(&self) -> &'static str {
        match self {
            Signal::GreenArrow => "Green Arrow",
            Signal::Red => "Red Light",
            Signal::NoLeftTurn => "No Left Turn Sign",
            Signal::YellowFlash => "Yellow Flashing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PedestrianState {
    None,
    Crossing,
}

impl PedestrianState {
    pub fn description(&self) -> &'static str {
        match self {
            PedestrianState::None => "No Pedestrian",
            PedestrianState::Crossing => "Pedestrian Crossing",
        }
    }
}

/// Crosswalk a pedestrian occupies. `South` lies in the turn path, `North`
/// is the far side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crosswalk {
    North,
    South,
}

/// Deprecated `pedestrian_side` field found in older decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacySide {
    Left,
    Right,
}

/// Deprecated `pedestrian_direction` field found in older decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyDirection {
    East,
    West,
    North,
    South,
}

/// Coalesces the canonical and legacy crosswalk fields into one side.
///
/// The canonical field wins, then `pedestrian_side` (left→south,
/// right→north), then `pedestrian_direction` (east→north, west→south,
/// north/south unchanged).
pub fn resolve_crosswalk(
    crosswalk: Option<Crosswalk>,
    side: Option<LegacySide>,
    direction: Option<LegacyDirection>,
) -> Crosswalk {
    if let Some(crosswalk) = crosswalk {
        return crosswalk;
    }
    if let Some(side) = side {
        return match side {
            LegacySide::Left => Crosswalk::South,
            LegacySide::Right => Crosswalk::North,
        };
    }
    if let Some(direction) = direction {
        return match direction {
            LegacyDirection::East | LegacyDirection::North => Crosswalk::North,
            LegacyDirection::West | LegacyDirection::South => Crosswalk::South,
        };
    }
    // Unspecified: far side, so the pedestrian does not block the turn.
    Crosswalk::North
}

/// An authored traffic scene. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SceneRecord")]
pub struct Scene {
    pub scene_id: String,
    pub signal: Signal,
    #[serde(rename = "oncoming_car_ttc")]
    pub oncoming_ttc_seconds: f64,
    #[serde(rename = "pedestrian")]
    pub pedestrian_state: PedestrianState,
    pub pedestrian_crosswalk: Crosswalk,
}

impl Scene {
    pub fn new(
        scene_id: impl Into<String>,
        signal: Signal,
        oncoming_ttc_seconds: f64,
        pedestrian_state: PedestrianState,
        pedestrian_crosswalk: Crosswalk,
    ) -> Self {
        Self {
            scene_id: scene_id.into(),
            signal,
            oncoming_ttc_seconds,
            pedestrian_state,
            pedestrian_crosswalk,
        }
    }
}

/// On-disk shape of a scene, including the deprecated crosswalk aliases.
#[derive(Debug, Deserialize)]
struct SceneRecord {
    scene_id: String,
    signal: Signal,
    #[serde(alias = "oncoming_ttc_seconds")]
    oncoming_car_ttc: f64,
    #[serde(alias = "pedestrian_state")]
    pedestrian: PedestrianState,
    #[serde(default)]
    pedestrian_crosswalk: Option<Crosswalk>,
    #[serde(default)]
    pedestrian_side: Option<LegacySide>,
    #[serde(default)]
    pedestrian_direction: Option<LegacyDirection>,
}

impl From<SceneRecord> for Scene {
    fn from(record: SceneRecord) -> Self {
        Scene {
            scene_id: record.scene_id,
            signal: record.signal,
            oncoming_ttc_seconds: record.oncoming_car_ttc,
            pedestrian_state: record.pedestrian,
            pedestrian_crosswalk: resolve_crosswalk(
                record.pedestrian_crosswalk,
                record.pedestrian_side,
                record.pedestrian_direction,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_crosswalk_defaults_north() {
        assert_eq!(resolve_crosswalk(None, None, None), Crosswalk::North);
    }

    #[test]
    fn legacy_side_maps_to_crosswalk() {
        assert_eq!(resolve_crosswalk(None, Some(LegacySide::Left), None), Crosswalk::South);
        assert_eq!(resolve_crosswalk(None, Some(LegacySide::Right), None), Crosswalk::North);
    }

    #[test]
    fn legacy_direction_maps_to_crosswalk() {
        let cases = [
            (LegacyDirection::East, Crosswalk::North),
            (LegacyDirection::West, Crosswalk::South),
            (LegacyDirection::North, Crosswalk::North),
            (LegacyDirection::South, Crosswalk::South),
        ];
        for (direction, expected) in cases {
            assert_eq!(resolve_crosswalk(None, None, Some(direction)), expected);
        }
    }

    #[test]
    fn canonical_field_wins_over_legacy() {
        let resolved = resolve_crosswalk(
            Some(Crosswalk::North),
            Some(LegacySide::Left),
            Some(LegacyDirection::West),
        );
        assert_eq!(resolved, Crosswalk::North);
        assert_eq!(
            resolve_crosswalk(None, Some(LegacySide::Right), Some(LegacyDirection::West)),
            Crosswalk::North
        );
    }

    #[test]
    fn legacy_deck_entry_is_resolved_on_load() {
        let json = r#"{
            "scene_id": "s07",
            "signal": "YELLOW_FLASH",
            "oncoming_car_ttc": 3.2,
            "pedestrian": "CROSSING",
            "pedestrian_side": "left",
            "correct": "wait"
        }"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.signal, Signal::YellowFlash);
        assert_eq!(scene.pedestrian_state, PedestrianState::Crossing);
        assert_eq!(scene.pedestrian_crosswalk, Crosswalk::South);
        assert!((scene.oncoming_ttc_seconds - 3.2).abs() < f64::EPSILON);
    }

    #[test]
    fn canonical_form_survives_reload() {
        let scene = Scene::new("s01", Signal::Red, 0.8, PedestrianState::None, Crosswalk::South);
        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("\"pedestrian_crosswalk\":\"south\""));
        assert!(!json.contains("pedestrian_side"));
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn descriptions() {
        assert_eq!(Signal::NoLeftTurn.description(), "No Left Turn Sign");
        assert_eq!(PedestrianState::Crossing.description(), "Pedestrian Crossing");
    }
}
