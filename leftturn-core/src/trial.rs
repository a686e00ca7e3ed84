use serde::{Deserialize, Serialize};

use crate::prime::PrimeId;
use crate::scene::Scene;

/// Scene id prefix that marks an inserted attention-check trial.
pub const ATTENTION_CHECK_PREFIX: &str = "attention_check_";

/// Condition label shown to analysts; always derived from `is_primed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionLabel {
    #[serde(rename = "No prime")]
    NoPrime,
    #[serde(rename = "Priming")]
    Priming,
}

impl ConditionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionLabel::NoPrime => "No prime",
            ConditionLabel::Priming => "Priming",
        }
    }
}

/// A scene plus its design assignment.
///
/// Trials built here always satisfy
/// `!is_primed <=> prime_id == CONTROL <=> prime_block_index.is_none()`.
/// Fields stay public and flat because audited logs may not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    #[serde(flatten)]
    pub scene: Scene,
    pub is_primed: bool,
    pub prime_id: PrimeId,
    pub prime_block_index: Option<u32>,
    pub condition_label: ConditionLabel,
}

impl Trial {
    /// An unprimed trial.
    pub fn control(scene: Scene) -> Self {
        Self {
            scene,
            is_primed: false,
            prime_id: PrimeId::CONTROL,
            prime_block_index: None,
            condition_label: ConditionLabel::NoPrime,
        }
    }

    /// A trial in priming block `block_index` receiving `prime_id`.
    pub fn primed(scene: Scene, prime_id: PrimeId, block_index: u32) -> Self {
        Self {
            scene,
            is_primed: true,
            prime_id,
            prime_block_index: Some(block_index),
            condition_label: ConditionLabel::Priming,
        }
    }

    pub fn scene_id(&self) -> &str {
        &self.scene.scene_id
    }

    pub fn is_attention_check(&self) -> bool {
        self.scene.scene_id.starts_with(ATTENTION_CHECK_PREFIX)
    }

    /// Whether the three design fields and the label agree with each other.
    pub fn has_consistent_assignment(&self) -> bool {
        let unprimed = !self.is_primed;
        unprimed == self.prime_id.is_control()
            && unprimed == self.prime_block_index.is_none()
            && self.condition_label
                == if self.is_primed {
                    ConditionLabel::Priming
                } else {
                    ConditionLabel::NoPrime
                }
    }
}

/// One participant response as persisted by the presentation layer.
/// Other log columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub scene_id: String,
    /// `1` when the response matched ground truth, `0` otherwise.
    pub correct: u8,
}

impl ResponseRecord {
    pub fn new(scene_id: impl Into<String>, correct: bool) -> Self {
        Self {
            scene_id: scene_id.into(),
            correct: u8::from(correct),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.correct == 1
    }

    pub fn is_attention_check(&self) -> bool {
        self.scene_id.starts_with(ATTENTION_CHECK_PREFIX)
    }
}
