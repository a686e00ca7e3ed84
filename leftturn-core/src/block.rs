use serde::{Deserialize, Serialize};

use crate::scene::Scene;

/// Coarse prime tag carried by authored blocks. Only used for display
/// numbering; the designer assigns primes on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimeType {
    Neutral,
    VisualSchema,
    VisualPedestrian,
    VisualTtc,
    VisualSignal,
    VisualSpotlight,
    VisualNorm,
    VisualSafety,
    VisualRisk,
    AuditorySafety,
    AuditoryRisk,
    SocialNorm,
    PositiveFrame,
}

/// An authored group of scenes sharing a `prime_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBlock {
    pub prime_type: PrimeType,
    pub trials: Vec<Scene>,
}

/// Display order of authored blocks: the first neutral block, then the rest
/// in authored order.
pub fn block_display_order(blocks: &[TrialBlock]) -> Vec<usize> {
    let neutral = blocks
        .iter()
        .position(|b| b.prime_type == PrimeType::Neutral);
    match neutral {
        Some(first) => std::iter::once(first)
            .chain((0..blocks.len()).filter(|&i| i != first))
            .collect(),
        None => (0..blocks.len()).collect(),
    }
}

/// Concatenates block scenes in display order into a raw deck.
pub fn flatten_blocks(blocks: &[TrialBlock]) -> Vec<Scene> {
    block_display_order(blocks)
        .into_iter()
        .flat_map(|i| blocks[i].trials.iter().cloned())
        .collect()
}
