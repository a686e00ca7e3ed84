use leftturn_catalog::rotation;
use leftturn_core::{LeftTurnResult, Scene, Trial};
use tracing::debug;

use crate::attention::attention_check_scenes;
use crate::config::DesignConfig;

/// Builds a session's trial sequence from a raw deck.
///
/// The first `control_prefix_len` scenes stay unprimed. The rest are cut
/// into chunks of `block_size` and chunk `k` gets `rotation(k)`; a short
/// final chunk still counts as a block. Attention checks are then spliced
/// in at the configured positions.
#[derive(Debug, Clone, Default)]
pub struct Designer {
    config: DesignConfig,
}

impl Designer {
    /// Refuses layouts the validator would reject, such as a check inside
    /// the control prefix.
    pub fn new(config: DesignConfig) -> LeftTurnResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Total over any deck length, including zero.
    pub fn design(&self, scenes: Vec<Scene>) -> Vec<Trial> {
        let raw = scenes.len();
        let mut trials = self.assign_primes(scenes);
        let inserted = self.insert_attention_checks(&mut trials);
        debug!(
            raw,
            designed = trials.len(),
            attention_checks = inserted,
            "designed trial sequence"
        );
        trials
    }

    fn assign_primes(&self, scenes: Vec<Scene>) -> Vec<Trial> {
        let prefix = self.config.control_prefix_len;
        let block_size = self.config.block_size.max(1);
        scenes
            .into_iter()
            .enumerate()
            .map(|(i, scene)| {
                if i < prefix {
                    Trial::control(scene)
                } else {
                    let block = (i - prefix) / block_size;
                    Trial::primed(scene, rotation(block).id.clone(), block as u32)
                }
            })
            .collect()
    }

    /// Splices check `k` at `positions[k]` when the sequence has grown to at
    /// least that length; later trials shift back by one. Returns how many
    /// were inserted.
    fn insert_attention_checks(&self, trials: &mut Vec<Trial>) -> usize {
        let mut inserted = 0;
        for (&position, scene) in self
            .config
            .attention_check_positions
            .iter()
            .zip(attention_check_scenes())
        {
            if position > trials.len() {
                debug!(
                    position,
                    len = trials.len(),
                    scene_id = %scene.scene_id,
                    "sequence too short for attention check"
                );
                continue;
            }
            trials.insert(position, Trial::control(scene));
            inserted += 1;
        }
        inserted
    }
}

/// Designs `scenes` with the default layout.
pub fn design_sequence(scenes: Vec<Scene>) -> Vec<Trial> {
    Designer::default().design(scenes)
}
