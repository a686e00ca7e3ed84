use leftturn_core::{PrimeId, Trial};
use serde::{Deserialize, Serialize};

use crate::config::DesignConfig;

/// Debugging overview of a designed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub total: usize,
    /// Unprimed trials, attention checks excluded.
    pub control_count: usize,
    pub primed_count: usize,
    pub attention_check_count: usize,
    /// Prime of each run in the priming body, in order.
    pub prime_rotation: Vec<PrimeId>,
    /// Length of each run in the priming body.
    pub block_sizes: Vec<usize>,
}

pub fn summarize_design(trials: &[Trial]) -> DesignSummary {
    summarize_design_with(trials, &DesignConfig::default())
}

pub fn summarize_design_with(trials: &[Trial], config: &DesignConfig) -> DesignSummary {
    let attention_check_count = trials.iter().filter(|t| t.is_attention_check()).count();
    let primed_count = trials.iter().filter(|t| t.is_primed).count();
    let control_count = trials
        .iter()
        .filter(|t| !t.is_primed && !t.is_attention_check())
        .count();

    let mut prime_rotation: Vec<PrimeId> = Vec::new();
    let mut block_sizes: Vec<usize> = Vec::new();
    for trial in trials
        .iter()
        .skip(config.control_prefix_len)
        .filter(|t| !t.is_attention_check())
    {
        if prime_rotation.last() == Some(&trial.prime_id) {
            if let Some(size) = block_sizes.last_mut() {
                *size += 1;
            }
        } else {
            prime_rotation.push(trial.prime_id.clone());
            block_sizes.push(1);
        }
    }

    DesignSummary {
        total: trials.len(),
        control_count,
        primed_count,
        attention_check_count,
        prime_rotation,
        block_sizes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::design_sequence;
    use leftturn_catalog::PRIMES;
    use leftturn_core::{Crosswalk, PedestrianState, Scene, Signal};

    fn deck(n: usize) -> Vec<Scene> {
        (0..n)
            .map(|i| {
                Scene::new(
                    format!("s{i}"),
                    Signal::Red,
                    1.0,
                    PedestrianState::None,
                    Crosswalk::North,
                )
            })
            .collect()
    }

    #[test]
    fn summary_of_standard_session() {
        let summary = summarize_design(&design_sequence(deck(21)));
        assert_eq!(summary.total, 24);
        assert_eq!(summary.control_count, 3);
        assert_eq!(summary.primed_count, 18);
        assert_eq!(summary.attention_check_count, 3);
        assert_eq!(summary.block_sizes, vec![3; 6]);
        let expected: Vec<_> = PRIMES.iter().map(|p| p.id.clone()).collect();
        assert_eq!(summary.prime_rotation, expected);
    }

    #[test]
    fn partial_last_block_is_reported() {
        let summary = summarize_design(&design_sequence(deck(8)));
        assert_eq!(summary.block_sizes, vec![3, 2]);
        assert_eq!(summary.prime_rotation.len(), 2);
    }

    #[test]
    fn empty_sequence() {
        let summary = summarize_design(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.block_sizes.is_empty());
    }
}
