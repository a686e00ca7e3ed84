use leftturn_catalog::is_known_prime;
use leftturn_core::{PrimeId, Trial};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DesignConfig;

/// Outcome of re-walking a designed sequence. `errors` lists every
/// violation found; it is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Checks `trials` against the default layout.
pub fn validate_design(trials: &[Trial]) -> ValidationResult {
    validate_design_with(trials, &DesignConfig::default())
}

/// Checks that
/// - every trial's design fields agree with each other,
/// - the control prefix is unprimed,
/// - every non-check trial after the prefix is primed with a real prime,
/// - every body prime is one of the catalog primes,
/// - no prime runs longer than `block_size` in the body,
/// - attention checks are never primed.
///
/// Attention checks in the body neither extend nor break a run.
pub fn validate_design_with(trials: &[Trial], config: &DesignConfig) -> ValidationResult {
    let prefix = config.control_prefix_len;
    let max_run = config.block_size.max(1);
    let mut errors = Vec::new();
    let mut run: Option<(&PrimeId, usize)> = None;

    for (i, trial) in trials.iter().enumerate() {
        if !trial.has_consistent_assignment() {
            errors.push(format!(
                "Trial {i}: Inconsistent design fields (is_primed={}, prime_id='{}', \
                 prime_block_index={:?}, condition_label='{}')",
                trial.is_primed,
                trial.prime_id,
                trial.prime_block_index,
                trial.condition_label.as_str()
            ));
        }
        if trial.is_attention_check() && trial.is_primed {
            errors.push(format!(
                "Trial {i}: Attention check '{}' must not be primed",
                trial.scene_id()
            ));
        }

        if i < prefix {
            if trial.is_primed {
                errors.push(format!("Trial {i}: Expected is_primed=false, got true"));
            }
            if !trial.prime_id.is_control() {
                errors.push(format!(
                    "Trial {i}: Expected prime_id='{}', got '{}'",
                    PrimeId::CONTROL,
                    trial.prime_id
                ));
            }
            continue;
        }
        if trial.is_attention_check() {
            continue;
        }

        if !trial.is_primed {
            errors.push(format!(
                "Trial {i}: Expected is_primed=true in priming section"
            ));
        }
        if trial.prime_id.is_control() {
            errors.push(format!(
                "Trial {i}: Should not use {} in priming section",
                PrimeId::CONTROL
            ));
        } else if !is_known_prime(&trial.prime_id) {
            errors.push(format!("Trial {i}: Unknown prime '{}'", trial.prime_id));
        }

        run = match run {
            Some((prime, len)) if *prime == trial.prime_id => {
                let len = len + 1;
                if len > max_run {
                    errors.push(format!(
                        "Trial {i}: Block size exceeds {max_run} for prime '{prime}'"
                    ));
                }
                Some((prime, len))
            }
            _ => Some((&trial.prime_id, 1)),
        };
    }

    if errors.is_empty() {
        debug!(trials = trials.len(), "trial design valid");
    } else {
        warn!(
            trials = trials.len(),
            violations = errors.len(),
            first = %errors[0],
            "trial design failed validation"
        );
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
