use leftturn_core::{LeftTurnError, LeftTurnResult};
use serde::{Deserialize, Serialize};

/// Shape of a session's trial sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Leading unprimed trials.
    pub control_prefix_len: usize,
    /// Trials sharing one prime in the priming body.
    pub block_size: usize,
    /// Where attention checks are spliced, in insertion order. Each is an
    /// index into the sequence as it stands when that check is inserted.
    pub attention_check_positions: Vec<usize>,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            control_prefix_len: 3,
            block_size: 3,
            attention_check_positions: vec![6, 14, 22],
        }
    }
}

impl DesignConfig {
    pub fn validate(&self) -> LeftTurnResult<()> {
        if self.block_size < 1 {
            return Err(LeftTurnError::Config(format!(
                "block_size must be >= 1, got {}",
                self.block_size
            )));
        }
        if !self
            .attention_check_positions
            .windows(2)
            .all(|w| w[0] < w[1])
        {
            return Err(LeftTurnError::Config(format!(
                "attention_check_positions must be strictly increasing, got {:?}",
                self.attention_check_positions
            )));
        }
        if let Some(&first) = self.attention_check_positions.first() {
            if first < self.control_prefix_len {
                return Err(LeftTurnError::Config(format!(
                    "attention check at {first} would fall inside the control prefix of {}",
                    self.control_prefix_len
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> LeftTurnResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Data-quality thresholds applied at session end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub min_pass_rate: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_pass_rate: crate::scoring::DEFAULT_MIN_PASS_RATE,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> LeftTurnResult<()> {
        if !(0.0..=1.0).contains(&self.min_pass_rate) {
            return Err(LeftTurnError::Config(format!(
                "min_pass_rate must be in [0, 1], got {}",
                self.min_pass_rate
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> LeftTurnResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
