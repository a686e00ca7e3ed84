// config.rs

use std::fs;

use anyhow::{Context, Result};
use leftturn_core::LeftTurnResult;
use leftturn_design::{DesignConfig, ScoringConfig};
use leftturn_judge::{CanvasGeometry, JudgeConfig};
use serde::{Deserialize, Serialize};

/// Everything a session needs, loaded from one JSON file. Missing sections
/// and fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub judge: JudgeConfig,
    pub canvas: CanvasGeometry,
    pub design: DesignConfig,
    pub scoring: ScoringConfig,
}

impl SessionConfig {
    pub fn validate(&self) -> LeftTurnResult<()> {
        self.judge.validate()?;
        self.canvas.validate()?;
        self.design.validate()?;
        self.scoring.validate()
    }

    pub fn from_json(json: &str) -> LeftTurnResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &str) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config =
            Self::from_json(&contents).with_context(|| format!("loading config {path}"))?;
        Ok(config)
    }
}
