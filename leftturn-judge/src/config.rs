use leftturn_core::{LeftTurnError, LeftTurnResult};
use serde::{Deserialize, Serialize};

/// Thresholds used when judging a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Oncoming gaps strictly shorter than this require waiting.
    pub ttc_threshold_seconds: f64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            ttc_threshold_seconds: 1.5,
        }
    }
}

impl JudgeConfig {
    pub fn validate(&self) -> LeftTurnResult<()> {
        if !self.ttc_threshold_seconds.is_finite() || self.ttc_threshold_seconds < 0.0 {
            return Err(LeftTurnError::Config(format!(
                "ttc_threshold_seconds must be finite and >= 0, got {}",
                self.ttc_threshold_seconds
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

/// Canvas layout the renderer drew the scene with. The oracle must be fed
/// the same numbers or its boxes will not match what participants saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasGeometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Display magnification the renderer applies to the base canvas.
    pub scale: f64,
    /// Road width as a fraction of the shorter scaled canvas side.
    pub road_width_ratio: f64,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 450.0,
            scale: 1.2,
            road_width_ratio: 0.16,
        }
    }
}

/// Intersection centre and road width in scene-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub center_x: f64,
    pub center_y: f64,
    pub road_width: f64,
}

impl CanvasGeometry {
    pub fn intersection(&self) -> Intersection {
        let width = self.canvas_width * self.scale;
        let height = self.canvas_height * self.scale;
        Intersection {
            center_x: width / 2.0,
            center_y: height / 2.0,
            road_width: width.min(height) * self.road_width_ratio,
        }
    }

    pub fn validate(&self) -> LeftTurnResult<()> {
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("scale", self.scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LeftTurnError::Config(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if !(self.road_width_ratio > 0.0 && self.road_width_ratio <= 1.0) {
            return Err(LeftTurnError::Config(format!(
                "road_width_ratio must be in (0, 1], got {}",
                self.road_width_ratio
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
