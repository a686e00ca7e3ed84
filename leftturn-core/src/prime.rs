use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a priming treatment.
///
/// Catalog ids are borrowed statics; ids read back from logs are owned.
/// Equality is by content either way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimeId(Cow<'static, str>);

impl PrimeId {
    /// Id of the unprimed baseline.
    pub const CONTROL: PrimeId = PrimeId::from_static("control_none");

    pub const fn from_static(id: &'static str) -> Self {
        PrimeId(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_control(&self) -> bool {
        *self == Self::CONTROL
    }
}

impl From<String> for PrimeId {
    fn from(id: String) -> Self {
        PrimeId(Cow::Owned(id))
    }
}

impl From<&str> for PrimeId {
    fn from(id: &str) -> Self {
        PrimeId(Cow::Owned(id.to_string()))
    }
}

impl fmt::Display for PrimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Visual,
    Audio,
    Audiovisual,
}

/// Direction in which a prime is expected to shift decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedEffect {
    BiasTurnUp,
    BiasWaitUp,
    Neutral,
}

/// A priming treatment. Everything except `id` is only read by presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prime {
    pub id: PrimeId,
    pub label: &'static str,
    /// Position in the rotation; `None` for the control sentinel.
    pub rotation_index: Option<usize>,
    pub modality: Modality,
    pub onset_ms: u32,
    pub duration_ms: u32,
    pub expected_effect: ExpectedEffect,
}

impl Prime {
    pub fn is_control(&self) -> bool {
        self.id.is_control()
    }
}
