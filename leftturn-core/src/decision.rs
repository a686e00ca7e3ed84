use serde::{Deserialize, Serialize};

/// A left-turn choice: the oracle's ground truth or a participant's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    TurnLeft,
    Wait,
}

/// Signal-detection classification of one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOutcome {
    /// Turned when turning was correct.
    CorrectGo,
    /// Waited when waiting was correct.
    CorrectNogo,
    /// Waited although the turn was safe.
    ConservativeError,
    /// Turned although waiting was required.
    RiskyError,
}

impl ResponseOutcome {
    pub fn classify(choice: Decision, correct: Decision) -> Self {
        match (choice, correct) {
            (Decision::TurnLeft, Decision::TurnLeft) => ResponseOutcome::CorrectGo,
            (Decision::Wait, Decision::Wait) => ResponseOutcome::CorrectNogo,
            (Decision::Wait, Decision::TurnLeft) => ResponseOutcome::ConservativeError,
            (Decision::TurnLeft, Decision::Wait) => ResponseOutcome::RiskyError,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, ResponseOutcome::CorrectGo | ResponseOutcome::CorrectNogo)
    }
}
