pub mod block;
pub mod decision;
pub mod error;
pub mod prime;
pub mod scene;
pub mod trial;

pub use block::{PrimeType, TrialBlock, block_display_order, flatten_blocks};
pub use decision::{Decision, ResponseOutcome};
pub use error::{LeftTurnError, LeftTurnResult};
pub use prime::{ExpectedEffect, Modality, Prime, PrimeId};
pub use scene::{
    Crosswalk, LegacyDirection, LegacySide, PedestrianState, Scene, Signal, resolve_crosswalk,
};
pub use trial::{ATTENTION_CHECK_PREFIX, ConditionLabel, ResponseRecord, Trial};
