use serde::{Deserialize, Serialize};

/// Duration in whole milliseconds, the unit browser timers take.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millis(pub u32);
