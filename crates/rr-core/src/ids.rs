//! Run generation identifier.

use std::fmt;

/// Identifies one reveal run of the scheduler.
///
/// The scheduler bumps its `RunId` on every `start` and `reset`.  Anything
/// queued against a run (a deferred auto-scroll, a host-side timer) keeps the
/// id it was created under, and is discarded once the ids no longer match.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunId(pub u64);

impl RunId {
    /// The id before any run has started.
    pub const NONE: RunId = RunId(0);

    /// The id that follows `self`.
    #[inline]
    pub fn next(self) -> RunId {
        RunId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}
