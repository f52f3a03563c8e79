//! Reveal schedule configuration.

use crate::{RrError, RrResult};

/// Timing parameters shared by every route in a reveal run.
///
/// Route *i* (0-based rank) starts revealing at `i * (duration_ms + gap_ms)`
/// after the run starts, and is fully drawn `duration_ms` later.  A non-zero
/// gap therefore guarantees that no two routes reveal at the same time.
///
/// Typically loaded from a JSON file by the application crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleConfig {
    /// Time for one route's path to go from empty to fully drawn.
    pub duration_ms: u64,

    /// Pause after one route completes before the next begins.
    pub gap_ms: u64,

    /// Delay between a sidebar entry appearing and its auto-scroll effect.
    pub scroll_delay_ms: u64,
}

impl ScheduleConfig {
    pub const DEFAULT_DURATION_MS: u64 = 4_000;
    pub const DEFAULT_GAP_MS: u64 = 1_000;
    pub const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

    /// Offset of one rank from the next.
    #[inline]
    pub fn stride_ms(&self) -> u64 {
        self.duration_ms.saturating_add(self.gap_ms)
    }

    /// Start delay for the route at `rank`.
    #[inline]
    pub fn delay_for_rank(&self, rank: usize) -> u64 {
        (rank as u64).saturating_mul(self.stride_ms())
    }

    /// Time from run start until the last of `route_count` routes completes.
    pub fn total_ms(&self, route_count: usize) -> u64 {
        match route_count {
            0 => 0,
            n => self.delay_for_rank(n - 1).saturating_add(self.duration_ms),
        }
    }

    /// Reject values that would make timestamps overflow `i64`.
    pub fn validate(&self) -> RrResult<()> {
        for (name, v) in [
            ("duration_ms", self.duration_ms),
            ("gap_ms", self.gap_ms),
            ("scroll_delay_ms", self.scroll_delay_ms),
        ] {
            if v > i64::MAX as u64 {
                return Err(RrError::Config(format!("{name} = {v} is out of range")));
            }
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            duration_ms:     Self::DEFAULT_DURATION_MS,
            gap_ms:          Self::DEFAULT_GAP_MS,
            scroll_delay_ms: Self::DEFAULT_SCROLL_DELAY_MS,
        }
    }
}
