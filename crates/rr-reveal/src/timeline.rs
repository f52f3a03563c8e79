//! Single-route reveal timeline.
//!
//! A timeline is a pure function from "now" to how much of one route's path
//! is drawn:
//!
//! ```text
//! elapsed  = now − start − delay
//! elapsed < 0          → 0 points           (Pending)
//! 0 ≤ elapsed < dur    → ⌊count · elapsed / dur⌋  (Revealing)
//! elapsed ≥ dur        → count points       (Complete)
//! ```
//!
//! Nothing is cached.  The scheduler re-evaluates every timeline on every
//! tick, and a clock reading before the start simply yields 0.

use std::fmt;

use rr_core::Timestamp;

/// Where a route is in its reveal.
///
/// Ordered: `Pending < Revealing < Complete`.  A route only ever moves
/// forward through these until the run is reset.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealPhase {
    /// Start delay has not yet passed.
    #[default]
    Pending,
    /// Path is partially drawn.
    Revealing,
    /// Path is fully drawn.
    Complete,
}

impl RevealPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            RevealPhase::Pending   => "pending",
            RevealPhase::Revealing => "revealing",
            RevealPhase::Complete  => "complete",
        }
    }

    /// `true` once the route's start delay has passed.
    #[inline]
    pub fn is_started(self) -> bool {
        !matches!(self, RevealPhase::Pending)
    }
}

impl fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a timestamp to the visible prefix length of one route's path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RevealTimeline {
    start:       Timestamp,
    delay_ms:    u64,
    duration_ms: u64,
    point_count: usize,
}

impl RevealTimeline {
    pub fn new(start: Timestamp, delay_ms: u64, duration_ms: u64, point_count: usize) -> Self {
        Self { start, delay_ms, duration_ms, point_count }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// When the first point becomes visible.
    #[inline]
    pub fn starts_at(&self) -> Timestamp {
        self.start.offset_ms(clamp_ms(self.delay_ms))
    }

    /// When the whole path is visible.
    #[inline]
    pub fn completes_at(&self) -> Timestamp {
        self.starts_at().offset_ms(clamp_ms(self.duration_ms))
    }

    /// `now − start − delay`, negative while pending.
    #[inline]
    pub fn elapsed_ms(&self, now: Timestamp) -> i64 {
        now.since(self.starts_at())
    }

    /// Reveal fraction in `[0, 1]`.
    ///
    /// A zero duration jumps straight from 0 to 1 when the delay passes.
    pub fn progress(&self, now: Timestamp) -> f64 {
        let elapsed = self.elapsed_ms(now);
        if elapsed < 0 {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Number of leading path points drawn at `now`, in `[0, point_count]`.
    ///
    /// Integer arithmetic keeps this exactly `⌊count · progress⌋` and makes it
    /// reach `point_count` precisely when `elapsed ≥ duration`.
    pub fn visible_prefix_len(&self, now: Timestamp) -> usize {
        let elapsed = self.elapsed_ms(now);
        if elapsed < 0 {
            return 0;
        }
        let elapsed = elapsed as u64;
        if elapsed >= self.duration_ms {
            return self.point_count;
        }
        (self.point_count as u128 * elapsed as u128 / self.duration_ms as u128) as usize
    }

    pub fn phase(&self, now: Timestamp) -> RevealPhase {
        let elapsed = self.elapsed_ms(now);
        if elapsed < 0 {
            RevealPhase::Pending
        } else if elapsed as u64 >= self.duration_ms {
            RevealPhase::Complete
        } else {
            RevealPhase::Revealing
        }
    }
}

#[inline]
fn clamp_ms(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}
