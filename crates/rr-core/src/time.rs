//! Reveal-time model.
//!
//! # Design
//!
//! Time is a signed millisecond count, `Timestamp`.  Its origin is whatever
//! the [`Clock`] that produced it chose; only differences between timestamps
//! from the same clock are meaningful.  The count is signed so that a clock
//! read that lands before a run's start (skew, a host that ticks with a stale
//! frame time) is representable and can be clamped instead of underflowing.
//!
//! The scheduler never reads ambient wall-clock time itself.  It is handed a
//! `Clock` at construction and a `now` on every tick, which keeps `tick` a
//! pure function of state and time and lets tests drive it with
//! [`ManualClock`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

// ── Timestamp ────────────────────────────────────────────────────────────────

/// A point in time, in milliseconds since the owning clock's origin.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Return the timestamp `ms` milliseconds after `self` (saturating).
    #[inline]
    pub fn offset_ms(self, ms: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }

    /// Milliseconds from `earlier` to `self`.  Negative if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<i64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: i64) -> Timestamp {
        self.offset_ms(rhs)
    }
}

impl std::ops::Sub<i64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn sub(self, rhs: i64) -> Timestamp {
        Timestamp(self.0.saturating_sub(rhs))
    }
}

impl std::ops::Sub for Timestamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.since(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of "now" for the reveal scheduler.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Monotonic wall clock, measured from the moment it was created.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let ms = self.origin.elapsed().as_millis();
        Timestamp(i64::try_from(ms).unwrap_or(i64::MAX))
    }
}

/// Hand-driven clock for tests and headless replay.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the scheduler.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    /// A clock reading `start`.
    pub fn new(start: Timestamp) -> Self {
        Self { now: Rc::new(Cell::new(start.0)) }
    }

    /// Jump to an absolute time.  Moving backwards is allowed.
    pub fn set(&self, t: Timestamp) {
        self.now.set(t.0);
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.get())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
