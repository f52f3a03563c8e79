//! Callbacks fired by [`RouteAnimationScheduler::tick`][crate::RouteAnimationScheduler::tick].

use rr_core::{RunId, Timestamp};

use crate::{RevealPhase, SidebarEntry};

/// Handle passed to side-effect callbacks.
///
/// A callback cannot reach the scheduler directly (it is mid-tick), so it
/// asks for a reset here instead.  The scheduler honours the request as soon
/// as the callback returns: the rest of the tick is abandoned and nothing
/// from the cancelled run is delivered afterwards.
#[derive(Debug)]
pub struct RunControl {
    run:             RunId,
    reset_requested: bool,
}

impl RunControl {
    pub(crate) fn new(run: RunId) -> Self {
        Self { run, reset_requested: false }
    }

    /// The run the current callback belongs to.
    #[inline]
    pub fn run(&self) -> RunId {
        self.run
    }

    /// Cancel the current run once this callback returns.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    #[inline]
    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }
}

/// Hooks into the reveal tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — sidebar follower
///
/// ```rust,ignore
/// struct Follow { sidebar: SidebarWidget }
///
/// impl RevealObserver for Follow {
///     fn on_auto_scroll(&mut self, _ctl: &mut RunControl, entry: &SidebarEntry) {
///         self.sidebar.scroll_to(entry.rank);
///     }
/// }
/// ```
pub trait RevealObserver {
    /// A route moved to a later phase.
    fn on_phase_change(
        &mut self,
        _run:   RunId,
        _rank:  usize,
        _from:  RevealPhase,
        _to:    RevealPhase,
        _now:   Timestamp,
    ) {}

    /// A route was appended to the side list.  Fires once per route per run,
    /// immediately after the append.
    fn on_sidebar_append(&mut self, _ctl: &mut RunControl, _entry: &SidebarEntry) {}

    /// The deferred auto-scroll for `entry` came due.  Never fires for an
    /// entry from a run that has since been reset or replaced.
    fn on_auto_scroll(&mut self, _ctl: &mut RunControl, _entry: &SidebarEntry) {}

    /// Every route is fully drawn and no effects remain.  Fires once per run.
    fn on_run_complete(&mut self, _run: RunId, _now: Timestamp) {}
}

/// A [`RevealObserver`] that does nothing.
pub struct NoopObserver;

impl RevealObserver for NoopObserver {}
