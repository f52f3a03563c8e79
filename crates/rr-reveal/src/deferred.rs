//! `DeferredQueue` — side effects that fire a fixed time after the event
//! that caused them.
//!
//! The sidebar auto-scroll must run shortly *after* a new entry appears, not
//! in the same tick.  Rather than handing the host a timer callback (which can
//! outlive the run it belongs to), the scheduler keeps the pending effect
//! here, tagged with the [`RunId`] it was created under, and delivers it from
//! a later `tick`.
//!
//! `BTreeMap` keyed by due time gives ordered draining even when the host's
//! clock jitters backwards between ticks.

use std::collections::BTreeMap;

use rr_core::{RunId, Timestamp};

/// What a deferred effect does when it comes due.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Scroll the sidebar so the entry at `sidebar_index` is fully visible.
    AutoScroll { sidebar_index: usize },
}

/// One queued effect and the run that owns it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DeferredEffect {
    pub run:  RunId,
    pub kind: EffectKind,
}

/// Effects keyed by the timestamp at which they become due.
#[derive(Default, Debug)]
pub struct DeferredQueue {
    inner: BTreeMap<Timestamp, Vec<DeferredEffect>>,
    /// Cached total effect count for O(1) `len()`.
    total: usize,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `effect` to fire at `due`.  Effects sharing a due time keep
    /// insertion order.
    pub fn push(&mut self, due: Timestamp, effect: DeferredEffect) {
        self.inner.entry(due).or_default().push(effect);
        self.total += 1;
    }

    /// Remove and return every effect due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Timestamp) -> Vec<DeferredEffect> {
        let later = match now.0.checked_add(1) {
            Some(next) => self.inner.split_off(&Timestamp(next)),
            None => BTreeMap::new(),
        };
        let due = std::mem::replace(&mut self.inner, later);

        let effects: Vec<DeferredEffect> = due.into_values().flatten().collect();
        self.total -= effects.len();
        effects
    }

    /// Drop every effect not owned by `run`.  Returns how many were dropped.
    pub fn retain_run(&mut self, run: RunId) -> usize {
        let before = self.total;
        self.inner.retain(|_, effects| {
            effects.retain(|e| e.run == run);
            !effects.is_empty()
        });
        self.total = self.inner.values().map(Vec::len).sum();
        before - self.total
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }

    /// The earliest due time, or `None` if empty.
    pub fn next_due(&self) -> Option<Timestamp> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
