//! The multi-route reveal scheduler.

use rr_core::{Clock, GeoPoint, RunId, ScheduleConfig, SystemClock, Timestamp};
use rr_route::RankedRoute;
use tracing::{debug, info, trace};

use crate::{
    DeferredEffect, DeferredQueue, EffectKind, Marker, MarkerKind, RevealError, RevealFrame,
    RevealObserver, RevealPhase, RevealResult, RevealTimeline, RouteFrame, RunControl,
    SidebarEntry,
};

// ── Per-route state ───────────────────────────────────────────────────────────

/// One route inside a run.
#[derive(Debug)]
struct ScheduledRoute {
    route:    RankedRoute,
    timeline: RevealTimeline,
    /// Highest phase reached so far.  Never moves backwards within a run.
    phase:    RevealPhase,
    /// Visible prefix length as of the last tick (high-water mark).
    visible:  usize,
    progress: f64,
}

// ── RouteAnimationScheduler ───────────────────────────────────────────────────

/// Drives the staggered reveal of a ranked route set.
///
/// Owns one [`RevealTimeline`] per route, the cumulative sidebar list, and
/// the queue of deferred side effects.  The host calls [`tick`][Self::tick]
/// once per frame or interval; nothing runs between ticks.
///
/// # Invariants
///
/// - Routes are evaluated in rank order, so the sidebar list is in rank order
///   and only grows until the next `reset`/`start`.
/// - Each route is appended to the sidebar exactly once per run, on the tick
///   it leaves `Pending`.
/// - Frames never go backwards within a run: a clock reading earlier than a
///   previous tick leaves phases and prefixes where they were.
/// - After `reset`, nothing from the previous run (routes, markers, sidebar
///   entries, pending effects) is observable.
pub struct RouteAnimationScheduler<C: Clock = SystemClock> {
    config:    ScheduleConfig,
    clock:     C,
    run:       RunId,
    start:     Option<Timestamp>,
    last_tick: Option<Timestamp>,
    routes:    Vec<ScheduledRoute>,
    sidebar:   Vec<SidebarEntry>,
    deferred:  DeferredQueue,
    completed: bool,
}

impl<C: Clock> RouteAnimationScheduler<C> {
    /// Create an idle scheduler.  Fails if `config` holds out-of-range values.
    pub fn new(config: ScheduleConfig, clock: C) -> RevealResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            run:       RunId::NONE,
            start:     None,
            last_tick: None,
            routes:    Vec::new(),
            sidebar:   Vec::new(),
            deferred:  DeferredQueue::new(),
            completed: false,
        })
    }

    // ── Run lifecycle ─────────────────────────────────────────────────────

    /// Begin a new run over `routes`.
    ///
    /// Every route is validated first; on any failure the scheduler is left
    /// exactly as it was.  On success any previous run is discarded, the start
    /// time is read once from the clock, and route *i* is given a delay of
    /// `i * (duration + gap)`.
    pub fn start(&mut self, routes: Vec<RankedRoute>) -> RevealResult<RunId> {
        if routes.is_empty() {
            return Err(RevealError::EmptyRouteSet);
        }
        for (index, ranked) in routes.iter().enumerate() {
            if ranked.rank != index {
                return Err(RevealError::RankOrder { index, rank: ranked.rank });
            }
            ranked
                .route
                .validate()
                .map_err(|source| RevealError::Route { index, source })?;
        }

        self.reset();
        let start = self.clock.now();
        let duration = self.config.duration_ms;

        self.routes = routes
            .into_iter()
            .map(|route| {
                let delay = self.config.delay_for_rank(route.rank);
                let timeline = RevealTimeline::new(start, delay, duration, route.path().len());
                ScheduledRoute {
                    route,
                    timeline,
                    phase:    RevealPhase::Pending,
                    visible:  0,
                    progress: 0.0,
                }
            })
            .collect();
        self.start = Some(start);

        info!(
            run = %self.run,
            routes = self.routes.len(),
            start = %start,
            total_ms = self.config.total_ms(self.routes.len()),
            "reveal run started"
        );
        Ok(self.run)
    }

    /// Discard the current run.
    ///
    /// Safe at any point, including between a sidebar append and its
    /// auto-scroll.  Bumps the [`RunId`] so that anything still holding the
    /// old id can tell it has been superseded.
    pub fn reset(&mut self) {
        if !self.routes.is_empty() || !self.deferred.is_empty() {
            debug!(
                run = %self.run,
                dropped_effects = self.deferred.len(),
                "reveal run reset"
            );
        }
        self.routes.clear();
        self.sidebar.clear();
        self.deferred.clear();
        self.start = None;
        self.last_tick = None;
        self.completed = false;
        self.run = self.run.next();
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance to the clock's current time.
    pub fn tick_now<O: RevealObserver + ?Sized>(&mut self, observer: &mut O) -> RevealFrame<'_> {
        let now = self.clock.now();
        self.tick(now, observer)
    }

    /// Recompute every route at `now`, fire due side effects, and return the
    /// resulting frame.
    pub fn tick<O: RevealObserver + ?Sized>(
        &mut self,
        now:      Timestamp,
        observer: &mut O,
    ) -> RevealFrame<'_> {
        if self.routes.is_empty() {
            return self.frame();
        }
        self.last_tick = Some(now);
        let run = self.run;
        let mut ctl = RunControl::new(run);

        // ── Phase 1: routes, in rank order ────────────────────────────────
        for i in 0..self.routes.len() {
            let scheduled = &mut self.routes[i];
            scheduled.visible = scheduled.visible.max(scheduled.timeline.visible_prefix_len(now));
            scheduled.progress = scheduled.progress.max(scheduled.timeline.progress(now));

            let previous = scheduled.phase;
            let current = scheduled.timeline.phase(now);
            if current <= previous {
                continue;
            }
            scheduled.phase = current;
            debug!(%run, rank = i, from = %previous, to = %current, %now, "route phase change");
            observer.on_phase_change(run, i, previous, current, now);

            // A zero-duration route goes Pending → Complete in one step; it
            // still gets its sidebar entry.
            if previous == RevealPhase::Pending {
                let entry = SidebarEntry::from_route(&self.routes[i].route, now);
                self.sidebar.push(entry);
                let sidebar_index = self.sidebar.len() - 1;

                let due = now.offset_ms(self.config.scroll_delay_ms as i64);
                self.deferred.push(due, DeferredEffect {
                    run,
                    kind: EffectKind::AutoScroll { sidebar_index },
                });

                observer.on_sidebar_append(&mut ctl, &self.sidebar[sidebar_index]);
                if ctl.reset_requested() {
                    self.reset();
                    return self.frame();
                }
            }
        }

        // ── Phase 2: deferred effects ─────────────────────────────────────
        for effect in self.deferred.drain_due(now) {
            if effect.run != self.run {
                debug!(effect_run = %effect.run, current = %self.run, "dropping stale effect");
                continue;
            }
            match effect.kind {
                EffectKind::AutoScroll { sidebar_index } => {
                    let Some(entry) = self.sidebar.get(sidebar_index) else {
                        continue;
                    };
                    trace!(%run, rank = entry.rank, "auto-scroll");
                    observer.on_auto_scroll(&mut ctl, entry);
                }
            }
            if ctl.reset_requested() {
                self.reset();
                return self.frame();
            }
        }

        if !self.completed && self.is_finished() {
            self.completed = true;
            info!(%run, %now, "reveal run complete");
            observer.on_run_complete(run, now);
        }

        self.frame()
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Render state as of the last tick.
    pub fn frame(&self) -> RevealFrame<'_> {
        let routes = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, s)| RouteFrame {
                route_index:    i,
                label:          &s.route.label,
                phase:          s.phase,
                progress:       s.progress,
                visible_prefix: &s.route.path()[..s.visible],
                color:          s.route.color,
            })
            .collect();

        let markers = self
            .routes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.phase.is_started())
            .flat_map(|(i, s)| endpoint_markers(i, s.route.path()))
            .collect();

        RevealFrame {
            run: self.run,
            now: self.last_tick,
            routes,
            markers,
            sidebar: &self.sidebar,
        }
    }

    /// The id of the current (or most recently reset) run.
    #[inline]
    pub fn run(&self) -> RunId {
        self.run
    }

    /// `true` if `run` is still the scheduler's current run.  Host-side
    /// callbacks should check this before touching shared UI state.
    #[inline]
    pub fn is_current(&self, run: RunId) -> bool {
        self.run == run && !self.routes.is_empty()
    }

    /// `true` between a successful `start` and the next `reset`.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Every route is Complete and every deferred effect has fired.
    pub fn is_finished(&self) -> bool {
        !self.routes.is_empty()
            && self.deferred.is_empty()
            && self.routes.iter().all(|s| s.phase == RevealPhase::Complete)
    }

    pub fn phase(&self, rank: usize) -> Option<RevealPhase> {
        self.routes.get(rank).map(|s| s.phase)
    }

    pub fn timeline(&self, rank: usize) -> Option<&RevealTimeline> {
        self.routes.get(rank).map(|s| &s.timeline)
    }

    pub fn visible_prefix(&self, rank: usize) -> Option<&[GeoPoint]> {
        self.routes.get(rank).map(|s| &s.route.path()[..s.visible])
    }

    pub fn sidebar(&self) -> &[SidebarEntry] {
        &self.sidebar
    }

    /// Routes of the current run, in rank order.
    pub fn routes(&self) -> impl Iterator<Item = &RankedRoute> {
        self.routes.iter().map(|s| &s.route)
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn start_time(&self) -> Option<Timestamp> {
        self.start
    }

    /// Number of deferred effects still waiting.
    pub fn pending_effects(&self) -> usize {
        self.deferred.len()
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn endpoint_markers(route_index: usize, path: &[GeoPoint]) -> impl Iterator<Item = Marker> {
    let start = path.first().map(|&position| Marker {
        route_index,
        kind: MarkerKind::Start,
        position,
    });
    let end = path.last().map(|&position| Marker {
        route_index,
        kind: MarkerKind::End,
        position,
    });
    start.into_iter().chain(end)
}
