//! `rr-reveal` — time-driven, staggered reveal of ranked routes.
//!
//! # Tick model
//!
//! ```text
//! start(ranked)          capture start = clock.now(); one RevealTimeline per
//!                        route with delay = rank * (duration + gap)
//! tick(now, observer):
//!   ① Routes    — in rank order, recompute each timeline at `now`.
//!                 Pending → Revealing appends the route to the sidebar list,
//!                 fires on_sidebar_append, and queues an auto-scroll
//!                 `scroll_delay_ms` later.
//!   ② Effects   — drain deferred effects due at `now`; any effect whose
//!                 RunId is no longer current is dropped.
//!   ③ Frame     — visible path prefixes, markers, sidebar slice.
//! reset()                drop everything, bump the RunId.
//! ```
//!
//! There are no per-route timers: a single `tick` drives both the map reveal
//! and the sidebar, so the two can never disagree about which routes are
//! visible.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`timeline`]  | `RevealTimeline`, `RevealPhase`                       |
//! | [`deferred`]  | `DeferredQueue`, `DeferredEffect`, `EffectKind`       |
//! | [`observer`]  | `RevealObserver`, `RunControl`, `NoopObserver`        |
//! | [`frame`]     | `RevealFrame`, `RouteFrame`, `Marker`, `SidebarEntry` |
//! | [`scheduler`] | `RouteAnimationScheduler`                             |
//! | [`error`]     | `RevealError`, `RevealResult<T>`                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rr_core::{ScheduleConfig, SystemClock};
//! use rr_reveal::{NoopObserver, RouteAnimationScheduler};
//!
//! let mut scheduler = RouteAnimationScheduler::new(ScheduleConfig::default(), SystemClock::new())?;
//! scheduler.start(rr_route::rank(&routes))?;
//! loop {
//!     let frame = scheduler.tick_now(&mut NoopObserver);
//!     render(&frame);
//! }
//! ```

pub mod deferred;
pub mod error;
pub mod frame;
pub mod observer;
pub mod scheduler;
pub mod timeline;


pub use deferred::{DeferredEffect, DeferredQueue, EffectKind};
pub use error::{RevealError, RevealResult};
pub use frame::{Marker, MarkerKind, RevealFrame, RouteFrame, SidebarEntry};
pub use observer::{NoopObserver, RevealObserver, RunControl};
pub use scheduler::RouteAnimationScheduler;
pub use timeline::{RevealPhase, RevealTimeline};
