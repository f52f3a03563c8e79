//! route-replay — drive the reveal engine headlessly.
//!
//! Loads a routing response (from a saved JSON file or a live backend),
//! ranks the routes, places the camera, and steps the reveal scheduler on a
//! manual clock until every route is drawn and every side effect has fired.
//!
//! ```text
//! route-replay --response demos/replay/data/austin.json --trace trace.csv
//! route-replay --origin "Zilker Park" --destination "UT Tower"
//! ```

mod settings;
mod trace;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rr_camera::{CameraPose, NoTerrain};
use rr_client::{ClientConfig, ClientError, RouteQuery, RouteSet, RoutingClient, parse_response};
use rr_core::{Clock, ManualClock, RunId, ScheduleConfig, Timestamp, geodesy};
use rr_reveal::{RevealObserver, RevealPhase, RouteAnimationScheduler, RunControl, SidebarEntry};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settings::ReplaySettings;
use trace::TraceWriter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay the staggered route reveal without a renderer")]
struct Args {
    /// Saved routing backend response (JSON)
    #[arg(long, conflicts_with_all = ["origin", "destination"])]
    response: Option<PathBuf>,

    /// Origin address, sent to the routing backend
    #[arg(long, requires = "destination")]
    origin: Option<String>,

    /// Destination address, sent to the routing backend
    #[arg(long, requires = "origin")]
    destination: Option<String>,

    /// Routing backend base URL (overrides ROUTE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// JSON settings file with `schedule` and `camera` sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated time between ticks, milliseconds
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    step_ms: u64,

    /// Write a per-tick CSV trace here
    #[arg(long)]
    trace: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs side effects and counts them for the summary.
#[derive(Default)]
struct ReplayObserver {
    appends:     usize,
    scrolls:     usize,
    finished_at: Option<Timestamp>,
}

impl RevealObserver for ReplayObserver {
    fn on_phase_change(
        &mut self,
        run:  RunId,
        rank: usize,
        from: RevealPhase,
        to:   RevealPhase,
        now:  Timestamp,
    ) {
        info!(%run, rank, %from, %to, %now, "phase");
    }

    fn on_sidebar_append(&mut self, _ctl: &mut RunControl, entry: &SidebarEntry) {
        self.appends += 1;
        info!(
            rank = entry.rank,
            label = %entry.label,
            comfort = entry.comfort_score,
            at = %entry.revealed_at,
            "sidebar append"
        );
    }

    fn on_auto_scroll(&mut self, _ctl: &mut RunControl, entry: &SidebarEntry) {
        self.scrolls += 1;
        info!(rank = entry.rank, "sidebar scroll");
    }

    fn on_run_complete(&mut self, _run: RunId, now: Timestamp) {
        self.finished_at = Some(now);
    }
}

// ── Route source ──────────────────────────────────────────────────────────────

fn load_routes(args: &Args) -> Result<RouteSet> {
    let result = if let Some(path) = &args.response {
        let body = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        parse_response(&body)
    } else if let (Some(origin), Some(destination)) = (&args.origin, &args.destination) {
        let mut config = ClientConfig::from_env()?;
        if let Some(url) = &args.api_url {
            config.base_url = url.clone();
        }
        RoutingClient::new(config)?.fetch_routes(&RouteQuery::new(origin, destination))
    } else {
        bail!("either --response or --origin/--destination is required");
    };

    result.map_err(|e: ClientError| {
        error!(error = %e, "could not load routes");
        let message = e.user_message();
        anyhow::Error::new(e).context(message)
    })
}

/// Clock reading after which the replay stops even if the run has not
/// finished: every reveal, the last auto-scroll, and one more step.
fn replay_limit(config: &ScheduleConfig, routes: usize, step_ms: u64) -> Timestamp {
    let ms = config
        .total_ms(routes)
        .saturating_add(config.scroll_delay_ms)
        .saturating_add(step_ms);
    Timestamp(i64::try_from(ms).unwrap_or(i64::MAX))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => ReplaySettings::load(path)?,
        None => ReplaySettings::default(),
    };

    // 1. Routes, ranked by comfort.
    let set = load_routes(&args)?;
    let ranked = rr_route::rank(&set.routes);
    let straight = geodesy::distance_m(set.origin, set.destination)?;
    println!("=== route-replay ===");
    println!(
        "{} route(s)  |  {} → {}  |  straight line {:.0} m",
        ranked.len(),
        set.origin,
        set.destination,
        straight
    );

    // 2. Camera behind the coolest route.
    let home = CameraPose::home();
    let pose = match ranked.first() {
        Some(first) => settings.camera.place(first, &NoTerrain)?,
        None => home,
    };
    println!(
        "Camera: {} at {:.0} m, heading {:.1}°, pitch {:.0}°  (home {})",
        pose.position,
        pose.altitude_m,
        pose.orientation.heading_deg,
        pose.orientation.pitch_deg,
        home.position
    );

    // 3. Reveal on a manual clock.
    let clock = ManualClock::new(Timestamp::ZERO);
    let mut scheduler = RouteAnimationScheduler::new(settings.schedule, clock.clone())?;
    let run = scheduler.start(ranked)?;
    let config = scheduler.config().clone();
    let limit = replay_limit(&config, scheduler.route_count(), args.step_ms);
    let step = i64::try_from(args.step_ms).unwrap_or(i64::MAX);
    println!(
        "Reveal {run}: {} ms per route, {} ms gap, stepping {} ms",
        config.duration_ms, config.gap_ms, args.step_ms
    );
    println!();

    let mut trace = args.trace.as_deref().map(TraceWriter::create).transpose()?;
    let mut observer = ReplayObserver::default();
    let mut ticks = 0usize;

    loop {
        let frame = scheduler.tick_now(&mut observer);
        if let Some(t) = trace.as_mut() {
            t.write_frame(&frame)?;
        }
        ticks += 1;
        if scheduler.is_finished() || clock.now() >= limit {
            break;
        }
        clock.advance(step);
    }

    // 4. Summary.
    match observer.finished_at {
        Some(t) => println!("Reveal complete at {t} after {ticks} ticks"),
        None => println!("Reveal stopped after {ticks} ticks without completing"),
    }
    println!("  sidebar appends : {}", observer.appends);
    println!("  auto-scrolls    : {}", observer.scrolls);
    if let Some(t) = trace {
        let rows = t.finish()?;
        println!("  trace rows      : {rows}");
    }
    println!();

    println!(
        "{:<6} {:<9} {:>8} {:>10} {:>10} {:>7}  {}",
        "Rank", "Label", "UTCI", "Distance", "Duration", "Shade", "Colour"
    );
    println!("{}", "-".repeat(66));
    for entry in scheduler.sidebar() {
        println!(
            "{:<6} {:<9} {:>8.1} {:>10} {:>10} {:>6.0}%  {}",
            entry.rank,
            entry.label,
            entry.comfort_score,
            entry.distance,
            entry.duration,
            entry.shade_percentage,
            entry.color,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rr_core::{ScheduleConfig, Timestamp};

    use super::replay_limit;

    #[test]
    fn limit_covers_reveal_and_last_scroll() {
        let config = ScheduleConfig::default();
        // 3 × 4000 ms + 2 × 1000 ms gap, + 100 ms scroll, + 250 ms step.
        assert_eq!(replay_limit(&config, 3, 250), Timestamp(14_350));
    }

    #[test]
    fn huge_settings_saturate() {
        let config = ScheduleConfig {
            duration_ms:     i64::MAX as u64,
            gap_ms:          i64::MAX as u64,
            scroll_delay_ms: i64::MAX as u64,
        };
        assert!(config.validate().is_ok());
        assert_eq!(replay_limit(&config, 5, u64::MAX), Timestamp(i64::MAX));
    }
}
