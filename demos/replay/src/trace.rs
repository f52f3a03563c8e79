//! Per-tick CSV trace: one row per route per tick.

use std::fs::File;
use std::path::Path;

use anyhow::Result;
use csv::Writer;
use rr_reveal::RevealFrame;
use serde::Serialize;

#[derive(Serialize)]
struct TraceRow<'a> {
    run:            u64,
    now_ms:         i64,
    rank:           usize,
    label:          &'a str,
    phase:          &'static str,
    progress:       f64,
    visible_points: usize,
    markers:        usize,
    sidebar_len:    usize,
}

pub struct TraceWriter {
    out:  Writer<File>,
    rows: usize,
}

impl TraceWriter {
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self { out: Writer::from_path(path)?, rows: 0 })
    }

    pub fn write_frame(&mut self, frame: &RevealFrame<'_>) -> Result<()> {
        let now_ms = frame.now.map_or(0, |t| t.0);
        for route in &frame.routes {
            self.out.serialize(TraceRow {
                run:            frame.run.0,
                now_ms,
                rank:           route.route_index,
                label:          route.label,
                phase:          route.phase.as_str(),
                progress:       route.progress,
                visible_points: route.visible_prefix.len(),
                markers:        frame.markers.iter().filter(|m| m.route_index == route.route_index).count(),
                sidebar_len:    frame.sidebar.len(),
            })?;
            self.rows += 1;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        self.out.flush()?;
        Ok(self.rows)
    }
}
