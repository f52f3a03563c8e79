//! Optional JSON settings file.
//!
//! ```json
//! { "schedule": { "duration_ms": 2000, "gap_ms": 500 },
//!   "camera":   { "back_off_m": 800 } }
//! ```
//!
//! Every field is optional; missing ones keep their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use rr_camera::CameraPlacer;
use rr_core::ScheduleConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplaySettings {
    pub schedule: ScheduleConfig,
    pub camera:   CameraPlacer,
}

impl ReplaySettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        let settings: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing settings {}", path.display()))?;
        settings.schedule.validate()?;
        Ok(settings)
    }
}
