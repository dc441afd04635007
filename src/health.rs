use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::agent::TaskType;
use crate::chat::{Intent, INTENT_RULES};

/// Boot instant, set once at startup via `init_uptime()`.
static BOOT_INSTANT: OnceLock<Instant> = OnceLock::new();

pub fn init_uptime() {
    let _ = BOOT_INSTANT.set(Instant::now());
}

pub fn uptime_secs() -> u64 {
    BOOT_INSTANT.get().map(|b| b.elapsed().as_secs()).unwrap_or(0)
}

pub fn uptime_human(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let mins = (secs % 3600) / 60;
    if days > 0 {
        format!("{}d {}h {}m", days, hours, mins)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

// ── Status Report ───────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub ok: bool,
    pub name: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub uptime: String,
    /// Task types in dispatch order.
    pub tasks: Vec<&'static str>,
    /// Chat intents in priority order, fallback last.
    pub intents: Vec<&'static str>,
}

pub fn gather() -> StatusReport {
    let secs = uptime_secs();
    let mut intents: Vec<&'static str> = INTENT_RULES.iter().map(|(i, _)| i.as_str()).collect();
    intents.push(Intent::General.as_str());

    StatusReport {
        ok: true,
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: secs,
        uptime: uptime_human(secs),
        tasks: TaskType::ALL.iter().map(|t| t.as_str()).collect(),
        intents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_human() {
        assert_eq!(uptime_human(59), "0m");
        assert_eq!(uptime_human(3 * 3600 + 120), "3h 2m");
        assert_eq!(uptime_human(86400 + 7200 + 180), "1d 2h 3m");
    }
}
