use log::{error, info};
use std::collections::HashSet;
use std::process;

use crate::agent::{self, TaskType};
use crate::chat::{self, Intent, INTENT_RULES};
use crate::models::channel::ChannelContext;

/// Run all boot checks. Call this before Rocket launches.
/// Aborts if the template tables are unusable.
pub fn run() {
    info!("Boot check starting...");

    let problems = check_tables();
    for p in &problems {
        error!("  {}", p);
    }
    if !problems.is_empty() {
        error!("Boot check failed with {} error(s); refusing to start", problems.len());
        process::exit(1);
    }

    info!(
        "Boot check passed: {} task templates, {} intent rules (+ general fallback)",
        TaskType::ALL.len(),
        INTENT_RULES.len()
    );
}

/// Validate the intent table and render every template once against an
/// empty context. Returns a description of each problem found.
pub fn check_tables() -> Vec<String> {
    let mut problems = Vec::new();

    // ── 1. Intent rules ────────────────────────────────
    let mut seen = HashSet::new();
    for (intent, triggers) in INTENT_RULES {
        if *intent == Intent::General {
            problems.push("general is the fallback and must not have triggers".to_string());
        }
        if !seen.insert(*intent) {
            problems.push(format!("intent {} is listed more than once", intent));
        }
        if triggers.is_empty() {
            problems.push(format!("intent {} has no triggers", intent));
        }
        for t in triggers.iter() {
            if t.is_empty() || *t != t.to_lowercase() {
                problems.push(format!("intent {} has unusable trigger {:?}", intent, t));
            }
        }
    }

    // ── 2. Templates render ────────────────────────────
    let empty = ChannelContext::default();
    for task in TaskType::ALL {
        if agent::dispatch(task, &empty, None).trim().is_empty() {
            problems.push(format!("task template {} renders empty", task));
        }
    }
    for (intent, _) in INTENT_RULES {
        if chat::respond(*intent, &empty).trim().is_empty() {
            problems.push(format!("reply for {} renders empty", intent));
        }
    }
    if chat::respond(Intent::General, &empty).trim().is_empty() {
        problems.push("general reply renders empty".to_string());
    }

    problems
}
