use rocket::serde::json::Json;

use crate::health::{self, StatusReport};

// ── Status Check ──────────────────────────────────────

#[get("/status")]
pub fn status() -> Json<StatusReport> {
    Json(health::gather())
}
