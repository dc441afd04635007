use rocket::serde::json::{self, Json};
use serde::{Deserialize, Serialize};

use crate::agent::{self, TaskType};
use crate::error::{ApiError, Endpoint};
use crate::models::channel::ChannelContext;

use super::decode_error;

// ── Request Types ─────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub channel_name: Option<String>,
    pub channel_topic: Option<String>,
    pub task_type: Option<String>,
    pub task_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

// ── One-shot Generation ───────────────────────────────

#[post("/agent", data = "<body>")]
pub fn generate<'r>(
    body: Result<Json<GenerateRequest>, json::Error<'r>>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let body = body
        .map_err(|e| ApiError::shape(Endpoint::Agent, decode_error(&e)))?
        .into_inner();

    let task = TaskType::parse(body.task_type.as_deref().unwrap_or(""));
    let ctx = ChannelContext::new(body.channel_name, body.channel_topic);
    let extra = body.task_input.as_deref();

    log::debug!("agent brief: {}", agent::brief(task, &ctx, extra));

    Ok(Json(GenerateResponse {
        result: agent::dispatch(task, &ctx, extra),
    }))
}
