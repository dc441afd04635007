use rocket::serde::json::{self, Json};
use serde::{Deserialize, Serialize};

use crate::chat;
use crate::error::{ApiError, Endpoint};
use crate::models::channel::ChannelContext;
use crate::models::chat::ChatHistory;

use super::decode_error;

// ── Request Types ─────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: ChatHistory,
    pub channel_name: Option<String>,
    pub channel_topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

// ── Chat ──────────────────────────────────────────────

#[post("/chat", data = "<body>")]
pub fn reply<'r>(
    body: Result<Json<ChatRequest>, json::Error<'r>>,
) -> Result<Json<ChatResponse>, ApiError> {
    let body = body
        .map_err(|e| ApiError::shape(Endpoint::Chat, decode_error(&e)))?
        .into_inner();

    let ctx = ChannelContext::new(body.channel_name, body.channel_topic);
    let answer = chat::classify_and_respond(&body.messages, &ctx)?;

    Ok(Json(ChatResponse {
        message: answer.message,
    }))
}
