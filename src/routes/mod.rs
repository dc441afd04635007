pub mod agent;
pub mod chat;
pub mod status;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::{self, Json};
use rocket::Request;
use serde_json::{json, Value};

// ── Helpers ───────────────────────────────────────────

/// Human-readable reason a JSON body could not be decoded.
pub fn decode_error(err: &json::Error<'_>) -> String {
    match err {
        json::Error::Io(e) => e.to_string(),
        json::Error::Parse(_, e) => e.to_string(),
    }
}

/// True for the prefix itself and anything below it, but not for siblings
/// that merely share the leading characters (`/apiary` is not under `/api`).
pub fn under_prefix(path: &str, prefix: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

// ── Headers Fairing ───────────────────────────────────

/// Stamps API responses as uncacheable and, when an origin is configured,
/// adds the CORS headers browsers need.
pub struct ApiHeaders {
    pub prefix: String,
    pub cors_origin: Option<String>,
}

#[rocket::async_trait]
impl Fairing for ApiHeaders {
    fn info(&self) -> Info {
        Info {
            name: "API Response Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut rocket::Response<'r>) {
        if !under_prefix(req.uri().path().as_str(), &self.prefix) {
            return;
        }
        res.set_header(Header::new("Cache-Control", "no-store"));
        if let Some(origin) = &self.cors_origin {
            res.set_header(Header::new("Access-Control-Allow-Origin", origin.clone()));
            res.set_header(Header::new("Access-Control-Allow-Methods", "GET, POST, OPTIONS"));
            res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
            res.set_header(Header::new("Vary", "Origin"));
        }
    }
}

#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

// ── Catchers ──────────────────────────────────────────

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<Value> {
    Json(json!({ "error": format!("No route for {} {}", req.method(), req.uri().path()) }))
}

#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request<'_>) -> Json<Value> {
    Json(json!({ "error": status.reason().unwrap_or("Request failed") }))
}

// ── Route Registration ────────────────────────────────

pub fn routes() -> Vec<rocket::Route> {
    routes![
        agent::generate,
        chat::reply,
        status::status,
        preflight,
    ]
}
