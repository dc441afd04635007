#[macro_use]
extern crate rocket;

mod agent;
mod boot;
mod chat;
mod config;
mod error;
mod health;
mod models;
mod render;
mod routes;


use rocket::figment::Figment;
use rocket::{Build, Rocket};

use config::AgentConfig;

/// Wire the API onto a Rocket instance configured from `figment`.
/// Shared by `#[launch]` and the test client.
pub fn build(figment: Figment) -> Rocket<Build> {
    let config = AgentConfig::from_figment(&figment);
    log::info!(
        "API mounted at {} (CORS origin: {})",
        config.api_base,
        config.cors_origin.as_deref().unwrap_or("none")
    );

    rocket::custom(figment)
        .attach(routes::ApiHeaders {
            prefix: config.api_base.clone(),
            cors_origin: config.cors_origin.clone(),
        })
        .mount(config.api_base.as_str(), routes::routes())
        .register(
            "/",
            catchers![routes::not_found, routes::default_catcher],
        )
}

#[launch]
fn rocket() -> _ {
    env_logger::init();
    health::init_uptime();

    // Boot check — validate template tables before serving
    boot::run();

    build(rocket::Config::figment())
}
