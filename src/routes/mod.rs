// Route exports
pub mod bot;
pub mod health;

use actix_web::web;

pub use bot::{parse_event, BotState, PollSettings};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
}
