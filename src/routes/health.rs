use actix_web::{web, HttpResponse, Responder};

/// Constant body for the uptime monitor
pub const LIVENESS_BODY: &str = "I'm alive!";

/// Configure the liveness route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(liveness));
}

/// GET /
async fn liveness() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_BODY)
}
