use actix_web::{get, web, HttpResponse};

#[get("/health")]
/// liveness probe
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "OK" }))
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
