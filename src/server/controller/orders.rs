use actix_web::{get, web, HttpResponse};
use crate::server::model::order::OrderRecord;

#[get("/orders/{user_id}")]
/// order lookup; every user id gets the same canned record
async fn get_order(_user_id: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .json(OrderRecord::mock())
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_order);
}
