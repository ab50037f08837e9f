use actix_web::{get, web, HttpResponse};
use crate::server::model::inventory::StockStatus;

#[get("/inventory/{sku}")]
/// stock status for a sku; always in stock
async fn get_stock(sku: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(StockStatus::mock(sku.into_inner()))
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_stock);
}
