use actix_web::{get, web, HttpResponse};
use crate::server::model::catalog::{ProductDetail, SearchParams, SearchResponse};

#[get("/catalog/product/{sku}")]
/// product detail for a sku; detail fields are canned, the sku is echoed
async fn get_product(sku: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(ProductDetail::mock(sku.into_inner()))
}

#[get("/catalog/search")]
/// catalog search; a missing `q` is treated as the empty query, never a 400
async fn search_catalog(params: web::Query<SearchParams>) -> HttpResponse {
    let query = params.into_inner().q.unwrap_or_default();
    HttpResponse::Ok().json(SearchResponse::mock(query))
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_product).service(search_catalog);
}
