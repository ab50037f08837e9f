use actix_web::{get, web, HttpResponse};
use crate::server::model::pricing::{BulkPrice, BulkPricingParams, ContractPrice};

#[get("/pricing/contract/{customer_id}/{sku}")]
/// B2B contract price for a customer/sku pair
async fn get_contract_price(path: web::Path<(String, String)>) -> HttpResponse {
    let (customer_id, sku) = path.into_inner();
    HttpResponse::Ok().json(ContractPrice::mock(customer_id, sku))
}

#[get("/pricing/bulk")]
/// tiered bulk price; missing params default to empty/zero, never a 400
async fn get_bulk_price(params: web::Query<BulkPricingParams>) -> HttpResponse {
    let BulkPricingParams { sku, qty } = params.into_inner();
    HttpResponse::Ok().json(BulkPrice::mock(
        sku.unwrap_or_default(),
        qty.unwrap_or_default(),
    ))
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_contract_price).service(get_bulk_price);
}

#[cfg(test)]
mod test {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use super::*;

    #[actix_web::test]
    async fn contract_price_echoes_customer_and_sku() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get()
            .uri("/pricing/contract/CUST32/SKU8823")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["customerId"], "CUST32");
        assert_eq!(body["sku"], "SKU8823");
        assert_eq!(body["contractPrice"], 2499);
        assert_eq!(body["minOrderQty"], 10);
        assert_eq!(body["discountPercent"], 15);
    }

    #[actix_web::test]
    async fn bulk_price_echoes_query_params() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get()
            .uri("/pricing/bulk?sku=SKU1001&qty=25")
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["sku"], "SKU1001");
        assert_eq!(body["quantity"], 25);
        assert_eq!(body["unitPrice"], 2999);
    }

    #[actix_web::test]
    async fn bulk_price_without_params_still_succeeds() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get().uri("/pricing/bulk").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["sku"], "");
        assert_eq!(body["quantity"], 0);
    }
}
