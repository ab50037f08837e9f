use actix_web::{get, post, web, HttpResponse};
use crate::server::model::oms::{
    CancelReceipt, OrderDetail, OrderExceptionsResponse, OrderItemsResponse,
};

#[get("/oms/order/{order_id}")]
/// order detail; the order id is echoed, everything else is canned
async fn get_order(order_id: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(OrderDetail::mock(order_id.into_inner()))
}

#[post("/oms/order/{order_id}/cancel")]
/// cancel an order; always acknowledged, nothing is recorded
async fn cancel_order(order_id: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(CancelReceipt::mock(order_id.as_str()))
}

#[get("/oms/order/{order_id}/items")]
async fn get_order_items(order_id: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(OrderItemsResponse::mock(order_id.into_inner()))
}

#[get("/oms/order/{order_id}/exceptions")]
async fn get_order_exceptions(order_id: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(OrderExceptionsResponse::mock(order_id.into_inner()))
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_order)
        .service(cancel_order)
        .service(get_order_items)
        .service(get_order_exceptions);
}

#[cfg(test)]
mod test {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use super::*;

    #[actix_web::test]
    async fn order_detail_echoes_the_order_id() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get().uri("/oms/order/ORD1001").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["orderId"], "ORD1001");
        assert_eq!(body["status"], "SHIPPED");
        assert_eq!(body["orderDate"], "2025-10-10");
        assert_eq!(body["paymentStatus"], "PAID");
        assert_eq!(body["items"][0]["sku"], "SKU1001");
        assert_eq!(body["items"][0]["price"], 2999);
        assert_eq!(body["items"][0]["quantity"], 1);
    }

    #[actix_web::test]
    async fn cancel_always_acknowledges() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::post()
            .uri("/oms/order/ORD1001/cancel")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["cancelRequestId"], "CANCEL_REQ_ORD1001");
        assert_eq!(body["status"], "CANCELLED");
    }

    #[actix_web::test]
    async fn exceptions_list_is_always_empty() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get()
            .uri("/oms/order/ORD1001/exceptions")
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["orderId"], "ORD1001");
        assert_eq!(body["exceptions"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn items_route_returns_the_canned_line_items() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get()
            .uri("/oms/order/ORD1001/items")
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["sku"], "SKU1001");
    }
}
