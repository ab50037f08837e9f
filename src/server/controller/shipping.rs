use actix_web::{get, web, HttpResponse};
use crate::server::model::shipping::ShippingEta;

#[get("/shipping/eta/{tracking_no}")]
/// delivery estimate for a tracking number
async fn get_eta(tracking_no: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(ShippingEta::mock(tracking_no.into_inner()))
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_eta);
}

#[cfg(test)]
mod test {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use super::*;

    #[actix_web::test]
    async fn eta_matches_the_fixed_delivery_date() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get().uri("/shipping/eta/TRK998877").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["trackingNo"], "TRK998877");
        assert_eq!(body["eta"], "2025-10-25");
    }
}
