//! main file for the server

pub mod model;
mod controller;

use actix_web::{middleware::Logger, App, HttpServer};
use crate::server::model::config::ServerConfig;
use crate::server::controller::{catalog, health, inventory, oms, orders, pricing, shipping};

/// Run the server
pub async fn run(ServerConfig{ addr }: ServerConfig) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(orders::init_routes)
            .configure(health::init_routes)
            .configure(catalog::init_routes)
            .configure(oms::init_routes)
            .configure(pricing::init_routes)
            .configure(inventory::init_routes)
            .configure(shipping::init_routes)
    })
        .bind(addr)?
        .run()
        .await
}
