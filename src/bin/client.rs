use std::env;
use std::time::Duration;
use clap::{Args, Parser, Subcommand};
use derive_more::{Display, Error};
use rand::Rng;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tokio::time;

#[derive(Parser, Debug)]
#[command(name = "commerce-mock")]
#[command(about = "client cli used to poke the commerce mock endpoints", version, long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// look up the canned order for a user
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
    /// catalog related ops
    #[command(arg_required_else_help = true)]
    Catalog(CatalogArgs),
    /// order management related ops
    #[command(arg_required_else_help = true)]
    Oms(OmsArgs),
    /// pricing related ops
    #[command(arg_required_else_help = true)]
    Pricing(PricingArgs),
    /// stock status for a sku
    #[command(arg_required_else_help = true)]
    Inventory(InventoryArgs),
    /// delivery estimate for a tracking number
    #[command(arg_required_else_help = true)]
    Shipping(ShippingArgs),
    /// server liveness probe
    Health,
}

#[derive(Debug, Args)]
struct OrderArgs {
    user_id: String,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCmds,
}

#[derive(Debug, Subcommand)]
enum CatalogCmds {
    #[command(arg_required_else_help = true)]
    Product { sku: String },
    #[command(arg_required_else_help = true)]
    Search { query: String },
}

#[derive(Debug, Args)]
struct OmsArgs {
    #[command(subcommand)]
    command: OmsCmds,
}

#[derive(Debug, Subcommand)]
enum OmsCmds {
    #[command(arg_required_else_help = true)]
    Get { order_id: String },
    #[command(arg_required_else_help = true)]
    Cancel { order_id: String },
    #[command(arg_required_else_help = true)]
    Items { order_id: String },
    #[command(arg_required_else_help = true)]
    Exceptions { order_id: String },
}

#[derive(Debug, Args)]
struct PricingArgs {
    #[command(subcommand)]
    command: PricingCmds,
}

#[derive(Debug, Subcommand)]
enum PricingCmds {
    #[command(arg_required_else_help = true)]
    Contract { customer_id: String, sku: String },
    #[command(arg_required_else_help = true)]
    Bulk {
        sku: String,
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        qty: u32,
    },
}

#[derive(Debug, Args)]
struct InventoryArgs {
    sku: String,
}

#[derive(Debug, Args)]
struct ShippingArgs {
    tracking_no: String,
}

const BASE_URL_ENV: &str = "COMMERCE_MOCK_BASE_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_BASE_MS: u64 = 500;
const REQUEST_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Display, Error)]
enum ClientError {
    #[display("request to {url} timed out")]
    Timeout { url: String },
    #[display("failed to connect to {url}")]
    Connection { url: String },
    #[display("server returned status {status}")]
    Status { status: u16 },
    #[display("failed to decode response body")]
    Decode,
}

/// unified wrapper owning timeout and retry for every call; transient
/// failures (connect errors, timeouts, 500/502/503/504) are retried with
/// exponential backoff and jitter
async fn http_call(
    client: &Client,
    method: Method,
    url: &str,
    payload: Option<&Value>,
) -> Result<Value, ClientError> {
    const RETRYABLE: [StatusCode; 4] = [
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::BAD_GATEWAY,
        StatusCode::SERVICE_UNAVAILABLE,
        StatusCode::GATEWAY_TIMEOUT,
    ];

    let mut last_err = ClientError::Connection { url: url.to_string() };
    for attempt in 0..MAX_ATTEMPTS {
        if attempt > 0 {
            let jitter = rand::thread_rng().gen_range(0..=100);
            let backoff = BACKOFF_BASE_MS * (1 << (attempt - 1)) + jitter;
            time::sleep(Duration::from_millis(backoff)).await;
        }

        let mut req = client
            .request(method.clone(), url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS));
        if let Some(body) = payload {
            req = req.json(body);
        }

        match req.send().await {
            Ok(res) => {
                let status = res.status();
                if RETRYABLE.contains(&status) {
                    last_err = ClientError::Status { status: status.as_u16() };
                    continue;
                }
                if !status.is_success() {
                    return Err(ClientError::Status { status: status.as_u16() });
                }
                return res.json::<Value>().await.map_err(|_| ClientError::Decode);
            }
            Err(e) if e.is_timeout() => {
                last_err = ClientError::Timeout { url: url.to_string() };
            }
            Err(_) => {
                last_err = ClientError::Connection { url: url.to_string() };
            }
        }
    }
    Err(last_err)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let base = env::var(BASE_URL_ENV).unwrap_or(DEFAULT_BASE_URL.to_string());
    let client = Client::new();

    let response = match args.command {
        Commands::Order(OrderArgs { user_id }) => {
            println!("fetching order for user={}", user_id);
            http_call(&client, Method::GET, &format!("{base}/orders/{user_id}"), None).await?
        }
        Commands::Catalog(catalog) => match catalog.command {
            CatalogCmds::Product { sku } => {
                http_call(&client, Method::GET, &format!("{base}/catalog/product/{sku}"), None)
                    .await?
            }
            CatalogCmds::Search { query } => {
                http_call(
                    &client,
                    Method::GET,
                    &format!("{base}/catalog/search?q={query}"),
                    None,
                )
                .await?
            }
        },
        Commands::Oms(oms) => match oms.command {
            OmsCmds::Get { order_id } => {
                http_call(&client, Method::GET, &format!("{base}/oms/order/{order_id}"), None)
                    .await?
            }
            OmsCmds::Cancel { order_id } => {
                println!("requesting cancellation of order={}", order_id);
                http_call(
                    &client,
                    Method::POST,
                    &format!("{base}/oms/order/{order_id}/cancel"),
                    None,
                )
                .await?
            }
            OmsCmds::Items { order_id } => {
                http_call(
                    &client,
                    Method::GET,
                    &format!("{base}/oms/order/{order_id}/items"),
                    None,
                )
                .await?
            }
            OmsCmds::Exceptions { order_id } => {
                http_call(
                    &client,
                    Method::GET,
                    &format!("{base}/oms/order/{order_id}/exceptions"),
                    None,
                )
                .await?
            }
        },
        Commands::Pricing(pricing) => match pricing.command {
            PricingCmds::Contract { customer_id, sku } => {
                http_call(
                    &client,
                    Method::GET,
                    &format!("{base}/pricing/contract/{customer_id}/{sku}"),
                    None,
                )
                .await?
            }
            PricingCmds::Bulk { sku, qty } => {
                http_call(
                    &client,
                    Method::GET,
                    &format!("{base}/pricing/bulk?sku={sku}&qty={qty}"),
                    None,
                )
                .await?
            }
        },
        Commands::Inventory(InventoryArgs { sku }) => {
            http_call(&client, Method::GET, &format!("{base}/inventory/{sku}"), None).await?
        }
        Commands::Shipping(ShippingArgs { tracking_no }) => {
            http_call(&client, Method::GET, &format!("{base}/shipping/eta/{tracking_no}"), None)
                .await?
        }
        Commands::Health => {
            http_call(&client, Method::GET, &format!("{base}/health"), None).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
