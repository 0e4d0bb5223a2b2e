/*
[INPUT]:  Credential environment variables and a hardcoded order intent
[OUTPUT]: Order placement against the futures testnet
[POS]:    Examples - signed order placement
[UPDATE]: When the order API changes
*/

use std::sync::Arc;

use binfut_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: place a small market order on the testnet.
///
/// Requires BINANCE_API_KEY and BINANCE_API_SECRET in the environment.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let api_key = std::env::var("BINANCE_API_KEY").unwrap_or_default();
    let api_secret = std::env::var("BINANCE_API_SECRET").unwrap_or_default();

    let credentials = match Credentials::new(api_key, api_secret) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Missing credentials: {}", e);
            return;
        }
    };

    let client = match FuturesClient::new(credentials, ClientConfig::default(), Arc::new(NullSink))
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Signed HTTP client created");

    let intent = OrderIntent::Market {
        symbol: "BTCUSDT".to_string(),
        side: Side::Buy,
        quantity: Decimal::from_str("0.001").unwrap_or_default(),
        reduce_only: false,
    };
    println!("Placing: {:?}", intent);

    match client.place_order(&intent).await {
        Ok(response) => {
            let summary = OrderSummary::from_response(&response);
            for (name, value) in summary.fields() {
                println!("{}: {}", name, value);
            }
        }
        Err(e) => eprintln!("Order failed: {}", e),
    }
}
