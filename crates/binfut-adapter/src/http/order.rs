/*
[INPUT]:  Validated order intents
[OUTPUT]: Raw JSON order responses from the exchange
[POS]:    HTTP layer - order placement endpoint
[UPDATE]: When the order endpoint path or intent translation changes
*/

use reqwest::Method;
use serde_json::Value;
use tracing::info;

use crate::http::{FuturesClient, Result};
use crate::types::OrderIntent;

const ORDER_PATH: &str = "/fapi/v1/order";

impl FuturesClient {
    /// Place a futures order.
    ///
    /// POST /fapi/v1/order, signed. The intent is validated and translated
    /// into wire parameters before any network activity; an invalid intent
    /// never produces a request.
    pub async fn place_order(&self, intent: &OrderIntent) -> Result<Value> {
        let params = intent.to_params()?;
        info!(
            order_type = intent.type_name(),
            symbol = intent.symbol(),
            "placing order"
        );
        self.signed_send(Method::POST, ORDER_PATH, params).await
    }
}
