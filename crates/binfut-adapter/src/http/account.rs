/*
[INPUT]:  Signed query parameters (timestamp, recvWindow only)
[OUTPUT]: Raw JSON account snapshot
[POS]:    HTTP layer - account query endpoint
[UPDATE]: When the account endpoint path or parameters change
*/

use reqwest::Method;
use serde_json::Value;
use tracing::info;

use crate::http::{FuturesClient, QueryParams, Result};

const ACCOUNT_PATH: &str = "/fapi/v2/account";

impl FuturesClient {
    /// Fetch the futures account snapshot.
    ///
    /// GET /fapi/v2/account, signed; carries no parameters beyond the
    /// injected `timestamp`, `recvWindow`, and `signature`.
    pub async fn account_info(&self) -> Result<Value> {
        info!("fetching account info");
        self.signed_send(Method::GET, ACCOUNT_PATH, QueryParams::new())
            .await
    }
}
