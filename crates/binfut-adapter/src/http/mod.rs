/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Signed HTTP requests and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod order;
pub mod query;
pub mod signature;

pub use error::{AdapterError, Result};
pub use query::QueryParams;
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, FuturesClient};
