/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binfut-adapter tests

use std::sync::Arc;

use binfut_adapter::{
    ClientConfig, Credentials, DiagnosticSink, FuturesClient, NullSink,
};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server with the given sink
pub fn test_client(server: &MockServer, sink: Arc<dyn DiagnosticSink>) -> FuturesClient {
    let credentials =
        Credentials::new(TEST_API_KEY, TEST_API_SECRET).expect("test credentials are non-empty");
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    FuturesClient::new(credentials, config, sink).expect("client builds against mock server")
}

/// Build a client with a discarding sink
#[allow(dead_code)]
pub fn quiet_test_client(server: &MockServer) -> FuturesClient {
    test_client(server, Arc::new(NullSink))
}
