use graph_models::GraphClient;

pub const TEST_TOKEN: &str = "test-token";

/// Set up a test client pointed at a mock server.
#[allow(dead_code)]
pub fn setup_test_client(mock_server_uri: &str) -> GraphClient {
    init_logging();
    GraphClient::builder()
        .base_url(format!("{mock_server_uri}/beta"))
        .access_token(TEST_TOKEN)
        .build()
        .expect("Failed to build GraphClient")
}

/// Installs a logger once per test binary; honours `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
