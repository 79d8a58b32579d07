#![doc = include_str!("../README.md")]

use extranet_core::ClientSettings;

/// Helper for testing identity provider HTTP calls using wiremock.
///
/// Warning: when using `Mock::expect` ensure the returned server is not
/// dropped before the test completes.
pub async fn start_provider_mock(
    mocks: Vec<wiremock::Mock>,
) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        provider_url: server.uri(),
        client_id: "test-client-id".to_string(),
        redirect_url: "https://extranet.example.com/".to_string(),
        user_agent: "test-agent".to_string(),
    };

    (server, settings)
}
