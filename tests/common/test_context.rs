use crate::common::mock_server::FlutterwaveMockServer;
use flutterwave_rust::{client::Config, FlutterwaveClient};
use rand::{distributions::Alphanumeric, Rng};
use wiremock::Request;

pub struct TestContext {
    pub client: FlutterwaveClient,
    pub secret_key: String,
    mock_server: FlutterwaveMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new random secret key for this specific test
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let secret_key = format!("FLWSECK_TEST-{}-X", suffix);

        let mock_server = FlutterwaveMockServer::start(&secret_key).await;

        // Configure a new FlutterwaveClient to point to the mock server
        let client = FlutterwaveClient::new(Config::new(
            secret_key.clone(),
            reqwest::Client::new(),
            mock_server.url(),
        ))
        .unwrap();

        Self {
            client,
            secret_key,
            mock_server,
        }
    }

    pub fn api_url(&self) -> String {
        self.mock_server.url()
    }

    pub async fn received_requests(&self) -> Vec<Request> {
        self.mock_server.received_requests().await
    }
}
