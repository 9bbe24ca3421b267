use std::path::Path;
use std::{env, io, sync};

use lettre::transport::stub::AsyncStubTransport;

use uco_site::configuration::Settings;
use uco_site::email_client::EmailClient;
use uco_site::startup::Application;
use uco_site::telemetry::{get_subscriber, init_subscriber};

/// Ensure the tracing stack is initialized only once
static TRACING: sync::LazyLock<()> = sync::LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::sink,
        ));
    };
});

/// How the mail relay behaves for a test application
pub enum Relay {
    Accepting,
    Failing,
    NoCredential,
}

/// Test application data
pub struct TestApp {
    pub address: String,
    pub mail_relay: AsyncStubTransport,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up a test application whose mail relay accepts every email
    pub async fn spawn() -> Self {
        Self::spawn_with(Relay::Accepting).await
    }

    /// Spin up a test application and return its data
    pub async fn spawn_with(relay: Relay) -> Self {
        // Initialize logging
        sync::LazyLock::force(&TRACING);

        // Get settings and modify them for testing
        let config = {
            let mut c = Settings::get_config().expect("Failed to read configuration");
            // Listen on a random TCP port
            c.application.app_port = 0;
            // Serve the repository assets wherever the tests run from
            c.application.static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
            c
        };

        // Stand in for the SMTP relay
        let mailbox = config
            .email_client
            .mailbox()
            .expect("Invalid mailbox address");
        let mail_relay = match relay {
            Relay::Failing => AsyncStubTransport::new_error(),
            Relay::Accepting | Relay::NoCredential => AsyncStubTransport::new_ok(),
        };
        let email_client = match relay {
            Relay::NoCredential => EmailClient::without_credential(mailbox),
            Relay::Accepting | Relay::Failing => EmailClient::with_stub(mailbox, mail_relay.clone()),
        };

        // Build the application and get its address
        let app = Application::build_with_email_client(config, email_client)
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        // Run the application and return its data
        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run_until_stopped());
        Self {
            address,
            mail_relay,
            api_client: reqwest::Client::new(),
        }
    }

    /// GET a path of the application
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{path}", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST a JSON body to the contact endpoint
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/api/contact", body).await
    }

    /// POST a JSON body to the newsletter endpoint
    pub async fn post_newsletter(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/api/newsletter", body).await
    }

    /// POST a JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{path}", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// POST a raw body with the given content type
    pub async fn post_raw(
        &self,
        path: &str,
        content_type: &str,
        body: &'static str,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}{path}", &self.address))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Raw emails received by the stand-in relay
    pub async fn sent_emails(&self) -> Vec<String> {
        self.mail_relay
            .messages()
            .await
            .into_iter()
            .map(|(_, raw)| raw)
            .collect()
    }
}

/// Assert: response is a JSON submission answer with the given status and outcome
pub async fn assert_submission_response(
    response: reqwest::Response,
    status: u16,
    success: bool,
    message: &str,
) {
    assert_eq!(response.status().as_u16(), status);
    let body: serde_json::Value = response.json().await.expect("Response is not JSON");
    assert_eq!(
        body,
        serde_json::json!({ "success": success, "message": message })
    );
}
