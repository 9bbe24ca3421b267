use std::io;

use uco_site::configuration::Settings;
use uco_site::startup::Application;
use uco_site::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("uco_site".into(), "info".into(), io::stdout);
    init_subscriber(subscriber);

    // Retrieve settings
    let config = Settings::get_config()?;

    // Run the application until it is stopped
    Application::build(config)?.run_until_stopped().await?;

    Ok(())
}
