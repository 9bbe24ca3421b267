use std::{io, net};

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::{
    contact, favicon, features, health_check, home, newsletter, performance, static_files,
    StaticRoot,
};

/// Application
pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Build an application based on settings
    pub fn build(config: Settings) -> anyhow::Result<Self> {
        // Build the email client
        let email_client = config.email_client.clone().client()?;

        // Run the HTTP server and return its data
        Self::build_with_email_client(config, email_client)
    }

    /// Build an application based on settings and an email client
    pub fn build_with_email_client(
        config: Settings,
        email_client: EmailClient,
    ) -> anyhow::Result<Self> {
        let listener = net::TcpListener::bind(format!(
            "{}:{}",
            config.application.app_host, config.application.app_port
        ))?;
        let port = listener.local_addr()?.port();
        let server = run_server(
            listener,
            email_client,
            StaticRoot(config.application.static_dir),
        )?;
        tracing::info!("Listening on port {port}");
        Ok(Self { server, port })
    }

    /// Get application port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Run application until it is stopped
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Run the HTTP server
pub fn run_server(
    listener: net::TcpListener,
    email_client: EmailClient,
    static_root: StaticRoot,
) -> io::Result<Server> {
    // Prepare data to be added the application context
    let email_client = web::Data::new(email_client);
    let static_root = web::Data::new(static_root);

    // Start the HTTP server
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/favicon.ico", web::get().to(favicon))
            .route("/static/{path:.*}", web::get().to(static_files))
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/features", web::get().to(features))
                    .route("/performance", web::get().to(performance))
                    .route("/contact", web::post().to(contact))
                    .route("/newsletter", web::post().to(newsletter)),
            )
            .app_data(email_client.clone())
            .app_data(static_root.clone())
    })
    .listen(listener)?
    .run())
}
