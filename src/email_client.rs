use std::{fmt, time};

use lettre::address::AddressError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::stub::AsyncStubTransport;
use lettre::transport::{smtp, stub};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, SecretString};

use crate::utils::error_chain_fmt;

/// Email delivery error type
#[derive(thiserror::Error)]
pub enum MailError {
    #[error("No credential is configured for the outbound mailbox")]
    MissingCredential,
    #[error("Invalid mailbox address")]
    InvalidAddress(#[from] AddressError),
    #[error("Failed to build the email message")]
    Build(#[from] lettre::error::Error),
    #[error("Failed to send email through the mail relay")]
    Relay(#[from] smtp::Error),
    #[error("Failed to send email through the stub transport")]
    Stub(#[from] stub::Error),
}

impl fmt::Debug for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Ways an email can leave the process
enum Transport {
    /// Implicit TLS session with an authenticated mail relay
    Smtps(AsyncSmtpTransport<Tokio1Executor>),
    /// In-memory transport, see [`EmailClient::with_stub`]
    Stub(AsyncStubTransport),
    /// No credential was configured
    Unauthenticated,
}

/// Email client data
///
/// Every email goes from the configured mailbox to that same mailbox.
pub struct EmailClient {
    transport: Transport,
    mailbox: Mailbox,
}

impl EmailClient {
    /// Build a client for a relay that expects TLS from the first byte
    pub fn smtps(
        host: &str,
        port: u16,
        mailbox: Mailbox,
        password: SecretString,
        timeout: time::Duration,
    ) -> Result<Self, MailError> {
        let credentials = Credentials::new(
            mailbox.email.to_string(),
            password.expose_secret().to_owned(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
            .port(port)
            .credentials(credentials)
            .timeout(Some(timeout))
            .build();

        Ok(Self {
            transport: Transport::Smtps(transport),
            mailbox,
        })
    }

    /// Build a client whose every send fails with [`MailError::MissingCredential`]
    pub const fn without_credential(mailbox: Mailbox) -> Self {
        Self {
            transport: Transport::Unauthenticated,
            mailbox,
        }
    }

    /// Build a client that records emails in memory instead of sending them
    pub const fn with_stub(mailbox: Mailbox, transport: AsyncStubTransport) -> Self {
        Self {
            transport: Transport::Stub(transport),
            mailbox,
        }
    }

    /// Send a plain-text email to the configured mailbox
    ///
    /// A single attempt is made, failures are returned to the caller.
    #[tracing::instrument(name = "Sending email", skip(self, text_body))]
    pub async fn send_email(&self, subject: &str, text_body: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.mailbox.clone())
            .to(self.mailbox.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(text_body.to_owned())?;

        match &self.transport {
            Transport::Smtps(transport) => {
                transport.send(message).await?;
            }
            Transport::Stub(transport) => {
                transport.send(message).await?;
            }
            Transport::Unauthenticated => return Err(MailError::MissingCredential),
        }

        tracing::info!("Email sent successfully!");
        Ok(())
    }
}
