//! SMTP email service implementation

use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use clap::{ArgAction, Parser};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
        Error as SmtpError,
    },
    AsyncSmtpTransport, AsyncTransport, Message as Email, Tokio1Executor,
};

use crate::domain::communication::mailer::{Mailer, MailerError, Message};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long = "smtp-host", env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long = "smtp-port", env = "SMTP_PORT", default_value = "587")]
    pub port: u16,

    /// The SMTP username
    #[clap(long = "smtp-user", env = "SMTP_USER")]
    pub username: Option<String>,

    /// The SMTP password
    #[clap(long = "smtp-password", env = "SMTP_PASSWORD")]
    pub password: Option<String>,

    /// Verify the TLS certificate
    #[clap(
        long = "smtp-verify-tls",
        env = "SMTP_VERIFY_TLS",
        default_value = "true",
        action = ArgAction::Set
    )]
    pub verify_tls: bool,

    /// Upgrade the connection with STARTTLS; when disabled, TLS is used from the start
    #[clap(
        long = "smtp-starttls",
        env = "SMTP_STARTTLS",
        default_value = "true",
        action = ArgAction::Set
    )]
    pub starttls: bool,

    /// Seconds to wait on the server before giving up
    #[clap(long = "smtp-timeout-secs", env = "SMTP_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SMTPConfig) -> Self {
        Self { config }
    }

    /// Builds a transport for a single send; without connection pooling each send opens its
    /// own connection and closes it with `QUIT` before returning
    pub fn mailer(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let parameters = TlsParameters::builder(self.config.host.to_string())
            .dangerous_accept_invalid_certs(!self.config.verify_tls)
            .build()
            .map_err(classify)?;

        let tls = if self.config.starttls {
            Tls::Required(parameters)
        } else {
            Tls::Wrapper(parameters)
        };

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
                .port(self.config.port)
                .tls(tls)
                .timeout(Some(Duration::from_secs(self.config.timeout_secs)));

        if let Some(username) = &self.config.username {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                self.config.password.clone().unwrap_or_default(),
            ));
        }

        Ok(builder.build())
    }
}

/// Builds the `multipart/alternative` message, plain text first
fn build_email(message: &Message) -> Result<Email, MailerError> {
    let from: Mailbox = message.from.as_str().parse()?;
    let to: Mailbox = message.to.parse()?;

    Ok(Email::builder()
        .from(from)
        .to(to)
        .subject(message.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            message.plain_body.clone(),
            message.html_body.clone(),
        ))?)
}

/// Server replies become protocol rejections, everything else means the
/// server could not be talked to
fn classify(err: SmtpError) -> MailerError {
    if err.is_permanent() || err.is_transient() {
        MailerError::ProtocolRejection(anyhow!(err))
    } else {
        MailerError::TransportUnavailable(anyhow!(err))
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send_email(&self, message: &Message) -> Result<(), MailerError> {
        let email = build_email(message)?;

        match self.mailer()?.send(email).await {
            Ok(_) => Ok(()),
            Err(e) => Err(classify(e)),
        }
    }
}
