#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends a single account-activation e-mail

use std::{process::ExitCode, sync::Arc};

use activation_mailer::{
    domain::notifications::{
        ActivationNotifier, ActivationNotifierImpl, ActivationRequest, Locale,
    },
    infrastructure::{
        config::NotifierConfig,
        email::smtp::{SMTPConfig, SMTPMailer},
    },
};
use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The recipient mailbox
    #[clap(long)]
    pub to: String,

    /// The activation key to include in the link
    #[clap(long)]
    pub activation_key: String,

    /// The locale to render the e-mail in
    #[clap(long, default_value = "en")]
    pub locale: String,

    /// The notifier configuration
    #[clap(flatten)]
    pub notifier: NotifierConfig,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let notifier = ActivationNotifierImpl::new(
        args.notifier.sender_config()?,
        Arc::new(args.notifier.catalog()?),
        Arc::new(SMTPMailer::new(args.smtp)),
    );

    let request = ActivationRequest::new(args.to, args.activation_key, Locale::new(&args.locale));

    match notifier.send_activation_notice(&request).await {
        Ok(()) => {
            info!(recipient = %request.recipient_address, "activation e-mail accepted for delivery");

            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
