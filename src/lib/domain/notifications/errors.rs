//! Notification errors

use css_inline::InlineError;
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::MailerError;

use super::CatalogError;

/// Errors that can occur while rendering or sending a notification
#[derive(Debug, Error)]
pub enum SendError {
    /// The sender or recipient address was rejected
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The mail transport could not be reached
    #[error("mail transport unavailable: {0}")]
    TransportUnavailable(anyhow::Error),

    /// The mail server refused the message
    #[error("message rejected by mail server: {0}")]
    ProtocolRejection(anyhow::Error),

    /// A template needed for the message is not in the catalog
    #[error(transparent)]
    MissingMessage(CatalogError),

    /// The HTML body could not be prepared for sending
    #[error("could not render message: {0}")]
    Rendering(String),
}

impl SendError {
    /// A stable name for the kind of failure, used in log entries
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAddress(_) => "invalid_address",
            Self::TransportUnavailable(_) => "transport_unavailable",
            Self::ProtocolRejection(_) => "protocol_rejection",
            Self::MissingMessage(_) => "missing_message",
            Self::Rendering(_) => "rendering",
        }
    }
}

impl From<MailerError> for SendError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> SendError");

        match err {
            MailerError::InvalidAddress(e) => SendError::InvalidAddress(e),
            MailerError::TransportUnavailable(e) => SendError::TransportUnavailable(e),
            MailerError::ProtocolRejection(e) => SendError::ProtocolRejection(e),
        }
    }
}

impl From<CatalogError> for SendError {
    fn from(err: CatalogError) -> Self {
        debug!("CatalogError -> SendError");

        SendError::MissingMessage(err)
    }
}

impl From<InlineError> for SendError {
    fn from(err: InlineError) -> Self {
        debug!("InlineError -> SendError");

        SendError::Rendering(err.to_string())
    }
}
