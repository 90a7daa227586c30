//! Mailer errors

use lettre::{address::AddressError, error::Error as MessageError};
use thiserror::Error;
use tracing::debug;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// A sender or recipient address could not be used
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// The mail server could not be reached or the session failed
    #[error("mail transport unavailable: {0}")]
    TransportUnavailable(anyhow::Error),

    /// The mail server answered with an error response
    #[error("message rejected by mail server: {0}")]
    ProtocolRejection(anyhow::Error),
}

impl From<AddressError> for MailerError {
    fn from(err: AddressError) -> Self {
        debug!("AddressError -> MailerError");

        MailerError::InvalidAddress(err.to_string())
    }
}

impl From<MessageError> for MailerError {
    fn from(err: MessageError) -> Self {
        debug!("lettre::error::Error -> MailerError");

        MailerError::InvalidAddress(err.to_string())
    }
}
