//! Email message

use crate::domain::communication::EmailAddress;

/// A two-part (plain text + HTML) email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The sender of the email
    pub from: EmailAddress,

    /// The recipient of the email, validated by the transport at send time
    pub to: String,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub plain_body: String,

    /// The HTML body of the email
    pub html_body: String,
}
