//! Activation notice: request, sender configuration and rendered content

use askama_escape::{escape, Html};

use crate::domain::communication::{mailer::Message, EmailAddress};

use super::{Locale, MessageCatalog, SendError};

/// Catalog key of the subject line
pub const SUBJECT_KEY: &str = "mail.subject";

/// Catalog key of the plain text body
pub const TEXT_BODY_KEY: &str = "mail.body.txt";

/// Catalog key of the HTML body
pub const HTML_BODY_KEY: &str = "mail.body.html";

/// Process-wide sender configuration, built once at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SenderConfig {
    /// The address activation notices are sent from
    pub from_address: EmailAddress,

    /// The base URL of the application, substituted as `{0}` in the bodies
    pub host_base_url: String,
}

/// A request to send one activation notice
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationRequest {
    /// The recipient mailbox
    pub recipient_address: String,

    /// The activation token, substituted as `{1}` in the bodies
    pub activation_key: String,

    /// The locale to render the notice in
    pub locale: Locale,
}

impl ActivationRequest {
    /// Creates a new `ActivationRequest`
    pub fn new(
        recipient_address: impl Into<String>,
        activation_key: impl Into<String>,
        locale: Locale,
    ) -> Self {
        Self {
            recipient_address: recipient_address.into(),
            activation_key: activation_key.into(),
            locale,
        }
    }
}

/// The localized content of an activation notice
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    /// The subject line
    pub subject: String,

    /// The plain text body
    pub text_body: String,

    /// The HTML body, with CSS inlined
    pub html_body: String,
}

impl RenderedMessage {
    /// Renders the activation notice for `request`.
    ///
    /// The text body receives the host base URL and activation key verbatim,
    /// the HTML body receives them HTML-escaped.
    pub fn render<C>(
        catalog: &C,
        config: &SenderConfig,
        request: &ActivationRequest,
    ) -> Result<Self, SendError>
    where
        C: MessageCatalog + ?Sized,
    {
        let locale = &request.locale;
        let text_args = [
            config.host_base_url.clone(),
            request.activation_key.clone(),
        ];
        let html_args = text_args
            .iter()
            .map(|arg| escape(arg, Html).to_string())
            .collect::<Vec<_>>();

        let subject = catalog.resolve(SUBJECT_KEY, &[], locale)?;
        let text_body = catalog.resolve(TEXT_BODY_KEY, &text_args, locale)?;
        let html_body = css_inline::inline(&catalog.resolve(HTML_BODY_KEY, &html_args, locale)?)?;

        Ok(Self {
            subject,
            text_body,
            html_body,
        })
    }

    /// Builds the message to hand to the mailer
    pub fn into_message(self, from: &EmailAddress, to: &str) -> Message {
        Message {
            from: from.clone(),
            to: to.to_string(),
            subject: self.subject,
            plain_body: self.text_body,
            html_body: self.html_body,
        }
    }
}
