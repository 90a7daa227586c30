//! Activation notifier

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::communication::mailer::Mailer;

use super::{ActivationRequest, MessageCatalog, RenderedMessage, SendError, SenderConfig};

/// Sends account-activation notices
#[async_trait]
pub trait ActivationNotifier: Clone + Send + Sync + 'static {
    /// Renders the activation notice for `request` and hands it to the mail
    /// transport.
    ///
    /// # Returns
    /// - [`Ok`] once the transport has accepted the message for delivery.
    /// - [`Err`] containing a [`SendError`] otherwise. The failure has already
    ///   been logged; callers are free to carry on without it.
    async fn send_activation_notice(&self, request: &ActivationRequest) -> Result<(), SendError>;
}

/// Activation notifier implementation
pub struct ActivationNotifierImpl<C, M>
where
    C: MessageCatalog,
    M: Mailer,
{
    config: Arc<SenderConfig>,
    catalog: Arc<C>,
    mailer: Arc<M>,
}

impl<C, M> ActivationNotifierImpl<C, M>
where
    C: MessageCatalog,
    M: Mailer,
{
    /// Creates a new activation notifier.
    pub fn new(config: SenderConfig, catalog: Arc<C>, mailer: Arc<M>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            mailer,
        }
    }

    /// Renders the activation notice for `request` without sending it.
    pub fn render(&self, request: &ActivationRequest) -> Result<RenderedMessage, SendError> {
        RenderedMessage::render(self.catalog.as_ref(), &self.config, request)
    }

    async fn deliver(&self, request: &ActivationRequest) -> Result<(), SendError> {
        let message = self
            .render(request)?
            .into_message(&self.config.from_address, &request.recipient_address);

        self.mailer.send_email(&message).await?;

        Ok(())
    }
}

impl<C, M> Clone for ActivationNotifierImpl<C, M>
where
    C: MessageCatalog,
    M: Mailer,
{
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            catalog: Arc::clone(&self.catalog),
            mailer: Arc::clone(&self.mailer),
        }
    }
}

impl<C, M> fmt::Debug for ActivationNotifierImpl<C, M>
where
    C: MessageCatalog,
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationNotifierImpl")
            .field("config", &self.config)
            .field("catalog", &"MessageCatalog")
            .field("mailer", &"Mailer")
            .finish()
    }
}

#[async_trait]
impl<C, M> ActivationNotifier for ActivationNotifierImpl<C, M>
where
    C: MessageCatalog,
    M: Mailer,
{
    async fn send_activation_notice(&self, request: &ActivationRequest) -> Result<(), SendError> {
        let result = self.deliver(request).await;

        if let Err(err) = &result {
            warn!(
                kind = err.kind(),
                error = %err,
                recipient = %request.recipient_address,
                "Error sending activation e-mail"
            );
        }

        result
    }
}
