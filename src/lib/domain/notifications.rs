//! Transactional notifications: the activation notice and its collaborators.

mod activation;
mod catalog;
mod errors;
mod locale;
mod notifier;

pub use activation::{
    ActivationRequest, RenderedMessage, SenderConfig, HTML_BODY_KEY, SUBJECT_KEY, TEXT_BODY_KEY,
};
pub use catalog::{format_message, CatalogError, MessageCatalog};
pub use errors::SendError;
pub use locale::Locale;
pub use notifier::{ActivationNotifier, ActivationNotifierImpl};
