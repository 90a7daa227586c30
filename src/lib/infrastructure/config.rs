//! Notifier configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    domain::{
        communication::{EmailAddress, EmailAddressError},
        notifications::{Locale, SenderConfig},
    },
    infrastructure::i18n::StaticCatalog,
};

/// Configuration for sending activation notices
#[derive(Clone, Debug, Parser)]
pub struct NotifierConfig {
    /// The address activation notices are sent from
    #[clap(long, env = "MAIL_FROM_ADDRESS")]
    pub from_address: String,

    /// The base URL of the application, used in activation links
    #[clap(long, env = "HOST_BASE_URL")]
    pub host_base_url: String,

    /// Directory of `<locale>.json` message files; the bundled messages are used when unset
    #[clap(long, env = "MESSAGES_DIR")]
    pub messages_dir: Option<PathBuf>,

    /// Locale used when a message is missing for the requested one
    #[clap(long, env = "DEFAULT_LOCALE", default_value = "en")]
    pub default_locale: String,
}

impl NotifierConfig {
    /// Validates the sender address and builds the [`SenderConfig`]
    pub fn sender_config(&self) -> Result<SenderConfig, EmailAddressError> {
        Ok(SenderConfig {
            from_address: EmailAddress::new(&self.from_address)?,
            host_base_url: self.host_base_url.clone(),
        })
    }

    /// Loads the message catalog from `messages_dir`, or the bundled one
    pub fn catalog(&self) -> Result<StaticCatalog> {
        let default_locale = Locale::new(&self.default_locale);

        match &self.messages_dir {
            Some(dir) => StaticCatalog::from_dir(dir, default_locale),
            None => StaticCatalog::builtin(default_locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::notifications::{MessageCatalog, SUBJECT_KEY};

    use super::*;

    fn config() -> NotifierConfig {
        NotifierConfig {
            from_address: "noreply@example.com".to_string(),
            host_base_url: "https://example.com".to_string(),
            messages_dir: None,
            default_locale: "en".to_string(),
        }
    }

    #[test]
    fn test_sender_config() -> TestResult {
        let sender = config().sender_config()?;

        assert_eq!(sender.from_address.as_str(), "noreply@example.com");
        assert_eq!(sender.host_base_url, "https://example.com");

        Ok(())
    }

    #[test]
    fn test_sender_config_rejects_invalid_from_address() {
        let config = NotifierConfig {
            from_address: "noreply".to_string(),
            ..config()
        };

        assert_eq!(
            config.sender_config(),
            Err(EmailAddressError::InvalidEmailAddress)
        );
    }

    #[test]
    fn test_catalog_defaults_to_bundled_messages() -> TestResult {
        let catalog = config().catalog()?;

        assert_eq!(
            catalog.resolve(SUBJECT_KEY, &[], &Locale::new("en"))?,
            "Activate your account"
        );

        Ok(())
    }

    #[test]
    fn test_bundled_catalog_honours_default_locale() -> TestResult {
        let config = NotifierConfig {
            default_locale: "de".to_string(),
            ..config()
        };

        assert_eq!(
            config.catalog()?.resolve(SUBJECT_KEY, &[], &Locale::new("fr"))?,
            "Aktivieren Sie Ihr Konto"
        );

        Ok(())
    }

    #[test]
    fn test_parse_from_args() {
        let config = NotifierConfig::parse_from([
            "send-activation",
            "--from-address",
            "noreply@example.com",
            "--host-base-url",
            "https://example.com",
            "--default-locale",
            "de",
        ]);

        assert_eq!(config.from_address, "noreply@example.com");
        assert_eq!(config.host_base_url, "https://example.com");
        assert_eq!(config.default_locale, "de");
    }
}
