//! Localized message catalog

#[cfg(test)]
use mockall::mock;
use thiserror::Error;

use super::Locale;

/// Errors returned by a [`MessageCatalog`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No template is registered under the key for the locale or any fallback
    #[error("no message found under key '{key}' for locale '{locale}'")]
    MissingMessage {
        /// The requested key
        key: String,

        /// The requested locale
        locale: Locale,
    },
}

/// A locale-keyed lookup of human-readable templates
pub trait MessageCatalog: Send + Sync + 'static {
    /// Resolves the template stored under `key` for `locale` and substitutes
    /// `args` into its positional placeholders.
    ///
    /// # Arguments
    /// * `key` - The message key, e.g. `mail.subject`.
    /// * `args` - Values for `{0}`, `{1}`, ... in the template.
    /// * `locale` - The locale to resolve the template for.
    fn resolve(&self, key: &str, args: &[String], locale: &Locale)
        -> Result<String, CatalogError>;
}

#[cfg(test)]
mock! {
    pub MessageCatalog {}

    impl MessageCatalog for MessageCatalog {
        fn resolve(&self, key: &str, args: &[String], locale: &Locale) -> Result<String, CatalogError>;
    }
}

/// Substitutes positional arguments into a message template.
///
/// With no arguments the template is returned as-is. Otherwise `{n}` is
/// replaced by `args[n]`, `''` produces a single quote and anything between
/// single quotes is copied literally. Placeholders that are not a valid
/// argument index are kept verbatim.
pub fn format_message(template: &str, args: &[String]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        match c {
            '\'' if chars.peek() == Some(&'\'') => {
                chars.next();
                out.push('\'');
            }
            '\'' => quoted = !quoted,
            '{' if !quoted => {
                let mut placeholder = String::new();
                let mut closed = false;

                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    placeholder.push(next);
                }

                let arg = placeholder
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index));

                match arg {
                    Some(arg) if closed => out.push_str(arg),
                    _ => {
                        out.push('{');
                        out.push_str(&placeholder);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}
