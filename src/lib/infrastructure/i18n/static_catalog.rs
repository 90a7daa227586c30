//! In-memory message catalog backed by JSON files

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

use crate::domain::notifications::{format_message, CatalogError, Locale, MessageCatalog};

const EMBEDDED: [(&str, &str); 2] = [
    ("en", include_str!("../../../../messages/en.json")),
    ("de", include_str!("../../../../messages/de.json")),
];

/// A `(locale, key) -> template` catalog.
///
/// Lookups fall back from the requested locale to its language and then to
/// the catalog's default locale.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    default_locale: Locale,
    messages: HashMap<Locale, HashMap<String, String>>,
}

impl StaticCatalog {
    /// Creates an empty catalog
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            messages: HashMap::new(),
        }
    }

    /// Creates a catalog holding the bundled `en` and `de` messages
    pub fn builtin(default_locale: Locale) -> Result<Self> {
        let mut catalog = Self::new(default_locale);

        for (locale, json) in EMBEDDED {
            catalog
                .add_json(Locale::new(locale), json)
                .with_context(|| format!("failed to load bundled messages for '{locale}'"))?;
        }

        Ok(catalog)
    }

    /// Loads every `<locale>.json` file in `dir`
    pub fn from_dir(dir: impl AsRef<Path>, default_locale: Locale) -> Result<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::new(default_locale);

        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read message directory {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;

            catalog
                .add_json(Locale::new(locale), &json)
                .with_context(|| format!("failed to parse {}", path.display()))?;

            debug!(locale, path = %path.display(), "loaded messages");
        }

        Ok(catalog)
    }

    /// Adds the templates from a flat JSON object of `key: template`
    pub fn add_json(&mut self, locale: Locale, json: &str) -> Result<()> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;

        self.messages.entry(locale).or_default().extend(messages);

        Ok(())
    }

    /// Adds a single template
    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, template: impl Into<String>) {
        self.messages
            .entry(locale)
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Builder-style [`StaticCatalog::insert`]
    pub fn with_message(
        mut self,
        locale: Locale,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(locale, key, template);
        self
    }

    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        let find = |locale: &Locale| {
            self.messages
                .get(locale)
                .and_then(|messages| messages.get(key))
                .map(String::as_str)
        };

        find(locale)
            .or_else(|| locale.parent().and_then(|parent| find(&parent)))
            .or_else(|| find(&self.default_locale))
    }
}

impl MessageCatalog for StaticCatalog {
    fn resolve(
        &self,
        key: &str,
        args: &[String],
        locale: &Locale,
    ) -> Result<String, CatalogError> {
        let template = self
            .lookup(key, locale)
            .ok_or_else(|| CatalogError::MissingMessage {
                key: key.to_string(),
                locale: locale.clone(),
            })?;

        Ok(format_message(template, args))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::notifications::{HTML_BODY_KEY, SUBJECT_KEY, TEXT_BODY_KEY};

    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(Locale::new("en"))
            .with_message(Locale::new("en"), "greeting", "Hello {0}")
            .with_message(Locale::new("en-gb"), "greeting", "Good day {0}")
            .with_message(Locale::new("de"), "greeting", "Hallo {0}")
            .with_message(Locale::new("en"), "farewell", "Bye")
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_resolve_exact_locale() -> TestResult {
        let greeting = catalog().resolve("greeting", &args(&["Ada"]), &Locale::new("en_GB"))?;

        assert_eq!(greeting, "Good day Ada");

        Ok(())
    }

    #[test]
    fn test_resolve_falls_back_to_language() -> TestResult {
        let greeting = catalog().resolve("greeting", &args(&["Ada"]), &Locale::new("de-AT"))?;

        assert_eq!(greeting, "Hallo Ada");

        Ok(())
    }

    #[test]
    fn test_resolve_falls_back_to_default_locale() -> TestResult {
        let catalog = catalog();

        assert_eq!(
            catalog.resolve("greeting", &args(&["Ada"]), &Locale::new("fr"))?,
            "Hello Ada"
        );
        assert_eq!(catalog.resolve("farewell", &[], &Locale::new("de"))?, "Bye");

        Ok(())
    }

    #[test]
    fn test_resolve_missing_key() {
        let result = catalog().resolve("unknown", &[], &Locale::new("de"));

        assert_eq!(
            result,
            Err(CatalogError::MissingMessage {
                key: "unknown".to_string(),
                locale: Locale::new("de"),
            })
        );
    }

    #[test]
    fn test_builtin_catalog_has_activation_messages() -> TestResult {
        let catalog = StaticCatalog::builtin(Locale::new("en"))?;

        for locale in ["en", "de"] {
            for key in [SUBJECT_KEY, TEXT_BODY_KEY, HTML_BODY_KEY] {
                catalog.resolve(key, &args(&["https://example.com", "abc123"]), &Locale::new(locale))?;
            }
        }

        assert_eq!(
            catalog.resolve(SUBJECT_KEY, &[], &Locale::new("en-US"))?,
            "Activate your account"
        );
        assert_eq!(
            catalog.resolve(SUBJECT_KEY, &[], &Locale::new("de"))?,
            "Aktivieren Sie Ihr Konto"
        );

        Ok(())
    }

    #[test]
    fn test_builtin_text_body_unescapes_quotes() -> TestResult {
        let body = StaticCatalog::builtin(Locale::new("en"))?.resolve(
            TEXT_BODY_KEY,
            &args(&["https://example.com", "abc123"]),
            &Locale::new("en"),
        )?;

        assert!(body.contains("https://example.com/activate/abc123"));
        assert!(body.contains("didn't"));

        Ok(())
    }

    #[test]
    fn test_builtin_uses_given_default_locale() -> TestResult {
        let catalog = StaticCatalog::builtin(Locale::new("de"))?;

        assert_eq!(
            catalog.resolve(SUBJECT_KEY, &[], &Locale::new("fr"))?,
            "Aktivieren Sie Ihr Konto"
        );
        assert_eq!(
            catalog.resolve(SUBJECT_KEY, &[], &Locale::new("en-GB"))?,
            "Activate your account"
        );

        Ok(())
    }

    #[test]
    fn test_from_dir_loads_bundled_messages() -> TestResult {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("messages");

        let catalog = StaticCatalog::from_dir(dir, Locale::new("en"))?;

        assert_eq!(
            catalog.resolve(SUBJECT_KEY, &[], &Locale::new("de-CH"))?,
            "Aktivieren Sie Ihr Konto"
        );

        Ok(())
    }

    #[test]
    fn test_from_missing_dir_fails() {
        let result = StaticCatalog::from_dir("/nonexistent/messages", Locale::new("en"));

        assert!(result.is_err());
    }

    #[test]
    fn test_add_json_rejects_nested_values() {
        let mut catalog = StaticCatalog::new(Locale::new("en"));

        let result = catalog.add_json(Locale::new("en"), r#"{"mail": {"subject": "Hi"}}"#);

        assert!(result.is_err());
    }
}
