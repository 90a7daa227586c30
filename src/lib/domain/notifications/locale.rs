//! Locale identifiers

use std::{convert::Infallible, fmt, str::FromStr};

/// A normalized locale tag such as `en`, `en-gb` or `de`.
///
/// Tags are lowercased and `_` is accepted in place of `-`, so `en_GB`,
/// `en-GB` and `en-gb` are the same locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from a tag, normalizing case and separators
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().replace('_', "-").to_ascii_lowercase())
    }

    /// The full normalized tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, e.g. `en` for `en-gb`
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Returns the language-only locale if this tag carries a region or
    /// script, `None` if it is already language-only.
    pub fn parent(&self) -> Option<Locale> {
        let language = self.language();

        (language != self.0).then(|| Locale(language.to_string()))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_is_normalized() {
        assert_eq!(Locale::new(" en_GB "), Locale::new("en-gb"));
        assert_eq!(Locale::new("DE").as_str(), "de");
    }

    #[test]
    fn test_locale_parent() {
        assert_eq!(Locale::new("en-GB").parent(), Some(Locale::new("en")));
        assert_eq!(Locale::new("en").parent(), None);
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default().language(), "en");
    }
}
