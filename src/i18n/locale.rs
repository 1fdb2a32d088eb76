//! Locale type: validated locale representation.
//!
//! A `Locale` can only be constructed for codes that the registry knows and
//! has enabled, so downstream code never has to re-check support.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated, enabled locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "ko", "en")
    code: &'static str,
}

impl Locale {
    pub const KOREAN: Locale = Locale { code: "ko" };
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const JAPANESE: Locale = Locale { code: "ja" };

    /// Create a Locale from a code string, reporting why it was rejected.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is known and enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Lenient counterpart of [`Locale::from_code`] for untrusted signals.
    ///
    /// The code must match exactly; anything else yields `None`.
    pub fn parse(code: &str) -> Option<Locale> {
        Locale::from_code(code).ok()
    }

    /// Match a browser language tag (e.g., "ja-JP", "EN_us") by its primary
    /// subtag, case-insensitively.
    pub fn from_language_tag(tag: &str) -> Option<Locale> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Locale::parse(&primary)
    }

    /// The locale served from the unprefixed site root.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All enabled locales in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// All enabled locales except the default one.
    pub fn non_default() -> Vec<Locale> {
        Locale::all()
            .into_iter()
            .filter(|locale| !locale.is_default())
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry. This cannot happen for a
    /// Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Region-qualified tag for `og:locale` (e.g., "en_US").
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Root-relative path of this locale's home page ("/" or "/en/").
    pub fn home_path(&self) -> String {
        if self.is_default() {
            "/".to_string()
        } else {
            format!("/{}/", self.code)
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
