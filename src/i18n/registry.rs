//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales the site is
//! published in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its code, names,
/// Open Graph tag, enabled status, and whether it's the default locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "ko", "en")
    pub code: &'static str,

    /// English name of the locale (e.g., "Korean", "English")
    pub name: &'static str,

    /// Native name of the locale (e.g., "한국어", "日本語")
    pub native_name: &'static str,

    /// Region-qualified tag used by `og:locale` (e.g., "ko_KR")
    pub og_locale: &'static str,

    /// Whether this is the default locale served from the unprefixed root
    /// (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// Initialized once on first access and immutable thereafter. Entry order is
/// the order used for discovery links and the language switcher.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its exact code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// Korean is served from the site root; English and Japanese live under
/// `/en/` and `/ja/`.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            og_locale: "ko_KR",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            og_locale: "ja_JP",
            is_default: false,
            enabled: true,
        },
    ]
}
