//! Locale resolution for a page load.
//!
//! Signals are checked in a fixed priority order and the first one naming a
//! supported locale wins:
//!
//! 1. a leading path segment naming a non-default locale (`/en/...`)
//! 2. the `data-locale` marker stamped on `<html>` by the static generator
//! 3. the persisted explicit preference
//! 4. the `lang` query parameter
//! 5. the browser's language list (primary subtag, case-insensitive)
//! 6. the default locale
//!
//! Unknown or malformed codes never raise; they just fall through.

use crate::config::DEFAULT_BASE_URL;
use crate::i18n::store::{PreferenceStore, PREFERENCE_KEY};
use crate::i18n::Locale;
use std::sync::OnceLock;
use tracing::debug;
use url::Url;

/// Query parameter that can request a locale.
pub const LANG_PARAM: &str = "lang";

/// Origin root-relative page hrefs are resolved against. Only the path, query
/// and fragment are ever read back.
fn site_root() -> &'static Url {
    static ROOT: OnceLock<Url> = OnceLock::new();
    ROOT.get_or_init(|| Url::parse(&format!("{}/", DEFAULT_BASE_URL)).unwrap())
}

/// A page URL as seen by the browser, addressed by path, query and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
}

impl PageUrl {
    /// Resolve `input` (`/path?key=value#fragment`, or any relative or absolute
    /// href) against the site root. Unparseable input resolves to `/`.
    pub fn parse(input: &str) -> Self {
        let url = site_root().join(input).unwrap_or_else(|e| {
            debug!("Unparseable page URL '{}' ({}), using site root", input, e);
            site_root().clone()
        });
        Self { url }
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Percent-encoded path, always starting with `/`.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn set_path(&mut self, path: &str) {
        self.url.set_path(path);
    }

    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    /// First value of a query parameter, percent-decoded.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.into_owned())
    }

    /// Copy of this URL with every occurrence of `key` removed from the query.
    /// Keys are compared after percent-decoding.
    pub fn without_param(&self, key: &str) -> Self {
        let mut url = self.url.clone();
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(candidate, _)| candidate != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let removed = self.url.query_pairs().count() != kept.len();
        if kept.is_empty() {
            url.set_query(None);
        } else if removed {
            url.query_pairs_mut().clear().extend_pairs(&kept);
        }
        Self { url }
    }

    /// First path segment, if any (`/en/features` -> `en`).
    pub fn first_segment(&self) -> Option<&str> {
        self.url
            .path_segments()?
            .next()
            .filter(|segment| !segment.is_empty())
    }

    /// Serialize back to a root-relative `/path?query#fragment`.
    pub fn to_href(&self) -> String {
        let mut href = self.url.path().to_string();
        if let Some(query) = self.url.query() {
            href.push('?');
            href.push_str(query);
        }
        if let Some(fragment) = self.url.fragment() {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

/// Browser/document state observed on a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub url: PageUrl,
    /// Value of the `data-locale` attribute on `<html>`, if present.
    pub root_marker: Option<String>,
    /// Browser language preferences, most preferred first.
    pub browser_languages: Vec<String>,
}

impl PageContext {
    pub fn new(url: &str) -> Self {
        Self {
            url: PageUrl::parse(url),
            root_marker: None,
            browser_languages: Vec::new(),
        }
    }

    pub fn with_root_marker(mut self, marker: &str) -> Self {
        self.root_marker = Some(marker.to_string());
        self
    }

    pub fn with_browser_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.browser_languages = languages.into_iter().map(Into::into).collect();
        self
    }
}

/// Which signal decided the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    PathPrefix,
    RootMarker,
    Preference,
    QueryParam,
    BrowserLanguage,
    Default,
}

/// Full page navigation requested after an explicit locale change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
}

/// Resolves the active locale and persists explicit choices.
#[derive(Debug)]
pub struct LocaleResolver<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> LocaleResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The persisted preference, if it names a supported locale.
    pub fn preference(&self) -> Option<Locale> {
        let stored = self.store.get(PREFERENCE_KEY)?;
        let locale = Locale::parse(&stored);
        if locale.is_none() {
            debug!("Ignoring unsupported stored locale '{}'", stored);
        }
        locale
    }

    /// Resolve the locale using the full signal priority order.
    pub fn detect(&self, ctx: &PageContext) -> Locale {
        self.detect_with_source(ctx).0
    }

    /// Like [`LocaleResolver::detect`], also reporting which signal won.
    pub fn detect_with_source(&self, ctx: &PageContext) -> (Locale, LocaleSource) {
        if let Some(locale) = ctx
            .url
            .first_segment()
            .and_then(Locale::parse)
            .filter(|locale| !locale.is_default())
        {
            return (locale, LocaleSource::PathPrefix);
        }

        if let Some(marker) = &ctx.root_marker {
            match Locale::parse(marker) {
                Some(locale) => return (locale, LocaleSource::RootMarker),
                None => debug!("Ignoring unsupported locale marker '{}'", marker),
            }
        }

        if let Some(locale) = self.preference() {
            return (locale, LocaleSource::Preference);
        }

        if let Some(requested) = ctx.url.query_param(LANG_PARAM) {
            match Locale::parse(&requested) {
                Some(locale) => return (locale, LocaleSource::QueryParam),
                None => debug!("Ignoring unsupported lang parameter '{}'", requested),
            }
        }

        if let Some(locale) = ctx
            .browser_languages
            .iter()
            .find_map(|tag| Locale::from_language_tag(tag))
        {
            return (locale, LocaleSource::BrowserLanguage);
        }

        (Locale::default_locale(), LocaleSource::Default)
    }

    /// Locale for the current page: the persisted preference when present,
    /// otherwise the full detection order. Never writes the store.
    pub fn current(&self, ctx: &PageContext) -> Locale {
        self.preference().unwrap_or_else(|| self.detect(ctx))
    }

    /// Persist an explicit choice and compute the page to reload into.
    ///
    /// The `lang` parameter is dropped, any locale prefix is replaced, and the
    /// default locale maps back to the unprefixed path.
    pub fn set_locale(&mut self, locale: Locale, current: &PageUrl) -> Navigation {
        self.store.set(PREFERENCE_KEY, locale.code());

        let mut target = current.without_param(LANG_PARAM);
        let rest = strip_locale_prefix(target.path());
        let path = if locale.is_default() {
            rest
        } else {
            format!("/{}{}", locale.code(), rest)
        };
        target.set_path(&path);

        debug!("Locale set to '{}', navigating to {}", locale, target.path());
        Navigation {
            href: target.to_href(),
        }
    }

    /// Forget the explicit choice so detection applies again.
    pub fn clear_preference(&mut self) {
        self.store.remove(PREFERENCE_KEY);
    }
}

/// Remove a leading locale segment (`/ja/features` -> `/features`, `/en` -> `/`).
pub fn strip_locale_prefix(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    if Locale::parse(first).is_none() {
        return format!("/{}", trimmed);
    }
    match rest {
        Some(rest) => format!("/{}", rest),
        None => "/".to_string(),
    }
}
