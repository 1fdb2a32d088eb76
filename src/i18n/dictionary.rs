//! Translation dictionaries.
//!
//! Every locale has one JSON dictionary under `locales/<code>.json` with an
//! identical key structure. The shipped dictionaries are compiled into the
//! binary; the build-time generator reads them from disk instead so content
//! edits don't need a rebuild.

use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading dictionaries.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No dictionary bundled for locale '{0}'")]
    NotBundled(Locale),
    #[error("Invalid dictionary for locale '{locale}': {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw dictionary sources compiled into the binary, in registry order.
const EMBEDDED: &[(Locale, &str)] = &[
    (Locale::KOREAN, include_str!("../../locales/ko.json")),
    (Locale::ENGLISH, include_str!("../../locales/en.json")),
    (Locale::JAPANESE, include_str!("../../locales/ja.json")),
];

/// Raw JSON source of an embedded dictionary, for structural checks.
pub fn embedded_source(locale: Locale) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(candidate, _)| *candidate == locale)
        .map(|(_, source)| *source)
}

// ==================== Schema ====================

/// All localized strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub meta: MetaStrings,
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub phone: PhoneStrings,
    pub chat: Vec<ChatMessage>,
    pub problem: CardSection,
    pub solution: SolutionStrings,
    pub features: CardSection,
    pub connection: ConnectionStrings,
    pub how_it_works: HowItWorksStrings,
    pub cta: CtaStrings,
    pub footer: FooterStrings,
    pub lang_switcher: LangSwitcherStrings,
    pub privacy: PrivacyStrings,
    pub account_deletion: AccountDeletionStrings,
    pub terms: TermsStrings,
    pub safety_policy: SafetyPolicyStrings,
}

/// SEO metadata shared by the meta tags, Open Graph and Twitter cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaStrings {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavStrings {
    pub brand: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStrings {
    pub headline1: String,
    pub headline2: String,
    pub headline3: String,
    pub subheadline1: String,
    pub subheadline2: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneStrings {
    pub greeting: String,
    pub ai_friend_label: String,
}

/// Who is speaking in a mock chat bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Ai,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSection {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStrings {
    pub badge: String,
    pub title: String,
    pub description1: String,
    pub description2: String,
    pub description3: String,
    pub quote: String,
    pub features: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStrings {
    pub coming_soon: String,
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowItWorksStrings {
    pub badge: String,
    pub title: String,
    pub steps: Vec<TimelineStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaStrings {
    pub badge: String,
    pub title1: String,
    pub title2: String,
    pub subtitle1: String,
    pub subtitle2: String,
    pub coming_soon: String,
    pub app_store: String,
    pub google_play: String,
    pub toast: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStrings {
    pub brand: String,
    pub tagline1: String,
    pub tagline2: String,
    pub service: String,
    pub features_link: String,
    pub download: String,
    pub company: String,
    pub terms: String,
    pub privacy: String,
    pub safety: String,
    pub contact: String,
    pub copyright: String,
}

/// Labels for the language switcher, one per supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangSwitcherStrings {
    pub ko: String,
    pub en: String,
    pub ja: String,
}

impl LangSwitcherStrings {
    /// Label shown for `locale` in the switcher.
    pub fn label(&self, locale: Locale) -> &str {
        match locale.code() {
            "ko" => &self.ko,
            "ja" => &self.ja,
            _ => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDeletionStrings {
    pub page_title: String,
    pub title: String,
    pub back_to_home: String,
    pub intro: String,
    pub steps: Vec<Card>,
    pub warning_title: String,
    pub warnings: Vec<String>,
    pub contact_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledContent {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledList {
    pub title: String,
    pub intro: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledItems {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingSection {
    pub title: String,
    pub intro: String,
    pub in_app: TitledItems,
    pub email: TitledContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySections {
    pub commitment: TitledContent,
    pub age_restriction: TitledList,
    pub prohibited_content: TitledList,
    pub reporting: ReportingSection,
    pub response: TitledList,
    pub cooperation: TitledContent,
    pub education: TitledContent,
    pub contact: TitledContent,
    pub updates: TitledContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyPolicyStrings {
    pub page_title: String,
    pub title: String,
    pub back_to_home: String,
    pub intro: String,
    pub effective_date: String,
    pub emergency: TitledContent,
    pub sections: SafetySections,
}

/// A privacy section laid out as a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Collected personal data: required items as a table, the rest as lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSection {
    pub title: String,
    pub required: String,
    pub required_headers: Vec<String>,
    pub required_rows: Vec<Vec<String>>,
    pub auto: String,
    pub auto_items: Vec<String>,
    pub optional: String,
    pub optional_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySections {
    pub purpose: TableSection,
    pub collection: CollectionSection,
    pub retention: TableSection,
    pub third_party: TitledList,
    pub outsourcing: TableSection,
    pub overseas: TableSection,
    pub destruction: TitledList,
    pub rights: TableSection,
    pub security: TitledList,
    pub officer: TableSection,
    pub remedies: TitledList,
    pub changes: TitledContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyStrings {
    pub title: String,
    pub page_title: String,
    pub back_to_home: String,
    pub intro: String,
    pub effective_date: String,
    pub sections: PrivacySections,
}

/// One article of the terms of service.
///
/// Rendered in field order: content paragraph, bullet list, numbered list.
/// Empty parts are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsArticle {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numbered: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsChapter {
    pub title: String,
    pub articles: Vec<TermsArticle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsStrings {
    pub page_title: String,
    pub title: String,
    pub back_to_home: String,
    pub effective_date: String,
    pub chapters: Vec<TermsChapter>,
    pub appendix: TitledContent,
}

// ==================== Loader ====================

/// Parsed dictionaries for every enabled locale.
///
/// Lookups never fail: the default locale's dictionary backs any locale
/// without an entry of its own.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    default: Translations,
    others: BTreeMap<Locale, Translations>,
}

impl Dictionaries {
    /// Parse the dictionaries compiled into the binary.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::build(|locale| {
            let source = embedded_source(locale).ok_or(DictionaryError::NotBundled(locale))?;
            parse(locale, source)
        })
    }

    /// Load `<dir>/<code>.json` for every enabled locale.
    pub fn load_dir(dir: &Path) -> Result<Self, DictionaryError> {
        Self::build(|locale| load_locale(dir, locale))
    }

    fn build<F>(mut load: F) -> Result<Self, DictionaryError>
    where
        F: FnMut(Locale) -> Result<Translations, DictionaryError>,
    {
        let default = load(Locale::default_locale())?;
        let mut others = BTreeMap::new();
        for locale in Locale::non_default() {
            others.insert(locale, load(locale)?);
        }
        Ok(Self { default, others })
    }

    /// Translations for `locale`.
    pub fn get(&self, locale: Locale) -> &Translations {
        self.others.get(&locale).unwrap_or(&self.default)
    }
}

/// Load and parse the dictionary of a single locale from `dir`.
pub fn load_locale(dir: &Path, locale: Locale) -> Result<Translations, DictionaryError> {
    let path = dictionary_path(dir, locale);
    let source = std::fs::read_to_string(&path).map_err(|source| DictionaryError::Read {
        path: path.clone(),
        source,
    })?;
    parse(locale, &source)
}

/// Location of a locale's dictionary inside `dir`.
pub fn dictionary_path(dir: &Path, locale: Locale) -> PathBuf {
    dir.join(format!("{}.json", locale.code()))
}

fn parse(locale: Locale, source: &str) -> Result<Translations, DictionaryError> {
    serde_json::from_str(source).map_err(|source| DictionaryError::Parse { locale, source })
}
