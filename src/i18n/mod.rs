//! Internationalization (i18n) for the Haru site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and their metadata
//! - `locale`: Validated `Locale` handle backed by the registry
//! - `dictionary`: Typed translation dictionaries, embedded or loaded from disk
//! - `parity`: Structural checks keeping every dictionary in line with the default one
//! - `store`: Persisted locale preference
//! - `resolver`: Locale detection from URL, preference and browser signals
//!
//! # Example
//!
//! ```rust,ignore
//! use haru_site::i18n::{Dictionaries, LocaleResolver, MemoryStore, PageContext};
//!
//! let resolver = LocaleResolver::new(MemoryStore::new());
//! let locale = resolver.current(&PageContext::new("/ja/"));
//! let title = &Dictionaries::embedded()?.get(locale).meta.title;
//! ```

mod dictionary;
mod locale;
mod parity;
mod registry;
pub mod resolver;
pub mod store;

pub use dictionary::{
    dictionary_path, embedded_source, load_locale, AccountDeletionStrings, Card, CardSection,
    ChatMessage, CollectionSection, ConnectionStrings, CtaStrings, Dictionaries, DictionaryError,
    FooterStrings, HeroStrings, HowItWorksStrings, LangSwitcherStrings, MetaStrings, NavStrings,
    PhoneStrings, PrivacySections, PrivacyStrings, ReportingSection, SafetyPolicyStrings,
    SafetySections, SolutionStrings, Speaker, TableSection, TermsArticle, TermsChapter,
    TermsStrings, TimelineStep, TitledContent, TitledItems, TitledList, Translations,
};
pub use locale::Locale;
pub use parity::{ParityChecker, ParityReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{
    strip_locale_prefix, LocaleResolver, LocaleSource, Navigation, PageContext, PageUrl,
    LANG_PARAM,
};
pub use store::{MemoryStore, PreferenceStore, PREFERENCE_KEY};
