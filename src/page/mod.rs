//! Client-rendered informational pages.
//!
//! Each page resolves the visitor's locale, updates the document metadata and
//! mounts its chrome and body into `<div id="app">` in a single step.

mod account_deletion;
mod chrome;
mod node;
mod privacy;
mod safety_policy;
mod terms;

pub use chrome::{footer, nav, LanguageSwitcher};
pub use node::{el, list, ordered_list, render_all, table, text, Element, Node};

use crate::html::HtmlDocument;
use crate::i18n::{Dictionaries, Locale, LocaleResolver, PageContext, PreferenceStore, Translations};
use crate::meta::{update_meta_tags, MetaUpdate};
use tracing::{debug, warn};

/// Pages rendered on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Privacy,
    Terms,
    AccountDeletion,
    SafetyPolicy,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Privacy,
        Page::Terms,
        Page::AccountDeletion,
        Page::SafetyPolicy,
    ];

    /// Document title shown while the page is open.
    pub fn title<'a>(&self, translations: &'a Translations) -> &'a str {
        match self {
            Page::Privacy => &translations.privacy.page_title,
            Page::Terms => &translations.terms.page_title,
            Page::AccountDeletion => &translations.account_deletion.page_title,
            Page::SafetyPolicy => &translations.safety_policy.page_title,
        }
    }

    pub fn back_to_home<'a>(&self, translations: &'a Translations) -> &'a str {
        match self {
            Page::Privacy => &translations.privacy.back_to_home,
            Page::Terms => &translations.terms.back_to_home,
            Page::AccountDeletion => &translations.account_deletion.back_to_home,
            Page::SafetyPolicy => &translations.safety_policy.back_to_home,
        }
    }

    /// Content column width class.
    pub fn width(&self) -> &'static str {
        match self {
            Page::AccountDeletion => "max-w-2xl",
            Page::Privacy | Page::Terms | Page::SafetyPolicy => "max-w-4xl",
        }
    }

    pub fn body(&self, translations: &Translations) -> Node {
        match self {
            Page::Privacy => privacy::body(&translations.privacy),
            Page::Terms => terms::body(&translations.terms),
            Page::AccountDeletion => account_deletion::body(&translations.account_deletion),
            Page::SafetyPolicy => safety_policy::body(&translations.safety_policy),
        }
    }

    /// Navigation bar, body and footer for `locale`.
    pub fn render(&self, locale: Locale, translations: &Translations) -> Vec<Node> {
        let switcher = LanguageSwitcher::new(locale);
        vec![
            nav(translations, &switcher, self.back_to_home(translations), self.width()),
            self.body(translations),
            footer(translations, self.width()),
        ]
    }
}

/// Result of bootstrapping a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOutcome {
    pub locale: Locale,
    pub meta: MetaUpdate,
    /// Whether the content was mounted into the app container
    pub mounted: bool,
    /// Switcher state to attach the dropdown handlers to
    pub switcher: LanguageSwitcher,
}

/// Localize and mount `page` into `doc`.
pub fn bootstrap_page<S: PreferenceStore>(
    page: Page,
    ctx: &PageContext,
    resolver: &LocaleResolver<S>,
    dictionaries: &Dictionaries,
    doc: &mut HtmlDocument,
) -> BootstrapOutcome {
    let locale = resolver.current(ctx);
    let translations = dictionaries.get(locale);

    let meta = update_meta_tags(doc, locale, &translations.meta);
    if !doc.set_title(page.title(translations)) {
        debug!("{:?}: document has no <title>", page);
    }

    let mounted = doc.mount(&render_all(&page.render(locale, translations)));
    if !mounted {
        warn!("{:?}: no empty app container, content not mounted", page);
    }

    BootstrapOutcome {
        locale,
        meta,
        mounted,
        switcher: LanguageSwitcher::new(locale),
    }
}
