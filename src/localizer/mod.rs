//! Build-time static localizer.
//!
//! Takes the rendered default-locale `index.html` and bakes one copy per
//! non-default locale into `<dist>/<locale>/index.html`, so crawlers see
//! localized metadata without running any script.
//!
//! The canonical document is finalized first (discovery links, canonical URL,
//! `data-locale` marker) and every locale variant is derived from that
//! finalized copy. All canonical edits are guarded by presence checks, so a
//! second run over the same build output is a no-op and regenerates
//! byte-identical locale files.

mod rewrite;

pub use rewrite::{
    asset_rules, canonical_rule, discovery_links, discovery_links_rule, locale_rules, locale_url,
};

use crate::config::Config;
use crate::html::{apply_rules, HtmlDocument, RootAttr};
use crate::i18n::{load_locale, DictionaryError, Locale, MetaStrings};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that abort generation.
#[derive(Error, Debug)]
pub enum LocalizerError {
    #[error("{} not found. Run vite build first.", .0.display())]
    MissingDefaultDocument(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Files touched by one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Path of the canonical document
    pub canonical: PathBuf,
    /// Whether the canonical document had to be rewritten
    pub canonical_changed: bool,
    /// Generated locale documents, in registry order
    pub pages: Vec<(Locale, PathBuf)>,
}

/// Derives per-locale documents from the canonical one.
#[derive(Debug, Clone)]
pub struct StaticLocalizer {
    base_url: String,
}

impl StaticLocalizer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One-time edits to the default-locale document. Idempotent.
    pub fn finalize_canonical(&self, html: &str) -> String {
        let mut doc = HtmlDocument::new(html);
        let default_locale = Locale::default_locale();

        if doc.as_str().contains("hreflang") {
            debug!("Discovery links already present, skipping injection");
        } else {
            doc.apply(&[discovery_links_rule(&self.base_url)]);
        }

        doc.apply(&[canonical_rule(&locale_url(&self.base_url, default_locale))]);

        if doc.root_attr(RootAttr::Lang).is_none() {
            doc.set_root_attr(RootAttr::Lang, default_locale.code());
        }

        if doc.root_attr(RootAttr::DataLocale).is_some() {
            debug!("Locale marker already present on <html>, skipping");
        } else {
            doc.set_root_attr(RootAttr::DataLocale, default_locale.code());
        }

        doc.into_string()
    }

    /// Derive `locale`'s document from the finalized canonical document.
    pub fn localize(&self, canonical: &str, locale: Locale, meta: &MetaStrings) -> String {
        let outcome = apply_rules(canonical, &locale_rules(&self.base_url, locale, meta));
        if !outcome.skipped.is_empty() {
            debug!(
                "{}: patterns absent from canonical document: {:?}",
                locale, outcome.skipped
            );
        }
        outcome.html
    }
}

/// Output path of a locale's home page inside `dist_dir`.
pub fn locale_document_path(dist_dir: &Path, locale: Locale) -> PathBuf {
    if locale.is_default() {
        dist_dir.join("index.html")
    } else {
        dist_dir.join(locale.code()).join("index.html")
    }
}

/// Run the generator against a build output directory.
pub fn generate(config: &Config) -> Result<GenerationReport, LocalizerError> {
    let index_path = locale_document_path(&config.dist_dir, Locale::default_locale());
    if !index_path.is_file() {
        return Err(LocalizerError::MissingDefaultDocument(index_path));
    }

    let localizer = StaticLocalizer::new(config.base_url.as_str());

    let source = read(&index_path)?;
    let canonical = localizer.finalize_canonical(&source);
    let canonical_changed = canonical != source;
    if canonical_changed {
        write(&index_path, &canonical)?;
        info!("Updated: {} ({} - default)", index_path.display(), Locale::default_locale().name());
    } else {
        debug!("{} already finalized", index_path.display());
    }

    let mut pages = Vec::new();
    for locale in Locale::non_default() {
        let translations = load_locale(&config.i18n_dir, locale)?;
        let html = localizer.localize(&canonical, locale, &translations.meta);

        let path = locale_document_path(&config.dist_dir, locale);
        write(&path, &html)?;
        info!("Generated: {} ({})", path.display(), locale.name());
        pages.push((locale, path));
    }

    info!("i18n pages generation complete ({} locales)", pages.len());
    Ok(GenerationReport {
        canonical: index_path,
        canonical_changed,
        pages,
    })
}

fn read(path: &Path) -> Result<String, LocalizerError> {
    std::fs::read_to_string(path).map_err(|source| LocalizerError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), LocalizerError> {
    let to_error = |source| LocalizerError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, contents).map_err(to_error)
}
