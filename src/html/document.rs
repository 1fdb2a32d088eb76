//! In-memory HTML document with the handful of edits the site needs.

use super::{apply_rules, escape_html, RewriteOutcome, RewriteRule};
use regex::Regex;
use std::sync::OnceLock;

/// Attributes read or stamped on the `<html>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootAttr {
    /// `lang`
    Lang,
    /// `data-locale`, the locale a static file was generated for
    DataLocale,
}

impl RootAttr {
    pub fn name(self) -> &'static str {
        match self {
            RootAttr::Lang => "lang",
            RootAttr::DataLocale => "data-locale",
        }
    }

    /// Matches the attribute inside the `<html>` start tag. Group 1 is
    /// everything before it, group 2 is the value.
    pub fn pattern(self) -> &'static Regex {
        static LANG: OnceLock<Regex> = OnceLock::new();
        static DATA_LOCALE: OnceLock<Regex> = OnceLock::new();

        let (cell, source) = match self {
            RootAttr::Lang => (&LANG, r#"(<html\b[^>]*?\s)lang="([^"]*)""#),
            RootAttr::DataLocale => (&DATA_LOCALE, r#"(<html\b[^>]*?\s)data-locale="([^"]*)""#),
        };
        cell.get_or_init(|| Regex::new(source).unwrap())
    }
}

/// Named meta tags carrying localized SEO metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaTag {
    Title,
    Description,
    Keywords,
    OgTitle,
    OgDescription,
    OgLocale,
    OgUrl,
    TwitterTitle,
    TwitterDescription,
    TwitterUrl,
}

impl MetaTag {
    pub const ALL: [MetaTag; 10] = [
        MetaTag::Title,
        MetaTag::Description,
        MetaTag::Keywords,
        MetaTag::OgTitle,
        MetaTag::OgDescription,
        MetaTag::OgLocale,
        MetaTag::OgUrl,
        MetaTag::TwitterTitle,
        MetaTag::TwitterDescription,
        MetaTag::TwitterUrl,
    ];

    /// Attribute selecting the tag and its value (`name="description"`).
    pub fn selector(self) -> (&'static str, &'static str) {
        match self {
            MetaTag::Title => ("name", "title"),
            MetaTag::Description => ("name", "description"),
            MetaTag::Keywords => ("name", "keywords"),
            MetaTag::OgTitle => ("property", "og:title"),
            MetaTag::OgDescription => ("property", "og:description"),
            MetaTag::OgLocale => ("property", "og:locale"),
            MetaTag::OgUrl => ("property", "og:url"),
            MetaTag::TwitterTitle => ("name", "twitter:title"),
            MetaTag::TwitterDescription => ("name", "twitter:description"),
            MetaTag::TwitterUrl => ("name", "twitter:url"),
        }
    }

    /// Stable identifier used in logs and rewrite reports.
    pub fn key(self) -> &'static str {
        self.selector().1
    }

    /// Matches `<meta <selector> content="..."`; group 1 is the value.
    pub fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

        let patterns = PATTERNS.get_or_init(|| {
            MetaTag::ALL
                .iter()
                .map(|tag| {
                    let (attr, value) = tag.selector();
                    Regex::new(&format!(
                        r#"<meta {}="{}" content="([^"]*)""#,
                        attr,
                        regex::escape(value)
                    ))
                    .unwrap()
                })
                .collect()
        });
        &patterns[self as usize]
    }

    /// Rule replacing this tag's content with `value` (escaped here).
    pub fn rule(self, value: &str) -> RewriteRule {
        let (attr, key) = self.selector();
        RewriteRule::first(
            self.key(),
            self.pattern(),
            format!(r#"<meta {}="{}" content="{}""#, attr, key, escape_html(value)),
        )
    }
}

fn title_pattern() -> &'static Regex {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    TITLE.get_or_init(|| Regex::new(r"<title>([^<]*)</title>").unwrap())
}

fn html_tag_pattern() -> &'static Regex {
    static HTML_TAG: OnceLock<Regex> = OnceLock::new();
    HTML_TAG.get_or_init(|| Regex::new(r"<html\b([^>]*)>").unwrap())
}

fn app_container_pattern() -> &'static Regex {
    static APP: OnceLock<Regex> = OnceLock::new();
    APP.get_or_init(|| Regex::new(r#"<div id="app"([^>]*)>\s*</div>"#).unwrap())
}

/// Rule replacing the document title with `title` (escaped here).
pub fn title_rule(title: &str) -> RewriteRule {
    RewriteRule::first(
        "<title>",
        title_pattern(),
        format!("<title>{}</title>", escape_html(title)),
    )
}

/// Rule setting an existing `<html>` attribute. `value` must be attribute-safe.
pub fn root_attr_rule(attr: RootAttr, value: &str) -> RewriteRule {
    RewriteRule::new(
        attr.name(),
        attr.pattern(),
        super::Replacement::Template(format!(
            r#"${{1}}{}="{}""#,
            attr.name(),
            value.replace('$', "$$")
        )),
        super::Scope::First,
    )
}

/// A full HTML document held as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Apply an ordered rule list in place.
    pub fn apply(&mut self, rules: &[RewriteRule]) -> RewriteOutcome {
        let outcome = apply_rules(&self.html, rules);
        self.html.clone_from(&outcome.html);
        outcome
    }

    /// Value of an attribute on `<html>`.
    pub fn root_attr(&self, attr: RootAttr) -> Option<&str> {
        attr.pattern()
            .captures(&self.html)
            .and_then(|caps| caps.get(2))
            .map(|value| value.as_str())
    }

    /// Set an attribute on `<html>`, adding it if absent.
    ///
    /// Returns `false` if the document has no `<html>` element.
    pub fn set_root_attr(&mut self, attr: RootAttr, value: &str) -> bool {
        let value = escape_html(value);
        if self.root_attr(attr).is_some() {
            return self.apply(&[root_attr_rule(attr, &value)]).skipped.is_empty();
        }

        let Some(tag) = html_tag_pattern().captures(&self.html) else {
            return false;
        };
        let (start, end) = match tag.get(0) {
            Some(whole) => (whole.start(), whole.end()),
            None => return false,
        };
        let existing = tag.get(1).map(|m| m.as_str()).unwrap_or_default();
        let replacement = format!(r#"<html{} {}="{}">"#, existing, attr.name(), value);
        self.html.replace_range(start..end, &replacement);
        true
    }

    pub fn title(&self) -> Option<&str> {
        title_pattern()
            .captures(&self.html)
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str())
    }

    /// Replace the `<title>` text. Returns `false` if there is no title.
    pub fn set_title(&mut self, title: &str) -> bool {
        self.apply(&[title_rule(title)]).skipped.is_empty()
    }

    pub fn meta_content(&self, tag: MetaTag) -> Option<&str> {
        tag.pattern()
            .captures(&self.html)
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str())
    }

    /// Replace a meta tag's content. Returns `false` if the tag is absent.
    pub fn set_meta_content(&mut self, tag: MetaTag, value: &str) -> bool {
        self.apply(&[tag.rule(value)]).skipped.is_empty()
    }

    /// Insert rendered markup into the empty `<div id="app">` container.
    ///
    /// Returns `false` if there is no empty container to mount into.
    pub fn mount(&mut self, markup: &str) -> bool {
        let Some(caps) = app_container_pattern().captures(&self.html) else {
            return false;
        };
        let (start, end) = match caps.get(0) {
            Some(whole) => (whole.start(), whole.end()),
            None => return false,
        };
        let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let mounted = format!(r#"<div id="app"{}>{}</div>"#, attrs, markup);
        self.html.replace_range(start..end, &mounted);
        true
    }
}
