//! Localized SEO metadata.
//!
//! The same rule set serves two callers: the static generator bakes it into
//! per-locale files, and page bootstrap patches the live document with it.

use crate::html::{HtmlDocument, MetaTag, RewriteRule, RootAttr};
use crate::i18n::{Locale, MetaStrings};
use tracing::debug;

/// Tags whose content follows the active locale, in update order.
pub const LOCALIZED_TAGS: [MetaTag; 8] = [
    MetaTag::Description,
    MetaTag::Title,
    MetaTag::Keywords,
    MetaTag::OgTitle,
    MetaTag::OgDescription,
    MetaTag::OgLocale,
    MetaTag::TwitterTitle,
    MetaTag::TwitterDescription,
];

/// Value a localized tag takes for `locale`. URL tags are per-page, not
/// per-dictionary, and have no value here.
fn value_for<'a>(tag: MetaTag, locale: Locale, meta: &'a MetaStrings) -> Option<&'a str> {
    match tag {
        MetaTag::Title | MetaTag::OgTitle | MetaTag::TwitterTitle => Some(meta.title.as_str()),
        MetaTag::Description | MetaTag::OgDescription | MetaTag::TwitterDescription => {
            Some(meta.description.as_str())
        }
        MetaTag::Keywords => Some(meta.keywords.as_str()),
        MetaTag::OgLocale => Some(locale.og_locale()),
        MetaTag::OgUrl | MetaTag::TwitterUrl => None,
    }
}

/// Rules replacing `<title>` and every localized meta tag.
pub fn meta_rules(locale: Locale, meta: &MetaStrings) -> Vec<RewriteRule> {
    let mut rules = vec![crate::html::title_rule(&meta.title)];
    rules.extend(
        LOCALIZED_TAGS
            .iter()
            .filter_map(|tag| value_for(*tag, locale, meta).map(|value| tag.rule(value))),
    );
    rules
}

/// What a runtime meta update touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaUpdate {
    pub updated: Vec<&'static str>,
    /// Tags absent from the document
    pub skipped: Vec<&'static str>,
}

/// Point `lang`, `<title>` and the localized meta tags of a live document at
/// `locale`. Missing tags are skipped without error.
pub fn update_meta_tags(doc: &mut HtmlDocument, locale: Locale, meta: &MetaStrings) -> MetaUpdate {
    doc.set_root_attr(RootAttr::Lang, locale.code());

    let outcome = doc.apply(&meta_rules(locale, meta));
    if !outcome.skipped.is_empty() {
        debug!("Meta tags not present, skipped: {:?}", outcome.skipped);
    }

    MetaUpdate {
        updated: outcome.applied,
        skipped: outcome.skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = r#"<html lang="ko"><head>
<title>하루</title>
<meta name="description" content="ko-description" />
<meta name="title" content="하루" />
<meta name="keywords" content="ko-keywords" />
<meta property="og:title" content="하루" />
<meta property="og:description" content="ko-description" />
<meta property="og:locale" content="ko_KR" />
<meta name="twitter:title" content="하루" />
<meta name="twitter:description" content="ko-description" />
</head><body><div id="app"></div></body></html>"#;

    fn english_meta() -> MetaStrings {
        MetaStrings {
            title: "Haru".to_string(),
            description: "An AI friend".to_string(),
            keywords: "ai, friend".to_string(),
        }
    }

    #[test]
    fn test_update_all_tags() {
        let mut doc = HtmlDocument::new(HEAD);
        let update = update_meta_tags(&mut doc, Locale::ENGLISH, &english_meta());

        assert!(update.skipped.is_empty());
        assert_eq!(update.updated.len(), 9);
        assert_eq!(doc.root_attr(RootAttr::Lang), Some("en"));
        assert_eq!(doc.title(), Some("Haru"));
        assert_eq!(doc.meta_content(MetaTag::Description), Some("An AI friend"));
        assert_eq!(doc.meta_content(MetaTag::Keywords), Some("ai, friend"));
        assert_eq!(doc.meta_content(MetaTag::OgLocale), Some("en_US"));
        assert_eq!(doc.meta_content(MetaTag::TwitterDescription), Some("An AI friend"));
    }

    #[test]
    fn test_missing_tag_is_skipped() {
        let html = HEAD.replace(r#"<meta name="keywords" content="ko-keywords" />"#, "");
        let mut doc = HtmlDocument::new(html);

        let update = update_meta_tags(&mut doc, Locale::JAPANESE, &english_meta());
        assert_eq!(update.skipped, vec!["keywords"]);
        assert_eq!(update.updated.len(), 8);
        assert_eq!(doc.meta_content(MetaTag::OgTitle), Some("Haru"));
        assert_eq!(doc.meta_content(MetaTag::OgLocale), Some("ja_JP"));
    }

    #[test]
    fn test_document_without_head_tags() {
        let mut doc = HtmlDocument::new("<html><body></body></html>");
        let update = update_meta_tags(&mut doc, Locale::ENGLISH, &english_meta());

        assert!(update.updated.is_empty());
        assert_eq!(update.skipped.len(), 9);
        assert_eq!(doc.root_attr(RootAttr::Lang), Some("en"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut doc = HtmlDocument::new(HEAD);
        let meta = MetaStrings {
            title: "Haru & \"friends\"".to_string(),
            ..english_meta()
        };

        update_meta_tags(&mut doc, Locale::ENGLISH, &meta);
        assert_eq!(doc.title(), Some("Haru &amp; &quot;friends&quot;"));
        assert_eq!(
            doc.meta_content(MetaTag::OgTitle),
            Some("Haru &amp; &quot;friends&quot;")
        );
    }

    #[test]
    fn test_url_tags_take_no_dictionary_value() {
        let meta = english_meta();
        assert_eq!(value_for(MetaTag::OgUrl, Locale::ENGLISH, &meta), None);
        assert_eq!(value_for(MetaTag::TwitterUrl, Locale::ENGLISH, &meta), None);
        assert_eq!(value_for(MetaTag::TwitterTitle, Locale::ENGLISH, &meta), Some("Haru"));
        assert_eq!(value_for(MetaTag::OgLocale, Locale::JAPANESE, &meta), Some("ja_JP"));
    }

    #[test]
    fn test_meta_rules_never_touch_url_tags() {
        let html = r#"<meta property="og:url" content="https://haruai.im/" />"#;
        let mut doc = HtmlDocument::new(html);
        let outcome = doc.apply(&meta_rules(Locale::ENGLISH, &english_meta()));

        assert_eq!(doc.as_str(), html);
        assert!(!outcome.applied.contains(&"og:url"));
    }

    #[test]
    fn test_meta_rules_cover_title_and_localized_tags() {
        let names: Vec<_> = meta_rules(Locale::KOREAN, &english_meta())
            .iter()
            .map(|rule| rule.name)
            .collect();
        assert_eq!(names[0], "<title>");
        assert_eq!(names.len(), 1 + LOCALIZED_TAGS.len());
    }
}
