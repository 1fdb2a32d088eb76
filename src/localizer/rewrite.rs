//! Rule sets that turn the canonical document into a locale variant.

use crate::html::{root_attr_rule, MetaTag, RewriteRule, RootAttr};
use crate::i18n::{Locale, MetaStrings};
use crate::meta::meta_rules;
use regex::Regex;
use std::sync::OnceLock;

fn canonical_pattern() -> &'static Regex {
    static CANONICAL: OnceLock<Regex> = OnceLock::new();
    CANONICAL.get_or_init(|| Regex::new(r#"<link rel="canonical"[^>]*>"#).unwrap())
}

fn asset_pattern() -> &'static Regex {
    static ASSETS: OnceLock<Regex> = OnceLock::new();
    ASSETS.get_or_init(|| Regex::new(r#"(href|src)="/assets/"#).unwrap())
}

fn icon_pattern() -> &'static Regex {
    static ICONS: OnceLock<Regex> = OnceLock::new();
    ICONS.get_or_init(|| Regex::new(r#"href="/(favicon|og-image)"#).unwrap())
}

fn head_close_pattern() -> &'static Regex {
    static HEAD_CLOSE: OnceLock<Regex> = OnceLock::new();
    HEAD_CLOSE.get_or_init(|| Regex::new(r"</head>").unwrap())
}

/// Absolute URL of a locale's home page.
pub fn locale_url(base_url: &str, locale: Locale) -> String {
    format!("{}{}", base_url, locale.home_path())
}

/// Rule pointing the canonical link at `url`.
pub fn canonical_rule(url: &str) -> RewriteRule {
    RewriteRule::first(
        "canonical",
        canonical_pattern(),
        format!(r#"<link rel="canonical" href="{}" />"#, url),
    )
}

/// `hreflang` alternate links for every enabled locale plus `x-default`.
pub fn discovery_links(base_url: &str) -> String {
    let mut links = String::from("\n    <!-- hreflang for multilingual SEO -->");
    for locale in Locale::all() {
        links.push_str(&format!(
            "\n    <link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />",
            locale,
            locale_url(base_url, locale)
        ));
    }
    links.push_str(&format!(
        "\n    <link rel=\"alternate\" hreflang=\"x-default\" href=\"{}\" />",
        locale_url(base_url, Locale::default_locale())
    ));
    links
}

/// Rule inserting the discovery links right before `</head>`.
pub fn discovery_links_rule(base_url: &str) -> RewriteRule {
    RewriteRule::first(
        "hreflang",
        head_close_pattern(),
        format!("{}\n  </head>", discovery_links(base_url)),
    )
}

/// Rules rebasing root-relative asset, favicon and preview-image references
/// for a document `depth` directories below the site root.
pub fn asset_rules(depth: usize) -> Vec<RewriteRule> {
    let prefix = "../".repeat(depth);
    vec![
        RewriteRule::all("assets", asset_pattern(), format!(r#"${{1}}="{}assets/"#, prefix)),
        RewriteRule::all("icons", icon_pattern(), format!(r#"href="{}${{1}}"#, prefix)),
    ]
}

/// Every rewrite turning the finalized canonical document into `locale`'s
/// variant, in application order.
pub fn locale_rules(base_url: &str, locale: Locale, meta: &MetaStrings) -> Vec<RewriteRule> {
    let url = locale_url(base_url, locale);

    let mut rules = vec![
        root_attr_rule(RootAttr::Lang, locale.code()),
        root_attr_rule(RootAttr::DataLocale, locale.code()),
        canonical_rule(&url),
        MetaTag::OgUrl.rule(&url),
        MetaTag::TwitterUrl.rule(&url),
    ];
    rules.extend(meta_rules(locale, meta));
    if !locale.is_default() {
        rules.extend(asset_rules(1));
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::apply_rules;

    const BASE: &str = "https://haruai.im";

    #[test]
    fn test_locale_url() {
        assert_eq!(locale_url(BASE, Locale::KOREAN), "https://haruai.im/");
        assert_eq!(locale_url(BASE, Locale::ENGLISH), "https://haruai.im/en/");
    }

    #[test]
    fn test_discovery_links_cover_every_locale() {
        let links = discovery_links(BASE);
        assert!(links.contains(r#"hreflang="ko" href="https://haruai.im/""#));
        assert!(links.contains(r#"hreflang="en" href="https://haruai.im/en/""#));
        assert!(links.contains(r#"hreflang="ja" href="https://haruai.im/ja/""#));
        assert!(links.contains(r#"hreflang="x-default" href="https://haruai.im/""#));
        assert_eq!(links.matches("<link").count(), Locale::all().len() + 1);
    }

    #[test]
    fn test_canonical_rule() {
        let outcome = apply_rules(
            r#"<link rel="canonical" href="https://old.example/">"#,
            &[canonical_rule("https://haruai.im/ja/")],
        );
        assert_eq!(outcome.html, r#"<link rel="canonical" href="https://haruai.im/ja/" />"#);
    }

    #[test]
    fn test_asset_rules_depth_one() {
        let html = r#"<link rel="icon" href="/favicon.svg" />
<link rel="stylesheet" href="/assets/index.css">
<script type="module" src="/assets/index.js"></script>
<link rel="image_src" href="/og-image.png" />
<a href="/privacy.html">Privacy</a>
<img src="/images/hero.png">"#;

        let outcome = apply_rules(html, &asset_rules(1));
        assert!(outcome.html.contains(r#"href="../favicon.svg""#));
        assert!(outcome.html.contains(r#"href="../assets/index.css""#));
        assert!(outcome.html.contains(r#"src="../assets/index.js""#));
        assert!(outcome.html.contains(r#"href="../og-image.png""#));
        // Other root-relative paths are untouched
        assert!(outcome.html.contains(r#"href="/privacy.html""#));
        assert!(outcome.html.contains(r#"src="/images/hero.png""#));
        assert!(!outcome.html.contains("../../"));
    }

    #[test]
    fn test_asset_rules_deeper_levels() {
        let outcome = apply_rules(r#"<script src="/assets/a.js"></script>"#, &asset_rules(2));
        assert_eq!(outcome.html, r#"<script src="../../assets/a.js"></script>"#);
    }

    #[test]
    fn test_default_locale_rules_skip_assets() {
        let meta = MetaStrings {
            title: "하루".to_string(),
            description: "d".to_string(),
            keywords: "k".to_string(),
        };
        let names: Vec<_> = locale_rules(BASE, Locale::KOREAN, &meta)
            .iter()
            .map(|rule| rule.name)
            .collect();
        assert!(!names.contains(&"assets"));

        let names: Vec<_> = locale_rules(BASE, Locale::ENGLISH, &meta)
            .iter()
            .map(|rule| rule.name)
            .collect();
        assert!(names.contains(&"assets"));
        assert!(names.contains(&"icons"));
    }
}
