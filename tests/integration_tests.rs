//! Integration tests for the Haru site generator and page bootstrap
//!
//! These tests run the static localizer end to end against a temporary build
//! output directory, and mount client pages into a generated document.

use haru_site::config::Config;
use haru_site::html::{HtmlDocument, RootAttr};
use haru_site::i18n::{
    dictionary_path, embedded_source, Dictionaries, Locale, LocaleResolver, MemoryStore,
    PageContext,
};
use haru_site::localizer::{generate, LocalizerError};
use haru_site::page::{bootstrap_page, Page};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ==================== Test Helpers ====================

const INDEX: &str = r#"<!doctype html>
<html lang="ko">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>하루 - AI 친구 앱</title>
    <meta name="title" content="하루 - AI 친구 앱" />
    <meta name="description" content="판단 없이 들어주는 AI 친구" />
    <meta name="keywords" content="AI 친구" />
    <link rel="canonical" href="https://haruai.im" />
    <meta property="og:type" content="website" />
    <meta property="og:url" content="https://haruai.im/" />
    <meta property="og:title" content="하루 - AI 친구 앱" />
    <meta property="og:description" content="판단 없이 들어주는 AI 친구" />
    <meta property="og:image" content="https://haruai.im/og-image.png" />
    <meta property="og:locale" content="ko_KR" />
    <meta name="twitter:card" content="summary_large_image" />
    <meta name="twitter:url" content="https://haruai.im/" />
    <meta name="twitter:title" content="하루 - AI 친구 앱" />
    <meta name="twitter:description" content="판단 없이 들어주는 AI 친구" />
    <script type="module" crossorigin src="/assets/index-B1x2y3.js"></script>
    <link rel="stylesheet" crossorigin href="/assets/index-C4d5e6.css">
  </head>
  <body>
    <div id="app"></div>
    <a href="/privacy.html">privacy</a>
  </body>
</html>
"#;

/// Lay out a build directory with the default index and the shipped
/// dictionaries, with the English title overridden to "Haru".
fn create_site(temp_dir: &TempDir) -> Config {
    let dist_dir = temp_dir.path().join("dist");
    let i18n_dir = temp_dir.path().join("locales");
    fs::create_dir_all(&dist_dir).expect("Failed to create dist dir");
    fs::create_dir_all(&i18n_dir).expect("Failed to create locales dir");

    fs::write(dist_dir.join("index.html"), INDEX).expect("Failed to write index.html");

    for locale in Locale::all() {
        let mut dictionary: serde_json::Value =
            serde_json::from_str(embedded_source(locale).unwrap()).unwrap();
        if locale == Locale::ENGLISH {
            dictionary["meta"]["title"] = serde_json::Value::from("Haru");
        }
        fs::write(
            dictionary_path(&i18n_dir, locale),
            serde_json::to_string_pretty(&dictionary).unwrap(),
        )
        .expect("Failed to write dictionary");
    }

    Config {
        dist_dir,
        i18n_dir,
        base_url: "https://haruai.im".to_string(),
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read generated file")
}

// ==================== Generator Tests ====================

#[test]
fn test_generates_english_page() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);

    let report = generate(&config).unwrap();
    assert_eq!(report.pages.len(), 2);

    let html = read(&config.dist_dir.join("en").join("index.html"));
    assert!(html.contains("<title>Haru</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://haruai.im/en/" />"#));
    assert!(html.contains(r#"<html lang="en" data-locale="en">"#));
    assert!(html.contains(r#"<meta property="og:locale" content="en_US""#));
}

#[test]
fn test_generates_japanese_page() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);
    generate(&config).unwrap();

    let ja = Dictionaries::embedded().unwrap().get(Locale::JAPANESE).clone();
    let html = read(&config.dist_dir.join("ja").join("index.html"));

    assert!(html.contains(&format!("<title>{}</title>", ja.meta.title)));
    assert!(html.contains(&format!(
        r#"<meta name="twitter:description" content="{}""#,
        ja.meta.description
    )));
    assert!(html.contains(r#"<meta property="og:url" content="https://haruai.im/ja/""#));
    // Untouched non-localized tags
    assert!(html.contains(r#"<meta property="og:image" content="https://haruai.im/og-image.png" />"#));
}

#[test]
fn test_canonical_document_is_finalized() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);

    let report = generate(&config).unwrap();
    assert!(report.canonical_changed);

    let html = read(&config.dist_dir.join("index.html"));
    let doc = HtmlDocument::new(html.as_str());
    assert_eq!(doc.root_attr(RootAttr::DataLocale), Some("ko"));
    assert_eq!(doc.root_attr(RootAttr::Lang), Some("ko"));
    assert!(html.contains(r#"<link rel="canonical" href="https://haruai.im/" />"#));
    assert!(html.contains(r#"<link rel="alternate" hreflang="ja" href="https://haruai.im/ja/" />"#));
    // Default document keeps root-relative assets
    assert!(html.contains(r#"src="/assets/index-B1x2y3.js""#));
}

#[test]
fn test_second_run_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);

    generate(&config).unwrap();
    let first: Vec<String> = [
        config.dist_dir.join("index.html"),
        config.dist_dir.join("en").join("index.html"),
        config.dist_dir.join("ja").join("index.html"),
    ]
    .iter()
    .map(|path| read(path))
    .collect();

    let report = generate(&config).unwrap();
    assert!(!report.canonical_changed);

    let second: Vec<String> = [
        config.dist_dir.join("index.html"),
        config.dist_dir.join("en").join("index.html"),
        config.dist_dir.join("ja").join("index.html"),
    ]
    .iter()
    .map(|path| read(path))
    .collect();

    assert_eq!(first, second);
    for html in &second {
        assert_eq!(html.matches(r#"hreflang="x-default""#).count(), 1);
        assert_eq!(html.matches("data-locale=").count(), 1);
    }
}

#[test]
fn test_assets_rewritten_once_at_depth_one() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);
    generate(&config).unwrap();
    generate(&config).unwrap();

    let html = read(&config.dist_dir.join("en").join("index.html"));
    assert!(html.contains(r#"src="../assets/index-B1x2y3.js""#));
    assert!(html.contains(r#"href="../assets/index-C4d5e6.css""#));
    assert!(html.contains(r#"href="../favicon.svg""#));
    assert!(!html.contains("../../"));
    // Other root-relative links are left alone
    assert!(html.contains(r#"<a href="/privacy.html">"#));
}

#[test]
fn test_missing_index_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);
    fs::remove_file(config.dist_dir.join("index.html")).unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, LocalizerError::MissingDefaultDocument(_)));
    assert!(err.to_string().ends_with("index.html not found. Run vite build first."));
    assert!(!config.dist_dir.join("en").exists());
}

#[test]
fn test_missing_dictionary_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);
    fs::remove_file(dictionary_path(&config.i18n_dir, Locale::JAPANESE)).unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, LocalizerError::Dictionary(_)));
}

// ==================== Page Bootstrap Tests ====================

#[test]
fn test_bootstrap_on_generated_document_uses_marker() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);
    generate(&config).unwrap();

    let html = read(&config.dist_dir.join("ja").join("index.html"));
    let mut doc = HtmlDocument::new(html.as_str());

    // No path prefix: the marker stamped at build time decides
    let marker = doc.root_attr(RootAttr::DataLocale).unwrap().to_string();
    let ctx = PageContext::new("/account-deletion.html")
        .with_root_marker(&marker)
        .with_browser_languages(["en-US"]);
    let resolver = LocaleResolver::new(MemoryStore::new());
    let dictionaries = Dictionaries::embedded().unwrap();

    let outcome = bootstrap_page(Page::AccountDeletion, &ctx, &resolver, &dictionaries, &mut doc);

    assert_eq!(outcome.locale, Locale::JAPANESE);
    assert!(outcome.mounted);
    assert!(outcome.meta.skipped.is_empty());
    let ja = dictionaries.get(Locale::JAPANESE);
    assert_eq!(doc.title(), Some(ja.account_deletion.page_title.as_str()));
    assert_eq!(doc.as_str().matches("<footer ").count(), 1);
}

// ==================== Binary Tests ====================

fn run_binary(binary: &str, config: &Config, cwd: &Path) -> std::process::Output {
    std::process::Command::new(binary)
        .current_dir(cwd)
        .env("HARU_DIST_DIR", &config.dist_dir)
        .env("HARU_I18N_DIR", &config.i18n_dir)
        .env("HARU_BASE_URL", &config.base_url)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary")
}

#[test]
fn test_generator_binary_exits_with_status_one_without_index() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);
    fs::remove_file(config.dist_dir.join("index.html")).unwrap();

    let output = run_binary(env!("CARGO_BIN_EXE_haru-site"), &config, temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let log = String::from_utf8_lossy(&output.stdout);
    assert!(log.contains("not found. Run vite build first."), "log: {}", log);
    assert!(!config.dist_dir.join("en").exists());
}

#[test]
fn test_generator_binary_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);

    let output = run_binary(env!("CARGO_BIN_EXE_haru-site"), &config, temp_dir.path());

    assert!(output.status.success());
    assert!(config.dist_dir.join("en").join("index.html").is_file());
    assert!(config.dist_dir.join("ja").join("index.html").is_file());
}

#[test]
fn test_check_translations_binary_exit_status() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_site(&temp_dir);

    let output = run_binary(env!("CARGO_BIN_EXE_check-translations"), &config, temp_dir.path());
    assert!(output.status.success());

    let path = dictionary_path(&config.i18n_dir, Locale::JAPANESE);
    let mut dictionary: serde_json::Value = serde_json::from_str(&read(&path)).unwrap();
    dictionary["meta"].as_object_mut().unwrap().remove("keywords");
    fs::write(&path, dictionary.to_string()).unwrap();

    let output = run_binary(env!("CARGO_BIN_EXE_check-translations"), &config, temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Missing key: meta.keywords"));
}
