use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://haruai.im";

#[derive(Debug, Clone)]
pub struct Config {
    // Build output containing the rendered default-locale index.html
    pub dist_dir: PathBuf,

    // Directory holding <locale>.json dictionaries
    pub i18n_dir: PathBuf,

    // Public origin used in canonical and discovery links (no trailing slash)
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("HARU_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!("HARU_BASE_URL must be an absolute http(s) URL, got '{}'", base_url);
        }

        Ok(Self {
            dist_dir: std::env::var("HARU_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
            i18n_dir: std::env::var("HARU_I18N_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("locales")),
            base_url,
        })
    }
}
