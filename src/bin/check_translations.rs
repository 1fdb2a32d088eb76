//! Check translation dictionaries for structural parity with the default locale.
//!
//! Usage:
//!   cargo run --bin check-translations
//!
//! Optional:
//! - HARU_I18N_DIR (defaults to locales)
//!
//! Exits with status 1 if any dictionary has missing, unexpected or mistyped
//! keys. Array length differences are reported as warnings only.

use anyhow::{Context, Result};
use haru_site::config::Config;
use haru_site::i18n::{dictionary_path, Locale, ParityChecker};
use std::fs;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_translations=info".parse()?)
                .add_directive("haru_site=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let default_locale = Locale::default_locale();

    let reference_path = dictionary_path(&config.i18n_dir, default_locale);
    let reference = fs::read_to_string(&reference_path)
        .with_context(|| format!("Failed to read {}", reference_path.display()))?;

    let mut error_count = 0;
    for locale in Locale::non_default() {
        let path = dictionary_path(&config.i18n_dir, locale);
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let report = ParityChecker::check_sources(&reference, &source);
        for message in &report.errors {
            error!("{}: {}", locale, message);
        }
        for message in &report.warnings {
            warn!("{}: {}", locale, message);
        }
        if report.is_clean() {
            info!("{} ({}): OK", locale, path.display());
        }
        error_count += report.errors.len();
    }

    if error_count > 0 {
        error!("{} dictionary error(s) against {}", error_count, default_locale);
        std::process::exit(1);
    }

    info!("All dictionaries match {}", default_locale);
    Ok(())
}
