use anyhow::Result;
use haru_site::{config, localizer};
use localizer::LocalizerError;
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("haru_site=info".parse()?),
        )
        .init();

    let config = config::Config::from_env()?;
    info!(
        "Generating locale pages in {} for {}",
        config.dist_dir.display(),
        config.base_url
    );

    match localizer::generate(&config) {
        Ok(report) => {
            info!("Wrote {} locale pages", report.pages.len());
            Ok(())
        }
        Err(e @ LocalizerError::MissingDefaultDocument(_)) => {
            error!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
