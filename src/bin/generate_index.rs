//! Render the static home page once and exit.
//!
//! Meant for cron or deploy hooks; the server can also regenerate the page
//! on an interval (`static_pages.interval_secs`).

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meiduo_mall::application::use_cases::contents::GenerateIndexPageUseCase;
use meiduo_mall::infrastructure::driven_adapters::config::AppConfig;
use meiduo_mall::infrastructure::driven_adapters::database::create_pool;
use meiduo_mall::infrastructure::driven_adapters::postgres::PostgresContentRepository;
use meiduo_mall::infrastructure::driven_adapters::FilePagePublisher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "meiduo_mall=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let pool = create_pool(&config.database).await?;

    let use_case = GenerateIndexPageUseCase::new(
        Arc::new(PostgresContentRepository::new(pool)),
        Arc::new(FilePagePublisher::new(config.static_pages.output_dir)),
    );

    let path = use_case.execute().await?;
    tracing::info!(path = %path.display(), "Index page written");

    Ok(())
}
