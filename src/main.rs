//! Meiduo Mall API - Main Entry Point

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meiduo_mall::application::use_cases::contents::GenerateIndexPageUseCase;
use meiduo_mall::infrastructure::driven_adapters::config::AppConfig;
use meiduo_mall::infrastructure::driven_adapters::database::{create_pool, create_redis};
use meiduo_mall::infrastructure::driven_adapters::postgres::{
    PostgresAddressRepository, PostgresAreaRepository, PostgresContentRepository, PostgresPaymentRepository,
    PostgresQqBindingRepository, PostgresSkuRepository, PostgresUserRepository,
};
use meiduo_mall::infrastructure::driven_adapters::redis_store::{
    RedisCartStore, RedisHistoryStore, RedisVerificationStore,
};
use meiduo_mall::infrastructure::driven_adapters::{
    BcryptPasswordHasher, FilePagePublisher, HttpQqOAuthClient, JwtTokenService, LoggingNotifier,
};
use meiduo_mall::infrastructure::driving_adapters::api_rest::{self, AppState, Gateways};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meiduo_mall=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    let redis = create_redis(&config.redis).await?;
    tracing::info!("Redis connection established");

    let gateways = Gateways {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        addresses: Arc::new(PostgresAddressRepository::new(pool.clone())),
        areas: Arc::new(PostgresAreaRepository::new(pool.clone())),
        qq_bindings: Arc::new(PostgresQqBindingRepository::new(pool.clone())),
        skus: Arc::new(PostgresSkuRepository::new(pool.clone())),
        payments: Arc::new(PostgresPaymentRepository::new(pool.clone())),
        histories: Arc::new(RedisHistoryStore::new(redis.clone())),
        carts: Arc::new(RedisCartStore::new(redis.clone())),
        verifications: Arc::new(RedisVerificationStore::new(redis)),
        qq_oauth: Arc::new(HttpQqOAuthClient::new(&config.qq)?),
        tokens: Arc::new(JwtTokenService::from_config(&config.jwt, &config.email)),
        passwords: Arc::new(BcryptPasswordHasher::default()),
        notifier: Arc::new(LoggingNotifier),
    };

    if config.static_pages.interval_secs > 0 {
        let generate_index = GenerateIndexPageUseCase::new(
            Arc::new(PostgresContentRepository::new(pool.clone())),
            Arc::new(FilePagePublisher::new(config.static_pages.output_dir.clone())),
        );
        let period = Duration::from_secs(config.static_pages.interval_secs);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                if let Err(e) = generate_index.execute().await {
                    tracing::error!(error = %e, "Static index generation failed");
                }
            }
        });
        tracing::info!(interval_secs = period.as_secs(), "Static index regeneration scheduled");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create application state
    let app_state = AppState::new(Arc::new(config), gateways);

    // Build router
    let app = api_rest::router(app_state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
