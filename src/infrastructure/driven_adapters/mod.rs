//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories and Redis stores
//! - Configuration and connections
//! - QQ OAuth client, token signing, password hashing
//! - Notification and static page output

pub mod config;
pub mod database;
#[cfg(any(test, feature = "inmemory"))]
pub mod in_memory;
pub mod jwt;
pub mod notifier;
pub mod page_publisher;
pub mod password;
pub mod postgres;
pub mod qq_oauth;
pub mod redis_store;

pub use config::AppConfig;
pub use jwt::JwtTokenService;
pub use notifier::LoggingNotifier;
pub use page_publisher::FilePagePublisher;
pub use password::BcryptPasswordHasher;
pub use qq_oauth::HttpQqOAuthClient;
