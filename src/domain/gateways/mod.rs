//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod address_repository;
pub mod area_repository;
pub mod cart_store;
pub mod content_repository;
pub mod history_store;
pub mod notifier;
pub mod payment_repository;
pub mod qq_binding_repository;
pub mod qq_oauth;
pub mod security;
pub mod sku_repository;
pub mod user_repository;
pub mod verification_store;

pub use address_repository::AddressRepository;
pub use area_repository::AreaRepository;
pub use cart_store::CartStore;
pub use content_repository::ContentRepository;
pub use history_store::HistoryStore;
pub use notifier::{Notifier, PagePublisher};
pub use payment_repository::PaymentRepository;
pub use qq_binding_repository::QqBindingRepository;
pub use qq_oauth::QqOAuthClient;
pub use security::{PasswordHasher, TokenService};
pub use sku_repository::SkuRepository;
pub use user_repository::UserRepository;
pub use verification_store::VerificationStore;
