//! PostgreSQL Repositories
//!
//! Implement the repository gateways with runtime-checked SQLx queries.

mod address_repository;
mod area_repository;
mod content_repository;
mod payment_repository;
mod qq_binding_repository;
mod sku_repository;
mod user_repository;

pub use address_repository::PostgresAddressRepository;
pub use area_repository::PostgresAreaRepository;
pub use content_repository::PostgresContentRepository;
pub use payment_repository::PostgresPaymentRepository;
pub use qq_binding_repository::PostgresQqBindingRepository;
pub use sku_repository::PostgresSkuRepository;
pub use user_repository::PostgresUserRepository;
