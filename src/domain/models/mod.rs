//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod address;
pub mod area;
pub mod cart;
pub mod content;
pub mod oauth;
pub mod payment;
pub mod sku;
pub mod user;

pub use address::{Address, AddressData, AddressId, ADDRESS_LIMIT};
pub use area::{Area, AreaRef, AreaWithSubs};
pub use cart::CartItem;
pub use content::{CategoryGroup, Content, ContentCategory, GoodsCategory, GoodsChannel, IndexPage};
pub use oauth::{QqAccessToken, QqBinding};
pub use payment::{Order, OrderStatus, Payment};
pub use sku::{Sku, HISTORY_LIMIT};
pub use user::{NewUser, User, UserId};
