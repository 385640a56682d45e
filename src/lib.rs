//! Meiduo Mall API
//!
//! Backend of the Meiduo e-commerce site: registration and login, QQ login
//! binding, address book, browsing history, payments and static index page
//! generation. Laid out following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
