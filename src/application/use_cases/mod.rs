//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod addresses;
pub mod areas;
pub mod carts;
pub mod contents;
pub mod histories;
pub mod oauth;
pub mod payments;
pub mod users;
