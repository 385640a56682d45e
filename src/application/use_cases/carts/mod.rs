//! Cart Use Cases

mod merge_cart;

pub use merge_cart::MergeCartUseCase;
