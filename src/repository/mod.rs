mod dto;
mod error;
mod feed_repository;
mod feed_repository_impl;

pub use dto::*;
pub use error::*;
pub use feed_repository::*;
pub use feed_repository_impl::*;
