mod feed_service;
mod feed_service_impl;
mod feed_view;

pub use feed_service::*;
pub use feed_service_impl::*;
pub use feed_view::*;
