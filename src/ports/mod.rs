pub mod attachment_repository;
pub mod cache;
pub mod config_store;
pub mod http_transport;

pub use attachment_repository::*;
pub use cache::*;
pub use config_store::*;
pub use http_transport::*;
