pub mod attachment_repo;
pub mod client;
pub mod dto;
pub mod transport;

pub use attachment_repo::*;
pub use client::*;
pub use transport::*;
