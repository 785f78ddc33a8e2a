pub mod attachment_service;
pub mod error;
pub mod form;
pub mod state_manager;

pub use attachment_service::*;
pub use error::*;
pub use form::*;
pub use state_manager::*;
