pub mod attachment;
pub mod error;
pub mod task;

pub use attachment::*;
pub use error::*;
pub use task::*;
