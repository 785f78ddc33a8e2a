pub mod attachments_table;
pub mod filter_bar;
pub mod form_view;

pub use filter_bar::FilterBar;
