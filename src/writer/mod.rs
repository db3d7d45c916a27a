pub mod cpp;
pub mod listing;
