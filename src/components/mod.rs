pub mod footer;
pub mod scroll_to_hash;
