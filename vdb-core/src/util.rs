pub mod filter;
pub mod slug;
pub mod validate;
