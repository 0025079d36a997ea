pub mod location;
pub mod user;
