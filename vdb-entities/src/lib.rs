#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # vdb-entities
//!
//! Reusable, agnostic domain entities for VenueDB.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod geo;
pub mod id;
pub mod location;
pub mod moderation;
pub mod owner;
pub mod photo;
pub mod price;
pub mod tag;
pub mod time;
pub mod user;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
