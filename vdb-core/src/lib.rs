//! # vdb-core
//!
//! Business logic of the location catalog and tag voting.
//!
//! All use cases are generic over the repository traits
//! and hold no state between invocations.

pub mod authorization;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use vdb_entities::{
        category::*, geo::*, id::*, location::*, moderation::*, owner::*, photo::*, price::*,
        tag::*, time::*, user::*, vote::*,
    };
}
