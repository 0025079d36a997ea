mod authorize;
mod create_location;
mod delete_location;
mod error;
mod get_location;
mod list_locations;
mod load_tags;
mod review_location;
mod tag_stats;
mod unique_slug;
mod update_location;
mod vote_tag;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, create_location::*, delete_location::*, error::Error, get_location::*,
    list_locations::*, load_tags::*, review_location::*, tag_stats::*, update_location::*,
    vote_tag::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, repositories::Error as RepoError};
}
