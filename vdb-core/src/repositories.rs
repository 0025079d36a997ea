// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// A single predicate of a location query.
///
/// Predicates are combined with AND semantics.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationFilter {
    Status(ModerationStatus),
    Cuisine(String),
    District(String),
    PriceRange(PriceRange),
    Category(Category),
    /// Case-insensitive substring of the name or address
    /// in any language. The needle is already lowercased.
    Search(String),
    /// Every tag must have received at least one vote.
    Tags(Vec<Id>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationQuery {
    pub filters: Vec<LocationFilter>,
    pub pagination: Pagination,
}

pub trait LocationRepo {
    fn create_location(&self, location: &Location) -> Result<()>;
    fn update_location(&self, location: &Location) -> Result<()>;
    fn get_location(&self, id: &str) -> Result<Location>;

    // Returns the number of deleted rows
    fn delete_location(&self, id: &str) -> Result<usize>;

    // Ordered by creation time (newest first), then by id
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>>;
    fn count_locations(&self, filters: &[LocationFilter]) -> Result<u64>;

    fn is_slug_taken(&self, lang: Language, slug: &str, except_id: Option<&str>) -> Result<bool>;
}

pub trait LocationOwnerRepo {
    fn create_location_owner(&self, owner: &LocationOwner) -> Result<()>;
    fn owners_of_location(&self, location_id: &str) -> Result<Vec<LocationOwner>>;
}

pub trait TagRepo {
    fn create_tag(&self, tag: &Tag) -> Result<()>;
    fn get_tag(&self, id: &str) -> Result<Tag>;
    fn all_tags(&self) -> Result<Vec<Tag>>;
}

pub trait TagVoteRepo {
    // Returns `false` if the vote already existed
    fn add_vote_if_absent(&self, vote: &Vote) -> Result<bool>;
    // Returns `false` if there was no such vote
    fn remove_vote(&self, vote: &Vote) -> Result<bool>;

    fn votes_with_tags_of_location(&self, location_id: &str) -> Result<Vec<(Vote, Tag)>>;
    fn votes_of_user_for_location(&self, location_id: &str, user_id: &str) -> Result<Vec<Vote>>;
}

pub trait PhotoRepo {
    fn create_photo(&self, photo: &Photo) -> Result<()>;
    fn photos_of_location(&self, location_id: &str) -> Result<Vec<Photo>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
}
