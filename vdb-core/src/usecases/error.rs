use crate::{repositories, util::validate::LocationInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The address is invalid")]
    Address,
    #[error("Invalid position")]
    Position,
    #[error("The district is invalid")]
    District,
    #[error("The cuisine is invalid")]
    Cuisine,
    #[error("The description is too long")]
    Description,
    #[error("Invalid page")]
    Page,
    #[error("Invalid limit")]
    Limit,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<LocationInvalidation> for Error {
    fn from(err: LocationInvalidation) -> Self {
        match err {
            LocationInvalidation::Name => Self::Name,
            LocationInvalidation::Address => Self::Address,
            LocationInvalidation::Position => Self::Position,
            LocationInvalidation::District => Self::District,
            LocationInvalidation::Cuisine => Self::Cuisine,
            LocationInvalidation::Description => Self::Description,
        }
    }
}
