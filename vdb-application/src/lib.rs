#[macro_use]
extern crate log;

mod create_location;
mod delete_location;
mod get_location;
mod list_locations;
mod load_tags;
mod review_location;
mod tag_stats;
mod update_location;
mod vote_tag;

pub mod prelude {
    pub use super::{
        create_location::*, delete_location::*, get_location::*, list_locations::*, load_tags::*,
        review_location::*, tag_stats::*, update_location::*, vote_tag::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use vdb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub mod sqlite {
    pub use vdb_db_sqlite::{run_embedded_database_migrations, Connections};
}
