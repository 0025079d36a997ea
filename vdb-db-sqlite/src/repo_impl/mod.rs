// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sqlite::Sqlite,
};

use vdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod location;
mod owner;
mod photo;
mod tag;
mod user;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_access() -> repo::Error {
    anyhow!("Modification through a read-only database connection").into()
}

fn load_moderation_status(status: ModerationStatusPrimitive) -> Result<ModerationStatus> {
    ModerationStatus::try_from(status).map_err(|err| anyhow!(err).into())
}

fn load_enum<T>(column: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    value
        .parse()
        .map_err(|_| anyhow!("Invalid {column}: {value}").into())
}
