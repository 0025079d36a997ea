use super::prelude::*;

/// Removes a location together with its ownerships, votes and photos.
///
/// Callers must have checked that the actor is an admin.
/// Deleting a location that does not exist succeeds.
pub fn delete_location<R>(repo: &R, id: &str) -> Result<()>
where
    R: LocationRepo,
{
    let count = repo.delete_location(id)?;
    if count == 0 {
        log::debug!("Location {id} does not exist");
    } else {
        log::info!("Deleted location {id}");
    }
    Ok(())
}
