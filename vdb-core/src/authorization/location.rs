use vdb_entities::{id::Id, owner::LocationOwner, user::Actor};

use crate::repositories::LocationOwnerRepo;

/// Decides if an actor may modify a location.
///
/// Admins may modify every location, all other users only
/// those for which they hold an approved ownership.
pub fn can_mutate(actor: &Actor, location_id: &Id, owners: &[LocationOwner]) -> bool {
    actor.is_admin()
        || owners
            .iter()
            .any(|owner| owner.is_approved_owner(&actor.id, location_id))
}

/// Loads the ownership records and evaluates [`can_mutate`].
///
/// Any failure while loading denies the mutation.
pub fn authorize_mutation<R>(repo: &R, actor: &Actor, location_id: &Id) -> bool
where
    R: LocationOwnerRepo,
{
    if actor.is_admin() {
        return true;
    }
    match repo.owners_of_location(location_id.as_str()) {
        Ok(owners) => can_mutate(actor, location_id, &owners),
        Err(err) => {
            log::warn!(
                "Denied modification of location {location_id} by user {}: {err}",
                actor.id
            );
            false
        }
    }
}
