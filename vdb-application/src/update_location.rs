use super::*;

pub fn update_location(
    connections: &sqlite::Connections,
    id: &str,
    patch: usecases::UpdateLocation,
    actor: &Actor,
) -> Result<Location> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_location(conn, id, patch, actor).map_err(|err| {
            warn!("Failed to update location {id}: {err}");
            err
        })
    })?)
}
