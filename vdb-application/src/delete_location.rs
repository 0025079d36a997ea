use super::*;

pub fn delete_location(connections: &sqlite::Connections, id: &str, actor: &Actor) -> Result<()> {
    usecases::authorize_actor(actor, Role::Admin)?;
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_location(conn, id))?)
}
