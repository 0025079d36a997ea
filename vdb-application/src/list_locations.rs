use super::*;

pub fn list_locations(
    connections: &sqlite::Connections,
    req: &usecases::LocationListRequest,
    default_limit: u64,
) -> Result<usecases::LocationPage> {
    let db = connections.shared()?;
    Ok(usecases::list_locations(&db, req, default_limit)?)
}
