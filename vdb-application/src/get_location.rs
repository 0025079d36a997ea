use super::*;

pub fn get_location(
    connections: &sqlite::Connections,
    id: &str,
) -> Result<usecases::LocationDetails> {
    let db = connections.shared()?;
    Ok(usecases::get_location(&db, id)?)
}
