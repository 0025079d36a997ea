use super::*;

pub fn load_tags(connections: &sqlite::Connections) -> Result<usecases::TagCatalog> {
    let db = connections.shared()?;
    Ok(usecases::load_tags(&db)?)
}

pub fn get_tag(connections: &sqlite::Connections, id: &str) -> Result<Tag> {
    let db = connections.shared()?;
    Ok(usecases::get_tag(&db, id)?)
}
