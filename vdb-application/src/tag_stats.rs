use super::*;

pub fn tag_stats(
    connections: &sqlite::Connections,
    location_id: &str,
    viewer: Option<&Id>,
) -> Result<Vec<TagStat>> {
    let db = connections.shared()?;
    Ok(usecases::tag_stats(&db, location_id, viewer)?)
}
