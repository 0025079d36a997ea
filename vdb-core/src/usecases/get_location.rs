use super::prelude::*;

#[derive(Debug, Clone)]
pub struct LocationDetails {
    pub location: Location,
    /// Primary photo first, then the oldest ones.
    pub photos: Vec<Photo>,
    pub submitter: Option<UserSummary>,
}

pub fn get_location<R>(repo: &R, id: &str) -> Result<LocationDetails>
where
    R: LocationRepo + PhotoRepo + UserRepo,
{
    let location = repo.get_location(id)?;
    if !location.is_visible() {
        log::debug!("Location {id} is not visible: {}", location.status);
        return Err(RepoError::NotFound.into());
    }
    let mut photos = repo.photos_of_location(id)?;
    photos.sort_by(|a, b| {
        b.is_primary
            .cmp(&a.is_primary)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    let submitter = repo
        .try_get_user(location.submitted_by.as_str())?
        .map(UserSummary::from);
    Ok(LocationDetails {
        location,
        photos,
        submitter,
    })
}
