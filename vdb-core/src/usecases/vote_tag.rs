use super::prelude::*;

/// Records that a user endorses a tag for an approved location.
///
/// Voting twice is not an error.
pub fn vote_tag<R>(repo: &R, location_id: &str, tag_id: &str, user_id: &Id) -> Result<()>
where
    R: LocationRepo + TagRepo + TagVoteRepo,
{
    let location = repo.get_location(location_id)?;
    if !location.is_visible() {
        log::debug!("Cannot vote for invisible location {location_id}");
        return Err(RepoError::NotFound.into());
    }
    let tag = repo.get_tag(tag_id)?;
    let vote = Vote {
        location_id: location.id,
        tag_id: tag.id,
        user_id: user_id.clone(),
    };
    if repo.add_vote_if_absent(&vote)? {
        log::info!("User {user_id} voted for tag {tag_id} of location {location_id}");
    } else {
        log::debug!("User {user_id} already voted for tag {tag_id} of location {location_id}");
    }
    Ok(())
}

/// Withdraws a vote. Withdrawing a missing vote is not an error.
pub fn unvote_tag<R>(repo: &R, location_id: &str, tag_id: &str, user_id: &Id) -> Result<()>
where
    R: TagVoteRepo,
{
    let vote = Vote {
        location_id: location_id.into(),
        tag_id: tag_id.into(),
        user_id: user_id.clone(),
    };
    if repo.remove_vote(&vote)? {
        log::info!("User {user_id} withdrew vote for tag {tag_id} of location {location_id}");
    } else {
        log::debug!("User {user_id} has no vote for tag {tag_id} of location {location_id}");
    }
    Ok(())
}
