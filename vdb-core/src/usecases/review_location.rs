use super::prelude::*;

/// Changes the moderation status of a location.
///
/// Callers must have checked that the reviewer is an admin.
pub fn review_location<R>(
    repo: &R,
    id: &str,
    status: ModerationStatus,
    reviewer: &Id,
) -> Result<Location>
where
    R: LocationRepo,
{
    let mut location = repo.get_location(id)?;
    let old_status = location.status;
    if old_status == status {
        log::debug!("Location {id} is already {status}");
        return Ok(location);
    }
    location.status = status;
    location.approved_by = status.is_approved().then(|| reviewer.clone());
    location.updated_at = Timestamp::now();
    repo.update_location(&location)?;
    log::info!("Changed status of location {id} from {old_status} to {status} by user {reviewer}");
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use vdb_entities::builders::*;

    #[test]
    fn approve_and_reject() {
        let db = MockDb::default();
        db.locations.borrow_mut().push(
            Location::build()
                .id("loc")
                .status(ModerationStatus::Pending)
                .finish(),
        );
        let reviewer = Id::from("admin");

        let location =
            review_location(&db, "loc", ModerationStatus::Approved, &reviewer).unwrap();
        assert_eq!(ModerationStatus::Approved, location.status);
        assert_eq!(Some(reviewer.clone()), location.approved_by);
        assert!(location.updated_at > location.created_at);
        assert_eq!(location, db.locations.borrow()[0]);

        let location =
            review_location(&db, "loc", ModerationStatus::Rejected, &reviewer).unwrap();
        assert_eq!(ModerationStatus::Rejected, location.status);
        assert_eq!(None, location.approved_by);
        assert_eq!(location, db.locations.borrow()[0]);
    }

    #[test]
    fn review_to_same_status() {
        let db = MockDb::default();
        db.locations.borrow_mut().push(
            Location::build()
                .id("loc")
                .status(ModerationStatus::Approved)
                .approved_by(Some("first"))
                .finish(),
        );
        let location =
            review_location(&db, "loc", ModerationStatus::Approved, &"second".into()).unwrap();
        assert_eq!(Some("first"), location.approved_by.as_ref().map(Id::as_str));
        assert_eq!(location.created_at, location.updated_at);
    }

    #[test]
    fn review_unknown_location() {
        let db = MockDb::default();
        assert!(matches!(
            review_location(&db, "x", ModerationStatus::Approved, &"admin".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
