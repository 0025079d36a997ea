use super::*;

pub fn review_location(
    connections: &sqlite::Connections,
    id: &str,
    status: ModerationStatus,
    actor: &Actor,
) -> Result<Location> {
    usecases::authorize_actor(actor, Role::Admin)?;
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::review_location(conn, id, status, &actor.id).map_err(|err| {
            warn!("Failed to review location {id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn approve_as_admin() {
        let fixture = BackendFixture::new();
        let id = fixture.create_location("Quán Mới", "usr");
        let admin = actor("admin", Role::Admin);
        let location = flows::review_location(
            &fixture.db_connections,
            id.as_str(),
            ModerationStatus::Approved,
            &admin,
        )
        .unwrap();
        assert_eq!(ModerationStatus::Approved, location.status);
        assert_eq!(Some(admin.id), location.approved_by);
        assert!(flows::get_location(&fixture.db_connections, id.as_str()).is_ok());
    }

    #[test]
    fn forbid_review_by_users() {
        let fixture = BackendFixture::new();
        let id = fixture.create_location("Quán Mới", "usr");
        let err = flows::review_location(
            &fixture.db_connections,
            id.as_str(),
            ModerationStatus::Approved,
            &actor("usr", Role::User),
        )
        .unwrap_err();
        assert!(err.is_forbidden());
    }
}
