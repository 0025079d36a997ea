use super::*;

pub fn vote_tag(
    connections: &sqlite::Connections,
    location_id: &str,
    tag_id: &str,
    actor: &Actor,
) -> Result<()> {
    usecases::authorize_actor(actor, Role::User)?;
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::vote_tag(conn, location_id, tag_id, &actor.id))?)
}

pub fn unvote_tag(
    connections: &sqlite::Connections,
    location_id: &str,
    tag_id: &str,
    actor: &Actor,
) -> Result<()> {
    usecases::authorize_actor(actor, Role::User)?;
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::unvote_tag(conn, location_id, tag_id, &actor.id))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn vote_and_unvote_idempotently() {
        let fixture = BackendFixture::new();
        let id = fixture.create_location("Quán Ngon", "usr");
        fixture.approve(&id);
        let user = actor("u1", Role::User);
        for _ in 0..2 {
            flows::vote_tag(&fixture.db_connections, id.as_str(), "an-ngon", &user).unwrap();
        }
        let stats = flows::tag_stats(&fixture.db_connections, id.as_str(), None).unwrap();
        assert_eq!(1, stats.len());
        assert_eq!(1, stats[0].vote_count);

        for _ in 0..2 {
            flows::unvote_tag(&fixture.db_connections, id.as_str(), "an-ngon", &user).unwrap();
        }
        assert!(flows::tag_stats(&fixture.db_connections, id.as_str(), None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn vote_for_unknown_targets() {
        let fixture = BackendFixture::new();
        let pending = fixture.create_location("Quán Chờ", "usr");
        let user = actor("u1", Role::User);
        for (location_id, tag_id) in [
            (pending.as_str(), "an-ngon"),
            ("missing", "an-ngon"),
        ] {
            let err =
                flows::vote_tag(&fixture.db_connections, location_id, tag_id, &user).unwrap_err();
            assert!(err.is_not_found());
        }
        fixture.approve(&pending);
        let err = flows::vote_tag(&fixture.db_connections, pending.as_str(), "missing", &user)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
