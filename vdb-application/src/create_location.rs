use super::*;

pub fn create_location(
    connections: &sqlite::Connections,
    new_location: usecases::NewLocation,
    actor: &Actor,
) -> Result<Location> {
    usecases::authorize_actor(actor, Role::User)?;
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_location(conn, new_location, actor.id.clone()).map_err(|err| {
            warn!("Failed to create location: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_pending_location() {
        let fixture = BackendFixture::new();
        let location = flows::create_location(
            &fixture.db_connections,
            new_location("Quán Cơm Nhà"),
            &actor("usr", Role::User),
        )
        .unwrap();
        assert_eq!(ModerationStatus::Pending, location.status);
        assert_eq!("quan-com-nha", location.slug_vi);
        assert_eq!(
            location,
            fixture
                .db_connections
                .shared()
                .unwrap()
                .get_location(location.id.as_str())
                .unwrap()
        );
    }

    #[test]
    fn suffix_duplicate_slugs() {
        let fixture = BackendFixture::new();
        let actor = actor("usr", Role::User);
        let first =
            flows::create_location(&fixture.db_connections, new_location("Phở Hòa"), &actor)
                .unwrap();
        let second =
            flows::create_location(&fixture.db_connections, new_location("PHỞ HOÀ"), &actor)
                .unwrap();
        assert_eq!("pho-hoa", first.slug_vi);
        assert_eq!("pho-hoa-2", second.slug_vi);
    }

    #[test]
    fn guests_cannot_create_locations() {
        let fixture = BackendFixture::new();
        let err = flows::create_location(
            &fixture.db_connections,
            new_location("Quán Cơm Nhà"),
            &actor("anon", Role::Guest),
        )
        .unwrap_err();
        assert!(err.is_forbidden());
    }

    #[test]
    fn reject_invalid_location() {
        let fixture = BackendFixture::new();
        let mut new = new_location("Quán Cơm Nhà");
        new.lng = 200.0;
        let err = flows::create_location(&fixture.db_connections, new, &actor("usr", Role::User))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
