use super::{prelude::*, unique_slug::unique_location_slug};
use crate::{
    authorization::location::authorize_mutation,
    util::validate::{AutoCorrect as _, Validate as _},
};

/// Partial modification of a location.
///
/// Absent fields remain unchanged. For optional text fields
/// a blank value removes the current value.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdateLocation {
    pub name_vi        : Option<String>,
    pub name_en        : Option<String>,
    pub lat            : Option<f64>,
    pub lng            : Option<f64>,
    pub address_vi     : Option<String>,
    pub address_en     : Option<String>,
    pub district_vi    : Option<String>,
    pub district_en    : Option<String>,
    pub cuisine_vi     : Option<String>,
    pub cuisine_en     : Option<String>,
    pub category       : Option<Category>,
    pub price_range    : Option<PriceRange>,
    pub phone          : Option<String>,
    pub website        : Option<String>,
    pub hours_open     : Option<String>,
    pub hours_close    : Option<String>,
    pub description_vi : Option<String>,
    pub description_en : Option<String>,
}

fn apply_patch(location: &mut Location, patch: UpdateLocation) {
    let UpdateLocation {
        name_vi,
        name_en,
        lat,
        lng,
        address_vi,
        address_en,
        district_vi,
        district_en,
        cuisine_vi,
        cuisine_en,
        category,
        price_range,
        phone,
        website,
        hours_open,
        hours_close,
        description_vi,
        description_en,
    } = patch;
    if lat.is_some() || lng.is_some() {
        location.pos = MapPoint::from_lat_lng_deg(
            lat.unwrap_or(location.pos.lat_deg()),
            lng.unwrap_or(location.pos.lng_deg()),
        );
    }
    if let Some(name_vi) = name_vi {
        location.name_vi = name_vi;
    }
    if let Some(address_vi) = address_vi {
        location.address_vi = address_vi;
    }
    if let Some(district_vi) = district_vi {
        location.district_vi = district_vi;
    }
    if let Some(cuisine_vi) = cuisine_vi {
        location.cuisine_vi = cuisine_vi;
    }
    if let Some(category) = category {
        location.category = category;
    }
    if let Some(price_range) = price_range {
        location.price_range = price_range;
    }
    for (field, value) in [
        (&mut location.name_en, name_en),
        (&mut location.address_en, address_en),
        (&mut location.district_en, district_en),
        (&mut location.cuisine_en, cuisine_en),
        (&mut location.phone, phone),
        (&mut location.website, website),
        (&mut location.hours_open, hours_open),
        (&mut location.hours_close, hours_close),
        (&mut location.description_vi, description_vi),
        (&mut location.description_en, description_en),
    ] {
        if value.is_some() {
            *field = value;
        }
    }
}

/// Modifies a location on behalf of an admin or an approved owner.
pub fn update_location<R>(
    repo: &R,
    id: &str,
    patch: UpdateLocation,
    actor: &Actor,
) -> Result<Location>
where
    R: LocationRepo + LocationOwnerRepo,
{
    let mut location = repo.get_location(id)?;
    if !authorize_mutation(repo, actor, &location.id) {
        log::info!("User {} is not allowed to modify location {id}", actor.id);
        return Err(Error::Forbidden);
    }
    let name_vi_changed = patch.name_vi.is_some();
    let name_en_changed = patch.name_en.is_some();
    apply_patch(&mut location, patch);
    let mut location = location.auto_correct();
    location.validate()?;
    if name_vi_changed {
        location.slug_vi =
            unique_location_slug(repo, Language::Vi, &location.name_vi, &location.id)?;
    }
    if name_en_changed {
        location.slug_en = location
            .name_en
            .as_deref()
            .map(|name| unique_location_slug(repo, Language::En, name, &location.id))
            .transpose()?;
    }
    location.updated_at = Timestamp::now();
    repo.update_location(&location)?;
    log::info!("Updated location {id} by user {}", actor.id);
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use vdb_entities::builders::*;

    fn actor(id: &str, role: Role) -> Actor {
        Actor {
            id: id.into(),
            role,
        }
    }

    fn owner(user_id: &str, status: ModerationStatus) -> LocationOwner {
        LocationOwner {
            location_id: "loc".into(),
            user_id: user_id.into(),
            status,
            created_at: Timestamp::from_millis(0),
        }
    }

    fn db_with_location() -> MockDb {
        let db = MockDb::default();
        db.locations.borrow_mut().push(
            Location::build()
                .id("loc")
                .name("Quán Cũ")
                .slug("quan-cu")
                .finish(),
        );
        db
    }

    #[test]
    fn admin_renames_location() {
        let db = db_with_location();
        let patch = UpdateLocation {
            name_vi: Some("Quán Mới".into()),
            name_en: Some("New Place".into()),
            ..Default::default()
        };
        let location = update_location(&db, "loc", patch, &actor("admin", Role::Admin)).unwrap();
        assert_eq!("Quán Mới", location.name_vi);
        assert_eq!("quan-moi", location.slug_vi);
        assert_eq!(Some("new-place"), location.slug_en.as_deref());
        assert!(location.updated_at > location.created_at);
        assert_eq!(location, db.locations.borrow()[0]);
    }

    #[test]
    fn keep_slug_if_name_is_unchanged() {
        let db = db_with_location();
        db.locations.borrow_mut()[0].slug_vi = "custom".into();
        let patch = UpdateLocation {
            phone: Some("0901 234 567".into()),
            ..Default::default()
        };
        let location = update_location(&db, "loc", patch, &actor("admin", Role::Admin)).unwrap();
        assert_eq!("custom", location.slug_vi);
        assert_eq!(Some("0901 234 567"), location.phone.as_deref());
    }

    #[test]
    fn keep_own_slug_when_renaming_to_same_name() {
        let db = db_with_location();
        let patch = UpdateLocation {
            name_vi: Some("Quán cũ".into()),
            ..Default::default()
        };
        let location = update_location(&db, "loc", patch, &actor("admin", Role::Admin)).unwrap();
        assert_eq!("quan-cu", location.slug_vi);
    }

    #[test]
    fn approved_owner_may_update() {
        let db = db_with_location();
        db.owners
            .borrow_mut()
            .push(owner("usr", ModerationStatus::Approved));
        let patch = UpdateLocation {
            district_vi: Some("Quận 3".into()),
            website: Some(" ".into()),
            ..Default::default()
        };
        let location = update_location(&db, "loc", patch, &actor("usr", Role::User)).unwrap();
        assert_eq!("Quận 3", location.district_vi);
        assert_eq!(None, location.website);
    }

    #[test]
    fn forbid_non_owners() {
        let db = db_with_location();
        db.owners.borrow_mut().extend([
            owner("pending", ModerationStatus::Pending),
            owner("rejected", ModerationStatus::Rejected),
        ]);
        let before = db.locations.borrow()[0].clone();
        for user in ["pending", "rejected", "stranger"] {
            let patch = UpdateLocation {
                name_vi: Some("Hacked".into()),
                ..Default::default()
            };
            assert!(matches!(
                update_location(&db, "loc", patch, &actor(user, Role::User)),
                Err(Error::Forbidden)
            ));
        }
        assert_eq!(before, db.locations.borrow()[0]);
    }

    #[test]
    fn fail_closed_if_ownership_lookup_fails() {
        let db = db_with_location();
        db.owners
            .borrow_mut()
            .push(owner("usr", ModerationStatus::Approved));
        db.fail_owner_lookup.set(true);
        let patch = UpdateLocation {
            phone: Some("123".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_location(&db, "loc", patch, &actor("usr", Role::User)),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn not_found_before_authorization() {
        let db = db_with_location();
        let patch = UpdateLocation::default();
        assert!(matches!(
            update_location(&db, "missing", patch, &actor("stranger", Role::Guest)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn reject_invalid_patch() {
        let db = db_with_location();
        let before = db.locations.borrow()[0].clone();
        let patch = UpdateLocation {
            lng: Some(181.0),
            ..Default::default()
        };
        assert!(matches!(
            update_location(&db, "loc", patch, &actor("admin", Role::Admin)),
            Err(Error::Position)
        ));
        assert_eq!(before, db.locations.borrow()[0]);
    }
}
