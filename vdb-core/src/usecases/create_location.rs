use super::{prelude::*, unique_slug::unique_location_slug};
use crate::util::validate::{AutoCorrect as _, Validate as _};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name_vi        : String,
    pub name_en        : Option<String>,
    pub lat            : f64,
    pub lng            : f64,
    pub address_vi     : String,
    pub address_en     : Option<String>,
    pub district_vi    : String,
    pub district_en    : Option<String>,
    pub cuisine_vi     : String,
    pub cuisine_en     : Option<String>,
    pub category       : Category,
    pub price_range    : PriceRange,
    pub phone          : Option<String>,
    pub website        : Option<String>,
    pub hours_open     : Option<String>,
    pub hours_close    : Option<String>,
    pub description_vi : Option<String>,
    pub description_en : Option<String>,
}

/// Stores a new location for moderation.
///
/// The location stays invisible until it has been approved.
pub fn create_location<R>(repo: &R, new_location: NewLocation, submitted_by: Id) -> Result<Location>
where
    R: LocationRepo,
{
    let NewLocation {
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
    } = new_location;
    let now = Timestamp::now();
    let mut location = Location {
        id: Id::new(),
        name_vi,
        name_en,
        slug_vi: String::new(),
        slug_en: None,
        pos: MapPoint::from_lat_lng_deg(lat, lng),
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
        status: ModerationStatus::Pending,
        submitted_by,
        approved_by: None,
        created_at: now,
        updated_at: now,
    }
    .auto_correct();
    location.validate()?;
    location.slug_vi = unique_location_slug(repo, Language::Vi, &location.name_vi, &location.id)?;
    location.slug_en = location
        .name_en
        .as_deref()
        .map(|name| unique_location_slug(repo, Language::En, name, &location.id))
        .transpose()?;
    log::debug!("Creating new location: {}", location.slug_vi);
    repo.create_location(&location)?;
    log::info!(
        "Created location {} submitted by user {}",
        location.id,
        location.submitted_by
    );
    Ok(location)
}
