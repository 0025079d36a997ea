use super::*;
use vdb_core::util::filter::search_text;

impl LocationRepo for DbReadOnly<'_> {
    fn create_location(&self, _location: &Location) -> Result<()> {
        Err(read_only_access())
    }
    fn update_location(&self, _location: &Location) -> Result<()> {
        Err(read_only_access())
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn delete_location(&self, _id: &str) -> Result<usize> {
        Err(read_only_access())
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
    fn count_locations(&self, filters: &[LocationFilter]) -> Result<u64> {
        count_locations(&mut self.conn.borrow_mut(), filters)
    }
    fn is_slug_taken(&self, lang: Language, slug: &str, except_id: Option<&str>) -> Result<bool> {
        is_slug_taken(&mut self.conn.borrow_mut(), lang, slug, except_id)
    }
}

impl LocationRepo for DbConnection<'_> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn delete_location(&self, id: &str) -> Result<usize> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
    fn count_locations(&self, filters: &[LocationFilter]) -> Result<u64> {
        count_locations(&mut self.conn.borrow_mut(), filters)
    }
    fn is_slug_taken(&self, lang: Language, slug: &str, except_id: Option<&str>) -> Result<bool> {
        is_slug_taken(&mut self.conn.borrow_mut(), lang, slug, except_id)
    }
}

impl From<&Location> for models::Location {
    fn from(from: &Location) -> Self {
        Self {
            id: from.id.to_string(),
            name_vi: from.name_vi.clone(),
            name_en: from.name_en.clone(),
            slug_vi: from.slug_vi.clone(),
            slug_en: from.slug_en.clone(),
            lat: from.pos.lat_deg(),
            lng: from.pos.lng_deg(),
            address_vi: from.address_vi.clone(),
            address_en: from.address_en.clone(),
            district_vi: from.district_vi.clone(),
            district_en: from.district_en.clone(),
            cuisine_vi: from.cuisine_vi.clone(),
            cuisine_en: from.cuisine_en.clone(),
            category: from.category.to_string(),
            price_range: from.price_range.to_string(),
            phone: from.phone.clone(),
            website: from.website.clone(),
            hours_open: from.hours_open.clone(),
            hours_close: from.hours_close.clone(),
            description_vi: from.description_vi.clone(),
            description_en: from.description_en.clone(),
            status: from.status.into(),
            submitted_by: from.submitted_by.to_string(),
            approved_by: from.approved_by.as_ref().map(ToString::to_string),
            search_text: search_text(from),
            created_at: from.created_at.as_millis(),
            updated_at: from.updated_at.as_millis(),
        }
    }
}

fn load_location(row: models::Location) -> Result<Location> {
    let models::Location {
        id,
        name_vi,
        name_en,
        slug_vi,
        slug_en,
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
        status,
        submitted_by,
        approved_by,
        search_text: _,
        created_at,
        updated_at,
    } = row;
    Ok(Location {
        id: id.into(),
        name_vi,
        name_en,
        slug_vi,
        slug_en,
        pos: MapPoint::from_lat_lng_deg(lat, lng),
        address_vi,
        address_en,
        district_vi,
        district_en,
        cuisine_vi,
        cuisine_en,
        category: load_enum("category", &category)?,
        price_range: load_enum("price range", &price_range)?,
        phone,
        website,
        hours_open,
        hours_close,
        description_vi,
        description_en,
        status: load_moderation_status(status)?,
        submitted_by: submitted_by.into(),
        approved_by: approved_by.map(Into::into),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn create_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    diesel::insert_into(schema::locations::table)
        .values(&models::Location::from(location))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::update(dsl::locations.find(location.id.as_str()))
        .set(&models::Location::from(location))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<Location> {
    use schema::locations::dsl;
    let row = dsl::locations
        .find(id)
        .first::<models::Location>(conn)
        .map_err(from_diesel_err)?;
    load_location(row)
}

fn delete_location(conn: &mut SqliteConnection, id: &str) -> Result<usize> {
    use schema::locations::dsl;
    // Ownerships, votes and photos are deleted by ON DELETE CASCADE
    diesel::delete(dsl::locations.find(id))
        .execute(conn)
        .map_err(from_diesel_err)
}

// Literal match of '%', '_' and the escape character itself
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn filtered_locations(filters: &[LocationFilter]) -> schema::locations::BoxedQuery<'_, Sqlite> {
    use schema::{location_tags::dsl as vote_dsl, locations::dsl};
    let mut query = schema::locations::table.into_boxed();
    for filter in filters {
        match filter {
            LocationFilter::Status(status) => {
                query = query.filter(dsl::status.eq(ModerationStatusPrimitive::from(*status)));
            }
            LocationFilter::Cuisine(cuisine) => {
                query = query.filter(dsl::cuisine_vi.eq(cuisine.as_str()));
            }
            LocationFilter::District(district) => {
                query = query.filter(dsl::district_vi.eq(district.as_str()));
            }
            LocationFilter::PriceRange(price_range) => {
                query = query.filter(dsl::price_range.eq(price_range.as_ref()));
            }
            LocationFilter::Category(category) => {
                query = query.filter(dsl::category.eq(category.as_ref()));
            }
            LocationFilter::Search(needle) => {
                // Both the needle and the search text are lowercase
                let pattern = format!("%{}%", escape_like(needle));
                query = query.filter(dsl::search_text.like(pattern).escape('\\'));
            }
            LocationFilter::Tags(tag_ids) => {
                for tag_id in tag_ids {
                    query = query.filter(
                        dsl::id.eq_any(
                            schema::location_tags::table
                                .select(vote_dsl::location_id)
                                .filter(vote_dsl::tag_id.eq(tag_id.as_str())),
                        ),
                    );
                }
            }
        }
    }
    query
}

fn query_locations(conn: &mut SqliteConnection, query: &LocationQuery) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    let LocationQuery {
        filters,
        pagination,
    } = query;
    let mut query = filtered_locations(filters)
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::id); // disambiguation of equal time stamps

    // Pagination
    let offset = pagination.offset.unwrap_or(0) as i64;
    // SQLite does not support an OFFSET without a LIMIT
    // <https://www.sqlite.org/lang_select.html>
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
        // Optional OFFSET
        if offset > 0 {
            query = query.offset(offset);
        }
    } else if offset > 0 {
        // Mandatory LIMIT
        query = query.limit(i64::MAX);
        query = query.offset(offset);
    }

    query
        .load::<models::Location>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_location)
        .collect()
}

fn count_locations(conn: &mut SqliteConnection, filters: &[LocationFilter]) -> Result<u64> {
    Ok(filtered_locations(filters)
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}

fn is_slug_taken(
    conn: &mut SqliteConnection,
    lang: Language,
    slug: &str,
    except_id: Option<&str>,
) -> Result<bool> {
    use schema::locations::dsl;
    let mut query = dsl::locations.select(dsl::id).into_boxed();
    query = match lang {
        Language::Vi => query.filter(dsl::slug_vi.eq(slug)),
        Language::En => query.filter(dsl::slug_en.eq(slug)),
    };
    if let Some(id) = except_id {
        query = query.filter(dsl::id.ne(id));
    }
    Ok(query
        .first::<String>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .is_some())
}
