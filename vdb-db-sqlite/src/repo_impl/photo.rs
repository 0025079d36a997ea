use super::*;

impl PhotoRepo for DbReadOnly<'_> {
    fn create_photo(&self, _photo: &Photo) -> Result<()> {
        Err(read_only_access())
    }
    fn photos_of_location(&self, location_id: &str) -> Result<Vec<Photo>> {
        photos_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

impl PhotoRepo for DbConnection<'_> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn photos_of_location(&self, location_id: &str) -> Result<Vec<Photo>> {
        photos_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

fn create_photo(conn: &mut SqliteConnection, photo: &Photo) -> Result<()> {
    let insertable = models::Photo {
        id: photo.id.to_string(),
        location_id: photo.location_id.to_string(),
        user_id: photo.user_id.to_string(),
        url: photo.url.clone(),
        is_primary: photo.is_primary,
        created_at: photo.created_at.as_millis(),
    };
    diesel::insert_into(schema::photos::table)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn photos_of_location(conn: &mut SqliteConnection, location_id: &str) -> Result<Vec<Photo>> {
    use schema::photos::dsl;
    Ok(dsl::photos
        .filter(dsl::location_id.eq(location_id))
        .order_by(dsl::is_primary.desc())
        .then_order_by(dsl::created_at)
        .then_order_by(dsl::id)
        .load::<models::Photo>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::Photo {
                 id,
                 location_id,
                 user_id,
                 url,
                 is_primary,
                 created_at,
             }| Photo {
                id: id.into(),
                location_id: location_id.into(),
                user_id: user_id.into(),
                url,
                is_primary,
                created_at: Timestamp::from_millis(created_at),
            },
        )
        .collect())
}
