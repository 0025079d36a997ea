use super::*;

impl LocationOwnerRepo for DbReadOnly<'_> {
    fn create_location_owner(&self, _owner: &LocationOwner) -> Result<()> {
        Err(read_only_access())
    }
    fn owners_of_location(&self, location_id: &str) -> Result<Vec<LocationOwner>> {
        owners_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

impl LocationOwnerRepo for DbConnection<'_> {
    fn create_location_owner(&self, owner: &LocationOwner) -> Result<()> {
        create_location_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn owners_of_location(&self, location_id: &str) -> Result<Vec<LocationOwner>> {
        owners_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

fn create_location_owner(conn: &mut SqliteConnection, owner: &LocationOwner) -> Result<()> {
    let LocationOwner {
        location_id,
        user_id,
        status,
        created_at,
    } = owner;
    let insertable = models::LocationOwner {
        location_id: location_id.to_string(),
        user_id: user_id.to_string(),
        status: (*status).into(),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::location_owners::table)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn owners_of_location(conn: &mut SqliteConnection, location_id: &str) -> Result<Vec<LocationOwner>> {
    use schema::location_owners::dsl;
    dsl::location_owners
        .filter(dsl::location_id.eq(location_id))
        .load::<models::LocationOwner>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::LocationOwner {
                 location_id,
                 user_id,
                 status,
                 created_at,
             }| {
                Ok(LocationOwner {
                    location_id: location_id.into(),
                    user_id: user_id.into(),
                    status: load_moderation_status(status)?,
                    created_at: Timestamp::from_millis(created_at),
                })
            },
        )
        .collect()
}
