use super::*;

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        Err(read_only_access())
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::User {
        id: u.id.to_string(),
        name: u.name.clone(),
        email: u.email.clone(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_user(conn: &mut SqliteConnection, id: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .find(id)
        .first::<models::User>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|models::User { id, name, email }| User {
            id: id.into(),
            name,
            email,
        }))
}
