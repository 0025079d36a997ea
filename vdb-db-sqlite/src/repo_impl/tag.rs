use super::*;

impl TagRepo for DbReadOnly<'_> {
    fn create_tag(&self, _tag: &Tag) -> Result<()> {
        Err(read_only_access())
    }
    fn get_tag(&self, id: &str) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

impl TagRepo for DbConnection<'_> {
    fn create_tag(&self, tag: &Tag) -> Result<()> {
        create_tag(&mut self.conn.borrow_mut(), tag)
    }
    fn get_tag(&self, id: &str) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

pub(super) fn load_tag(row: models::Tag) -> Result<Tag> {
    let models::Tag {
        id,
        name_vi,
        name_en,
        category,
        icon,
    } = row;
    Ok(Tag {
        id: id.into(),
        name_vi,
        name_en,
        category: load_enum("tag category", &category)?,
        icon,
    })
}

fn create_tag(conn: &mut SqliteConnection, tag: &Tag) -> Result<()> {
    let insertable = models::Tag {
        id: tag.id.to_string(),
        name_vi: tag.name_vi.clone(),
        name_en: tag.name_en.clone(),
        category: tag.category.to_string(),
        icon: tag.icon.clone(),
    };
    diesel::insert_into(schema::tags::table)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_tag(conn: &mut SqliteConnection, id: &str) -> Result<Tag> {
    use schema::tags::dsl;
    let row = dsl::tags
        .find(id)
        .first::<models::Tag>(conn)
        .map_err(from_diesel_err)?;
    load_tag(row)
}

fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    dsl::tags
        .order_by(dsl::name_vi)
        .then_order_by(dsl::id)
        .load::<models::Tag>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_tag)
        .collect()
}
