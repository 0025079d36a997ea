use super::{tag::load_tag, *};

impl TagVoteRepo for DbReadOnly<'_> {
    fn add_vote_if_absent(&self, _vote: &Vote) -> Result<bool> {
        Err(read_only_access())
    }
    fn remove_vote(&self, _vote: &Vote) -> Result<bool> {
        Err(read_only_access())
    }
    fn votes_with_tags_of_location(&self, location_id: &str) -> Result<Vec<(Vote, Tag)>> {
        votes_with_tags_of_location(&mut self.conn.borrow_mut(), location_id)
    }
    fn votes_of_user_for_location(&self, location_id: &str, user_id: &str) -> Result<Vec<Vote>> {
        votes_of_user_for_location(&mut self.conn.borrow_mut(), location_id, user_id)
    }
}

impl TagVoteRepo for DbConnection<'_> {
    fn add_vote_if_absent(&self, vote: &Vote) -> Result<bool> {
        add_vote_if_absent(&mut self.conn.borrow_mut(), vote)
    }
    fn remove_vote(&self, vote: &Vote) -> Result<bool> {
        remove_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn votes_with_tags_of_location(&self, location_id: &str) -> Result<Vec<(Vote, Tag)>> {
        votes_with_tags_of_location(&mut self.conn.borrow_mut(), location_id)
    }
    fn votes_of_user_for_location(&self, location_id: &str, user_id: &str) -> Result<Vec<Vote>> {
        votes_of_user_for_location(&mut self.conn.borrow_mut(), location_id, user_id)
    }
}

fn load_vote(row: models::Vote) -> Vote {
    let models::Vote {
        location_id,
        tag_id,
        user_id,
        created_at: _,
    } = row;
    Vote {
        location_id: location_id.into(),
        tag_id: tag_id.into(),
        user_id: user_id.into(),
    }
}

fn add_vote_if_absent(conn: &mut SqliteConnection, vote: &Vote) -> Result<bool> {
    let insertable = models::NewVote {
        location_id: vote.location_id.as_str(),
        tag_id: vote.tag_id.as_str(),
        user_id: vote.user_id.as_str(),
        created_at: Timestamp::now().as_millis(),
    };
    // Atomic: the composite primary key absorbs duplicates
    let count = diesel::insert_or_ignore_into(schema::location_tags::table)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn remove_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<bool> {
    use schema::location_tags::dsl;
    let count = diesel::delete(
        dsl::location_tags
            .filter(dsl::location_id.eq(vote.location_id.as_str()))
            .filter(dsl::tag_id.eq(vote.tag_id.as_str()))
            .filter(dsl::user_id.eq(vote.user_id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn votes_with_tags_of_location(
    conn: &mut SqliteConnection,
    location_id: &str,
) -> Result<Vec<(Vote, Tag)>> {
    use schema::location_tags::dsl;
    schema::location_tags::table
        .inner_join(schema::tags::table)
        .filter(dsl::location_id.eq(location_id))
        .select((
            schema::location_tags::all_columns,
            schema::tags::all_columns,
        ))
        .order_by(dsl::created_at)
        .then_order_by(dsl::tag_id)
        .then_order_by(dsl::user_id)
        .load::<(models::Vote, models::Tag)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(vote, tag)| Ok((load_vote(vote), load_tag(tag)?)))
        .collect()
}

fn votes_of_user_for_location(
    conn: &mut SqliteConnection,
    location_id: &str,
    user_id: &str,
) -> Result<Vec<Vote>> {
    use schema::location_tags::dsl;
    Ok(dsl::location_tags
        .filter(dsl::location_id.eq(location_id))
        .filter(dsl::user_id.eq(user_id))
        .load::<models::Vote>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_vote)
        .collect())
}
