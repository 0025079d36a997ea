#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Queryable, Insertable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Queryable, Insertable, AsChangeset)]
#[diesel(table_name = locations, treat_none_as_null = true)]
pub struct Location {
    pub id: String,
    pub name_vi: String,
    pub name_en: Option<String>,
    pub slug_vi: String,
    pub slug_en: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub address_vi: String,
    pub address_en: Option<String>,
    pub district_vi: String,
    pub district_en: Option<String>,
    pub cuisine_vi: String,
    pub cuisine_en: Option<String>,
    pub category: String,
    pub price_range: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours_open: Option<String>,
    pub hours_close: Option<String>,
    pub description_vi: Option<String>,
    pub description_en: Option<String>,
    pub status: i16,
    pub submitted_by: String,
    pub approved_by: Option<String>,
    pub search_text: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = location_owners)]
pub struct LocationOwner {
    pub location_id: String,
    pub user_id: String,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = tags)]
pub struct Tag {
    pub id: String,
    pub name_vi: String,
    pub name_en: Option<String>,
    pub category: String,
    pub icon: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = location_tags)]
pub struct NewVote<'a> {
    pub location_id: &'a str,
    pub tag_id: &'a str,
    pub user_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Vote {
    pub location_id: String,
    pub tag_id: String,
    pub user_id: String,
    pub created_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = photos)]
pub struct Photo {
    pub id: String,
    pub location_id: String,
    pub user_id: String,
    pub url: String,
    pub is_primary: bool,
    pub created_at: i64,
}
