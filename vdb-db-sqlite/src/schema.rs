///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        name -> Nullable<Text>,
        email -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    locations (id) {
        id -> Text,
        name_vi -> Text,
        name_en -> Nullable<Text>,
        slug_vi -> Text,
        slug_en -> Nullable<Text>,
        lat -> Double,
        lng -> Double,
        address_vi -> Text,
        address_en -> Nullable<Text>,
        district_vi -> Text,
        district_en -> Nullable<Text>,
        cuisine_vi -> Text,
        cuisine_en -> Nullable<Text>,
        category -> Text,
        price_range -> Text,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
        hours_open -> Nullable<Text>,
        hours_close -> Nullable<Text>,
        description_vi -> Nullable<Text>,
        description_en -> Nullable<Text>,
        status -> SmallInt,
        submitted_by -> Text,
        approved_by -> Nullable<Text>,
        // lowercased names and addresses
        search_text -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    location_owners (location_id, user_id) {
        location_id -> Text,
        user_id -> Text,
        status -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(location_owners -> locations (location_id));

///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tags (id) {
        id -> Text,
        name_vi -> Text,
        name_en -> Nullable<Text>,
        category -> Text,
        icon -> Nullable<Text>,
    }
}

table! {
    location_tags (location_id, tag_id, user_id) {
        location_id -> Text,
        tag_id -> Text,
        user_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(location_tags -> locations (location_id));
joinable!(location_tags -> tags (tag_id));

///////////////////////////////////////////////////////////////////////
// Photos
///////////////////////////////////////////////////////////////////////

table! {
    photos (id) {
        id -> Text,
        location_id -> Text,
        user_id -> Text,
        url -> Text,
        is_primary -> Bool,
        created_at -> BigInt,
    }
}

joinable!(photos -> locations (location_id));

allow_tables_to_appear_in_same_query!(
    users,
    locations,
    location_owners,
    tags,
    location_tags,
    photos,
);
