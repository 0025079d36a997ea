pub use vdb_boundary::*;

use vdb_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_location(from: NewLocation) -> usecases::NewLocation {
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
        } = from;
        usecases::NewLocation {
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
            category: category.into(),
            price_range: price_range.into(),
            phone,
            website,
            hours_open,
            hours_close,
            description_vi,
            description_en,
        }
    }

    pub fn update_location(from: UpdateLocation) -> usecases::UpdateLocation {
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
        } = from;
        usecases::UpdateLocation {
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
            category: category.map(Into::into),
            price_range: price_range.map(Into::into),
            phone,
            website,
            hours_open,
            hours_close,
            description_vi,
            description_en,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn location_page(from: usecases::LocationPage) -> LocationPage {
        let usecases::LocationPage { items, meta } = from;
        let usecases::PageMeta {
            page,
            limit,
            total,
            total_pages,
            has_next,
            has_prev,
        } = meta;
        LocationPage {
            items: items.into_iter().map(Into::into).collect(),
            meta: PageMeta {
                page,
                limit,
                total,
                total_pages,
                has_next,
                has_prev,
            },
        }
    }

    pub fn location_details(from: usecases::LocationDetails) -> LocationDetails {
        let usecases::LocationDetails {
            location,
            photos,
            submitter,
        } = from;
        LocationDetails {
            location: location.into(),
            photos: photos.into_iter().map(Into::into).collect(),
            submitter: submitter.map(Into::into),
        }
    }

    pub fn tag_catalog(from: usecases::TagCatalog) -> TagCatalog {
        let usecases::TagCatalog { positive, negative } = from;
        TagCatalog {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tag_stats(from: Vec<e::TagStat>) -> Vec<TagStat> {
        from.into_iter().map(Into::into).collect()
    }
}
