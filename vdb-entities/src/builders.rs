pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{location_builder::*, tag_builder::*};

pub mod location_builder {

    use super::*;
    use crate::{
        category::*, geo::*, id::*, location::*, moderation::*, price::*, time::*,
    };

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name_vi = name.into();
            self
        }
        pub fn name_en(mut self, name: Option<&str>) -> Self {
            self.location.name_en = name.map(Into::into);
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.location.slug_vi = slug.into();
            self
        }
        pub fn slug_en(mut self, slug: Option<&str>) -> Self {
            self.location.slug_en = slug.map(Into::into);
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.location.address_vi = address.into();
            self
        }
        pub fn address_en(mut self, address: Option<&str>) -> Self {
            self.location.address_en = address.map(Into::into);
            self
        }
        pub fn district(mut self, district: &str) -> Self {
            self.location.district_vi = district.into();
            self
        }
        pub fn cuisine(mut self, cuisine: &str) -> Self {
            self.location.cuisine_vi = cuisine.into();
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.location.category = category;
            self
        }
        pub fn price_range(mut self, price_range: PriceRange) -> Self {
            self.location.price_range = price_range;
            self
        }
        pub fn status(mut self, status: ModerationStatus) -> Self {
            self.location.status = status;
            self
        }
        pub fn submitted_by(mut self, user_id: &str) -> Self {
            self.location.submitted_by = user_id.into();
            self
        }
        pub fn approved_by(mut self, user_id: Option<&str>) -> Self {
            self.location.approved_by = user_id.map(Into::into);
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.location.created_at = Timestamp::from_millis(millis);
            self.location.updated_at = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    name_vi: "Quán ăn".into(),
                    name_en: None,
                    slug_vi: "quan-an".into(),
                    slug_en: None,
                    pos: MapPoint::from_lat_lng_deg(10.7769, 106.7009),
                    address_vi: "1 Lê Lợi, Quận 1".into(),
                    address_en: None,
                    district_vi: "Quận 1".into(),
                    district_en: None,
                    cuisine_vi: "Việt".into(),
                    cuisine_en: None,
                    category: Category::Food,
                    price_range: PriceRange::Under100k,
                    phone: None,
                    website: None,
                    hours_open: None,
                    hours_close: None,
                    description_vi: None,
                    description_en: None,
                    status: ModerationStatus::Approved,
                    submitted_by: "submitter".into(),
                    approved_by: None,
                    created_at: Timestamp::from_millis(0),
                    updated_at: Timestamp::from_millis(0),
                },
            }
        }
    }
}

pub mod tag_builder {

    use super::*;
    use crate::tag::*;

    #[derive(Debug)]
    pub struct TagBuild {
        tag: Tag,
    }

    impl TagBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.tag.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.tag.name_vi = name.into();
            self
        }
        pub fn category(mut self, category: TagCategory) -> Self {
            self.tag.category = category;
            self
        }
        pub fn finish(self) -> Tag {
            self.tag
        }
    }

    impl Builder for Tag {
        type Build = TagBuild;
        fn build() -> TagBuild {
            TagBuild {
                tag: Tag {
                    id: "tag".into(),
                    name_vi: "Ngon".into(),
                    name_en: None,
                    category: TagCategory::Positive,
                    icon: None,
                },
            }
        }
    }
}
