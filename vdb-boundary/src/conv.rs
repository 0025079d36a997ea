use super::*;
use vdb_entities as e;

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        use e::category::Category as E;
        match from {
            E::Food => Self::Food,
            E::Cafe => Self::Cafe,
            E::Bar => Self::Bar,
        }
    }
}

impl From<Category> for e::category::Category {
    fn from(from: Category) -> Self {
        match from {
            Category::Food => Self::Food,
            Category::Cafe => Self::Cafe,
            Category::Bar => Self::Bar,
        }
    }
}

impl From<e::price::PriceRange> for PriceRange {
    fn from(from: e::price::PriceRange) -> Self {
        use e::price::PriceRange as E;
        match from {
            E::Under100k => Self::Under100k,
            E::From100kTo300k => Self::From100kTo300k,
            E::From300kTo500k => Self::From300kTo500k,
            E::Over500k => Self::Over500k,
        }
    }
}

impl From<PriceRange> for e::price::PriceRange {
    fn from(from: PriceRange) -> Self {
        match from {
            PriceRange::Under100k => Self::Under100k,
            PriceRange::From100kTo300k => Self::From100kTo300k,
            PriceRange::From300kTo500k => Self::From300kTo500k,
            PriceRange::Over500k => Self::Over500k,
        }
    }
}

impl From<e::moderation::ModerationStatus> for ModerationStatus {
    fn from(from: e::moderation::ModerationStatus) -> Self {
        use e::moderation::ModerationStatus as E;
        match from {
            E::Rejected => Self::Rejected,
            E::Pending => Self::Pending,
            E::Approved => Self::Approved,
        }
    }
}

impl From<ModerationStatus> for e::moderation::ModerationStatus {
    fn from(from: ModerationStatus) -> Self {
        match from {
            ModerationStatus::Rejected => Self::Rejected,
            ModerationStatus::Pending => Self::Pending,
            ModerationStatus::Approved => Self::Approved,
        }
    }
}

impl From<e::tag::TagCategory> for TagCategory {
    fn from(from: e::tag::TagCategory) -> Self {
        use e::tag::TagCategory as E;
        match from {
            E::Positive => Self::Positive,
            E::Negative => Self::Negative,
        }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            name_vi,
            name_en,
            slug_vi,
            slug_en,
            pos,
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
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            name_vi,
            name_en,
            slug_vi,
            slug_en,
            lat: pos.lat_deg(),
            lng: pos.lng_deg(),
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
            status: status.into(),
            submitted_by: submitted_by.into(),
            approved_by: approved_by.map(Into::into),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::photo::Photo> for Photo {
    fn from(from: e::photo::Photo) -> Self {
        let e::photo::Photo {
            id,
            location_id: _,
            user_id: _,
            url,
            is_primary,
            created_at,
        } = from;
        Self {
            id: id.into(),
            url,
            is_primary,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::user::UserSummary> for UserSummary {
    fn from(from: e::user::UserSummary) -> Self {
        let e::user::UserSummary { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::tag::Tag> for Tag {
    fn from(from: e::tag::Tag) -> Self {
        let e::tag::Tag {
            id,
            name_vi,
            name_en,
            category,
            icon,
        } = from;
        Self {
            id: id.into(),
            name_vi,
            name_en,
            category: category.into(),
            icon,
        }
    }
}

impl From<e::tag::TagStat> for TagStat {
    fn from(from: e::tag::TagStat) -> Self {
        let e::tag::TagStat {
            tag_id,
            name,
            vote_count,
            viewer_voted,
        } = from;
        Self {
            tag_id: tag_id.into(),
            name,
            vote_count,
            viewer_voted,
        }
    }
}
