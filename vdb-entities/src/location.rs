use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{category::*, geo::*, id::*, moderation::*, price::*, time::*};

/// Language scope of bilingual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    Vi,
    En,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id             : Id,
    pub name_vi        : String,
    pub name_en        : Option<String>,
    pub slug_vi        : String,
    pub slug_en        : Option<String>,
    pub pos            : MapPoint,
    pub address_vi     : String,
    pub address_en     : Option<String>,
    pub district_vi    : String,
    pub district_en    : Option<String>,
    pub cuisine_vi     : String,
    pub cuisine_en     : Option<String>,
    pub category       : Category,
    pub price_range    : PriceRange,
    pub phone          : Option<String>,
    pub website        : Option<String>,
    pub hours_open     : Option<String>,
    pub hours_close    : Option<String>,
    pub description_vi : Option<String>,
    pub description_en : Option<String>,
    pub status         : ModerationStatus,
    pub submitted_by   : Id,
    pub approved_by    : Option<Id>,
    pub created_at     : Timestamp,
    pub updated_at     : Timestamp,
}

impl Location {
    /// Only approved locations are visible through public read paths.
    pub fn is_visible(&self) -> bool {
        self.status.is_approved()
    }

    pub fn name(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::Vi => Some(self.name_vi.as_str()),
            Language::En => self.name_en.as_deref(),
        }
    }

    pub fn slug(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::Vi => Some(self.slug_vi.as_str()),
            Language::En => self.slug_en.as_deref(),
        }
    }

    pub fn set_slug(&mut self, lang: Language, slug: Option<String>) {
        match lang {
            Language::Vi => self.slug_vi = slug.unwrap_or_default(),
            Language::En => self.slug_en = slug,
        }
    }
}
