use serde::{Deserialize, Serialize};

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id             : String,
    pub name_vi        : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name_en        : Option<String>,
    pub slug_vi        : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub slug_en        : Option<String>,
    pub lat            : f64,
    pub lng            : f64,
    pub address_vi     : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address_en     : Option<String>,
    pub district_vi    : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub district_en    : Option<String>,
    pub cuisine_vi     : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cuisine_en     : Option<String>,
    pub category       : Category,
    pub price_range    : PriceRange,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone          : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hours_open     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hours_close    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description_vi : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description_en : Option<String>,
    pub status         : ModerationStatus,
    pub submitted_by   : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approved_by    : Option<String>,
    /// Milliseconds since the Unix epoch
    pub created_at     : i64,
    /// Milliseconds since the Unix epoch
    pub updated_at     : i64,
}

/// Payload for submitting a new location.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewLocation {
    pub name_vi        : String,
    pub name_en        : Option<String>,
    pub lat            : f64,
    pub lng            : f64,
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
}

/// Partial modification of a location.
///
/// Missing fields are left untouched.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(default)]
pub struct UpdateLocation {
    pub name_vi        : Option<String>,
    pub name_en        : Option<String>,
    pub lat            : Option<f64>,
    pub lng            : Option<f64>,
    pub address_vi     : Option<String>,
    pub address_en     : Option<String>,
    pub district_vi    : Option<String>,
    pub district_en    : Option<String>,
    pub cuisine_vi     : Option<String>,
    pub cuisine_en     : Option<String>,
    pub category       : Option<Category>,
    pub price_range    : Option<PriceRange>,
    pub phone          : Option<String>,
    pub website        : Option<String>,
    pub hours_open     : Option<String>,
    pub hours_close    : Option<String>,
    pub description_vi : Option<String>,
    pub description_en : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub is_primary: bool,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationDetails {
    #[serde(flatten)]
    pub location: Location,
    pub photos: Vec<Photo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter: Option<UserSummary>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationPage {
    pub items: Vec<Location>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Tag {
    pub id: String,
    pub name_vi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    pub category: TagCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct TagCatalog {
    pub positive: Vec<Tag>,
    pub negative: Vec<Tag>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct TagStat {
    pub tag_id: String,
    pub name: String,
    pub vote_count: u64,
    pub viewer_voted: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Cafe,
    Bar,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum PriceRange {
    #[serde(rename = "duoi-100k")]
    Under100k,
    #[serde(rename = "100-300k")]
    From100kTo300k,
    #[serde(rename = "300-500k")]
    From300kTo500k,
    #[serde(rename = "tren-500k")]
    Over500k,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Rejected,
    Pending,
    Approved,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Positive,
    Negative,
}

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(all(test, feature = "extra-derive"))]
mod tests {
    use super::*;

    #[test]
    fn page_output_is_flat_and_camel_cased() {
        let page = LocationPage {
            items: vec![],
            meta: PageMeta {
                page: 2,
                limit: 20,
                total: 41,
                total_pages: 3,
                has_next: true,
                has_prev: true,
            },
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            serde_json::json!({
                "items": [],
                "page": 2,
                "limit": 20,
                "total": 41,
                "totalPages": 3,
                "hasNext": true,
                "hasPrev": true,
            }),
            json
        );
    }

    #[test]
    fn tag_stats_are_camel_cased() {
        let stat = TagStat {
            tag_id: "an-ngon".into(),
            name: "Ăn ngon".into(),
            vote_count: 2,
            viewer_voted: false,
        };
        let json = serde_json::to_string(&stat).unwrap();
        assert_eq!(
            r#"{"tagId":"an-ngon","name":"Ăn ngon","voteCount":2,"viewerVoted":false}"#,
            json
        );
    }

    #[test]
    fn deserialize_partial_update() {
        let patch: UpdateLocation =
            serde_json::from_str(r#"{"name_vi":"Quán Mới","price_range":"300-500k"}"#).unwrap();
        assert_eq!(Some("Quán Mới"), patch.name_vi.as_deref());
        assert_eq!(Some(PriceRange::From300kTo500k), patch.price_range);
        assert!(patch.lat.is_none());
    }

    #[test]
    fn reject_unknown_price_range() {
        assert!(serde_json::from_str::<PriceRange>(r#""free""#).is_err());
        assert_eq!(
            PriceRange::Under100k,
            serde_json::from_str(r#""duoi-100k""#).unwrap()
        );
    }
}
