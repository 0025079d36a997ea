use std::collections::HashSet;

use crate::{entities::*, repositories::LocationFilter};

/// Separates the fields of the search text so that
/// a needle never matches across field boundaries.
pub const SEARCH_TEXT_FIELD_SEPARATOR: char = '\u{1f}';

/// Lowercased name and address fields in both languages.
pub fn search_text(location: &Location) -> String {
    [
        Some(location.name_vi.as_str()),
        location.name_en.as_deref(),
        Some(location.address_vi.as_str()),
        location.address_en.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_lowercase)
    .collect::<Vec<_>>()
    .join(&SEARCH_TEXT_FIELD_SEPARATOR.to_string())
}

pub fn normalize_search_needle(needle: &str) -> Option<String> {
    let needle = needle.trim();
    (!needle.is_empty()).then(|| needle.to_lowercase())
}

pub trait LocationPredicate {
    fn matches(&self, location: &Location, voted_tags: &HashSet<Id>) -> bool;
}

impl LocationPredicate for LocationFilter {
    fn matches(&self, location: &Location, voted_tags: &HashSet<Id>) -> bool {
        match self {
            Self::Status(status) => location.status == *status,
            Self::Cuisine(cuisine) => &location.cuisine_vi == cuisine,
            Self::District(district) => &location.district_vi == district,
            Self::PriceRange(price_range) => location.price_range == *price_range,
            Self::Category(category) => location.category == *category,
            Self::Search(needle) => search_text(location).contains(needle.as_str()),
            Self::Tags(tag_ids) => tag_ids.iter().all(|id| voted_tags.contains(id)),
        }
    }
}

impl LocationPredicate for [LocationFilter] {
    fn matches(&self, location: &Location, voted_tags: &HashSet<Id>) -> bool {
        self.iter().all(|f| f.matches(location, voted_tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdb_entities::builders::*;

    #[test]
    fn search_in_names_and_addresses() {
        let mut location = Location::build()
            .name("Phở Hà Nội")
            .address("12 Đường Láng")
            .finish();
        location.name_en = Some("Hanoi Noodles".into());
        let none = HashSet::new();
        let search = |s: &str| LocationFilter::Search(normalize_search_needle(s).unwrap());
        assert!(search("PHỞ").matches(&location, &none));
        assert!(search("noodles").matches(&location, &none));
        assert!(search("đường").matches(&location, &none));
        assert!(!search("bún").matches(&location, &none));
        assert!(!search("nội\u{1f}12").matches(&location, &none));
        assert!(!search("%").matches(&location, &none));
    }

    #[test]
    fn blank_needle() {
        assert_eq!(None, normalize_search_needle("  "));
        assert_eq!(Some("cà phê".into()), normalize_search_needle(" Cà Phê "));
    }

    #[test]
    fn all_tags_must_have_votes() {
        let location = Location::build().finish();
        let voted: HashSet<Id> = ["a".into(), "b".into()].into_iter().collect();
        assert!(LocationFilter::Tags(vec![]).matches(&location, &voted));
        assert!(LocationFilter::Tags(vec!["a".into(), "b".into()]).matches(&location, &voted));
        assert!(!LocationFilter::Tags(vec!["a".into(), "c".into()]).matches(&location, &voted));
    }

    #[test]
    fn combine_filters() {
        let location = Location::build()
            .cuisine("Việt")
            .district("Quận 1")
            .category(Category::Cafe)
            .status(ModerationStatus::Approved)
            .finish();
        let none = HashSet::new();
        let filters = vec![
            LocationFilter::Status(ModerationStatus::Approved),
            LocationFilter::Cuisine("Việt".into()),
            LocationFilter::Category(Category::Cafe),
        ];
        assert!(filters.matches(&location, &none));
        let filters = vec![
            LocationFilter::Status(ModerationStatus::Approved),
            LocationFilter::District("Quận 3".into()),
        ];
        assert!(!filters.matches(&location, &none));
        assert!(!LocationFilter::PriceRange(PriceRange::Over500k).matches(&location, &none));
    }
}
