use super::prelude::*;
use crate::util::filter::normalize_search_needle;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_LIMIT: u64 = 20;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Public listing request.
///
/// Every filter is optional, blank strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct LocationListRequest {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub cuisine: Option<String>,
    pub district: Option<String>,
    pub price_range: Option<PriceRange>,
    pub category: Option<Category>,
    pub search: Option<String>,
    pub tags: Vec<Id>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        debug_assert!(page > 0);
        debug_assert!(limit > 0);
        let total_pages = total.div_ceil(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationPage {
    pub items: Vec<Location>,
    pub meta: PageMeta,
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Translates a listing request into a bounded query
/// that only covers approved locations.
///
/// Returns the query together with the effective page and limit.
pub fn build_location_query(
    req: &LocationListRequest,
    default_limit: u64,
) -> Result<(LocationQuery, u64, u64)> {
    let page = req.page.unwrap_or(DEFAULT_PAGE);
    if page < 1 {
        return Err(Error::Page);
    }
    let limit = req.limit.unwrap_or(default_limit);
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(Error::Limit);
    }
    let mut filters = vec![LocationFilter::Status(ModerationStatus::Approved)];
    if let Some(cuisine) = non_blank(&req.cuisine) {
        filters.push(LocationFilter::Cuisine(cuisine.to_string()));
    }
    if let Some(district) = non_blank(&req.district) {
        filters.push(LocationFilter::District(district.to_string()));
    }
    if let Some(price_range) = req.price_range {
        filters.push(LocationFilter::PriceRange(price_range));
    }
    if let Some(category) = req.category {
        filters.push(LocationFilter::Category(category));
    }
    if let Some(needle) = req.search.as_deref().and_then(normalize_search_needle) {
        filters.push(LocationFilter::Search(needle));
    }
    let mut tags: Vec<_> = req.tags.iter().filter(|id| id.is_valid()).cloned().collect();
    if !tags.is_empty() {
        tags.sort();
        tags.dedup();
        filters.push(LocationFilter::Tags(tags));
    }
    let pagination = Pagination {
        offset: Some((page - 1).saturating_mul(limit)),
        limit: Some(limit),
    };
    Ok((
        LocationQuery {
            filters,
            pagination,
        },
        page,
        limit,
    ))
}

pub fn list_locations<R>(
    repo: &R,
    req: &LocationListRequest,
    default_limit: u64,
) -> Result<LocationPage>
where
    R: LocationRepo,
{
    let (query, page, limit) = build_location_query(req, default_limit)?;
    let total = repo.count_locations(&query.filters)?;
    let items = if total > query.pagination.offset.unwrap_or_default() {
        repo.query_locations(&query)?
    } else {
        vec![]
    };
    Ok(LocationPage {
        items,
        meta: PageMeta::new(page, limit, total),
    })
}
