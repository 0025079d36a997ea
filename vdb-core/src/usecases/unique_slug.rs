use super::prelude::*;
use crate::util::slug::{slugify, unique_slug};

/// Derives a slug from `name` that is not yet used by any
/// other location within the scope of `lang`.
///
/// Falls back to the location id if the name has no sluggable characters.
pub(crate) fn unique_location_slug<R>(
    repo: &R,
    lang: Language,
    name: &str,
    location_id: &Id,
) -> Result<String>
where
    R: LocationRepo,
{
    let mut base = slugify(name);
    if base.is_empty() {
        base = slugify(location_id.as_str());
    }
    let slug = unique_slug(&base, |candidate| {
        repo.is_slug_taken(lang, candidate, Some(location_id.as_str()))
    })?;
    if slug != base {
        log::debug!("Slug '{base}' ({lang}) is taken, using '{slug}' instead");
    }
    Ok(slug)
}
