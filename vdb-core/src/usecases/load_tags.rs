use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    pub positive: Vec<Tag>,
    pub negative: Vec<Tag>,
}

pub fn load_tags<R: TagRepo>(repo: &R) -> Result<TagCatalog> {
    let mut tags = repo.all_tags()?;
    tags.sort_by(|a, b| a.name_vi.cmp(&b.name_vi).then_with(|| a.id.cmp(&b.id)));
    let (positive, negative) = tags
        .into_iter()
        .partition(|tag| tag.category == TagCategory::Positive);
    Ok(TagCatalog { positive, negative })
}

pub fn get_tag<R: TagRepo>(repo: &R, id: &str) -> Result<Tag> {
    Ok(repo.get_tag(id)?)
}
