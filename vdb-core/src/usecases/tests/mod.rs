use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

use super::{prelude::*, NewLocation};
use crate::util::filter::LocationPredicate as _;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<Location>>,
    pub owners: RefCell<Vec<LocationOwner>>,
    pub tags: RefCell<Vec<Tag>>,
    pub votes: RefCell<Vec<Vote>>,
    pub photos: RefCell<Vec<Photo>>,
    pub users: RefCell<Vec<User>>,
    pub fail_owner_lookup: Cell<bool>,
}

impl MockDb {
    fn voted_tags(&self, location_id: &Id) -> HashSet<Id> {
        self.votes
            .borrow()
            .iter()
            .filter(|v| &v.location_id == location_id)
            .map(|v| v.tag_id.clone())
            .collect()
    }

    fn filtered_locations(&self, filters: &[LocationFilter]) -> Vec<Location> {
        let mut locations: Vec<_> = self
            .locations
            .borrow()
            .iter()
            .filter(|l| filters.matches(l, &self.voted_tags(&l.id)))
            .cloned()
            .collect();
        locations.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        locations
    }
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: &Location) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        if locations.iter().any(|l| l.id == location.id) {
            return Err(RepoError::AlreadyExists);
        }
        locations.push(location.clone());
        Ok(())
    }

    fn update_location(&self, location: &Location) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let Some(existing) = locations.iter_mut().find(|l| l.id == location.id) else {
            return Err(RepoError::NotFound);
        };
        *existing = location.clone();
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<Location> {
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn delete_location(&self, id: &str) -> RepoResult<usize> {
        let mut locations = self.locations.borrow_mut();
        let len = locations.len();
        locations.retain(|l| l.id != id);
        self.owners.borrow_mut().retain(|o| o.location_id != id);
        self.votes.borrow_mut().retain(|v| v.location_id != id);
        self.photos.borrow_mut().retain(|p| p.location_id != id);
        Ok(len - locations.len())
    }

    fn query_locations(&self, query: &LocationQuery) -> RepoResult<Vec<Location>> {
        let offset = query.pagination.offset.unwrap_or_default() as usize;
        let limit = query.pagination.limit.map_or(usize::MAX, |l| l as usize);
        Ok(self
            .filtered_locations(&query.filters)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    fn count_locations(&self, filters: &[LocationFilter]) -> RepoResult<u64> {
        Ok(self.filtered_locations(filters).len() as u64)
    }

    fn is_slug_taken(&self, lang: Language, slug: &str, except_id: Option<&str>) -> RepoResult<bool> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| except_id.map_or(true, |id| l.id != id))
            .any(|l| l.slug(lang) == Some(slug)))
    }
}

impl LocationOwnerRepo for MockDb {
    fn create_location_owner(&self, owner: &LocationOwner) -> RepoResult<()> {
        self.owners.borrow_mut().push(owner.clone());
        Ok(())
    }

    fn owners_of_location(&self, location_id: &str) -> RepoResult<Vec<LocationOwner>> {
        if self.fail_owner_lookup.get() {
            return Err(RepoError::Other(anyhow::anyhow!("connection lost")));
        }
        Ok(self
            .owners
            .borrow()
            .iter()
            .filter(|o| o.location_id == location_id)
            .cloned()
            .collect())
    }
}

impl TagRepo for MockDb {
    fn create_tag(&self, tag: &Tag) -> RepoResult<()> {
        self.tags.borrow_mut().push(tag.clone());
        Ok(())
    }

    fn get_tag(&self, id: &str) -> RepoResult<Tag> {
        self.tags
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_tags(&self) -> RepoResult<Vec<Tag>> {
        Ok(self.tags.borrow().clone())
    }
}

impl TagVoteRepo for MockDb {
    fn add_vote_if_absent(&self, vote: &Vote) -> RepoResult<bool> {
        let mut votes = self.votes.borrow_mut();
        if votes.contains(vote) {
            return Ok(false);
        }
        votes.push(vote.clone());
        Ok(true)
    }

    fn remove_vote(&self, vote: &Vote) -> RepoResult<bool> {
        let mut votes = self.votes.borrow_mut();
        let len = votes.len();
        votes.retain(|v| v != vote);
        Ok(votes.len() < len)
    }

    fn votes_with_tags_of_location(&self, location_id: &str) -> RepoResult<Vec<(Vote, Tag)>> {
        let tags = self.tags.borrow();
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.location_id == location_id)
            .filter_map(|v| {
                tags.iter()
                    .find(|t| t.id == v.tag_id)
                    .map(|t| (v.clone(), t.clone()))
            })
            .collect())
    }

    fn votes_of_user_for_location(
        &self,
        location_id: &str,
        user_id: &str,
    ) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.location_id == location_id && v.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl PhotoRepo for MockDb {
    fn create_photo(&self, photo: &Photo) -> RepoResult<()> {
        self.photos.borrow_mut().push(photo.clone());
        Ok(())
    }

    fn photos_of_location(&self, location_id: &str) -> RepoResult<Vec<Photo>> {
        Ok(self
            .photos
            .borrow()
            .iter()
            .filter(|p| p.location_id == location_id)
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.id == id).cloned())
    }
}

pub fn new_location(name: &str) -> NewLocation {
    NewLocation {
        name_vi: name.into(),
        name_en: None,
        lat: 21.0285,
        lng: 105.8542,
        address_vi: "36 Hàng Bạc, Hoàn Kiếm".into(),
        address_en: None,
        district_vi: "Hoàn Kiếm".into(),
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
    }
}
