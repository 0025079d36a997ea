use crate::{id::*, moderation::*, time::*};

/// Association between a user and a location that grants
/// mutation rights once it has been approved.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOwner {
    pub location_id : Id,
    pub user_id     : Id,
    pub status      : ModerationStatus,
    pub created_at  : Timestamp,
}

impl LocationOwner {
    pub fn is_approved_owner(&self, user_id: &Id, location_id: &Id) -> bool {
        self.status.is_approved() && &self.user_id == user_id && &self.location_id == location_id
    }
}
