use crate::id::*;

/// A user's endorsement of a tag for a location.
///
/// The three ids form the key; there is no further payload.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vote {
    pub location_id : Id,
    pub tag_id      : Id,
    pub user_id     : Id,
}
