use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id          : Id,
    pub location_id : Id,
    pub user_id     : Id,
    pub url         : String,
    pub is_primary  : bool,
    pub created_at  : Timestamp,
}
