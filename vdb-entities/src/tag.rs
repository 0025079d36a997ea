use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::id::*;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TagCategory {
    Positive,
    Negative,
}

/// Predefined, voteable label.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id       : Id,
    pub name_vi  : String,
    pub name_en  : Option<String>,
    pub category : TagCategory,
    pub icon     : Option<String>,
}

pub type VoteCount = u64;

/// Aggregated votes of a single tag for a single location.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStat {
    pub tag_id       : Id,
    pub name         : String,
    pub vote_count   : VoteCount,
    pub viewer_voted : bool,
}
