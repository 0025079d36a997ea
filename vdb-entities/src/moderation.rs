use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type ModerationStatusPrimitive = i16;

/// Lifecycle stage of a moderated record, i.e. a location
/// or the ownership claim of a user.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, AsRefStr, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModerationStatus {
    Rejected = -1,
    Pending  =  0,
    Approved =  1,
}

impl ModerationStatus {
    /// Only approved records are publicly visible or grant any rights.
    pub fn is_approved(self) -> bool {
        self == Self::Approved
    }
}

impl Default for ModerationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Error)]
#[error("Invalid moderation status primitive: {0}")]
pub struct InvalidModerationStatusPrimitive(ModerationStatusPrimitive);

impl TryFrom<ModerationStatusPrimitive> for ModerationStatus {
    type Error = InvalidModerationStatusPrimitive;
    fn try_from(from: ModerationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidModerationStatusPrimitive(from))
    }
}

impl From<ModerationStatus> for ModerationStatusPrimitive {
    fn from(from: ModerationStatus) -> Self {
        from as ModerationStatusPrimitive
    }
}
