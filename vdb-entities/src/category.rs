use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The kind of venue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Food,
    Cafe,
    Bar,
}
