use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Typical spending per person in Vietnamese đồng.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount, EnumIter, EnumString,
)]
pub enum PriceRange {
    #[strum(serialize = "duoi-100k")]
    Under100k,
    #[strum(serialize = "100-300k")]
    From100kTo300k,
    #[strum(serialize = "300-500k")]
    From300kTo500k,
    #[strum(serialize = "tren-500k")]
    Over500k,
}
