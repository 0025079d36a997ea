use vdb_entities::location::Location;
use thiserror::Error;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 200;
pub const ADDRESS_MIN_LEN: usize = 5;
pub const DESCRIPTION_MAX_LEN: usize = 2000;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

fn char_count(s: &str) -> usize {
    s.trim().chars().count()
}

pub fn is_valid_name(name: &str) -> bool {
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&char_count(name))
}

pub fn is_valid_optional_name(name: Option<&str>) -> bool {
    name.map(char_count).unwrap_or_default() <= NAME_MAX_LEN
}

pub fn is_valid_address(address: &str) -> bool {
    char_count(address) >= ADDRESS_MIN_LEN
}

pub fn is_valid_description(description: Option<&str>) -> bool {
    description.map(char_count).unwrap_or_default() <= DESCRIPTION_MAX_LEN
}

pub fn is_non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid address")]
    Address,
    #[error("Invalid position")]
    Position,
    #[error("Invalid district")]
    District,
    #[error("Invalid cuisine")]
    Cuisine,
    #[error("Invalid description")]
    Description,
}

impl Validate for Location {
    type Error = LocationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.name_vi) || !is_valid_optional_name(self.name_en.as_deref()) {
            return Err(Self::Error::Name);
        }
        if !is_valid_address(&self.address_vi) {
            return Err(Self::Error::Address);
        }
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        if !is_non_blank(&self.district_vi) {
            return Err(Self::Error::District);
        }
        if !is_non_blank(&self.cuisine_vi) {
            return Err(Self::Error::Cuisine);
        }
        if !is_valid_description(self.description_vi.as_deref())
            || !is_valid_description(self.description_en.as_deref())
        {
            return Err(Self::Error::Description);
        }
        Ok(())
    }
}

fn trimmed(s: String) -> String {
    s.trim().to_string()
}

fn trimmed_non_blank(s: Option<String>) -> Option<String> {
    s.map(trimmed).filter(|s| !s.is_empty())
}

impl AutoCorrect for Location {
    fn auto_correct(mut self) -> Self {
        self.name_vi = trimmed(self.name_vi);
        self.name_en = trimmed_non_blank(self.name_en);
        self.address_vi = trimmed(self.address_vi);
        self.address_en = trimmed_non_blank(self.address_en);
        self.district_vi = trimmed(self.district_vi);
        self.district_en = trimmed_non_blank(self.district_en);
        self.cuisine_vi = trimmed(self.cuisine_vi);
        self.cuisine_en = trimmed_non_blank(self.cuisine_en);
        self.phone = trimmed_non_blank(self.phone);
        self.website = trimmed_non_blank(self.website);
        self.hours_open = trimmed_non_blank(self.hours_open);
        self.hours_close = trimmed_non_blank(self.hours_close);
        self.description_vi = trimmed_non_blank(self.description_vi);
        self.description_en = trimmed_non_blank(self.description_en);
        self
    }
}
