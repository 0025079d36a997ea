/// Geographic coordinate in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const LAT_MIN: f64 = -90.0;
    pub const LAT_MAX: f64 = 90.0;
    pub const LNG_MIN: f64 = -180.0;
    pub const LNG_MAX: f64 = 180.0;

    /// Creates a point without checking the ranges of the coordinates.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        pos.is_valid().then_some(pos)
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (Self::LAT_MIN..=Self::LAT_MAX).contains(&self.lat)
            && (Self::LNG_MIN..=Self::LNG_MAX).contains(&self.lng)
    }
}
