use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical location in degrees (WGS 84).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let (lat, lng) = (lat.into(), lng.into());
        if is_valid_lat_deg(lat) && is_valid_lng_deg(lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    /// Panics on invalid degrees. Intended for constants and tests.
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let (lat, lng) = (lat.into(), lng.into());
        assert!(is_valid_lat_deg(lat), "Invalid latitude degrees: {lat}");
        assert!(is_valid_lng_deg(lng), "Invalid longitude degrees: {lng}");
        Self { lat, lng }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// The arithmetic mean of all coordinates.
    ///
    /// Good enough for centering a map on a bunch of
    /// nearby markers; not meant for points that span
    /// the antimeridian.
    pub fn center(coordinates: &[Coordinate]) -> Option<Self> {
        if coordinates.is_empty() {
            return None;
        }
        let n = coordinates.len() as f64;
        let (lat_sum, lng_sum) = coordinates
            .iter()
            .fold((0.0, 0.0), |(lat, lng), c| (lat + c.lat, lng + c.lng));
        Self::try_from_lat_lng_deg(lat_sum / n, lng_sum / n)
    }
}

fn is_valid_lat_deg(deg: f64) -> bool {
    deg.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    deg.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid_degrees() {
        let c = Coordinate::try_from_lat_lng_deg(-9.6, -35.7).unwrap();
        assert_eq!(c.lat(), -9.6);
        assert_eq!(c.lng(), -35.7);
        assert!(Coordinate::try_from_lat_lng_deg(90, 180).is_some());
        assert!(Coordinate::try_from_lat_lng_deg(-90, -180).is_some());
    }

    #[test]
    fn reject_invalid_degrees() {
        assert!(Coordinate::try_from_lat_lng_deg(90.1, 0).is_none());
        assert!(Coordinate::try_from_lat_lng_deg(0, -180.5).is_none());
        assert!(Coordinate::try_from_lat_lng_deg(f64::NAN, 0).is_none());
        assert!(Coordinate::try_from_lat_lng_deg(0, f64::INFINITY).is_none());
    }

    #[test]
    fn center_of_coordinates() {
        assert!(Coordinate::center(&[]).is_none());
        let c = Coordinate::center(&[
            Coordinate::from_lat_lng_deg(-10.0, -36.0),
            Coordinate::from_lat_lng_deg(-8.0, -34.0),
        ])
        .unwrap();
        assert_eq!(c.to_lat_lng_deg(), (-9.0, -35.0));
    }
}
