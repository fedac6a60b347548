//! Provides [`GeodeticCoordinate`] and [`GridCoordinate`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dms::DMS;

/// Represents a position on the ellipsoid, a pair of latitude and longitude.
///
/// This does not check the value range, any finite value is projectable.
///
/// # Example
///
/// ```
/// # use swegrid::*;
/// #
/// let coord = GeodeticCoordinate::new(67.09068132472222, 21.034750437500002);
/// assert_eq!(coord.latitude, 67.09068132472222);
/// assert_eq!(coord.longitude, 21.034750437500002);
///
/// let (latitude, longitude) = coord.to_dms().unwrap();
/// assert_eq!(format!("{latitude:.6}"), "67°05′26.452769″");
/// assert_eq!(format!("{longitude:.6}"), "21°02′05.101575″");
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticCoordinate {
    /// The latitude \[deg\]
    pub latitude: f64,
    /// The longitude \[deg\]
    pub longitude: f64,
}

impl From<(f64, f64)> for GeodeticCoordinate {
    /// see [`GeodeticCoordinate::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<GeodeticCoordinate> for (f64, f64) {
    #[inline]
    fn from(rhs: GeodeticCoordinate) -> Self {
        (rhs.latitude, rhs.longitude)
    }
}

impl GeodeticCoordinate {
    /// Makes a [`GeodeticCoordinate`].
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude and longitude in DMS notation.
    ///
    /// Returns [`None`] when either is NaN or out of -180.0 to 180.0.
    pub fn to_dms(&self) -> Option<(DMS, DMS)> {
        let latitude = DMS::try_from(self.latitude).ok()?;
        let longitude = DMS::try_from(self.longitude).ok()?;
        Some((latitude, longitude))
    }
}

/// Represents a position on a grid, a pair of northing and easting.
///
/// The values are relative to the false origin of the [`CoordinateSystem`](crate::CoordinateSystem)
/// the position is projected on.
///
/// # Example
///
/// ```
/// # use swegrid::*;
/// #
/// let coord = GridCoordinate::new(7464296.16, 476780.52);
/// assert_eq!(coord.northing, 7464296.16);
/// assert_eq!(coord.easting, 476780.52);
/// assert_eq!(coord.round(), GridCoordinate::new(7464296.0, 476781.0));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCoordinate {
    /// The northing \[m\], often called x in Swedish practice
    pub northing: f64,
    /// The easting \[m\], often called y in Swedish practice
    pub easting: f64,
}

impl From<(f64, f64)> for GridCoordinate {
    /// see [`GridCoordinate::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<GridCoordinate> for (f64, f64) {
    #[inline]
    fn from(rhs: GridCoordinate) -> Self {
        (rhs.northing, rhs.easting)
    }
}

impl GridCoordinate {
    /// Makes a [`GridCoordinate`].
    #[inline]
    pub const fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    /// Returns the position rounded to whole meters, half away from zero.
    #[inline]
    #[must_use]
    pub fn round(&self) -> Self {
        Self::new(self.northing.round(), self.easting.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        let coord = GeodeticCoordinate::from((60.0, 15.0));
        assert_eq!(coord, GeodeticCoordinate::new(60.0, 15.0));
        assert_eq!(<(f64, f64)>::from(coord), (60.0, 15.0));

        let coord = GridCoordinate::from((6_651_411.19, 500_000.0));
        assert_eq!(coord, GridCoordinate::new(6_651_411.19, 500_000.0));
        assert_eq!(<(f64, f64)>::from(coord), (6_651_411.19, 500_000.0));
    }

    #[test]
    fn test_round() {
        assert_eq!(
            GridCoordinate::new(0.5, -0.5).round(),
            GridCoordinate::new(1.0, -1.0)
        );
        assert_eq!(
            GridCoordinate::new(6_672_498.52, 219_845.83).round(),
            GridCoordinate::new(6_672_499.0, 219_846.0)
        );
        assert!(GridCoordinate::new(f64::NAN, 0.0).round().northing.is_nan());
    }

    #[test]
    fn test_to_dms() {
        let (latitude, longitude) = GeodeticCoordinate::new(-33.5, 151.25).to_dms().unwrap();
        assert_eq!(latitude.to_string(), "-33°30′00″");
        assert_eq!(longitude.to_string(), "151°15′00″");

        assert!(GeodeticCoordinate::new(f64::NAN, 0.0).to_dms().is_none());
        assert!(GeodeticCoordinate::new(0.0, 181.0).to_dms().is_none());
    }
}
