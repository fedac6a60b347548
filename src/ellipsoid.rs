//! Provides [`Ellipsoid`] and the reference ellipsoids used in Sweden.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::internal::horner;

/// GRS 80, the ellipsoid of SWEREF 99.
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);

/// Bessel 1841, the ellipsoid of the original RT 90.
pub const BESSEL_1841: Ellipsoid = Ellipsoid::new(6_377_397.155, 1.0 / 299.152_812_8);

/// Represents a reference ellipsoid, the semi-major axis and the flattening.
///
/// Angles taken by the methods are in \[deg\], lengths are in \[m\].
///
/// # Example
///
/// ```
/// # use swegrid::ellipsoid::GRS80;
/// #
/// assert_eq!(GRS80.semi_major_axis, 6378137.0);
/// assert!((GRS80.semi_minor_axis() - 6356752.314140).abs() < 1e-6);
///
/// // The length of the quarter meridian
/// assert!((GRS80.meridian_arc(90.0) - 10001965.729).abs() < 1e-3);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// The semi-major axis \[m\]
    pub semi_major_axis: f64,
    /// The flattening
    pub flattening: f64,
}

impl Ellipsoid {
    /// Makes an [`Ellipsoid`].
    ///
    /// This does not check the value range.
    #[inline]
    pub const fn new(semi_major_axis: f64, flattening: f64) -> Self {
        Self {
            semi_major_axis,
            flattening,
        }
    }

    /// Returns the semi-minor axis 𝑎(1 − 𝑓).
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// Returns the first eccentricity squared 𝑒² = 𝑓(2 − 𝑓).
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Returns the third flattening 𝑛 = 𝑓 / (2 − 𝑓).
    #[inline]
    pub fn third_flattening(&self) -> f64 {
        self.flattening / (2.0 - self.flattening)
    }

    /// Returns the rectifying radius, the radius of the sphere
    /// which has the same meridian length as `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::ellipsoid::GRS80;
    /// #
    /// assert!((GRS80.rectifying_radius() - 6367449.145771).abs() < 1e-6);
    /// ```
    pub fn rectifying_radius(&self) -> f64 {
        let n = self.third_flattening();
        let n2 = n * n;
        self.semi_major_axis / (1.0 + n) * horner(n2, &[1.0, 1.0 / 4.0, 1.0 / 64.0])
    }

    /// Returns the rectifying latitude \[rad\] of `latitude` \[rad\].
    pub(crate) fn rectifying_latitude_rad(&self, latitude: f64) -> f64 {
        let n = self.third_flattening();
        let coeffs = [
            horner(n, &[0.0, -3.0 / 2.0, 0.0, 9.0 / 16.0]),
            horner(n, &[0.0, 0.0, 15.0 / 16.0, 0.0, -15.0 / 32.0]),
            horner(n, &[0.0, 0.0, 0.0, -35.0 / 48.0]),
            horner(n, &[0.0, 0.0, 0.0, 0.0, 315.0 / 512.0]),
        ];

        let mut result = latitude;
        for (c, j) in coeffs.iter().zip(1..) {
            result += c * (2.0 * j as f64 * latitude).sin();
        }
        result
    }

    /// Returns the rectifying latitude \[deg\] of `latitude` \[deg\].
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::ellipsoid::GRS80;
    /// #
    /// assert_eq!(GRS80.rectifying_latitude(0.0), 0.0);
    /// assert!((GRS80.rectifying_latitude(90.0) - 90.0).abs() < 1e-12);
    /// assert!(GRS80.rectifying_latitude(60.0) < 60.0);
    /// ```
    pub fn rectifying_latitude(&self, latitude: f64) -> f64 {
        self.rectifying_latitude_rad(latitude.to_radians())
            .to_degrees()
    }

    /// Returns the meridian arc length \[m\] from the equator to `latitude` \[deg\].
    pub fn meridian_arc(&self, latitude: f64) -> f64 {
        self.rectifying_radius() * self.rectifying_latitude_rad(latitude.to_radians())
    }

    /// Returns the radius of curvature in the meridian \[m\] at `latitude` \[deg\].
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::ellipsoid::GRS80;
    /// #
    /// assert!((GRS80.meridional_radius(0.0) - 6335439.327084).abs() < 1e-6);
    /// ```
    pub fn meridional_radius(&self, latitude: f64) -> f64 {
        let e2 = self.eccentricity_squared();
        let w2 = 1.0 - e2 * latitude.to_radians().sin().powi(2);
        self.semi_major_axis * (1.0 - e2) / (w2 * w2.sqrt())
    }

    /// Returns the radius of curvature in the prime vertical \[m\] at `latitude` \[deg\].
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::ellipsoid::GRS80;
    /// #
    /// assert_eq!(GRS80.prime_vertical_radius(0.0), 6378137.0);
    /// assert!((GRS80.prime_vertical_radius(90.0) - 6399593.625864).abs() < 1e-6);
    /// ```
    pub fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        let e2 = self.eccentricity_squared();
        self.semi_major_axis / (1.0 - e2 * latitude.to_radians().sin().powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_grs80() {
        assert_abs_diff_eq!(GRS80.semi_minor_axis(), 6_356_752.314_140, epsilon = 1e-6);
        assert_abs_diff_eq!(
            GRS80.eccentricity_squared(),
            0.006_694_380_022_900_8,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            GRS80.third_flattening(),
            0.001_679_220_394_628_1,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_bessel() {
        assert_abs_diff_eq!(BESSEL_1841.semi_minor_axis(), 6_356_078.963, epsilon = 1e-3);
        assert_abs_diff_eq!(1.0 / BESSEL_1841.flattening, 299.152_812_8, epsilon = 1e-9);
        assert!(BESSEL_1841.flattening < GRS80.flattening);
    }

    #[test]
    fn test_meridian_arc() {
        assert_eq!(GRS80.meridian_arc(0.0), 0.0);
        assert_abs_diff_eq!(GRS80.meridian_arc(90.0), 10_001_965.729, epsilon = 1e-3);
        // odd function of the latitude
        assert_eq!(GRS80.meridian_arc(-60.0), -GRS80.meridian_arc(60.0));
        // monotone
        let mut prev = f64::MIN;
        for lat in (0..=90).map(|v| v as f64) {
            let arc = GRS80.meridian_arc(lat);
            assert!(prev < arc, "{lat}");
            prev = arc;
        }
    }

    #[test]
    fn test_radii() {
        // equal at the pole
        assert_abs_diff_eq!(
            GRS80.meridional_radius(90.0),
            GRS80.prime_vertical_radius(90.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            GRS80.meridional_radius(0.0),
            GRS80.semi_major_axis * (1.0 - GRS80.eccentricity_squared()),
            epsilon = 1e-6
        );
        for lat in [0.0, 30.0, 55.0, 69.0] {
            assert!(GRS80.meridional_radius(lat) <= GRS80.prime_vertical_radius(lat));
        }

        // the derivative of the meridian arc is the meridional radius
        let h = 1e-4;
        let lat = 62.0;
        let diff = GRS80.meridian_arc(lat + h) - GRS80.meridian_arc(lat - h);
        let numeric = diff / (2.0 * h).to_radians();
        assert_abs_diff_eq!(numeric, GRS80.meridional_radius(lat), epsilon = 1e-2);
    }
}
