use std::f64::consts::FRAC_PI_4;

use super::topology::GeoPoint;

/// Latitude at which the Mercator square ends.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Spherical Mercator scaled and translated to screen pixels (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Mercator {
    pub const fn new(scale: f64, translate: (f64, f64)) -> Self {
        Self { scale, translate }
    }

    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let lambda = point.lon_deg.to_radians();
        let phi = point.lat_deg.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let y = (FRAC_PI_4 + phi / 2.0).tan().ln();
        (
            self.scale.mul_add(lambda, self.translate.0),
            (-self.scale).mul_add(y, self.translate.1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Mercator, MAX_LATITUDE};
    use crate::geo::GeoPoint;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-6, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn origin_lands_on_translate() {
        let projection = Mercator::new(90.0, (250.0, 200.0));
        let (x, y) = projection.project(GeoPoint::new(0.0, 0.0));
        assert_close(x, 250.0);
        assert_close(y, 200.0);
    }

    #[test]
    fn longitude_is_linear_and_north_is_up() {
        let projection = Mercator::new(90.0, (250.0, 200.0));
        let (x, _) = projection.project(GeoPoint::new(180.0, 0.0));
        assert_close(x, 250.0 + 90.0 * std::f64::consts::PI);

        let (_, north) = projection.project(GeoPoint::new(0.0, 45.0));
        let (_, south) = projection.project(GeoPoint::new(0.0, -45.0));
        assert!(north < 200.0 && south > 200.0);
        assert_close(200.0 - north, south - 200.0);
    }

    #[test]
    fn poles_are_clamped_to_the_square() {
        let projection = Mercator::new(1.0, (0.0, 0.0));
        let (_, pole) = projection.project(GeoPoint::new(0.0, -90.0));
        let (_, edge) = projection.project(GeoPoint::new(0.0, -MAX_LATITUDE));
        assert!(pole.is_finite());
        assert_close(pole, edge);
        assert_close(pole, std::f64::consts::PI);
    }
}
