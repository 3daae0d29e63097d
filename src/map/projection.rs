// Spherical Web Mercator, the projection slippy-map tiles are cut in.

use crate::map::geo::{BoundingBox, LatLng};
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// A point in pixels, either in world space or relative to the map container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What part of the world the map container is currently showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Geographic point to world pixel at `zoom`.
pub fn project(p: LatLng, zoom: f64) -> ScreenPoint {
    let size = world_size(zoom);
    let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (p.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    ScreenPoint::new(x, y)
}

/// World pixel at `zoom` back to a geographic point.
pub fn unproject(p: ScreenPoint, zoom: f64) -> LatLng {
    let size = world_size(zoom);
    let lng = p.x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * p.y / size;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

impl MapView {
    pub fn new(center: LatLng, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
        }
    }

    /// World pixel sitting at the container's top-left corner.
    fn pixel_origin(&self) -> ScreenPoint {
        let c = project(self.center, self.zoom);
        ScreenPoint::new(c.x - self.width / 2.0, c.y - self.height / 2.0)
    }

    pub fn container_point_to_lat_lng(&self, p: ScreenPoint) -> LatLng {
        let origin = self.pixel_origin();
        unproject(ScreenPoint::new(origin.x + p.x, origin.y + p.y), self.zoom)
    }

    pub fn lat_lng_to_container_point(&self, p: LatLng) -> ScreenPoint {
        let origin = self.pixel_origin();
        let world = project(p, self.zoom);
        ScreenPoint::new(world.x - origin.x, world.y - origin.y)
    }

    /// The geographic box the container currently covers.
    pub fn current_bounds(&self) -> BoundingBox {
        BoundingBox::from_corners(
            self.container_point_to_lat_lng(ScreenPoint::new(0.0, self.height)),
            self.container_point_to_lat_lng(ScreenPoint::new(self.width, 0.0)),
        )
    }

    /// Moves the view so the content shifts by (`dx`, `dy`) pixels, as a
    /// pointer drag does.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let shifted = ScreenPoint::new(self.width / 2.0 - dx, self.height / 2.0 - dy);
        self.center = self.container_point_to_lat_lng(shifted);
    }
}
