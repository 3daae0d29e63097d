use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned box in degrees. `north >= south` and `east >= west` always hold
/// because the only way in is [`BoundingBox::from_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Builds the box spanned by two opposite corners, in any order.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            north: a.lat.max(b.lat),
            south: a.lat.min(b.lat),
            east: a.lng.max(b.lng),
            west: a.lng.min(b.lng),
        }
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// A box with no area, e.g. from a click without a drag.
    pub fn is_degenerate(&self) -> bool {
        self.north <= self.south || self.east <= self.west
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }
}
