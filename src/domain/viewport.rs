use crate::map::geo::BoundingBox;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// The search area in the shape the GraphQL `SearchRequestLocation` wants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Default for Viewport {
    /// Downtown San Francisco.
    fn default() -> Self {
        Self {
            min: Coordinate {
                longitude: -122.45676123666753,
                latitude: 37.785855280585544,
            },
            max: Coordinate {
                longitude: -122.38160476472149,
                latitude: 37.79207094589198,
            },
        }
    }
}

impl From<BoundingBox> for Viewport {
    fn from(b: BoundingBox) -> Self {
        Self {
            min: Coordinate {
                longitude: b.west,
                latitude: b.south,
            },
            max: Coordinate {
                longitude: b.east,
                latitude: b.north,
            },
        }
    }
}
