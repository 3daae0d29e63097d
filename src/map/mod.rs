pub mod geo;
pub mod projection;
pub mod widget;

pub use geo::{BoundingBox, LatLng};
pub use projection::{MapView, ScreenPoint};
pub use widget::{Cursor, Key, MapListener, MapWidget, Marker, PointerEvent};
