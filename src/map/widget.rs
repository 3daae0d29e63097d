use crate::domain::Listing;
use crate::map::geo::{BoundingBox, LatLng};
use crate::map::projection::{MapView, ScreenPoint};
use crate::templates::components::marker_popup;
use maud::Markup;

pub const SF_CENTER: LatLng = LatLng::new(37.7749, -122.4194);
pub const DEFAULT_ZOOM: f64 = 12.0;

/// Dashed guide drawn over the San Francisco area.
pub const SF_BOUNDS: BoundingBox = BoundingBox {
    north: 37.8299,
    south: 37.7049,
    east: -122.3551,
    west: -122.5151,
};

/// Receives what the widget produces. The listing manager implements this and
/// is handed to the widget at construction.
pub trait MapListener {
    fn on_bounds_changed(&mut self, bounds: BoundingBox);

    fn on_marker_clicked(&mut self, listing: &Listing);

    /// Listings the markers should now mirror, if they changed since the last
    /// call. Polled by the widget after every callback.
    fn take_marker_update(&mut self) -> Option<Vec<Listing>>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(ScreenPoint),
    Move(ScreenPoint),
    Up(ScreenPoint),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Crosshair,
}

#[derive(Debug, Clone)]
pub struct Marker {
    pub position: LatLng,
    pub listing: Listing,
    pub popup: Markup,
}

pub struct MapWidget<L: MapListener> {
    view: MapView,
    listener: L,

    drawing: bool,
    start: Option<LatLng>,
    rectangle: Option<BoundingBox>,
    pan_anchor: Option<ScreenPoint>,
    dragging_enabled: bool,
    clear_enabled: bool,

    markers: Vec<Marker>,
    status: String,
}

impl<L: MapListener> MapWidget<L> {
    pub fn new(view: MapView, listener: L) -> Self {
        Self {
            view,
            listener,
            drawing: false,
            start: None,
            rectangle: None,
            pan_anchor: None,
            dragging_enabled: true,
            clear_enabled: false,
            markers: Vec::new(),
            status: "Map loaded - ready to draw search area".to_string(),
        }
    }

    /// A widget over the default San Francisco view.
    pub fn with_size(width: f64, height: f64, listener: L) -> Self {
        Self::new(MapView::new(SF_CENTER, DEFAULT_ZOOM, width, height), listener)
    }

    pub fn start_drawing(&mut self) {
        self.drawing = true;
        self.status = "Drawing mode active - click and drag to draw rectangle".to_string();
    }

    fn stop_drawing(&mut self) {
        self.drawing = false;
        self.start = None;
        self.dragging_enabled = true;
    }

    /// Feeds a pointer event in container coordinates. Returns true when the
    /// event was taken by rectangle drawing rather than the map.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.drawing {
            self.pan(event);
            return false;
        }

        match event {
            PointerEvent::Down(p) => {
                self.dragging_enabled = false;
                self.pan_anchor = None;
                let start = self.view.container_point_to_lat_lng(p);
                self.start = Some(start);
                self.rectangle = Some(BoundingBox::from_corners(start, start));
                self.status = "Drawing rectangle... release mouse to finish".to_string();
                true
            }
            PointerEvent::Move(p) => {
                let Some(start) = self.start else {
                    return false;
                };
                let current = self.view.container_point_to_lat_lng(p);
                self.rectangle = Some(BoundingBox::from_corners(start, current));
                true
            }
            PointerEvent::Up(p) => {
                let Some(start) = self.start else {
                    return false;
                };
                let end = self.view.container_point_to_lat_lng(p);
                let bounds = BoundingBox::from_corners(start, end);
                self.rectangle = Some(bounds);

                log::info!(
                    "Search area: north={} south={} east={} west={} center={:?}",
                    bounds.north,
                    bounds.south,
                    bounds.east,
                    bounds.west,
                    bounds.center()
                );

                self.stop_drawing();
                self.listener.on_bounds_changed(bounds);
                self.sync_markers();

                self.status = "Search area defined!".to_string();
                self.clear_enabled = true;
                true
            }
        }
    }

    fn pan(&mut self, event: PointerEvent) {
        if !self.dragging_enabled {
            return;
        }
        match event {
            PointerEvent::Down(p) => self.pan_anchor = Some(p),
            PointerEvent::Move(p) => {
                if let Some(anchor) = self.pan_anchor {
                    self.view.pan_by(p.x - anchor.x, p.y - anchor.y);
                    self.pan_anchor = Some(p);
                }
            }
            PointerEvent::Up(_) => self.pan_anchor = None,
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Escape && self.drawing {
            // A half-drawn box is dropped; a box from an earlier search stays.
            if self.start.is_some() {
                self.rectangle = None;
            }
            self.stop_drawing();
            self.status = "Drawing cancelled".to_string();
        }
    }

    pub fn clear_area(&mut self) {
        self.rectangle = None;
        self.clear_enabled = false;
        self.status = "Search area cleared".to_string();
        log::info!("Search area cleared");
    }

    /// Replaces every marker with one per listing that has a position.
    pub fn update_markers(&mut self, listings: &[Listing]) {
        self.markers = listings
            .iter()
            .filter_map(|listing| {
                let (lat, lng) = listing.position()?;
                Some(Marker {
                    position: LatLng::new(lat, lng),
                    listing: listing.clone(),
                    popup: marker_popup(listing),
                })
            })
            .collect();
        log::debug!("Updated {} property markers on map", self.markers.len());
    }

    /// Pulls a pending marker update from the listener, if any.
    pub fn sync_markers(&mut self) {
        if let Some(listings) = self.listener.take_marker_update() {
            self.update_markers(&listings);
        }
    }

    /// Returns false if there is no marker at `index`.
    pub fn click_marker(&mut self, index: usize) -> bool {
        let Some(marker) = self.markers.get(index) else {
            return false;
        };
        let listing = marker.listing.clone();
        self.listener.on_marker_clicked(&listing);
        self.sync_markers();
        true
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn current_bounds(&self) -> BoundingBox {
        self.view.current_bounds()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access for actions that don't start on the map (card buttons).
    /// Call [`MapWidget::sync_markers`] afterwards.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn dragging_enabled(&self) -> bool {
        self.dragging_enabled
    }

    pub fn draw_button_enabled(&self) -> bool {
        !self.drawing
    }

    pub fn clear_button_enabled(&self) -> bool {
        self.clear_enabled
    }

    pub fn cursor(&self) -> Cursor {
        if self.drawing {
            Cursor::Crosshair
        } else {
            Cursor::Default
        }
    }

    pub fn rectangle(&self) -> Option<BoundingBox> {
        self.rectangle
    }

    pub fn guide(&self) -> BoundingBox {
        SF_BOUNDS
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
