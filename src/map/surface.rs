//! Map Surface Abstraction
//!
//! Opaque-handle interface over the concrete mapping widget, so the marker
//! synchronization logic can be exercised against a fake surface in tests.

use crate::models::Place;

/// Visual variant of a marker icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Default,
    Highlighted,
}

/// Geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned bounding box over coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn of(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Grow the box to cover `point`
    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lng);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lng);
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

/// One marker per place, an adjustable viewport. Implemented by the Leaflet
/// backend in production and by a recording fake in tests.
pub trait MapSurface {
    /// Opaque on-map marker handle
    type Handle;

    /// Create a marker for `place` with the given icon and its popup bound,
    /// and add it to the map
    fn add_marker(&mut self, place: &Place, style: MarkerStyle) -> Result<Self::Handle, String>;

    /// Remove a marker from the map
    fn remove_marker(&mut self, handle: &Self::Handle);

    /// Switch a marker's icon variant
    fn set_marker_style(&mut self, handle: &Self::Handle, style: MarkerStyle);

    fn open_popup(&mut self, handle: &Self::Handle);

    fn close_popup(&mut self, handle: &Self::Handle);

    /// Pan and zoom the viewport so `bounds` is visible with a pixel margin
    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding_px: u32);

    /// Pan (without zooming) so `center` is in the middle of the viewport
    fn pan_to(&mut self, center: LatLng);
}
