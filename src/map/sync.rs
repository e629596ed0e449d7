//! Marker Synchronization
//!
//! Keeps the on-map marker set equal to the current place list and applies
//! the hover-highlight selection. The registry is rebuilt on every place
//! list change rather than diffed; itineraries are tens of places at most.

use std::collections::HashMap;

use crate::map::surface::{LatLng, LatLngBounds, MapSurface, MarkerStyle};
use crate::models::Place;

/// Pixel margin used when framing the viewport around all markers
pub const FIT_PADDING_PX: u32 = 48;

struct MarkerEntry<H> {
    handle: H,
    position: LatLng,
}

/// Owns the map surface and the place-id -> marker registry.
///
/// After any completed `sync_places` pass the registry key set equals the
/// id set of the rendered place list.
pub struct MarkerSync<S: MapSurface> {
    surface: S,
    markers: HashMap<String, MarkerEntry<S::Handle>>,
}

impl<S: MapSurface> MarkerSync<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            markers: HashMap::new(),
        }
    }

    /// Ids of the currently registered markers
    pub fn marker_ids(&self) -> Vec<&str> {
        self.markers.keys().map(String::as_str).collect()
    }

    /// Tear down, handing the surface back to the caller
    pub fn into_surface(mut self) -> S {
        for (_, entry) in self.markers.drain() {
            self.surface.remove_marker(&entry.handle);
        }
        self.surface
    }

    /// Rebuild the marker set for `places` and frame the viewport around
    /// it. An empty list leaves the viewport untouched. On error the
    /// registry still matches the markers actually on the map; the next
    /// place-list change retries naturally.
    pub fn sync_places(&mut self, places: &[Place]) -> Result<(), String> {
        for (_, entry) in self.markers.drain() {
            self.surface.remove_marker(&entry.handle);
        }

        let mut bounds: Option<LatLngBounds> = None;
        for place in places {
            if self.markers.contains_key(&place.id) {
                continue;
            }
            let position = LatLng::new(place.lat, place.lng);
            let handle = self.surface.add_marker(place, MarkerStyle::Default)?;
            self.markers
                .insert(place.id.clone(), MarkerEntry { handle, position });
            match bounds.as_mut() {
                Some(b) => b.extend(position),
                None => bounds = Some(LatLngBounds::of(position)),
            }
        }

        if let Some(bounds) = bounds {
            self.surface.fit_bounds(&bounds, FIT_PADDING_PX);
        }
        Ok(())
    }

    /// Reflect the hover selection: reset every other marker to the
    /// default icon with its popup closed; highlight the hovered marker,
    /// open its popup, and pan to it.
    pub fn apply_hover(&mut self, hovered: Option<&str>) {
        let mut panned_to = None;
        for (id, entry) in &self.markers {
            if hovered == Some(id.as_str()) {
                self.surface
                    .set_marker_style(&entry.handle, MarkerStyle::Highlighted);
                self.surface.open_popup(&entry.handle);
                panned_to = Some(entry.position);
            } else {
                self.surface
                    .set_marker_style(&entry.handle, MarkerStyle::Default);
                self.surface.close_popup(&entry.handle);
            }
        }
        if let Some(center) = panned_to {
            self.surface.pan_to(center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Place {id}"),
            category: "park".to_string(),
            rating: 4.5,
            lat,
            lng,
            business_friendly: false,
            free_wifi: false,
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct FakeMarker {
        place_id: String,
        position: LatLng,
        style: MarkerStyle,
        popup_open: bool,
    }

    #[derive(Default)]
    struct FakeSurface {
        next_handle: u32,
        live: HashMap<u32, FakeMarker>,
        fitted: Option<(LatLngBounds, u32)>,
        fit_calls: usize,
        panned: Vec<LatLng>,
        fail_on: Option<String>,
    }

    impl FakeSurface {
        fn live_ids(&self) -> HashSet<String> {
            self.live.values().map(|m| m.place_id.clone()).collect()
        }

        fn highlighted(&self) -> Vec<&FakeMarker> {
            self.live
                .values()
                .filter(|m| m.style == MarkerStyle::Highlighted)
                .collect()
        }
    }

    impl MapSurface for FakeSurface {
        type Handle = u32;

        fn add_marker(&mut self, place: &Place, style: MarkerStyle) -> Result<u32, String> {
            if self.fail_on.as_deref() == Some(place.id.as_str()) {
                return Err(format!("marker creation failed for {}", place.id));
            }
            let handle = self.next_handle;
            self.next_handle += 1;
            self.live.insert(
                handle,
                FakeMarker {
                    place_id: place.id.clone(),
                    position: LatLng::new(place.lat, place.lng),
                    style,
                    popup_open: false,
                },
            );
            Ok(handle)
        }

        fn remove_marker(&mut self, handle: &u32) {
            self.live.remove(handle);
        }

        fn set_marker_style(&mut self, handle: &u32, style: MarkerStyle) {
            if let Some(marker) = self.live.get_mut(handle) {
                marker.style = style;
            }
        }

        fn open_popup(&mut self, handle: &u32) {
            if let Some(marker) = self.live.get_mut(handle) {
                marker.popup_open = true;
            }
        }

        fn close_popup(&mut self, handle: &u32) {
            if let Some(marker) = self.live.get_mut(handle) {
                marker.popup_open = false;
            }
        }

        fn fit_bounds(&mut self, bounds: &LatLngBounds, padding_px: u32) {
            self.fitted = Some((*bounds, padding_px));
            self.fit_calls += 1;
        }

        fn pan_to(&mut self, center: LatLng) {
            self.panned.push(center);
        }
    }

    fn id_set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn registry_matches_place_list_after_sync() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        let places = vec![place("p1", 41.0, 29.0), place("p2", 41.1, 29.1)];

        sync.sync_places(&places).unwrap();

        let registry: HashSet<String> = sync.marker_ids().iter().map(|s| s.to_string()).collect();
        assert_eq!(registry, id_set(&["p1", "p2"]));
        assert_eq!(sync.surface.live_ids(), id_set(&["p1", "p2"]));
    }

    #[test]
    fn removed_places_leave_no_stale_markers() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        sync.sync_places(&[place("p1", 41.0, 29.0), place("p2", 41.1, 29.1)])
            .unwrap();
        sync.sync_places(&[place("p2", 41.1, 29.1)]).unwrap();

        assert_eq!(sync.surface.live_ids(), id_set(&["p2"]));
        assert_eq!(sync.marker_ids(), ["p2"]);
    }

    #[test]
    fn empty_list_clears_markers_but_keeps_viewport() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        sync.sync_places(&[place("p1", 41.0, 29.0)]).unwrap();
        assert_eq!(sync.surface.fit_calls, 1);

        sync.sync_places(&[]).unwrap();

        assert!(sync.surface.live.is_empty());
        assert!(sync.marker_ids().is_empty());
        // No extra viewport adjustment for the empty list
        assert_eq!(sync.surface.fit_calls, 1);
    }

    #[test]
    fn duplicate_ids_collapse_to_one_marker() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        sync.sync_places(&[place("p1", 41.0, 29.0), place("p1", 50.0, 8.0)])
            .unwrap();

        assert_eq!(sync.surface.live.len(), 1);
        assert_eq!(sync.marker_ids(), ["p1"]);
    }

    #[test]
    fn fitted_bounds_cover_all_coordinates() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        let places = vec![
            place("p1", 41.0, 29.0),
            place("p2", 48.8, 2.3),
            place("p3", 35.6, 139.7),
        ];
        sync.sync_places(&places).unwrap();

        let (bounds, padding) = sync.surface.fitted.expect("viewport was fitted");
        assert_eq!(padding, FIT_PADDING_PX);
        for p in &places {
            assert!(bounds.contains(LatLng::new(p.lat, p.lng)), "missing {}", p.id);
        }
    }

    #[test]
    fn hover_highlights_exactly_one_marker() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        sync.sync_places(&[place("p1", 41.0, 29.0), place("p2", 41.1, 29.1)])
            .unwrap();

        sync.apply_hover(Some("p1"));

        let highlighted = sync.surface.highlighted();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].place_id, "p1");
        assert!(highlighted[0].popup_open);
        assert_eq!(sync.surface.panned.last(), Some(&LatLng::new(41.0, 29.0)));

        let other = sync
            .surface
            .live
            .values()
            .find(|m| m.place_id == "p2")
            .unwrap();
        assert_eq!(other.style, MarkerStyle::Default);
        assert!(!other.popup_open);
    }

    #[test]
    fn hover_change_moves_the_highlight() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        sync.sync_places(&[place("p1", 41.0, 29.0), place("p2", 41.1, 29.1)])
            .unwrap();

        sync.apply_hover(Some("p1"));
        sync.apply_hover(Some("p2"));

        let highlighted = sync.surface.highlighted();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].place_id, "p2");
    }

    #[test]
    fn hover_miss_or_none_highlights_nothing() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        sync.sync_places(&[place("p1", 41.0, 29.0)]).unwrap();
        sync.apply_hover(Some("p1"));

        sync.apply_hover(Some("unknown"));
        assert!(sync.surface.highlighted().is_empty());
        assert!(sync.surface.live.values().all(|m| !m.popup_open));

        sync.apply_hover(Some("p1"));
        sync.apply_hover(None);
        assert!(sync.surface.highlighted().is_empty());
    }

    #[test]
    fn failed_marker_keeps_registry_consistent() {
        let mut surface = FakeSurface::default();
        surface.fail_on = Some("p2".to_string());
        let mut sync = MarkerSync::new(surface);

        let result = sync.sync_places(&[
            place("p1", 41.0, 29.0),
            place("p2", 41.1, 29.1),
            place("p3", 41.2, 29.2),
        ]);

        assert!(result.is_err());
        // Whatever made it onto the map is exactly what is registered
        assert_eq!(sync.surface.live_ids(), id_set(&["p1"]));
        assert_eq!(sync.marker_ids(), ["p1"]);
    }

    #[test]
    fn into_surface_removes_all_markers() {
        let mut sync = MarkerSync::new(FakeSurface::default());
        sync.sync_places(&[place("p1", 41.0, 29.0), place("p2", 41.1, 29.1)])
            .unwrap();

        let surface = sync.into_surface();
        assert!(surface.live.is_empty());
    }
}
