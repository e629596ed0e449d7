//! Leaflet Backend
//!
//! `wasm_bindgen` bindings to the global `L` namespace plus the
//! `MapSurface` implementation used in the browser. Option objects are
//! built from `Serialize` structs via `serde_wasm_bindgen`, matching the
//! shapes Leaflet expects.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::map::surface::{LatLng, LatLngBounds, MapSurface, MarkerStyle};
use crate::models::Place;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
const TILE_MAX_ZOOM: u32 = 19;

const DEFAULT_ICON_CLASS: &str = "tripmark-marker";
const HIGHLIGHT_ICON_CLASS: &str = "tripmark-marker tripmark-marker-highlighted";

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn leaflet_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = panTo)]
    fn pan_to(this: &LeafletMap, center: &JsValue);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap);

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker, catch)]
    fn leaflet_marker(latlng: &JsValue, options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = setIcon)]
    fn set_icon(this: &Marker, icon: &DivIcon);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str);

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker);

    #[wasm_bindgen(method, js_name = closePopup)]
    fn close_popup(this: &Marker);

    #[wasm_bindgen(method)]
    fn remove(this: &Marker);

    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> DivIcon;
}

// ========================
// Option Structs
// ========================

#[derive(Serialize)]
struct MapOptions {
    #[serde(rename = "zoomControl")]
    zoom_control: bool,
}

#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
    #[serde(rename = "maxZoom")]
    max_zoom: u32,
}

#[derive(Serialize)]
struct DivIconOptions<'a> {
    html: &'a str,
    #[serde(rename = "className")]
    class_name: &'a str,
    #[serde(rename = "iconSize")]
    icon_size: [i32; 2],
    #[serde(rename = "iconAnchor")]
    icon_anchor: [i32; 2],
}

#[derive(Serialize)]
struct FitBoundsOptions {
    padding: [u32; 2],
}

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.to_string())
}

fn latlng_js(point: LatLng) -> Result<JsValue, String> {
    to_js(&[point.lat, point.lng])
}

fn popup_html(place: &Place) -> String {
    let badge = if place.business_friendly {
        "<span class=\"popup-badge\">business-friendly</span>"
    } else {
        ""
    };
    format!(
        "<div class=\"marker-popup\">\
         <strong>{}</strong>\
         <div class=\"popup-category\">{}</div>\
         <div class=\"popup-rating\">{:.1} ★</div>\
         {badge}\
         </div>",
        place.name, place.category, place.rating,
    )
}

/// Live Leaflet map with its tile layer and the two icon variants built at
/// initialization
pub struct LeafletSurface {
    map: LeafletMap,
    default_icon: DivIcon,
    highlight_icon: DivIcon,
}

impl LeafletSurface {
    /// Acquire the widget and bring the surface up on `container_id`.
    /// Fails if the Leaflet global or the container element is missing.
    pub fn mount(container_id: &str) -> Result<Self, String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        if document.get_element_by_id(container_id).is_none() {
            return Err(format!("map container #{container_id} missing"));
        }
        let leaflet = js_sys::Reflect::get(&window, &JsValue::from_str("L")).map_err(js_err)?;
        if leaflet.is_undefined() || leaflet.is_null() {
            return Err("Leaflet (window.L) is not loaded".to_string());
        }

        let map = leaflet_map(container_id, &to_js(&MapOptions { zoom_control: true })?)
            .map_err(js_err)?;
        tile_layer(
            TILE_URL,
            &to_js(&TileLayerOptions {
                attribution: TILE_ATTRIBUTION,
                max_zoom: TILE_MAX_ZOOM,
            })?,
        )
        .add_to(&map);

        let default_icon = build_icon(DEFAULT_ICON_CLASS, [24, 24])?;
        let highlight_icon = build_icon(HIGHLIGHT_ICON_CLASS, [32, 32])?;

        Ok(Self {
            map,
            default_icon,
            highlight_icon,
        })
    }

    /// Initial world view until the first marker sync frames the viewport
    pub fn set_initial_view(&self, center: LatLng, zoom: f64) {
        if let Ok(center) = latlng_js(center) {
            self.map.set_view(&center, zoom);
        }
    }

    /// Tear down the map instance
    pub fn unmount(self) {
        self.map.remove();
    }

    fn icon(&self, style: MarkerStyle) -> &DivIcon {
        match style {
            MarkerStyle::Default => &self.default_icon,
            MarkerStyle::Highlighted => &self.highlight_icon,
        }
    }
}

fn build_icon(class_name: &str, size: [i32; 2]) -> Result<DivIcon, String> {
    Ok(div_icon(&to_js(&DivIconOptions {
        html: "<div class=\"marker-pin\"></div>",
        class_name,
        icon_size: size,
        icon_anchor: [size[0] / 2, size[1]],
    })?))
}

impl MapSurface for LeafletSurface {
    type Handle = Marker;

    fn add_marker(&mut self, place: &Place, style: MarkerStyle) -> Result<Marker, String> {
        let latlng = latlng_js(LatLng::new(place.lat, place.lng))?;
        let marker = leaflet_marker(&latlng, &JsValue::NULL).map_err(js_err)?;
        marker.set_icon(self.icon(style));
        marker.bind_popup(&popup_html(place));
        marker.add_to(&self.map);
        Ok(marker)
    }

    fn remove_marker(&mut self, handle: &Marker) {
        handle.remove();
    }

    fn set_marker_style(&mut self, handle: &Marker, style: MarkerStyle) {
        handle.set_icon(self.icon(style));
    }

    fn open_popup(&mut self, handle: &Marker) {
        handle.open_popup();
    }

    fn close_popup(&mut self, handle: &Marker) {
        handle.close_popup();
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding_px: u32) {
        let corners = [[bounds.south, bounds.west], [bounds.north, bounds.east]];
        if let (Ok(corners), Ok(options)) = (
            to_js(&corners),
            to_js(&FitBoundsOptions {
                padding: [padding_px, padding_px],
            }),
        ) {
            self.map.fit_bounds(&corners, &options);
        }
    }

    fn pan_to(&mut self, center: LatLng) {
        if let Ok(center) = latlng_js(center) {
            self.map.pan_to(&center);
        }
    }
}
