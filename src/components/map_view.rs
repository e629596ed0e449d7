//! Map View Component
//!
//! Renders the Leaflet surface for a place list and reflects the hover
//! selection. The surface comes up once per component lifetime; marker
//! updates that arrive earlier are picked up by the mount effect's initial
//! sync.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::toast::use_toasts;
use crate::context::AppContext;
use crate::map::debounce::{FrameDebounce, RafScheduler};
use crate::map::leaflet::LeafletSurface;
use crate::map::surface::LatLng;
use crate::map::sync::MarkerSync;
use crate::models::Place;

const MAP_CONTAINER_ID: &str = "itinerary-map";
const INITIAL_CENTER: LatLng = LatLng {
    lat: 41.0082,
    lng: 28.9784,
};
const INITIAL_ZOOM: f64 = 12.0;

type SharedSync = Rc<RefCell<Option<MarkerSync<LeafletSurface>>>>;

#[component]
pub fn MapView(#[prop(into)] places: Signal<Vec<Place>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();

    let sync: SharedSync = Rc::new(RefCell::new(None));
    let debounce = Rc::new(RefCell::new(FrameDebounce::new(RafScheduler)));

    // Bring the surface up once the container div is in the DOM; never
    // re-initialize while an instance is live
    Effect::new({
        let sync = sync.clone();
        move |_| {
            if sync.borrow().is_some() {
                return;
            }
            match LeafletSurface::mount(MAP_CONTAINER_ID) {
                Ok(surface) => {
                    surface.set_initial_view(INITIAL_CENTER, INITIAL_ZOOM);
                    let mut marker_sync = MarkerSync::new(surface);
                    // Pick up any place list that arrived before the
                    // surface was ready
                    if let Err(err) = marker_sync.sync_places(&places.get_untracked()) {
                        web_sys::console::warn_1(
                            &format!("[MAP] initial marker sync failed: {err}").into(),
                        );
                    }
                    *sync.borrow_mut() = Some(marker_sync);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[MAP] init failed: {err}").into());
                    toasts.error("Map could not be loaded");
                }
            }
        }
    });

    // Rebuild markers on every place-list change; before initialization
    // this is a no-op
    Effect::new({
        let sync = sync.clone();
        move |_| {
            let places = places.get();
            if let Some(marker_sync) = sync.borrow_mut().as_mut() {
                match marker_sync.sync_places(&places) {
                    Ok(()) => web_sys::console::log_1(
                        &format!("[MAP] {} markers rendered", marker_sync.marker_ids().len())
                            .into(),
                    ),
                    Err(err) => web_sys::console::warn_1(
                        &format!("[MAP] marker sync failed: {err}").into(),
                    ),
                }
            }
        }
    });

    // Hover highlighting, coalesced onto the next animation frame
    Effect::new({
        let sync = sync.clone();
        let debounce = debounce.clone();
        move |_| {
            let hovered = ctx.hovered_place.get();
            let sync = sync.clone();
            debounce.borrow_mut().request(Box::new(move || {
                if let Some(marker_sync) = sync.borrow_mut().as_mut() {
                    marker_sync.apply_hover(hovered.as_deref());
                }
            }));
        }
    });

    on_cleanup({
        let sync = send_wrapper::SendWrapper::new(sync.clone());
        move || {
            if let Some(marker_sync) = sync.borrow_mut().take() {
                marker_sync.into_surface().unmount();
            }
        }
    });

    view! {
        <div id=MAP_CONTAINER_ID class="map-view"></div>
    }
}
