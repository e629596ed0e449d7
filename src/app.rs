//! TripMark Frontend App
//!
//! Main application component with the places / itinerary / map layout.

use leptos::prelude::*;

use crate::components::{ItineraryPanel, MapView, PlacesPanel, ToastHost, Toasts};
use crate::context::AppContext;
use crate::store::{ItineraryState, ItineraryStateStoreFields, ItineraryStore};
use reactive_stores::Store;

#[component]
pub fn App() -> impl IntoView {
    let (hovered_place, set_hovered_place) = signal::<Option<String>>(None);

    // Provide context to all children
    let store: ItineraryStore = Store::new(ItineraryState::default());
    provide_context(store);
    provide_context(AppContext::new((hovered_place, set_hovered_place)));
    provide_context(Toasts::new());

    let itinerary_places = Signal::derive(move || store.places().get());

    view! {
        <div class="app-layout">
            // Left: browsable place catalog
            <PlacesPanel />

            // Center: the itinerary
            <main class="main-content">
                <h1>"TripMark"</h1>
                <ItineraryPanel />
            </main>

            // Right: the itinerary on the map
            <MapView places=itinerary_places />

            <ToastHost />
        </div>
    }
}
