//! Itinerary Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! provided via context so pages share one itinerary per session; the set
//! semantics live in plain functions over `Vec<Place>` so they can be
//! tested without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Place;

/// Session-scoped itinerary state
#[derive(Clone, Debug, Default, Store)]
pub struct ItineraryState {
    /// Ordered, deduplicated selection of places
    pub places: Vec<Place>,
}

/// Type alias for the store
pub type ItineraryStore = Store<ItineraryState>;

/// Get the itinerary store from context
pub fn use_itinerary() -> ItineraryStore {
    expect_context::<ItineraryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a place to the itinerary. Returns false if it was already present.
pub fn itinerary_add(store: &ItineraryStore, place: Place) -> bool {
    add_place(&mut store.places().write(), place)
}

/// Remove a place from the itinerary by id; no effect if absent
pub fn itinerary_remove(store: &ItineraryStore, place_id: &str) {
    remove_place(&mut store.places().write(), place_id);
}

/// Empty the itinerary unconditionally
pub fn itinerary_clear(store: &ItineraryStore) {
    store.places().write().clear();
}

// ========================
// Set Semantics
// ========================

/// Insert `place` unless an entry with the same id exists.
/// Returns whether it was inserted.
pub(crate) fn add_place(places: &mut Vec<Place>, place: Place) -> bool {
    if places.iter().any(|p| p.id == place.id) {
        return false;
    }
    places.push(place);
    true
}

/// Delete the entry with matching id if present
pub(crate) fn remove_place(places: &mut Vec<Place>, place_id: &str) {
    places.retain(|p| p.id != place_id);
}
