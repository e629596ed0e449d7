//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Id of the place currently under pointer focus, if any - read
    pub hovered_place: ReadSignal<Option<String>>,
    /// Id of the place currently under pointer focus, if any - write
    set_hovered_place: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(hovered_place: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            hovered_place: hovered_place.0,
            set_hovered_place: hovered_place.1,
        }
    }

    /// Set or clear the hover selection
    pub fn set_hover(&self, place_id: Option<String>) {
        self.set_hovered_place.set(place_id);
    }
}
