//! UI Components
//!
//! Reusable Leptos components.

mod itinerary_panel;
mod map_view;
mod places_panel;
mod toast;

pub use itinerary_panel::ItineraryPanel;
pub use map_view::MapView;
pub use places_panel::PlacesPanel;
pub use toast::{use_toasts, ToastHost, Toasts};
