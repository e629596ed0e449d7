//! Itinerary Panel
//!
//! The user's selected places with remove/clear controls and the
//! share/download placeholders.

use leptos::prelude::*;

use crate::components::toast::use_toasts;
use crate::context::AppContext;
use crate::models::Place;
use crate::store::{itinerary_clear, itinerary_remove, use_itinerary, ItineraryStateStoreFields};

#[component]
fn ItineraryRow(place: Place) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_itinerary();

    let hover_id = place.id.clone();
    let remove_id = place.id.clone();

    view! {
        <div
            class="itinerary-row"
            on:mouseenter=move |_| ctx.set_hover(Some(hover_id.clone()))
            on:mouseleave=move |_| ctx.set_hover(None)
        >
            <span class="place-name">{place.name.clone()}</span>
            <span class="place-category">{place.category.clone()}</span>
            <button
                class="remove-btn"
                on:click=move |_| itinerary_remove(&store, &remove_id)
            >
                "×"
            </button>
        </div>
    }
}

/// Center panel: the itinerary list and its actions
#[component]
pub fn ItineraryPanel() -> impl IntoView {
    let store = use_itinerary();
    let toasts = use_toasts();

    let is_empty = move || store.places().read().is_empty();

    let on_clear = move |_| {
        if is_empty() {
            toasts.error("Your itinerary is already empty");
            return;
        }
        itinerary_clear(&store);
        toasts.success("Itinerary cleared");
    };

    let on_share = move |_| toasts.error("Sharing is not available yet");
    let on_download = move |_| toasts.error("Download is not available yet");

    view! {
        <div class="itinerary-panel">
            <div class="panel-header">"My Itinerary"</div>

            <div class="itinerary-actions">
                <button on:click=on_share>"Share"</button>
                <button on:click=on_download>"Download"</button>
                <button class="clear-btn" on:click=on_clear>"Clear All"</button>
            </div>

            <div class="itinerary-list">
                <For
                    each=move || store.places().get()
                    key=|place| place.id.clone()
                    children=move |place| view! { <ItineraryRow place=place /> }
                />
            </div>

            {move || is_empty().then(|| view! {
                <div class="empty-message">"No places in your itinerary yet"</div>
            })}

            <p class="place-count">
                {move || format!("{} places selected", store.places().read().len())}
            </p>
        </div>
    }
}
