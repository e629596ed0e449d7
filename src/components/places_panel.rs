//! Places Panel
//!
//! Browse list of tourist places with hover wiring and "add to itinerary".

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::toast::use_toasts;
use crate::context::AppContext;
use crate::models::Place;
use crate::store::{itinerary_add, use_itinerary};

#[component]
fn PlaceCard(place: Place) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_itinerary();
    let toasts = use_toasts();

    let hover_id = place.id.clone();
    let name = place.name.clone();
    let add_place = place.clone();

    let on_add = move |_| {
        if itinerary_add(&store, add_place.clone()) {
            toasts.success(format!("{name} added to your itinerary"));
        } else {
            toasts.info(format!("{name} is already in your itinerary"));
        }
    };

    view! {
        <div
            class="place-card"
            on:mouseenter=move |_| ctx.set_hover(Some(hover_id.clone()))
            on:mouseleave=move |_| ctx.set_hover(None)
        >
            <div class="place-card-body">
                <span class="place-name">{place.name.clone()}</span>
                <span class="place-category">{place.category.clone()}</span>
                <span class="place-rating">{format!("{:.1} ★", place.rating)}</span>
                {place.business_friendly.then(|| view! {
                    <span class="place-badge">"business-friendly"</span>
                })}
            </div>
            <button class="place-add-btn" on:click=on_add>"+ Add"</button>
        </div>
    }
}

/// Left panel: the browsable place catalog
#[component]
pub fn PlacesPanel() -> impl IntoView {
    let (places, set_places) = signal(Vec::<Place>::new());
    let (loading, set_loading) = signal(true);

    // Load the catalog from the places API on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_places().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[PLACES] Loaded {} places", loaded.len()).into(),
                    );
                    set_places.set(loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[PLACES] load failed: {err}").into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="places-panel">
            <div class="panel-header">"Explore Places"</div>

            <div class="place-list">
                <For
                    each=move || places.get()
                    key=|place| place.id.clone()
                    children=move |place| view! { <PlaceCard place=place /> }
                />
            </div>

            {move || (!loading.get() && places.get().is_empty()).then(|| view! {
                <div class="empty-message">"No places available"</div>
            })}
        </div>
    }
}
