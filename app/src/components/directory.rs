use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::loader;
use crate::store::{DataStore, Listing};
use crate::types::{District, Station};
use crate::view_model::{
    LOAD_FAILED_MESSAGE, LOADING_MESSAGE, SEARCH_PLACEHOLDER, aria_expanded, call_title,
    no_results_class, placeholder_message, station_count_label, stations_class, stations_dom_id,
    tel_href,
};
use leptos::prelude::*;
use tracing::error;

/// Loads the dataset, owns the page state and drives the debounced search.
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let store = RwSignal::new(DataStore::default());
    let listing = RwSignal::new(Listing::Loading);
    let debouncer = StoredValue::new(Debouncer::<TimeoutHandle>::new(SEARCH_DEBOUNCE));

    // Effects only run in the browser, so the server always renders `Loading`.
    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            match loader::load().await {
                Ok(districts) => {
                    if let Some(full) = store.try_update(|s| s.populate(districts)) {
                        listing.set(full);
                    }
                }
                Err(e) => {
                    error!("Failed to load directory: {}", e);
                    listing.set(Listing::Failed);
                }
            }
        });
    });

    let run_search = move |raw: String| {
        if let Some(next) = store.try_update(|s| s.search(&raw)).flatten() {
            listing.set(next);
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        debouncer.update_value(|slot| {
            slot.schedule(|generation, delay| {
                set_timeout_with_handle(
                    move || {
                        let mut latest = false;
                        debouncer.update_value(|slot| latest = slot.complete(generation));
                        if latest {
                            run_search(raw);
                        }
                    },
                    delay,
                )
                .ok()
            });
        });
    };

    view! {
        <div class="directory">
            <div class="search-bar">
                <input
                    id="search"
                    type="search"
                    class="search-input"
                    placeholder=SEARCH_PLACEHOLDER
                    autocomplete="off"
                    on:input=on_input
                />
            </div>

            <div id="districts" class="districts">
                {move || match listing.get() {
                    Listing::Loading => {
                        view! { <div class="loading">{LOADING_MESSAGE}</div> }.into_any()
                    }
                    Listing::Failed => {
                        view! { <div class="loading">{LOAD_FAILED_MESSAGE}</div> }.into_any()
                    }
                    Listing::Districts(districts) => {
                        view! { <DistrictList districts=districts store=store/> }.into_any()
                    }
                    Listing::NoMatches(_) => ().into_any(),
                }}
            </div>

            <NoResults listing=listing/>
        </div>
    }
}

#[component]
fn NoResults(listing: RwSignal<Listing>) -> impl IntoView {
    let message = Memo::new(move |_| listing.with(placeholder_message));

    view! {
        <div id="no-results" class=move || no_results_class(message.with(Option::is_some))>
            <p>{move || message.get().unwrap_or_default()}</p>
        </div>
    }
}

#[component]
fn DistrictList(districts: Vec<District>, store: RwSignal<DataStore>) -> impl IntoView {
    districts
        .into_iter()
        .map(|district| view! { <DistrictCard district=district store=store/> })
        .collect_view()
}

/// Header plus collapsible station list. Clicking the header only touches
/// this card's expansion memo; the list around it is not redrawn.
#[component]
fn DistrictCard(district: District, store: RwSignal<DataStore>) -> impl IntoView {
    let id = district.id();
    let dom_id = stations_dom_id(&district);
    let count = station_count_label(district.stations.len());
    let District {
        name_local,
        name_romanized,
        stations,
    } = district;

    let is_open = Memo::new({
        let id = id.clone();
        move |_| store.with(|s| s.is_expanded(&id))
    });

    let toggle = {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| {
            store.update(|s| {
                s.toggle(&id);
            });
        }
    };

    view! {
        <div class="district">
            <button
                type="button"
                class="district-header"
                data-id=id
                aria-expanded=move || aria_expanded(is_open.get())
                on:click=toggle
            >
                <div class="district-name">
                    <span class="district-name-ml">{name_local}</span>
                    <span class="district-name-en">{name_romanized}</span>
                </div>
                <div class="district-meta">
                    <span class="unit-count">{count}</span>
                    <span class="chevron">"▼"</span>
                </div>
            </button>
            <div class=move || stations_class(is_open.get()) id=dom_id>
                {stations
                    .into_iter()
                    .map(|station| view! { <StationRow station=station/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn StationRow(station: Station) -> impl IntoView {
    let href = tel_href(&station);
    let title = call_title(&station);

    view! {
        <div class="station">
            <div class="station-name">
                <span class="station-name-ml">{station.name_local}</span>
                <span class="station-name-en">{station.name_romanized}</span>
            </div>
            <a href=href class="call-btn" title=title>"📞"</a>
        </div>
    }
}
