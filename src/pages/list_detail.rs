//! List Detail Page
//!
//! Shows the products of the list named in the route. Deleting a product
//! filters it out of the in-memory view without a re-fetch.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::app::{add_product_route, decode_route_segment};
use crate::components::Loading;
use crate::model::Product;
use crate::state::{GlobalState, ScopeGuard};

/// List detail screen
#[component]
pub fn ListDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let guard = ScopeGuard::new();

    let params = use_params_map();
    let list_name = create_memo(move |_| {
        let raw = params.with(|p| p.get("name").cloned().unwrap_or_default());
        decode_route_segment(&raw)
    });

    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (deleting, set_deleting) = create_signal(false);

    // Fetch on mount, and again if the route param changes.
    let state_for_effect = state.clone();
    let guard_for_effect = guard.clone();
    create_effect(move |_| {
        let name = list_name.get();
        let state = state_for_effect.clone();
        let guard = guard_for_effect.clone();
        set_loading.set(true);
        spawn_local(async move {
            let outcome = api::fetch_products(&name).await;
            if !guard.active() {
                return;
            }
            match outcome {
                Ok(items) => {
                    set_products.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    if matches!(e, ApiError::AuthRejected(_)) {
                        state.refresh_auth();
                    }
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"List: " {move || list_name.get()}</h1>
                <p class="text-gray-400 mt-1">"Products on this list"</p>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if let Some(msg) = error.get() {
                    return view! { <p class="text-red-400">{msg}</p> }.into_view();
                }

                let items = products.get();
                if items.is_empty() {
                    view! {
                        <p class="text-gray-400 text-center py-8">"No products added yet."</p>
                    }.into_view()
                } else {
                    let state = state.clone();
                    let guard = guard.clone();
                    view! {
                        <ul class="bg-gray-800 rounded-xl shadow-lg p-4 divide-y divide-gray-700">
                            {items.into_iter().map(|product| {
                                let id = product.id;
                                let on_delete = {
                                    let state = state.clone();
                                    let guard = guard.clone();
                                    move |_| {
                                        if deleting.get_untracked() {
                                            return;
                                        }
                                        set_deleting.set(true);

                                        let state = state.clone();
                                        let guard = guard.clone();
                                        spawn_local(async move {
                                            let outcome = api::delete_product(id).await;
                                            if !guard.active() {
                                                return;
                                            }
                                            match outcome {
                                                Ok(()) => {
                                                    // Local filter; no re-fetch.
                                                    set_products.update(|items| {
                                                        items.retain(|p| p.id != id);
                                                    });
                                                }
                                                Err(e) => state.report_api_error(&e),
                                            }
                                            set_deleting.set(false);
                                        });
                                    }
                                };

                                view! {
                                    <li class="py-4 px-2 flex justify-between items-center
                                               text-gray-300 hover:text-white hover:bg-gray-700 rounded transition-colors">
                                        <div>
                                            <div class="text-lg font-semibold">{product.name}</div>
                                            {product.note.map(|note| view! {
                                                <div class="text-sm text-gray-400">{note}</div>
                                            })}
                                        </div>
                                        <button
                                            on:click=on_delete
                                            disabled=move || deleting.get()
                                            class="px-3 py-1 bg-red-600 hover:bg-red-500 disabled:bg-gray-600
                                                   text-white text-sm rounded transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}

            <div class="text-center">
                <A
                    href=move || add_product_route(&list_name.get())
                    class="inline-block px-5 py-3 bg-primary-600 hover:bg-primary-700
                           font-semibold rounded-lg shadow-lg transition-colors"
                >
                    "Add product"
                </A>
            </div>
        </div>
    }
}
