//! List Overview Page
//!
//! Fetches the user's lists on mount, adds new lists, deletes existing
//! ones. Every mutation is followed by an unconditional re-fetch.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::app::list_route;
use crate::components::ListSkeleton;
use crate::state::{GlobalState, ScopeGuard};
use crate::validate;

/// List overview screen
#[component]
pub fn Lists() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let guard = ScopeGuard::new();

    let (lists, set_lists) = create_signal(Vec::<String>::new());
    let (new_list, set_new_list) = create_signal(String::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (mutating, set_mutating) = create_signal(false);

    let load_lists = {
        let state = state.clone();
        let guard = guard.clone();
        move || {
            let state = state.clone();
            let guard = guard.clone();
            set_loading.set(true);
            spawn_local(async move {
                let outcome = api::fetch_lists().await;
                if !guard.active() {
                    return;
                }
                match outcome {
                    Ok(items) => {
                        set_lists.set(items);
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
        }
    };

    // Mounts straight into the fetch; the screen starts out loading.
    let load_on_mount = load_lists.clone();
    create_effect(move |_| load_on_mount());

    let on_add = {
        let state = state.clone();
        let guard = guard.clone();
        let load_lists = load_lists.clone();
        move |_| {
            if mutating.get_untracked() {
                return;
            }

            let name = new_list.get();
            if let Err(problem) = validate::validate_list_name(&name) {
                state.show_error(&problem);
                return;
            }

            set_mutating.set(true);

            let state = state.clone();
            let guard = guard.clone();
            let load_lists = load_lists.clone();
            spawn_local(async move {
                let outcome = api::add_list(&name).await;
                if !guard.active() {
                    return;
                }
                match outcome {
                    Ok(()) => {
                        state.show_success("List added");
                        set_new_list.set(String::new());
                        load_lists();
                    }
                    Err(e) => state.report_api_error(&e),
                }
                set_mutating.set(false);
            });
        }
    };

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Your lists"</h1>
                <p class="text-gray-400 mt-1">"Each list holds the products you track"</p>
            </div>

            // Add-list input
            <div class="bg-gray-800 rounded-xl p-4">
                <label class="block text-sm text-gray-400 mb-2">"New list"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="e.g., pantry"
                        prop:value=move || new_list.get()
                        on:input=move |ev| set_new_list.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=on_add
                        disabled=move || mutating.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Add"
                    </button>
                </div>
            </div>

            // Fetch error
            {move || error.get().map(|msg| view! {
                <p class="text-red-400 text-sm">{msg}</p>
            })}

            // List rows
            {move || {
                if loading.get() {
                    return view! { <ListSkeleton /> }.into_view();
                }

                let items = lists.get();
                if items.is_empty() {
                    view! {
                        <p class="text-gray-400 text-center py-8">"No lists yet. Add your first one!"</p>
                    }.into_view()
                } else {
                    let state = state.clone();
                    let guard = guard.clone();
                    let load_lists = load_lists.clone();
                    items.into_iter().map(|item| {
                        let href = list_route(&item);
                        let on_delete = {
                            let name = item.clone();
                            let state = state.clone();
                            let guard = guard.clone();
                            let load_lists = load_lists.clone();
                            move |_| {
                                if mutating.get_untracked() {
                                    return;
                                }
                                set_mutating.set(true);

                                let name = name.clone();
                                let state = state.clone();
                                let guard = guard.clone();
                                let load_lists = load_lists.clone();
                                spawn_local(async move {
                                    let outcome = api::delete_list(&name).await;
                                    if !guard.active() {
                                        return;
                                    }
                                    match outcome {
                                        Ok(()) => {
                                            state.show_success(&format!("List \"{}\" deleted", name));
                                            load_lists();
                                        }
                                        Err(e) => state.report_api_error(&e),
                                    }
                                    set_mutating.set(false);
                                });
                            }
                        };

                        view! {
                            <div class="flex justify-between items-center bg-gray-800 rounded-lg p-4
                                        border border-gray-700 hover:border-gray-600 transition-colors">
                                <A href=href class="flex-grow text-gray-200 hover:text-primary-400">
                                    {item.clone()}
                                </A>
                                <button
                                    on:click=on_delete
                                    disabled=move || mutating.get()
                                    class="ml-4 px-3 py-1 bg-red-600 hover:bg-red-500 disabled:bg-gray-600
                                           text-sm rounded-md transition-colors"
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
