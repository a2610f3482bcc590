//! Add-Product Page
//!
//! Product form for the list named in the route. On success the screen
//! navigates back to the list detail.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::app::{decode_route_segment, list_route};
use crate::state::ScopeGuard;
use crate::validate;

/// Add-product screen
#[component]
pub fn AddProduct() -> impl IntoView {
    let guard = ScopeGuard::new();
    let navigate = Rc::new(use_navigate());

    let params = use_params_map();
    let list_name = create_memo(move |_| {
        let raw = params.with(|p| p.get("name").cloned().unwrap_or_default());
        decode_route_segment(&raw)
    });

    let (product_name, set_product_name) = create_signal(String::new());
    let (barcode, set_barcode) = create_signal(String::new());
    let (expiry, set_expiry) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let name = product_name.get();
        let code = barcode.get();
        let expires = expiry.get();
        let note = description.get();
        if let Err(problem) = validate::validate_product(&name, &code, &expires, &note) {
            set_message.set(Some(problem));
            return;
        }

        set_submitting.set(true);

        let list = list_name.get_untracked();
        let guard = guard.clone();
        let navigate = Rc::clone(&navigate);
        spawn_local(async move {
            let outcome = api::create_product(&list, &name, &code, &expires, &note).await;
            if !guard.active() {
                return;
            }
            match outcome {
                Ok(()) => {
                    navigate(&list_route(&list), Default::default());
                }
                Err(e) => {
                    set_message.set(Some(format!("Could not add product: {}", e)));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="flex items-center justify-center py-12">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 shadow-lg">
                <h1 class="text-2xl font-bold text-center mb-6">
                    "Add product to " {move || list_name.get()}
                </h1>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="Product name"
                        prop:value=move || product_name.get()
                        on:input=move |ev| set_product_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="text"
                        placeholder="Barcode"
                        prop:value=move || barcode.get()
                        on:input=move |ev| set_barcode.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="text"
                        placeholder="Expiry date (YYYY-MM-DD)"
                        prop:value=move || expiry.get()
                        on:input=move |ev| set_expiry.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <textarea
                        placeholder="Description"
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 resize-none
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    ></textarea>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Adding..." } else { "Add product" }}
                    </button>
                </form>

                {move || message.get().map(|msg| view! {
                    <p class="mt-4 text-center text-sm text-gray-300">{msg}</p>
                })}

                <p class="mt-4 text-center text-sm text-gray-400">
                    <A
                        href=move || list_route(&list_name.get())
                        class="text-primary-400 hover:underline"
                    >
                        "Back to list"
                    </A>
                </p>
            </div>
        </div>
    }
}
