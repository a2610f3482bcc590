//! Navigation Component
//!
//! Header navigation bar with brand, links and the sign-out control.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = Rc::new(use_navigate());

    let authenticated = state.authenticated;
    let on_sign_out = move |_| {
        state.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/list" class="flex items-center space-x-3">
                        <span class="text-2xl">"🧺"</span>
                        <span class="text-xl font-bold text-white">"Larder"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/list" label="Lists" />
                        {move || {
                            if authenticated.get() {
                                view! {
                                    <button
                                        on:click=on_sign_out.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                    >
                                        "Sign out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Sign in" />
                                    <NavLink href="/register" label="Register" />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
