//! Login Page
//!
//! Exchanges credentials for a bearer token and stores it for the session.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::auth::{self, session};
use crate::state::{GlobalState, ScopeGuard};
use crate::validate;

/// Login screen
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let guard = ScopeGuard::new();

    let (identifier, set_identifier) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // One in-flight submission at a time, even if re-triggered
        // programmatically.
        if submitting.get_untracked() {
            return;
        }

        let id = identifier.get();
        let pw = password.get();
        if let Err(problem) = validate::validate_login(&id, &pw) {
            set_message.set(Some(problem));
            return;
        }

        set_submitting.set(true);

        // Only the digest crosses the network.
        let digest = auth::password_digest(&pw);
        let state = state.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = api::login(&id, &digest).await;
            if !guard.active() {
                return;
            }
            match outcome {
                Ok(outcome) => {
                    session::set_token(&outcome.access_token);
                    state.refresh_auth();
                    set_message.set(Some(format!("Signed in: {}", outcome.message)));
                }
                Err(e) => {
                    set_message.set(Some(format!("Sign-in failed: {}", e)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center py-12">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 shadow-lg">
                <h1 class="text-2xl font-bold text-center mb-6">"Sign in"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username or email"</label>
                        <input
                            type="text"
                            prop:value=move || identifier.get()
                            on:input=move |ev| set_identifier.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                {move || message.get().map(|msg| view! {
                    <p class="mt-4 text-center text-sm text-gray-300">{msg}</p>
                })}

                <p class="mt-4 text-center text-sm text-gray-400">
                    "No account yet? "
                    <A href="/register" class="text-primary-400 hover:underline">
                        "Register"
                    </A>
                </p>
            </div>
        </div>
    }
}
