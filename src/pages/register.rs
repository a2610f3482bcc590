//! Registration Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::auth;
use crate::state::ScopeGuard;
use crate::validate;

/// Registration screen
#[component]
pub fn Register() -> impl IntoView {
    let guard = ScopeGuard::new();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let user = username.get();
        let mail = email.get();
        let pw = password.get();
        let full_name = name.get();
        if let Err(problem) = validate::validate_registration(&user, &mail, &pw, &full_name) {
            set_message.set(Some(problem));
            return;
        }

        set_submitting.set(true);

        let digest = auth::password_digest(&pw);
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = api::create_user(&user, &mail, &digest, &full_name).await;
            if !guard.active() {
                return;
            }
            match outcome {
                Ok(backend_message) => {
                    set_message.set(Some(format!("Registered: {}", backend_message)));
                }
                Err(e) => {
                    set_message.set(Some(format!("Registration failed: {}", e)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center py-12">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 shadow-lg">
                <h1 class="text-2xl font-bold text-center mb-6">"Create an account"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
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

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
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
                        {move || if submitting.get() { "Submitting..." } else { "Register" }}
                    </button>
                </form>

                {move || message.get().map(|msg| view! {
                    <p class="mt-4 text-center text-sm text-gray-300">{msg}</p>
                })}

                <p class="mt-4 text-center text-sm text-gray-400">
                    "Already registered? "
                    <A href="/login" class="text-primary-400 hover:underline">
                        "Sign in"
                    </A>
                </p>
            </div>
        </div>
    }
}
