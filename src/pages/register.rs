//! Registration page: creates the account and signs in with one call.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::login::MISSING_FIELDS;
use crate::auth::context::{AuthContext, use_auth};

pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Trim the identifier, require every field, and check the confirmation
/// before anything goes over the network.
pub(crate) fn validate_register_input(
    identifier: &str,
    secret: &str,
    confirmation: &str,
) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || secret.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if secret != confirmation {
        return Err(PASSWORD_MISMATCH);
    }
    Ok((identifier.to_owned(), secret.to_owned()))
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn submit_registration(
    auth: AuthContext,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
    identifier: String,
    secret: String,
    error: RwSignal<String>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match auth.register(&identifier, &secret).await {
            Ok(_) => navigate("/", NavigateOptions::default()),
            Err(e) => error.set(e.user_message().to_owned()),
        }
    });
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let state = auth.state();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    // The manager raises its busy flag for the whole registration call.
    let busy = move || state.with(|s| s.is_initializing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (identifier, secret) = match validate_register_input(&email.get(), &password.get(), &confirmation.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());

        submit_registration(auth.clone(), navigate.clone(), identifier, secret, error);
    };

    view! {
        <div class="register-page">
            <form class="auth-form" on:submit=on_submit>
                <h2 class="auth-form__title">"Register"</h2>
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Confirm password"
                    required
                    prop:value=move || confirmation.get()
                    on:input=move |ev| confirmation.set(event_target_value(&ev))
                />
                <p class="auth-form__switch">
                    "Already registered? " <A href="/login">"Sign in here"</A>
                </p>
                <button class="btn btn--primary" type="submit" disabled=busy>
                    "Register"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="error-message">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}
