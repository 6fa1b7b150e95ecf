//! Login page: e-mail + password against the token endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::context::{AuthContext, use_auth};

pub(crate) const MISSING_FIELDS: &str = "Enter your e-mail and password.";

/// Trim the identifier and require both fields.
pub(crate) fn validate_login_input(identifier: &str, secret: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || secret.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((identifier.to_owned(), secret.to_owned()))
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn submit_login(
    auth: AuthContext,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
    identifier: String,
    secret: String,
    error: RwSignal<String>,
    busy: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match auth.login(&identifier, &secret).await {
            Ok(_) => navigate("/", NavigateOptions::default()),
            Err(e) => error.set(e.user_message().to_owned()),
        }
        busy.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    busy.set(false);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identifier, secret) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        submit_login(auth.clone(), navigate.clone(), identifier, secret, error, busy);
    };

    view! {
        <div class="login-page">
            <form class="auth-form" on:submit=on_submit>
                <h2 class="auth-form__title">"Login"</h2>
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
                <p class="auth-form__switch">
                    "Not registered yet? " <A href="/register">"Sign up here"</A>
                </p>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="error-message">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}
