//! Login page: email + password against the content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or through a guard redirect. A redirect carries the
//! requested path in `?from=`, and registration carries its success message
//! in `?message=`. The verifier navigates on success, so this page only
//! submits and shows errors.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use guardian::AuthState;
use guardian::types::LoginRequest;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

pub const MISSING_CREDENTIALS: &str = "Please enter your email and password.";

/// Trim and check the form before it is sent.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let banner = move || query.with(|q| q.get("message"));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let origin = query.with_untracked(|q| q.get("from"));
            leptos::task::spawn_local(async move {
                crate::session::login(credentials, origin).await;
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    let error = move || form_error.get().map(str::to_owned).or_else(|| auth.with(|s| s.error.clone()));

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                {move || banner().map(|message| view! { <p class="auth-card__notice">{message}</p> })}
                {move || error().map(|message| view! { <p class="auth-card__error">{message}</p> })}
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__switch">
                    "No account? " <A href="/register">"Register"</A>
                </p>
            </form>
        </div>
    }
}
