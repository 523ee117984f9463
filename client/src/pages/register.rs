//! Registration page. A successful sign-up lands on the login page with a
//! confirmation message; it never signs the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use guardian::AuthState;
use guardian::types::RegisterRequest;
use leptos::prelude::*;
use leptos_router::components::A;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MISSING_FIELDS: &str = "All fields are required.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// # Errors
///
/// Returns the first problem with the form, in field order.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if form.password != form.confirm {
        return Err(PASSWORD_MISMATCH);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: form.password.clone() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(RegistrationForm::default());
    let form_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match form.with(validate_registration) {
            Ok(registration) => registration,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::session::register(registration).await;
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
            busy.set(false);
        }
    };

    let error = move || form_error.get().map(str::to_owned).or_else(|| auth.with(|s| s.error.clone()));

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create an account"</h1>
                {move || error().map(|message| view! { <p class="auth-card__error">{message}</p> })}
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || form.with(|f| f.confirm.clone())
                    on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-card__switch">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
