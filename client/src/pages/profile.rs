//! Profile page. Loads the account from the server and folds any changed
//! fields back into the cached user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use guardian::types::{User, UserPatch};
use guardian::{AuthState, Role};
use leptos::prelude::*;

pub const PROFILE_FAILED: &str = "Failed to load profile";

/// Fields of `fresh` that differ from `cached`, or `None` when nothing changed.
pub fn profile_changes(cached: &User, fresh: &User) -> Option<UserPatch> {
    if cached.id != fresh.id {
        return None;
    }
    let patch = UserPatch {
        name: (cached.name != fresh.name).then(|| fresh.name.clone()),
        email: (cached.email != fresh.email).then(|| fresh.email.clone()),
        role: (cached.role != fresh.role).then_some(fresh.role),
    };
    (patch != UserPatch::default()).then_some(patch)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = RwSignal::new(None::<Result<User, String>>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = match crate::net::api::fetch_profile().await {
            Ok(fresh) => {
                let cached = auth.try_with_untracked(|state| state.current_user().cloned()).flatten();
                if let Some(patch) = cached.and_then(|cached| profile_changes(&cached, &fresh)) {
                    crate::session::update_user(patch);
                }
                Ok(fresh)
            }
            Err(e) => Err(e.user_message(PROFILE_FAILED)),
        };
        let _ = profile.try_set(Some(result));
    });

    let shown = move || profile.get().or_else(|| auth.with(|state| state.current_user().cloned()).map(Ok));

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            {move || match shown() {
                None => view! { <p class="profile__loading">"Loading profile..."</p> }.into_any(),
                Some(Err(message)) => view! { <p class="profile__error">{message}</p> }.into_any(),
                Some(Ok(user)) => view! {
                    <dl class="profile__fields">
                        <dt>"Name"</dt>
                        <dd>{user.name}</dd>
                        <dt>"Email"</dt>
                        <dd>{user.email}</dd>
                        <dt>"Role"</dt>
                        <dd class=role_class(user.role)>{user.role.as_str()}</dd>
                    </dl>
                }
                .into_any(),
            }}
        </section>
    }
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "role-badge role-badge--admin",
        Role::Author => "role-badge role-badge--author",
        Role::Reader => "role-badge",
    }
}
