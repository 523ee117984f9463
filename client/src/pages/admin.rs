//! Admin dashboard: account list with role management.
//!
//! ERROR HANDLING
//! ==============
//! Role changes are checked locally first (no self-demotion), then sent.
//! Either kind of refusal becomes a dismissible `Notice`; the signed-in
//! session is never cleared because of one.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use guardian::access::{Notice, ensure_can_change_role};
use guardian::{AuthState, Role, User};
use leptos::prelude::*;

pub const USERS_FAILED: &str = "Failed to load admin dashboard data";
pub const ROLE_UPDATED: &str = "User role updated";

const ROLES: [Role; 3] = [Role::Reader, Role::Author, Role::Admin];

/// Accounts whose name or email contains `term`, ignoring case.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let term = term.trim().to_lowercase();
    users
        .iter()
        .filter(|user| {
            term.is_empty() || user.name.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

pub fn parse_role(value: &str) -> Option<Role> {
    ROLES.into_iter().find(|role| role.as_str() == value)
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();
    let users = RwSignal::new(None::<Result<Vec<User>, String>>);
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);

    #[cfg(feature = "csr")]
    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_users().await.map_err(|e| {
                leptos::logging::warn!("[admin] loading users failed: {e}");
                e.user_message(USERS_FAILED)
            });
            let _ = users.try_set(Some(result));
        });
    });

    let change_role = move |target_id: String, role: Role| {
        let Some(actor) = auth.with_untracked(|state| state.current_user().cloned()) else {
            return;
        };
        if let Err(refused) = ensure_can_change_role(&actor, &target_id) {
            notice.set(Some(refused.into()));
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_role(&target_id, role).await {
                Ok(()) => {
                    let _ = notice.try_set(Some(Notice::success(ROLE_UPDATED)));
                    let _ = reload.try_update(|n| *n += 1);
                }
                Err(e) => {
                    leptos::logging::warn!("[admin] role update failed: {e}");
                    let _ = notice.try_set(Some(Notice::from_api_error(&e)));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (role, reload);
        }
    };

    let rows = move || {
        let actor_id = auth.with(|state| state.current_user().map(|user| user.id.clone()));
        match users.get() {
            None => view! { <p class="admin__loading">"Loading users..."</p> }.into_any(),
            Some(Err(message)) => view! { <p class="admin__error">{message}</p> }.into_any(),
            Some(Ok(all)) => {
                let visible = search.with(|term| filter_users(&all, term));
                view! {
                    <table class="admin__users">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|user| {
                                    let is_self = actor_id.as_deref() == Some(user.id.as_str());
                                    view! {
                                        <UserRow user=user is_self=is_self on_change=change_role/>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }
        }
    };

    view! {
        <section class="admin">
            <h1>"Admin Dashboard"</h1>
            <input
                class="admin__search"
                type="search"
                placeholder="Search users"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            {rows}
        </section>
    }
}

#[component]
fn UserRow<F>(user: User, is_self: bool, on_change: F) -> impl IntoView
where
    F: Fn(String, Role) + Clone + Send + Sync + 'static,
{
    let user_id = user.id.clone();
    let current = user.role;
    let on_select = move |ev: leptos::ev::Event| {
        if let Some(role) = parse_role(&event_target_value(&ev)).filter(|role| *role != current) {
            on_change(user_id.clone(), role);
        }
    };

    view! {
        <tr class={if is_self { "admin__row admin__row--self" } else { "admin__row" }}>
            <td>{user.name}</td>
            <td>{user.email}</td>
            <td>
                <select on:change=on_select>
                    {ROLES
                        .into_iter()
                        .map(|role| {
                            view! {
                                <option value=role.as_str() selected={role == current}>
                                    {role.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
        </tr>
    }
}
