//! Page chrome: header navigation with role-gated links and logout.

use guardian::AuthState;
use guardian::nav::links_for;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::session;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let links = move || {
        auth.with(|state| links_for(state.current_user()))
            .into_iter()
            .map(|link| view! { <A href=link.href attr:class="nav__link">{link.label}</A> })
            .collect_view()
    };

    let on_logout = move |_| {
        if confirm_logout() {
            menu_open.set(false);
            session::logout();
        }
    };

    view! {
        <div class="layout">
            <header class="layout__header">
                <span class="layout__brand">"Content Guardian"</span>
                <nav class=move || { if menu_open.get() { "nav nav--open" } else { "nav" } }>
                    {links}
                    <Show when=move || auth.with(AuthState::is_authenticated)>
                        <button class="nav__logout" type="button" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </nav>
                <button
                    class="layout__menu-toggle"
                    type="button"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "Menu"
                </button>
            </header>
            <main class="layout__main">{children()}</main>
        </div>
    }
}

fn confirm_logout() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message("Are you sure you want to log out?").ok())
            .unwrap_or(true)
    }
    #[cfg(not(feature = "csr"))]
    {
        true
    }
}
