//! Root application component with routing and context providers.

use guardian::access::Notice;
use guardian::{AuthState, Redirect, Role};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{NavigateOptions, StaticSegment};

use crate::components::guards::{AdminRoute, AuthCheck, FallbackRedirect, ProtectedRoute, PublicRoute, RoleRoute};
use crate::components::layout::Layout;
use crate::components::toast::Toast;
use crate::pages::{
    admin::AdminPage, create_post::CreatePostPage, home::HomePage, login::LoginPage, my_posts::MyPostsPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::session;

const AUTHOR_ROLES: &[Role] = &[Role::Author, Role::Admin];

/// Root application component.
///
/// Provides the auth, notice, and pending-navigation contexts and starts the
/// session before the router mounts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notice = RwSignal::new(None::<Notice>);
    let pending = RwSignal::new(None::<Redirect>);

    provide_context(auth);
    provide_context(notice);
    provide_context(pending);

    #[cfg(feature = "csr")]
    {
        session::start(auth, pending);
        on_cleanup(session::teardown);
    }

    view! {
        <Title text="Content Guardian"/>

        <Router>
            <AuthNavigator/>
            <AuthCheck/>
            <Layout>
                <Routes fallback=|| view! { <FallbackRedirect/> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("create-post")
                        view=|| view! { <RoleRoute allowed=AUTHOR_ROLES><CreatePostPage/></RoleRoute> }
                    />
                    <Route
                        path=StaticSegment("my-posts")
                        view=|| view! { <RoleRoute allowed=AUTHOR_ROLES><MyPostsPage/></RoleRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <AdminRoute><AdminPage/></AdminRoute> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <PublicRoute><RegisterPage/></PublicRoute> }
                    />
                </Routes>
            </Layout>
            <Toast/>
        </Router>
    }
}

/// Performs navigations the verifier requests and clears the last auth error
/// whenever the path changes.
#[component]
fn AuthNavigator() -> impl IntoView {
    let pending = expect_context::<RwSignal<Option<Redirect>>>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let Some(redirect) = pending.get() else {
            return;
        };
        pending.set(None);
        navigate(
            &redirect.to_href(),
            NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() },
        );
    });

    Effect::new(move || {
        location.pathname.track();
        session::clear_error();
    });
}
