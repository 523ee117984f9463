//! Route guard components.
//!
//! DESIGN
//! ======
//! Each guard turns one `guardian::guards` policy into a `Memo<GuardDecision>`
//! and renders from it: the children on `Render`, a spinner otherwise. A
//! `Redirect` decision is followed by an effect, replacing the history entry
//! when the policy asks for it.

use guardian::guards::{
    AnonymousGate, AuthEnforcer, GuardDecision, require_admin, require_authenticated, require_role,
};
use guardian::{AuthState, Role};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session;

fn follow_redirect(decision: Memo<GuardDecision>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(redirect) = decision.get() {
            navigate(
                &redirect.to_href(),
                NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() },
            );
        }
    });
}

#[component]
fn PendingIndicator(label: &'static str) -> impl IntoView {
    view! {
        <div class="guard-pending">
            <div class="guard-pending__spinner"></div>
            <p class="guard-pending__label">{label}</p>
        </div>
    }
}

fn render_guarded(decision: Memo<GuardDecision>, label: &'static str, children: ChildrenFn) -> impl IntoView {
    follow_redirect(decision);
    view! {
        <Show
            when=move || decision.with(|d| matches!(d, GuardDecision::Render))
            fallback=move || view! { <PendingIndicator label=label/> }
        >
            {children()}
        </Show>
    }
}

/// Renders its children for a signed-in user; otherwise sends them to login.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let routes = session::routes();

    let decision = Memo::new(move |_| {
        let state = auth.get();
        require_authenticated(&state, session::evidence(&state), &pathname.get(), &routes)
    });
    render_guarded(decision, "Checking your session...", children)
}

/// Login and register pages: stored evidence is re-verified with a forced
/// check before deciding whether to send the user home.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let routes = session::routes();
    let gate = RwSignal::new(AnonymousGate::new());

    if AnonymousGate::needs_verification(session::evidence(&auth.get_untracked())) {
        leptos::task::spawn_local(async move {
            session::verify(true).await;
            let _ = gate.try_update(AnonymousGate::mark_checked);
        });
    } else {
        gate.update(AnonymousGate::mark_checked);
    }

    let decision = Memo::new(move |_| {
        let state = auth.get();
        gate.get().decide(&state, session::evidence(&state), &routes)
    });
    render_guarded(decision, "Loading...", children)
}

/// Renders its children only for users holding one of `allowed`.
#[component]
pub fn RoleRoute(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let routes = session::routes();

    let decision = Memo::new(move |_| {
        let state = auth.get();
        if !state.initial_check_done {
            return GuardDecision::Pending;
        }
        require_role(&state, allowed, &pathname.get(), &routes)
    });
    render_guarded(decision, "Checking permissions...", children)
}

#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let routes = session::routes();

    let decision = Memo::new(move |_| {
        let state = auth.get();
        if !state.initial_check_done {
            return GuardDecision::Pending;
        }
        require_admin(&state, &pathname.get(), &routes)
    });
    render_guarded(decision, "Checking permissions...", children)
}

/// Global redirect-on-mismatch check. Renders nothing.
#[component]
pub fn AuthCheck() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let routes = session::routes();
    let mut enforcer = AuthEnforcer::new();

    Effect::new(move || {
        let state = auth.get();
        let path = pathname.get();
        if let Some(redirect) = enforcer.on_navigation(&state, session::evidence(&state), &path, &routes) {
            navigate(
                &redirect.to_href(),
                NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() },
            );
        }
    });
}

/// Unknown paths go home when there is any sign of a session, else to login.
#[component]
pub fn FallbackRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let routes = session::routes();

    Effect::new(move || {
        let state = auth.get_untracked();
        let target = if session::evidence(&state).any() { &routes.home } else { &routes.login };
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
    view! { <PendingIndicator label="Redirecting..."/> }
}
