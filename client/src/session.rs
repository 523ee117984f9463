//! Page-wide handle to the auth verifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! The verifier is `!Send`, so it cannot live in a Leptos context. It is
//! held in a thread-local instead and its state is mirrored into the
//! `RwSignal<AuthState>` context that components read. Outside the browser
//! build every call here degrades to a signed-out no-op.

use guardian::{AuthState, Evidence, RoutePaths};
#[cfg(feature = "csr")]
use guardian::types::{LoginRequest, RegisterRequest};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use guardian::AuthVerifier;

#[cfg(feature = "csr")]
use crate::net::api::BrowserApi;

#[cfg(feature = "csr")]
pub type Verifier = AuthVerifier<BrowserApi>;

#[cfg(feature = "csr")]
thread_local! {
    static VERIFIER: RefCell<Option<Rc<Verifier>>> = const { RefCell::new(None) };
}

/// Build the verifier from the browser seams, mirror it into `auth`, and run
/// the start-of-page protocol.
#[cfg(feature = "csr")]
pub fn start(
    auth: leptos::prelude::RwSignal<AuthState>,
    pending: leptos::prelude::RwSignal<Option<guardian::Redirect>>,
) {
    use guardian::AuthConfig;
    use guardian::clock::Clock;
    use guardian::token::TokenStore;
    use leptos::prelude::Set;

    use crate::platform::{BrowserClock, BrowserHost, BrowserScheduler, browser_scopes};

    let config = AuthConfig::from_build_env();
    let scopes = browser_scopes();
    let clock: Rc<dyn Clock> = Rc::new(BrowserClock);
    let tokens = TokenStore::new(scopes.clone(), clock, config.token_lifetime_ms());
    let api = BrowserApi::new(&config, tokens.clone());
    let host = Rc::new(BrowserHost::new(pending));
    let verifier = AuthVerifier::new(config, api, tokens, scopes, Rc::new(BrowserScheduler), host);

    verifier.subscribe(move |state| auth.set(state.clone()));
    auth.set(verifier.state());
    VERIFIER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&verifier)));
    verifier.init();
}

#[cfg(feature = "csr")]
pub fn verifier() -> Option<Rc<Verifier>> {
    VERIFIER.with(|slot| slot.borrow().clone())
}

pub fn teardown() {
    #[cfg(feature = "csr")]
    {
        if let Some(verifier) = VERIFIER.with(|slot| slot.borrow_mut().take()) {
            verifier.teardown();
        }
    }
}

/// Authentication evidence for the guards: live state, valid token, cached user.
pub fn evidence(state: &AuthState) -> Evidence {
    #[cfg(feature = "csr")]
    {
        if let Some(verifier) = verifier() {
            return verifier.evidence();
        }
    }
    Evidence { live: state.is_authenticated(), ..Evidence::default() }
}

pub fn routes() -> RoutePaths {
    #[cfg(feature = "csr")]
    {
        if let Some(verifier) = verifier() {
            return verifier.routes().clone();
        }
    }
    RoutePaths::default()
}

pub async fn verify(force: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(verifier) = verifier() {
            verifier.verify_auth(force).await;
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = force;
    }
}

#[cfg(feature = "csr")]
pub async fn login(credentials: LoginRequest, origin: Option<String>) -> bool {
    match verifier() {
        Some(verifier) => verifier.login(credentials, origin.as_deref()).await,
        None => false,
    }
}

#[cfg(feature = "csr")]
pub async fn register(registration: RegisterRequest) -> bool {
    match verifier() {
        Some(verifier) => verifier.register(registration).await,
        None => false,
    }
}

pub fn logout() {
    #[cfg(feature = "csr")]
    {
        if let Some(verifier) = verifier() {
            verifier.logout();
        }
    }
}

/// Merge fresh profile fields into the cached and live user.
pub fn update_user(patch: guardian::types::UserPatch) {
    #[cfg(feature = "csr")]
    {
        if let Some(verifier) = verifier() {
            verifier.update_user(patch);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = patch;
    }
}

pub fn clear_error() {
    #[cfg(feature = "csr")]
    {
        if let Some(verifier) = verifier() {
            verifier.clear_error();
        }
    }
}
