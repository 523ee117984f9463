//! Browser implementations of the verifier's seams.
//!
//! TRADE-OFFS
//! ==========
//! Web Storage can be missing (private mode, disabled cookies) or throw on
//! quota. Every failure is logged and swallowed: reads come back empty and
//! writes are dropped, so auth degrades to signed-out instead of panicking.

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use guardian::Redirect;
use guardian::clock::Clock;
use guardian::schedule::{Scheduler, TaskHandle};
use guardian::storage::{StorageBackend, StorageScopes};
use guardian::sync::StorageChange;
use guardian::verifier::Host;
use leptos::logging::warn;
use leptos::prelude::{RwSignal, Set};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebStorage {
    Local,
    Session,
}

impl WebStorage {
    fn area(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let area = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        area.ok().flatten()
    }
}

impl StorageBackend for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.area()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(area) = self.area() else {
            return;
        };
        if let Err(e) = area.set_item(key, value) {
            warn!("[storage] failed to write {key} to {self:?}: {e:?}");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(area) = self.area() {
            let _ = area.remove_item(key);
        }
    }
}

/// `localStorage` as the durable scope, `sessionStorage` as the session scope.
pub fn browser_scopes() -> StorageScopes {
    StorageScopes::new(Rc::new(WebStorage::Local), Rc::new(WebStorage::Session))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}

/// Hands navigations to the router through a signal; `AuthNavigator` inside
/// the `<Router>` performs them.
pub struct BrowserHost {
    pending: RwSignal<Option<Redirect>>,
}

impl BrowserHost {
    pub fn new(pending: RwSignal<Option<Redirect>>) -> Self {
        Self { pending }
    }
}

impl Host for BrowserHost {
    fn navigate(&self, redirect: &Redirect) {
        self.pending.set(Some(redirect.clone()));
    }

    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            warn!("[auth] page reload failed: {e:?}");
        }
    }

    fn watch_storage(&self, handler: Box<dyn Fn(&StorageChange)>) -> TaskHandle {
        let Some(window) = web_sys::window() else {
            return TaskHandle::new(|| {});
        };
        let listener = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
            handler(&StorageChange {
                key: event.key(),
                old_value: event.old_value(),
                new_value: event.new_value(),
            });
        });
        if let Err(e) = window.add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref()) {
            warn!("[auth] could not watch storage events: {e:?}");
        }
        TaskHandle::new(move || {
            let _ = window.remove_event_listener_with_callback("storage", listener.as_ref().unchecked_ref());
        })
    }
}
