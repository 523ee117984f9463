//! Home feed: every post, newest first.
//!
//! TRADE-OFFS
//! ==========
//! The feed waits briefly for the first auth check so the request carries a
//! token, then loads anyway. A cold backend gets a few retries with backoff
//! before the page gives up and shows an error.

use guardian::{AuthState, Role};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::post_card::post_list;
use crate::net::types::Post;

pub const FEED_FAILED: &str = "Failed to load posts";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed = RwSignal::new(None::<Result<Vec<Post>, String>>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = load_feed(auth).await;
        let _ = feed.try_set(Some(result));
    });

    let can_create = move || auth.with(|state| state.role().is_some_and(Role::can_author));

    view! {
        <section class="feed">
            <div class="feed__header">
                <h1>"Latest Posts"</h1>
                <Show when=can_create>
                    <A href="/create-post" attr:class="feed__create">"Create Post"</A>
                </Show>
            </div>
            {move || match feed.get() {
                None => view! { <p class="feed__loading">"Loading posts..."</p> }.into_any(),
                Some(Err(message)) => view! { <p class="feed__error">{message}</p> }.into_any(),
                Some(Ok(posts)) => post_list(posts, "No posts yet"),
            }}
        </section>
    }
}

#[cfg(feature = "csr")]
async fn load_feed(auth: RwSignal<AuthState>) -> Result<Vec<Post>, String> {
    use std::time::Duration;

    use guardian::retry::{READY_POLL_INTERVAL_MS, READY_POLLS, RetryPolicy, retry_transient, wait_until_ready};
    use leptos::logging::{log, warn};

    use crate::net::api::fetch_posts;
    use crate::net::types::newest_first;
    use crate::platform::BrowserScheduler;

    let scheduler = BrowserScheduler;
    let auth_ready = || auth.try_with_untracked(|state| state.initial_check_done).unwrap_or(true);
    let ready =
        wait_until_ready(&scheduler, READY_POLLS, Duration::from_millis(READY_POLL_INTERVAL_MS), auth_ready).await;
    if !ready {
        log!("[home] auth check still pending, loading posts anyway");
    }

    match retry_transient(&scheduler, &RetryPolicy::default(), fetch_posts).await {
        Ok(posts) => Ok(newest_first(posts)),
        Err(e) => {
            warn!("[home] loading posts failed: {e}");
            Err(FEED_FAILED.to_owned())
        }
    }
}
