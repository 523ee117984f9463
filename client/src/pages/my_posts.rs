//! Posts written by the signed-in author.

use guardian::AuthState;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::post_card::post_list;
use crate::net::types::Post;

pub const MY_POSTS_FAILED: &str = "Failed to load your posts";

#[component]
pub fn MyPostsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let posts = RwSignal::new(None::<Result<Vec<Post>, String>>);
    let author_id = move || auth.with(|state| state.current_user().map(|user| user.id.clone()));

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(user_id) = author_id() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_posts()
                .await
                .map(|all| crate::net::types::newest_first(crate::net::types::authored_by(all, &user_id)))
                .map_err(|e| {
                    leptos::logging::warn!("[my-posts] loading failed: {e}");
                    MY_POSTS_FAILED.to_owned()
                });
            let _ = posts.try_set(Some(result));
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = author_id;

    view! {
        <section class="my-posts">
            <div class="feed__header">
                <A href="/" attr:class="back-link">"Back to Home"</A>
                <h1>"My Posts"</h1>
                <A href="/create-post" attr:class="feed__create">"Create Post"</A>
            </div>
            {move || match posts.get() {
                None => view! { <p class="feed__loading">"Loading your posts..."</p> }.into_any(),
                Some(Err(message)) => view! { <p class="feed__error">{message}</p> }.into_any(),
                Some(Ok(mine)) => post_list(mine, "You haven't written any posts yet."),
            }}
        </section>
    }
}
