//! Post summary card used by the feed and "My Posts".

use leptos::prelude::*;

use crate::net::types::{AuthorRef, Post};

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let author = post.author.as_ref().map_or("Unknown author", AuthorRef::display_name).to_owned();
    let date = post
        .created_at
        .as_deref()
        .map(|stamp| stamp.split('T').next().unwrap_or(stamp).to_owned());

    view! {
        <article class="post-card">
            <h2 class="post-card__title">{post.title}</h2>
            <p class="post-card__meta">
                {author}
                {date.map(|date| view! { <span class="post-card__date">" · " {date}</span> })}
            </p>
            <p class="post-card__content">{post.content}</p>
        </article>
    }
}

/// Empty-state message or the list of cards.
pub fn post_list(posts: Vec<Post>, empty: &'static str) -> AnyView {
    if posts.is_empty() {
        return view! { <p class="post-list__empty">{empty}</p> }.into_any();
    }
    view! {
        <div class="post-list">
            {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
        </div>
    }
    .into_any()
}
