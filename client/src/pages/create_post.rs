//! New-post form for authors and admins.

#[cfg(test)]
#[path = "create_post_test.rs"]
mod create_post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::NewPost;

pub const MISSING_POST_FIELDS: &str = "Title and content are required";
pub const SAVE_FAILED: &str = "Failed to save post";

/// # Errors
///
/// Returns the message to show when the title or body is blank.
pub fn validate_post(title: &str, content: &str) -> Result<NewPost, &'static str> {
    let title = title.trim();
    if title.is_empty() || content.trim().is_empty() {
        return Err(MISSING_POST_FIELDS);
    }
    Ok(NewPost { title: title.to_owned(), content: content.to_owned() })
}

#[component]
pub fn CreatePostPage() -> impl IntoView {
    let navigate = use_navigate();
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let post = match validate_post(&title.get(), &content.get()) {
            Ok(post) => post,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_post(&post).await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("[create-post] save failed: {e}");
                        let _ = error.try_set(Some(e.user_message(SAVE_FAILED)));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = post;
            busy.set(false);
        }
    };

    let on_cancel = {
        let navigate = use_navigate();
        move |_| navigate("/", leptos_router::NavigateOptions::default())
    };
    #[cfg(not(feature = "csr"))]
    let _ = navigate;

    view! {
        <section class="post-editor">
            <h1>"Create Post"</h1>
            {move || error.get().map(|message| view! { <p class="post-editor__error">{message}</p> })}
            <form on:submit=on_submit>
                <input
                    class="post-editor__title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="post-editor__content"
                    rows="12"
                    placeholder="Write your post..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <div class="post-editor__actions">
                    <button type="button" class="button--secondary" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Publish" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
