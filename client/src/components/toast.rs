//! Dismissible notice shown after admin actions.

use guardian::access::{Notice, NoticeKind};
use leptos::prelude::*;

#[cfg(feature = "csr")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(5);

#[component]
pub fn Toast() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(shown) = notice.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_DISMISS).await;
            if notice.try_get_untracked().flatten().as_ref() == Some(&shown) {
                let _ = notice.try_set(None);
            }
        });
    });

    move || {
        notice.get().map(|current| {
            let class = match current.kind {
                NoticeKind::Success => "toast toast--success",
                NoticeKind::Error => "toast toast--error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast__message">{current.message}</span>
                    <button class="toast__dismiss" type="button" on:click=move |_| notice.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
