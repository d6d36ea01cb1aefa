use leptos::prelude::*;

use crate::core::models::NoticeBoard;

// Message area below the form; `hidden` when nothing is showing
#[component]
pub fn NoticeBanner(notice: RwSignal<NoticeBoard>) -> impl IntoView {
    view! {
        <div id="message" class=move || notice.with(|n| n.css_class())>
            {move || notice.with(|n| n.text())}
        </div>
    }
}
