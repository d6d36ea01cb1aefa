use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::pages::ActivityBoard;

#[component]
pub fn App() -> impl IntoView {
    provide_context(BoardConfig::from_document());

    view! {
        <main class="app">
            <ActivityBoard />
        </main>
    }
}
