use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;

use super::activity_card::ActivityCard;
use crate::core::models::board::{LOADING_TEXT, LOAD_FAILED_TEXT};
use crate::core::models::{BoardState, LoadState};
use crate::features::activity_board::services::ParticipantKey;

#[component]
pub fn ActivityList(
    board: RwSignal<BoardState>,
    pending: RwSignal<HashSet<ParticipantKey>>,
    on_remove: Arc<dyn Fn(String, String) + Send + Sync>,
) -> impl IntoView {
    let status = Memo::new(move |_| board.with(|state| state.status));

    view! {
        <div id="activities-list">
            {move || match status.get() {
                LoadState::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
                LoadState::Ready => {
                    let on_remove = on_remove.clone();
                    view! {
                        // keyed by name, so a reload reuses cards instead of stacking new ones
                        <For
                            each=move || board.with(|state| state.activity_names())
                            key=|name| name.clone()
                            children=move |name| {
                                view! {
                                    <ActivityCard
                                        name=name
                                        board=board
                                        pending=pending
                                        on_remove=on_remove.clone()
                                    />
                                }
                            }
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
