use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;

use crate::core::models::board::EMPTY_PARTICIPANTS_TEXT;
use crate::core::models::ParticipantRow;
use crate::features::activity_board::services::ParticipantKey;

#[component]
pub fn ParticipantList(
    #[prop(into)] activity: String,
    #[prop(into)] rows: Signal<Vec<ParticipantRow>>,
    pending: RwSignal<HashSet<ParticipantKey>>,
    on_remove: Arc<dyn Fn(String, String) + Send + Sync>,
) -> impl IntoView {
    view! {
        <ul class="participants-list">
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=|| view! { <li class="participant-empty">{EMPTY_PARTICIPANTS_TEXT}</li> }
            >
                {
                    let activity = activity.clone();
                    let on_remove = on_remove.clone();
                    view! {
                        <For
                            each=move || rows.get()
                            key=ParticipantRow::key
                            children=move |row| {
                                view! {
                                    <ParticipantItem
                                        activity=activity.clone()
                                        row=row
                                        pending=pending
                                        on_remove=on_remove.clone()
                                    />
                                }
                            }
                        />
                    }
                }
            </Show>
        </ul>
    }
}

#[component]
pub fn ParticipantItem(
    activity: String,
    row: ParticipantRow,
    pending: RwSignal<HashSet<ParticipantKey>>,
    on_remove: Arc<dyn Fn(String, String) + Send + Sync>,
) -> impl IntoView {
    let key: ParticipantKey = (activity.clone(), row.email.clone());
    let is_pending = move || pending.with(|in_flight| in_flight.contains(&key));

    let remove = {
        let email = row.email.clone();
        move |e: leptos::ev::MouseEvent| {
            // keep the click away from card-level handlers
            e.stop_propagation();
            on_remove(activity.clone(), email.clone());
        }
    };

    let label = format!("Unregister {}", row.email);

    view! {
        <li class="participant-item">
            <span class="participant-avatar">{row.initials.clone()}</span>
            <span class="participant-email">{row.email.clone()}</span>
            <button
                type="button"
                class="participant-remove"
                title=label.clone()
                aria-label=label
                prop:disabled=is_pending
                on:click=remove
            >
                "✖"
            </button>
        </li>
    }
}
