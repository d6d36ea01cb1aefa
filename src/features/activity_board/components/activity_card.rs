use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;

use super::participant_list::ParticipantList;
use crate::core::models::{ActivityCard as CardData, BoardState};
use crate::features::activity_board::services::ParticipantKey;

// Reactive text for one field of the card
fn card_text(
    card: Memo<Option<CardData>>,
    field: fn(&CardData) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || card.with(|c| c.as_ref().map(field).unwrap_or_default())
}

/// One activity. Only this card's text and rows update when its activity changes.
#[component]
pub fn ActivityCard(
    name: String,
    board: RwSignal<BoardState>,
    pending: RwSignal<HashSet<ParticipantKey>>,
    on_remove: Arc<dyn Fn(String, String) + Send + Sync>,
) -> impl IntoView {
    let card = {
        let name = name.clone();
        Memo::new(move |_| board.with(|state| state.card(&name)))
    };

    let rows = Signal::derive(move || {
        card.with(|c| c.as_ref().map(|c| c.participants.clone()).unwrap_or_default())
    });

    view! {
        <div class="activity-card">
            <h4>{name.clone()}</h4>
            <p>{card_text(card, |c| c.description.clone())}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card_text(card, |c| c.schedule.clone())}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {card_text(card, CardData::availability)}
            </p>
            <div class="participants">
                <h5>{card_text(card, CardData::participants_header)}</h5>
                <ParticipantList activity=name rows=rows pending=pending on_remove=on_remove />
            </div>
        </div>
    }
}
