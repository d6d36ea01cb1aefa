use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::core::models::{BoardState, NoticeBoard};
use crate::core::services::FetchClient;
use crate::features::activity_board::services::{
    load_activities, signup_participant, unregister_participant, ParticipantKey, SignupFormState,
};

pub struct ActivityBoardHook {
    pub board: RwSignal<BoardState>,
    pub notice: RwSignal<NoticeBoard>,
    pub pending_removals: RwSignal<HashSet<ParticipantKey>>,
    pub form: SignupFormState,
    pub submit_signup: Arc<dyn Fn() + Send + Sync>,
    pub remove_participant: Arc<dyn Fn(String, String) + Send + Sync>,
}

pub fn use_activity_board(config: BoardConfig) -> ActivityBoardHook {
    let board = RwSignal::new(BoardState::default());
    let notice = RwSignal::new(NoticeBoard::default());
    let pending_removals = RwSignal::new(HashSet::<ParticipantKey>::new());
    let form = SignupFormState::new();

    let api = FetchClient::new(&config);

    // Load activities on mount
    load_activities(api.clone(), board);

    let submit_signup = {
        let api = api.clone();
        let notice_ms = config.signup_notice_ms;
        Arc::new(move || {
            signup_participant(api.clone(), board, notice, form, notice_ms);
        }) as Arc<dyn Fn() + Send + Sync>
    };

    let remove_participant = {
        let notice_ms = config.unregister_notice_ms;
        Arc::new(move |activity: String, email: String| {
            unregister_participant(api.clone(), board, notice, pending_removals, activity, email, notice_ms);
        }) as Arc<dyn Fn(String, String) + Send + Sync>
    };

    ActivityBoardHook {
        board,
        notice,
        pending_removals,
        form,
        submit_signup,
        remove_participant,
    }
}
