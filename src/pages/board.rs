use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::features::activity_board::{use_activity_board, ActivityList, NoticeBanner, SignupForm};

#[component]
pub fn ActivityBoard() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let hook = use_activity_board(config);

    let board = hook.board;
    let activity_names = Signal::derive(move || board.with(|state| state.activity_names()));

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Activity Board"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>

            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList
                    board=board
                    pending=hook.pending_removals
                    on_remove=hook.remove_participant
                />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm
                    activity_names=activity_names
                    form=hook.form
                    on_submit=hook.submit_signup
                />
                <NoticeBanner notice=hook.notice />
            </section>
        </div>
    }
}
