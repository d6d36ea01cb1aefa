use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::commands::{remove_participant, submit_signup, CommandOutcome};
use crate::core::errors::ApiError;
use crate::core::models::{BoardState, NoticeBoard};
use crate::core::services::ActivityApi;

/// (activity name, participant email) of a removal in flight.
pub type ParticipantKey = (String, String);

/// Fields of the signup form, owned by the board so a successful signup can clear them.
#[derive(Debug, Clone, Copy)]
pub struct SignupFormState {
    pub email: RwSignal<String>,
    pub activity: RwSignal<String>,
}

impl SignupFormState {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            activity: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.email.set(String::new());
        self.activity.set(String::new());
    }
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a signup or unregister did to the board.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub outcome: CommandOutcome,
    /// Generation of the notice shown for `outcome`
    pub notice_generation: u64,
    /// Result of the reload a successful signup triggers
    pub reload: Option<Result<(), ApiError>>,
}

// Fetch the whole collection and replace the board with it
pub async fn refresh_board<A: ActivityApi>(api: &A, board: RwSignal<BoardState>) -> Result<(), ApiError> {
    match api.list_activities().await {
        Ok(activities) => {
            board.update(|state| state.loaded(activities));
            Ok(())
        }
        Err(e) => {
            board.update(|state| state.load_failed());
            Err(e)
        }
    }
}

fn show_outcome(notice: RwSignal<NoticeBoard>, outcome: &CommandOutcome) -> u64 {
    notice
        .try_update(|n| n.show(outcome.notice_kind(), outcome.text()))
        .unwrap_or_default()
}

/// Submit the form. Success shows the message, clears the form and reloads;
/// failure only shows the message.
pub async fn apply_signup<A: ActivityApi>(
    api: &A,
    board: RwSignal<BoardState>,
    notice: RwSignal<NoticeBoard>,
    form: SignupFormState,
) -> ActionReport {
    let email = form.email.get_untracked();
    let activity = form.activity.get_untracked();

    let outcome = submit_signup(api, &activity, &email).await;
    let notice_generation = show_outcome(notice, &outcome);

    let reload = if outcome.is_success() {
        form.reset();
        Some(refresh_board(api, board).await)
    } else {
        None
    };

    ActionReport { outcome, notice_generation, reload }
}

/// Unregister one participant and patch that card in place. Returns `None`
/// without calling the server if the same removal is already in flight.
pub async fn apply_unregister<A: ActivityApi>(
    api: &A,
    board: RwSignal<BoardState>,
    notice: RwSignal<NoticeBoard>,
    pending: RwSignal<HashSet<ParticipantKey>>,
    activity: &str,
    email: &str,
) -> Option<ActionReport> {
    let key: ParticipantKey = (activity.to_string(), email.to_string());
    let started = pending
        .try_update(|in_flight| in_flight.insert(key.clone()))
        .unwrap_or(false);
    if !started {
        return None;
    }

    let outcome = remove_participant(api, activity, email).await;
    if outcome.is_success() {
        board.update(|state| {
            state.remove_participant(activity, email);
        });
    }
    let notice_generation = show_outcome(notice, &outcome);

    pending.update(|in_flight| {
        in_flight.remove(&key);
    });

    Some(ActionReport { outcome, notice_generation, reload: None })
}

// Hide the notice after `delay_ms`, unless a newer one replaced it
fn expire_notice_later(notice: RwSignal<NoticeBoard>, generation: u64, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        notice.update(|n| {
            n.expire(generation);
        });
    });
}

fn log_report(report: &ActionReport, action: &str) {
    if let CommandOutcome::Failure { cause: Some(cause), .. } = &report.outcome {
        web_sys::console::error_1(&format!("Error {}: {}", action, cause).into());
    }
    if let Some(Err(e)) = &report.reload {
        web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
    }
}

pub fn load_activities<A: ActivityApi + 'static>(api: A, board: RwSignal<BoardState>) {
    spawn_local(async move {
        match refresh_board(&api, board).await {
            Ok(()) => {
                let count = board.with_untracked(|state| state.activities().iter().count());
                web_sys::console::log_1(&format!("Loaded {} activities", count).into());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
            }
        }
    });
}

pub fn signup_participant<A: ActivityApi + 'static>(
    api: A,
    board: RwSignal<BoardState>,
    notice: RwSignal<NoticeBoard>,
    form: SignupFormState,
    notice_ms: u32,
) {
    spawn_local(async move {
        let report = apply_signup(&api, board, notice, form).await;
        log_report(&report, "signing up");
        expire_notice_later(notice, report.notice_generation, notice_ms);
    });
}

pub fn unregister_participant<A: ActivityApi + 'static>(
    api: A,
    board: RwSignal<BoardState>,
    notice: RwSignal<NoticeBoard>,
    pending: RwSignal<HashSet<ParticipantKey>>,
    activity: String,
    email: String,
    notice_ms: u32,
) {
    spawn_local(async move {
        match apply_unregister(&api, board, notice, pending, &activity, &email).await {
            Some(report) => {
                log_report(&report, "unregistering");
                expire_notice_later(notice, report.notice_generation, notice_ms);
            }
            None => {
                web_sys::console::log_1(
                    &format!("Removal of {} from {} already in flight", email, activity).into(),
                );
            }
        }
    });
}
