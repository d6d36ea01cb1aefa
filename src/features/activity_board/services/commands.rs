//! Signup and unregister as plain async commands.
//!
//! Each command talks to an [`ActivityApi`] and collapses whatever happened
//! into a [`CommandOutcome`]; nothing here touches signals or the page.

use crate::core::errors::ApiError;
use crate::core::models::NoticeKind;
use crate::core::services::{ActivityApi, ApiReply};

pub const SIGNUP_REJECTED: &str = "An error occurred";
pub const SIGNUP_UNREACHABLE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_REJECTED: &str = "Failed to unregister participant";
pub const UNREGISTER_UNREACHABLE: &str = "Failed to unregister. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Success(String),
    Failure {
        /// Text for the user
        detail: String,
        /// What actually went wrong, for the console
        cause: Option<ApiError>,
    },
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success(_))
    }

    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            CommandOutcome::Success(_) => NoticeKind::Success,
            CommandOutcome::Failure { .. } => NoticeKind::Error,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            CommandOutcome::Success(message) => message,
            CommandOutcome::Failure { detail, .. } => detail,
        }
    }
}

fn from_reply(reply: ApiReply, success_text: String, rejected_text: &str) -> CommandOutcome {
    if reply.ok {
        CommandOutcome::Success(reply.body.message_text().unwrap_or(success_text))
    } else {
        let detail = reply.body.detail_text();
        CommandOutcome::Failure {
            detail: detail.clone().unwrap_or_else(|| rejected_text.to_string()),
            cause: Some(ApiError::Status {
                status: reply.status,
                detail,
            }),
        }
    }
}

pub async fn submit_signup<A: ActivityApi>(api: &A, activity: &str, email: &str) -> CommandOutcome {
    match api.signup(activity, email).await {
        Ok(reply) => from_reply(
            reply,
            format!("Signed up {} for {}", email, activity),
            SIGNUP_REJECTED,
        ),
        Err(e) => CommandOutcome::Failure {
            detail: SIGNUP_UNREACHABLE.to_string(),
            cause: Some(e),
        },
    }
}

pub async fn remove_participant<A: ActivityApi>(api: &A, activity: &str, email: &str) -> CommandOutcome {
    match api.unregister(activity, email).await {
        Ok(reply) => from_reply(
            reply,
            format!("Unregistered {} from {}", email, activity),
            UNREGISTER_REJECTED,
        ),
        Err(e) => CommandOutcome::Failure {
            detail: UNREGISTER_UNREACHABLE.to_string(),
            cause: Some(e),
        },
    }
}
