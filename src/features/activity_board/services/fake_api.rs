//! In-memory `ActivityApi` for tests.

use std::cell::RefCell;

use crate::core::errors::ApiError;
use crate::core::models::ActivityCollection;
use crate::core::services::{ActivityApi, ApiMessage, ApiReply};

/// Answers every write with the same canned result and records the calls.
pub struct FakeApi {
    pub listing: Result<ActivityCollection, ApiError>,
    pub reply: Result<ApiReply, ApiError>,
    pub calls: RefCell<Vec<(&'static str, String, String)>>,
}

impl FakeApi {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            listing: Ok(ActivityCollection::default()),
            reply: Ok(ApiReply {
                status,
                ok: (200..300).contains(&status),
                body: ApiMessage::parse(body),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(err: ApiError) -> Self {
        Self {
            listing: Ok(ActivityCollection::default()),
            reply: Err(err),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn listing(mut self, listing: Result<ActivityCollection, ApiError>) -> Self {
        self.listing = listing;
        self
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|(name, _, _)| *name).collect()
    }
}

impl ActivityApi for FakeApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError> {
        self.calls.borrow_mut().push(("list", String::new(), String::new()));
        self.listing.clone()
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        self.calls.borrow_mut().push(("signup", activity.into(), email.into()));
        self.reply.clone()
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        self.calls.borrow_mut().push(("unregister", activity.into(), email.into()));
        self.reply.clone()
    }
}
