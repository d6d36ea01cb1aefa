use serde::Deserialize;

use super::endpoints::{activities_url, signup_url};
use super::http::{execute_request, HttpReply, Method};
use crate::core::config::BoardConfig;
use crate::core::errors::ApiError;
use crate::core::models::ActivityCollection;

/// Body convention of the write endpoints: `{message}` on success, `{detail}` otherwise.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    // validation failures send a list of objects here instead of a string
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiMessage {
    /// Lenient parse; a body that isn't the expected JSON yields an empty message.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn detail_text(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }

    pub fn message_text(&self) -> Option<String> {
        self.message.clone().filter(|m| !m.is_empty())
    }
}

/// Reply to a signup or unregister request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub ok: bool,
    pub body: ApiMessage,
}

impl From<HttpReply> for ApiReply {
    fn from(reply: HttpReply) -> Self {
        Self {
            status: reply.status,
            ok: reply.ok,
            body: ApiMessage::parse(&reply.body),
        }
    }
}

/// Decode the `GET /activities` reply; a non-success status is an error.
pub fn decode_activities(reply: HttpReply) -> Result<ActivityCollection, ApiError> {
    if !reply.ok {
        return Err(ApiError::Status {
            status: reply.status,
            detail: ApiMessage::parse(&reply.body).detail_text(),
        });
    }
    Ok(ActivityCollection::from_json(&reply.body)?)
}

/// The three calls the board makes against the server.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
}

/// `ActivityApi` over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct FetchClient {
    base: String,
}

impl FetchClient {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }
}

impl ActivityApi for FetchClient {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError> {
        let reply = execute_request(Method::Get, &activities_url(&self.base)).await?;
        decode_activities(reply)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        let url = signup_url(&self.base, activity, email);
        Ok(execute_request(Method::Post, &url).await?.into())
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        let url = signup_url(&self.base, activity, email);
        Ok(execute_request(Method::Delete, &url).await?.into())
    }
}
