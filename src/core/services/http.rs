use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::core::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Raw outcome of a fetch that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

// Generic fetch executor; any HTTP status counts as a reply, only transport failures are errors
pub async fn execute_request(method: Method, url: &str) -> Result<HttpReply, ApiError> {
    let init = RequestInit::new();
    init.set_method(method.as_str());
    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::transport)?;

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::transport)?
        .dyn_into()
        .map_err(ApiError::transport)?;

    let text = JsFuture::from(response.text().map_err(ApiError::transport)?)
        .await
        .map_err(ApiError::transport)?;

    Ok(HttpReply {
        status: response.status(),
        ok: response.ok(),
        body: text.as_string().unwrap_or_default(),
    })
}
