//! Board configuration.
//!
//! Everything is compiled in except the API base path, which the host page can
//! override with `<meta name="activity-board-api" content="https://host/prefix">`.

/// Name of the meta tag that overrides the API base path.
pub const API_BASE_META: &str = "activity-board-api";

/// Runtime settings shared through context.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Prefix put in front of every API path; empty means same origin
    pub api_base: String,
    /// How long a signup notice stays visible
    pub signup_notice_ms: u32,
    /// How long an unregister notice stays visible
    pub unregister_notice_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            signup_notice_ms: 5_000,
            unregister_notice_ms: 4_000,
        }
    }
}

impl BoardConfig {
    /// Defaults, with the API base taken from the page's meta tag if it has one.
    pub fn from_document() -> Self {
        let config = Self::default();
        match read_meta_content(API_BASE_META) {
            Some(base) => config.with_api_base(&base),
            None => config,
        }
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }
}

fn read_meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content").filter(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_same_origin_and_fixed_delays() {
        let config = BoardConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.signup_notice_ms, 5_000);
        assert_eq!(config.unregister_notice_ms, 4_000);
    }

    #[test]
    fn api_base_drops_trailing_slashes_and_whitespace() {
        let config = BoardConfig::default().with_api_base(" https://school.example/api/ ");
        assert_eq!(config.api_base, "https://school.example/api");
    }
}
