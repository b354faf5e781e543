//! Render-ready projection of [`PageState`].
//!
//! DESIGN
//! ======
//! The view is derived, never stored: which controls are enabled, what the
//! buttons say, and which cards are visible all follow from the state, so a
//! renderer only has to draw a `PageView` and cannot drift from the rules.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::page::PageState;

pub const PAGE_TITLE: &str = "Wiki Chat";
pub const URL_PLACEHOLDER: &str = "https://en.wikipedia.org/wiki/...";
pub const QUERY_PLACEHOLDER: &str = "What is the main topic?";
pub const CRAWL_LABEL: &str = "Crawl Page";
pub const CRAWLING_LABEL: &str = "Crawling...";
pub const ASK_LABEL: &str = "Ask Question";
pub const THINKING_LABEL: &str = "Thinking...";

/// A text input as the page shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    pub value: String,
    pub placeholder: &'static str,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub enabled: bool,
}

/// Everything a renderer needs for one frame of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub title: &'static str,
    pub url_input: Input,
    pub crawl_button: Button,
    pub query_input: Input,
    pub ask_button: Button,
    /// Error card body; `None` hides the card.
    pub error: Option<String>,
    /// Crawled markdown card body; `None` hides the card.
    pub content: Option<String>,
    /// Answer card body; `None` hides the card.
    pub answer: Option<String>,
    /// True while either request is in flight.
    pub busy: bool,
}

impl From<&PageState> for PageView {
    fn from(state: &PageState) -> Self {
        Self {
            title: PAGE_TITLE,
            url_input: Input {
                value: state.url.clone(),
                placeholder: URL_PLACEHOLDER,
                enabled: state.can_edit_url(),
            },
            crawl_button: Button {
                label: if state.is_loading_crawl { CRAWLING_LABEL } else { CRAWL_LABEL },
                enabled: state.can_crawl(),
            },
            query_input: Input {
                value: state.chat_query.clone(),
                placeholder: QUERY_PLACEHOLDER,
                enabled: state.can_edit_chat_query(),
            },
            ask_button: Button {
                label: if state.is_loading_chat { THINKING_LABEL } else { ASK_LABEL },
                enabled: state.can_chat(),
            },
            error: state.error.clone(),
            content: non_empty(&state.markdown_content),
            answer: non_empty(&state.chat_answer),
            busy: state.is_loading_crawl || state.is_loading_chat,
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() { None } else { Some(text.to_owned()) }
}
