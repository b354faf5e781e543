//! Form state for the crawl-then-chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Crawl and chat are two independent request lifecycles, each
//! idle -> in-flight -> settled. This module holds the fields and the pure
//! transitions; `controller` wraps them around the backend calls so the
//! transitions stay testable without a network.
//!
//! DESIGN
//! ======
//! Starting an operation is split from settling it. `begin_*` clears stale
//! output immediately and hands back the request to send, so nothing from a
//! previous cycle is ever shown next to a request in flight. `settle_*`
//! applies the backend result and always drops the loading flag.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatRequest, ChatResponse, CrawlRequest, CrawlResponse};

/// Shown when chat is attempted before any markdown has been crawled.
pub const CRAWL_FIRST_MESSAGE: &str = "Please crawl a URL first to provide context.";
/// Used when a crawl failure carries no message of its own.
pub const CRAWL_FAILED_MESSAGE: &str = "Failed to crawl URL.";
/// Used when a chat failure carries no message of its own.
pub const CHAT_FAILED_MESSAGE: &str = "Failed to get chat response.";

/// All transient state owned by one page instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// URL input value.
    pub url: String,
    /// Markdown returned by the last successful crawl; chat context.
    pub markdown_content: String,
    /// Question input value.
    pub chat_query: String,
    /// Answer returned by the last successful chat.
    pub chat_answer: String,
    pub is_loading_crawl: bool,
    pub is_loading_chat: bool,
    /// Message from the most recent failure, cleared when the next attempt starts.
    pub error: Option<String>,
}

/// What a submission did, as seen by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The control was disabled; state is unchanged and no request was sent.
    Ignored,
    Succeeded,
    /// The message now stored in `PageState::error`.
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Result of trying to start a chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatStart {
    /// The chat is in flight; send this request.
    Request(ChatRequest),
    /// No markdown to ask about. The error is set and nothing should be sent.
    Refused(String),
    /// The ask control is disabled; state is unchanged.
    Disabled,
}

impl PageState {
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.markdown_content.is_empty()
    }

    /// The URL input accepts edits unless a crawl is in flight.
    #[must_use]
    pub fn can_edit_url(&self) -> bool {
        !self.is_loading_crawl
    }

    #[must_use]
    pub fn can_crawl(&self) -> bool {
        !self.is_loading_crawl && !self.url.trim().is_empty()
    }

    /// The question input opens once there is markdown and no chat in flight.
    #[must_use]
    pub fn can_edit_chat_query(&self) -> bool {
        self.has_content() && !self.is_loading_chat
    }

    #[must_use]
    pub fn can_chat(&self) -> bool {
        self.can_edit_chat_query() && !self.chat_query.trim().is_empty()
    }

    /// Replace the URL input. Returns `false` (and leaves it alone) while the
    /// input is disabled.
    pub fn set_url(&mut self, url: &str) -> bool {
        if !self.can_edit_url() {
            return false;
        }
        url.clone_into(&mut self.url);
        true
    }

    /// Replace the question input. Returns `false` while the input is disabled.
    pub fn set_chat_query(&mut self, query: &str) -> bool {
        if !self.can_edit_chat_query() {
            return false;
        }
        query.clone_into(&mut self.chat_query);
        true
    }

    /// Enter the crawl in-flight state and return the request to send.
    ///
    /// Clears `error`, `markdown_content` and `chat_answer` up front. Returns
    /// `None` without touching anything when the crawl control is disabled.
    pub fn begin_crawl(&mut self) -> Option<CrawlRequest> {
        if !self.can_crawl() {
            return None;
        }
        self.is_loading_crawl = true;
        self.error = None;
        self.markdown_content.clear();
        self.chat_answer.clear();
        Some(CrawlRequest { url: self.url.clone() })
    }

    /// Apply the crawl result and leave the in-flight state.
    pub fn settle_crawl(&mut self, result: Result<CrawlResponse, ApiError>) -> Outcome {
        self.is_loading_crawl = false;
        match result {
            Ok(response) => {
                self.markdown_content = response.markdown;
                self.chat_answer.clear();
                self.error = None;
                Outcome::Succeeded
            }
            Err(err) => self.fail(&err, CRAWL_FAILED_MESSAGE),
        }
    }

    /// Enter the chat in-flight state, or refuse when there is nothing to ask about.
    ///
    /// A missing crawl is reported even though the ask control is disabled
    /// in that state, so a direct submission still explains itself.
    pub fn begin_chat(&mut self) -> ChatStart {
        if self.is_loading_chat {
            return ChatStart::Disabled;
        }
        if !self.has_content() {
            self.error = Some(CRAWL_FIRST_MESSAGE.to_owned());
            return ChatStart::Refused(CRAWL_FIRST_MESSAGE.to_owned());
        }
        if self.chat_query.trim().is_empty() {
            return ChatStart::Disabled;
        }
        self.is_loading_chat = true;
        self.error = None;
        self.chat_answer.clear();
        ChatStart::Request(ChatRequest {
            query: self.chat_query.clone(),
            context: self.markdown_content.clone(),
        })
    }

    /// Apply the chat result and leave the in-flight state.
    pub fn settle_chat(&mut self, result: Result<ChatResponse, ApiError>) -> Outcome {
        self.is_loading_chat = false;
        match result {
            Ok(response) => {
                self.chat_answer = response.answer;
                Outcome::Succeeded
            }
            Err(err) => self.fail(&err, CHAT_FAILED_MESSAGE),
        }
    }

    fn fail(&mut self, err: &ApiError, fallback: &str) -> Outcome {
        let mut message = err.to_string();
        if message.is_empty() {
            fallback.clone_into(&mut message);
        }
        self.error = Some(message.clone());
        Outcome::Failed(message)
    }
}
