//! Page controller: runs crawl and chat end to end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the only writer of [`PageState`]. State lives in a
//! `watch` channel so every transition (start, settle, input edits) is
//! published to subscribers that re-render the page. Operations take `&self`
//! and have a single suspend point, the backend call.
//!
//! No retries, no cancellation: a request runs until the backend answers or
//! the transport gives up.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use tokio::sync::watch;

use crate::net::api::Backend;
use crate::state::page::{ChatStart, Outcome, PageState};
use crate::view::PageView;

pub struct PageController<B> {
    backend: B,
    state: watch::Sender<PageState>,
}

impl<B: Backend> PageController<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(PageState::default());
        Self { backend, state }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::from(&*self.state.borrow())
    }

    /// Receive every published transition from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.state.subscribe()
    }

    /// Edit the URL input. Returns `false` while the input is disabled.
    pub fn set_url(&self, url: &str) -> bool {
        let mut accepted = false;
        self.state.send_if_modified(|state| {
            let changed = state.url != url;
            accepted = state.set_url(url);
            accepted && changed
        });
        accepted
    }

    /// Edit the question input. Returns `false` while the input is disabled.
    pub fn set_chat_query(&self, query: &str) -> bool {
        let mut accepted = false;
        self.state.send_if_modified(|state| {
            let changed = state.chat_query != query;
            accepted = state.set_chat_query(query);
            accepted && changed
        });
        accepted
    }

    /// Crawl the current URL and store the returned markdown.
    pub async fn crawl(&self) -> Outcome {
        let mut request = None;
        self.state.send_if_modified(|state| {
            request = state.begin_crawl();
            request.is_some()
        });
        let Some(request) = request else {
            tracing::debug!("crawl ignored: control disabled");
            return Outcome::Ignored;
        };

        tracing::info!(url = %request.url, "crawl started");
        let result = self.backend.crawl(&request).await;
        match &result {
            Ok(response) => tracing::info!(bytes = response.markdown.len(), "crawl finished"),
            Err(e) => tracing::warn!(url = %request.url, error = %e, "crawl failed"),
        }

        let mut outcome = Outcome::Ignored;
        self.state.send_modify(|state| outcome = state.settle_crawl(result));
        outcome
    }

    /// Ask the current question against the crawled markdown.
    pub async fn chat(&self) -> Outcome {
        let mut start = ChatStart::Disabled;
        self.state.send_if_modified(|state| {
            start = state.begin_chat();
            !matches!(start, ChatStart::Disabled)
        });
        let request = match start {
            ChatStart::Request(request) => request,
            ChatStart::Refused(message) => {
                tracing::warn!("chat refused: no crawled content");
                return Outcome::Failed(message);
            }
            ChatStart::Disabled => {
                tracing::debug!("chat ignored: control disabled");
                return Outcome::Ignored;
            }
        };

        tracing::info!(query = %request.query, context_bytes = request.context.len(), "chat started");
        let result = self.backend.chat(&request).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "chat failed");
        }

        let mut outcome = Outcome::Ignored;
        self.state.send_modify(|state| outcome = state.settle_chat(result));
        outcome
    }
}
