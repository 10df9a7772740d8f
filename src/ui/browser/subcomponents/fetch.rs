// SPDX-License-Identifier: MPL-2.0
//! Fetch orchestration sub-component.
//!
//! Every request gets a monotonically increasing id. A completion is applied
//! only if it carries the id of the latest request, so a slow response can
//! never overwrite the results of a newer query.

use crate::domain::error::FetchError;
use crate::domain::video::{total_pages, PageResult, VideoRecord};

/// Identifier of one issued request.
pub type RequestId = u64;

/// Fetch state for the video list.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Id of the most recently issued request.
    latest: RequestId,
    /// Number of requests issued since creation.
    issued: u64,
    loading: bool,
    error: Option<String>,
    videos: Vec<VideoRecord>,
    total: u64,
}

/// Messages for the fetch sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A request finished.
    Completed {
        request: RequestId,
        result: Result<PageResult, FetchError>,
    },
}

/// Effects produced by the fetch sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A newer request superseded this one; nothing was applied.
    Stale,
    /// Results were replaced by a fresh page.
    Loaded,
    /// The latest request failed; results were cleared.
    Failed,
}

impl State {
    /// Records a new request and enters the loading state.
    ///
    /// Returns the id the completion must carry to be applied.
    pub fn begin(&mut self) -> RequestId {
        self.latest = self.latest.wrapping_add(1);
        self.issued += 1;
        self.loading = true;
        self.error = None;
        self.latest
    }

    /// Handle a fetch message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Completed { request, result } => {
                if request != self.latest {
                    return Effect::Stale;
                }
                self.loading = false;
                match result {
                    Ok(page) => {
                        self.videos = page.videos;
                        self.total = page.total;
                        self.error = None;
                        Effect::Loaded
                    }
                    Err(err) => {
                        self.videos.clear();
                        self.total = 0;
                        self.error = Some(err.to_string());
                        Effect::Failed
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error banner text, if the latest request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total)
    }

    /// Number of requests issued so far.
    #[must_use]
    pub fn issued_count(&self) -> u64 {
        self.issued
    }

    #[must_use]
    pub fn latest_request(&self) -> RequestId {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(count: usize, total: u64) -> PageResult {
        let videos = (0..count)
            .map(|i| VideoRecord {
                id: Some(format!("v{i}")),
                ..VideoRecord::default()
            })
            .collect();
        PageResult::new(videos, total)
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut state = State::default();
        let first = state.begin();
        state.handle(Message::Completed {
            request: first,
            result: Err(FetchError::Transport("connection refused".into())),
        });
        assert!(state.error().is_some());

        state.begin();
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.issued_count(), 2);
    }

    #[test]
    fn successful_completion_applies_page() {
        let mut state = State::default();
        let request = state.begin();
        let effect = state.handle(Message::Completed {
            request,
            result: Ok(page(5, 42)),
        });

        assert_eq!(effect, Effect::Loaded);
        assert!(!state.is_loading());
        assert_eq!(state.videos().len(), 5);
        assert_eq!(state.total(), 42);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn failure_resets_list_and_total() {
        let mut state = State::default();
        let request = state.begin();
        state.handle(Message::Completed {
            request,
            result: Ok(page(3, 3)),
        });

        let request = state.begin();
        let effect = state.handle(Message::Completed {
            request,
            result: Err(FetchError::Http {
                status: 500,
                reason: "Internal Server Error".into(),
            }),
        });

        assert_eq!(effect, Effect::Failed);
        assert!(!state.is_loading());
        assert!(state.videos().is_empty());
        assert_eq!(state.total(), 0);
        assert_eq!(state.error(), Some("Error: 500 Internal Server Error"));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = State::default();
        let slow = state.begin();
        let fast = state.begin();

        assert_eq!(
            state.handle(Message::Completed {
                request: fast,
                result: Ok(page(2, 2)),
            }),
            Effect::Loaded
        );
        assert_eq!(
            state.handle(Message::Completed {
                request: slow,
                result: Ok(page(9, 90)),
            }),
            Effect::Stale
        );
        assert_eq!(state.videos().len(), 2);
        assert_eq!(state.total(), 2);
    }

    #[test]
    fn loading_persists_until_latest_request_resolves() {
        let mut state = State::default();
        let old = state.begin();
        let new = state.begin();

        state.handle(Message::Completed {
            request: old,
            result: Ok(page(1, 1)),
        });
        assert!(state.is_loading());

        state.handle(Message::Completed {
            request: new,
            result: Ok(page(1, 1)),
        });
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_failure_does_not_surface_error() {
        let mut state = State::default();
        let old = state.begin();
        let new = state.begin();
        state.handle(Message::Completed {
            request: new,
            result: Ok(page(1, 1)),
        });
        state.handle(Message::Completed {
            request: old,
            result: Err(FetchError::Transport("timeout".into())),
        });
        assert!(state.error().is_none());
        assert_eq!(state.videos().len(), 1);
    }
}
