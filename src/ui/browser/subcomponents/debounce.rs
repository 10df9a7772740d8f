// SPDX-License-Identifier: MPL-2.0
//! Search box debounce sub-component.
//!
//! Keystrokes update the pending text immediately and (re)start a single
//! timer. Only the timer started by the latest keystroke may commit.

use iced::task::Handle;
use iced::Task;
use std::fmt;
use std::time::Duration;

/// Debounce state for the search box.
#[derive(Default)]
pub struct State {
    /// Text currently shown in the search box.
    pending: String,
    /// Bumped on every keystroke and on cancel; identifies the live timer.
    generation: u64,
    /// Whether a commit is outstanding.
    scheduled: bool,
    /// Handle of the running timer task. Dropping it aborts the timer.
    timer: Option<Handle>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("pending", &self.pending)
            .field("generation", &self.generation)
            .field("scheduled", &self.scheduled)
            .field("timer_armed", &self.timer.is_some())
            .finish()
    }
}

/// Messages for the debounce sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user edited the search box.
    Input(String),
    /// A timer started for `generation` fired.
    Elapsed(u64),
    /// Drop any outstanding commit (teardown).
    Cancel,
}

/// Effects produced by the debounce sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Start a timer tagged with `generation`.
    Schedule { generation: u64 },
    /// The quiet period elapsed; commit this search term.
    Commit(String),
}

impl State {
    /// Handle a debounce message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Input(value) => {
                self.pending = value;
                self.generation = self.generation.wrapping_add(1);
                self.scheduled = true;
                // Aborts the previous timer, if any
                self.timer = None;
                Effect::Schedule {
                    generation: self.generation,
                }
            }
            Message::Elapsed(generation) => {
                if !self.scheduled || generation != self.generation {
                    return Effect::None;
                }
                self.scheduled = false;
                self.timer = None;
                Effect::Commit(self.pending.clone())
            }
            Message::Cancel => {
                self.generation = self.generation.wrapping_add(1);
                self.scheduled = false;
                self.timer = None;
                Effect::None
            }
        }
    }

    /// Keeps `handle` so the timer is aborted on the next keystroke or on drop.
    pub fn arm(&mut self, handle: Handle) {
        self.timer = Some(handle.abort_on_drop());
    }

    /// Text to show in the search box.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Whether a commit is waiting for its timer.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Builds an abortable timer that resolves to `on_elapsed(generation)` after `delay`.
pub fn timer<M>(
    delay: Duration,
    generation: u64,
    on_elapsed: fn(u64) -> M,
) -> (Task<M>, Handle)
where
    M: Send + 'static,
{
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| on_elapsed(generation),
    )
    .abortable()
}
