// SPDX-License-Identifier: MPL-2.0
//! Query state sub-component (page, committed search, sort order).

use crate::domain::video::{PageNumber, SortOrder, VideoQuery};

/// The values a fetch is made from.
///
/// Only committed values live here; the text currently typed in the search
/// box belongs to the debounce sub-component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    page: PageNumber,
    search: String,
    sort: SortOrder,
}

/// Messages for the query sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Move to another page.
    SetPage(PageNumber),
    /// Commit a debounced search term. Also returns to the first page.
    CommitSearch(String),
    /// Change the sort order. Page and search are left untouched.
    SetSort(SortOrder),
}

/// Effects produced by the query sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The query changed and results must be fetched again.
    Refetch,
}

impl State {
    /// Handle a query message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.clone();
        match msg {
            Message::SetPage(page) => self.page = page,
            Message::CommitSearch(search) => {
                self.search = search;
                self.page = PageNumber::FIRST;
            }
            Message::SetSort(sort) => self.sort = sort,
        }

        if *self == before {
            Effect::None
        } else {
            Effect::Refetch
        }
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Snapshot of the current query for the catalog.
    #[must_use]
    pub fn to_query(&self) -> VideoQuery {
        VideoQuery {
            page: self.page,
            search: self.search.clone(),
            sort: self.sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_mount() {
        let state = State::default();
        assert_eq!(state.page(), PageNumber::FIRST);
        assert_eq!(state.search(), "");
        assert_eq!(state.sort(), SortOrder::Asc);
    }

    #[test]
    fn set_page_requests_refetch_only_when_changed() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::SetPage(PageNumber::new(3))), Effect::Refetch);
        assert_eq!(state.handle(Message::SetPage(PageNumber::new(3))), Effect::None);
        assert_eq!(state.page().value(), 3);
    }

    #[test]
    fn commit_search_resets_page() {
        let mut state = State::default();
        state.handle(Message::SetPage(PageNumber::new(4)));

        let effect = state.handle(Message::CommitSearch("cricket".into()));
        assert_eq!(effect, Effect::Refetch);
        assert_eq!(state.search(), "cricket");
        assert_eq!(state.page(), PageNumber::FIRST);
    }

    #[test]
    fn committing_same_search_from_another_page_still_refetches() {
        let mut state = State::default();
        state.handle(Message::CommitSearch("music".into()));
        state.handle(Message::SetPage(PageNumber::new(2)));

        assert_eq!(state.handle(Message::CommitSearch("music".into())), Effect::Refetch);
        assert_eq!(state.page(), PageNumber::FIRST);
    }

    #[test]
    fn committing_same_search_on_first_page_is_a_no_op() {
        let mut state = State::default();
        state.handle(Message::CommitSearch("music".into()));
        assert_eq!(state.handle(Message::CommitSearch("music".into())), Effect::None);
    }

    #[test]
    fn sort_change_keeps_page_and_search() {
        let mut state = State::default();
        state.handle(Message::CommitSearch("news".into()));
        state.handle(Message::SetPage(PageNumber::new(2)));

        assert_eq!(state.handle(Message::SetSort(SortOrder::Desc)), Effect::Refetch);
        assert_eq!(state.page().value(), 2);
        assert_eq!(state.search(), "news");
        assert_eq!(state.handle(Message::SetSort(SortOrder::Desc)), Effect::None);
    }

    #[test]
    fn to_query_reflects_state() {
        let mut state = State::default();
        state.handle(Message::CommitSearch("cats".into()));
        state.handle(Message::SetSort(SortOrder::Desc));

        let query = state.to_query();
        assert_eq!(query.page, PageNumber::FIRST);
        assert_eq!(query.search, "cats");
        assert_eq!(query.sort, SortOrder::Desc);
    }
}
