// SPDX-License-Identifier: MPL-2.0
//! Video browser component encapsulating query state, debounce, fetching and rendering.
//!
//! Any change to the committed query (page, search, sort) issues exactly one
//! request. Results are applied only for the latest request.

use super::subcomponents::fetch::RequestId;
use super::subcomponents::{debounce, fetch, query, thumbnails};
use super::{pagination, status, toolbar, video_card};
use crate::application::port::VideoCatalog;
use crate::domain::error::FetchError;
use crate::domain::video::{PageNumber, PageResult, SortOrder, VideoRecord};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{scrollable, Column, Container, Text};
use iced::{Element, Length, Task};
use std::time::Duration;

pub use pagination::Pagination;

/// Environment required to render the browser.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete state of the video browser.
#[derive(Debug)]
pub struct State {
    query: query::State,
    debounce: debounce::State,
    fetch: fetch::State,
    thumbnails: thumbnails::State,
    debounce_delay: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Search box edited.
    SearchInputChanged(String),
    /// Debounce timer for the given generation fired.
    DebounceElapsed(u64),
    SortSelected(SortOrder),
    PreviousPage,
    NextPage,
    PageLoaded {
        request: RequestId,
        result: Result<PageResult, FetchError>,
    },
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    /// Watch link clicked.
    OpenWatchLink(String),
}

/// Side effects the application must perform on behalf of the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open this URL in the system browser.
    OpenUrl(String),
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(crate::config::DEFAULT_DEBOUNCE_MS),
            crate::config::THUMBNAIL_CACHE_CAPACITY,
        )
    }
}

impl State {
    #[must_use]
    pub fn new(debounce_delay: Duration, thumbnail_capacity: usize) -> Self {
        Self {
            query: query::State::default(),
            debounce: debounce::State::default(),
            fetch: fetch::State::default(),
            thumbnails: thumbnails::State::new(thumbnail_capacity),
            debounce_delay,
        }
    }

    /// Issues the initial request for the default query.
    pub fn start(&mut self, catalog: &dyn VideoCatalog) -> Task<Message> {
        self.refetch(catalog)
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        catalog: &dyn VideoCatalog,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::SearchInputChanged(value) => {
                let task = match self.debounce.handle(debounce::Message::Input(value)) {
                    debounce::Effect::Schedule { generation } => {
                        let (task, handle) = debounce::timer(
                            self.debounce_delay,
                            generation,
                            Message::DebounceElapsed,
                        );
                        self.debounce.arm(handle);
                        task
                    }
                    _ => Task::none(),
                };
                (Effect::None, task)
            }
            Message::DebounceElapsed(generation) => {
                let task = match self.debounce.handle(debounce::Message::Elapsed(generation)) {
                    debounce::Effect::Commit(search) => {
                        tracing::debug!(%search, "search committed");
                        self.update_query(query::Message::CommitSearch(search), catalog)
                    }
                    _ => Task::none(),
                };
                (Effect::None, task)
            }
            Message::SortSelected(sort) => (
                Effect::None,
                self.update_query(query::Message::SetSort(sort), catalog),
            ),
            Message::PreviousPage => {
                let task = match self.pagination() {
                    Some(pagination) => {
                        self.update_query(query::Message::SetPage(pagination.previous()), catalog)
                    }
                    None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::NextPage => {
                let task = match self.pagination() {
                    Some(pagination) => {
                        self.update_query(query::Message::SetPage(pagination.next()), catalog)
                    }
                    None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::PageLoaded { request, result } => {
                let task = match self.fetch.handle(fetch::Message::Completed { request, result }) {
                    fetch::Effect::Stale => {
                        tracing::debug!(request, "discarding stale response");
                        Task::none()
                    }
                    fetch::Effect::Loaded => {
                        tracing::debug!(
                            request,
                            videos = self.fetch.videos().len(),
                            total = self.fetch.total(),
                            cached_thumbnails = self.thumbnails.cached_count(),
                            "videos loaded"
                        );
                        self.load_thumbnails(catalog)
                    }
                    fetch::Effect::Failed => {
                        tracing::warn!(
                            request,
                            error = self.fetch.error().unwrap_or_default(),
                            "video request failed"
                        );
                        Task::none()
                    }
                };
                (Effect::None, task)
            }
            Message::ThumbnailLoaded { url, result } => {
                self.thumbnails
                    .handle(thumbnails::Message::Downloaded { url, result });
                (Effect::None, Task::none())
            }
            Message::OpenWatchLink(url) => (Effect::OpenUrl(url), Task::none()),
        }
    }

    /// Cancels the pending search commit. Called when the window closes.
    pub fn teardown(&mut self) {
        self.debounce.handle(debounce::Message::Cancel);
    }

    fn update_query(&mut self, msg: query::Message, catalog: &dyn VideoCatalog) -> Task<Message> {
        match self.query.handle(msg) {
            query::Effect::Refetch => self.refetch(catalog),
            query::Effect::None => Task::none(),
        }
    }

    fn refetch(&mut self, catalog: &dyn VideoCatalog) -> Task<Message> {
        let query = self.query.to_query();
        let request = self.fetch.begin();
        tracing::info!(
            request,
            page = query.page.value(),
            search = %query.search,
            sort = %query.sort,
            "fetching videos"
        );
        Task::perform(catalog.fetch_page(query), move |result| {
            Message::PageLoaded { request, result }
        })
    }

    fn load_thumbnails(&mut self, catalog: &dyn VideoCatalog) -> Task<Message> {
        let urls = self.thumbnails.request(
            self.fetch
                .videos()
                .iter()
                .filter_map(|video| video.thumbnail_url.as_deref()),
        );
        if urls.is_empty() {
            return Task::none();
        }

        Task::batch(urls.into_iter().map(|url| {
            let download = catalog.fetch_thumbnail(url.clone());
            Task::perform(download, move |result| Message::ThumbnailLoaded {
                url: url.clone(),
                result,
            })
        }))
    }

    /// Pagination controls for the current results, if more than one page.
    #[must_use]
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::new(self.query.page(), self.fetch.total_pages())
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.query.page()
    }

    /// Committed search term.
    #[must_use]
    pub fn search(&self) -> &str {
        self.query.search()
    }

    /// Text currently in the search box.
    #[must_use]
    pub fn pending_search(&self) -> &str {
        self.debounce.pending()
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.query.sort()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.fetch.error()
    }

    #[must_use]
    pub fn videos(&self) -> &[VideoRecord] {
        self.fetch.videos()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.fetch.total()
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.fetch.total_pages()
    }

    /// Number of page requests issued since creation.
    #[must_use]
    pub fn issued_fetches(&self) -> u64 {
        self.fetch.issued_count()
    }

    /// Id of the most recent page request.
    #[must_use]
    pub fn latest_request(&self) -> RequestId {
        self.fetch.latest_request()
    }

    /// Whether a search commit is waiting for the debounce delay.
    #[must_use]
    pub fn has_pending_commit(&self) -> bool {
        self.debounce.is_scheduled()
    }

    /// Generation of the most recent debounce timer.
    #[must_use]
    pub fn debounce_generation(&self) -> u64 {
        self.debounce.generation()
    }

    #[must_use]
    pub fn status(&self) -> status::Status<'_> {
        status::Status::new(
            self.fetch.is_loading(),
            self.fetch.error(),
            self.fetch.videos().is_empty(),
            self.query.search(),
        )
    }

    pub fn view(&self, env: ViewEnv<'_>) -> Element<'_, Message> {
        let i18n = env.i18n;

        let heading = Text::new(i18n.tr("dashboard-heading")).size(typography::TITLE_LG);
        let toolbar = toolbar::view(self.debounce.pending(), self.query.sort(), i18n);

        let cards = self
            .fetch
            .videos()
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, record| {
                column.push(video_card::view(record, &self.thumbnails, i18n))
            });

        let mut content = Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(toolbar)
            .push(status::view(&self.status(), i18n))
            .push(cards);

        if let Some(pagination) = self.pagination() {
            content = content.push(pagination::view(pagination, i18n));
        }

        let body = Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding(spacing::LG);

        scrollable(Container::new(body).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    }
}
