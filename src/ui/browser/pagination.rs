// SPDX-License-Identifier: MPL-2.0
//! Prev / "Page X of Y" / Next controls.

use super::Message;
use crate::domain::video::PageNumber;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{Alignment, Element, Length};

/// Pagination model for the current results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: PageNumber,
    pub total_pages: u32,
}

impl Pagination {
    /// Returns `None` when there is at most one page and no controls are shown.
    #[must_use]
    pub fn new(page: PageNumber, total_pages: u32) -> Option<Self> {
        (total_pages > 1).then_some(Self { page, total_pages })
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.page.is_first()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.page.value() < self.total_pages
    }

    /// Page reached by clicking "Prev".
    #[must_use]
    pub fn previous(&self) -> PageNumber {
        self.page.previous_within(self.total_pages)
    }

    /// Page reached by clicking "Next".
    #[must_use]
    pub fn next(&self) -> PageNumber {
        self.page.next_within(self.total_pages)
    }
}

pub fn view<'a>(pagination: Pagination, i18n: &I18n) -> Element<'a, Message> {
    let prev = button(Text::new(i18n.tr("pagination-prev")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_primary)
        .on_press_maybe(pagination.can_go_previous().then_some(Message::PreviousPage));

    let next = button(Text::new(i18n.tr("pagination-next")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_primary)
        .on_press_maybe(pagination.can_go_next().then_some(Message::NextPage));

    let page = pagination.page.to_string();
    let total = pagination.total_pages.to_string();
    let indicator = Text::new(i18n.tr_with_args(
        "pagination-page-of",
        &[("page", page.as_str()), ("total", total.as_str())],
    ))
    .size(typography::BODY);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(prev)
        .push(indicator)
        .push(next)
        .into()
}
