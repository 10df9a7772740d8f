// SPDX-License-Identifier: MPL-2.0
//! Search box and sort selector.

use super::Message;
use crate::domain::video::SortOrder;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{pick_list, text_input, Row};
use iced::{Alignment, Element, Length};
use std::fmt;

/// A sort order paired with its translated label, as offered by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChoice {
    pub order: SortOrder,
    label: String,
}

impl SortChoice {
    #[must_use]
    pub fn new(order: SortOrder, i18n: &I18n) -> Self {
        Self {
            order,
            label: i18n.tr(order.i18n_key()),
        }
    }

    /// Every choice, in display order.
    #[must_use]
    pub fn all(i18n: &I18n) -> Vec<Self> {
        SortOrder::ALL
            .iter()
            .map(|order| Self::new(*order, i18n))
            .collect()
    }
}

impl fmt::Display for SortChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Renders the toolbar. `pending` is the live search box text.
pub fn view<'a>(pending: &'a str, sort: SortOrder, i18n: &I18n) -> Element<'a, Message> {
    let search = text_input(&i18n.tr("search-placeholder"), pending)
        .on_input(Message::SearchInputChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH));

    let sorter = pick_list(
        SortChoice::all(i18n),
        Some(SortChoice::new(sort, i18n)),
        |choice: SortChoice| Message::SortSelected(choice.order),
    )
    .padding(spacing::XS)
    .text_size(typography::BODY);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(search)
        .push(sorter)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn choices_follow_sort_order_list() {
        let choices = SortChoice::all(&i18n());
        let orders: Vec<SortOrder> = choices.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![SortOrder::Asc, SortOrder::Desc]);
    }

    #[test]
    fn choice_label_is_translated() {
        let choice = SortChoice::new(SortOrder::Desc, &i18n());
        assert_eq!(choice.to_string(), "Sort by Published Date Desc");
    }

    #[test]
    fn view_renders() {
        let i18n = i18n();
        let _element = view("cricket", SortOrder::Asc, &i18n);
    }
}
