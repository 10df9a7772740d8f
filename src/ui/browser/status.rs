// SPDX-License-Identifier: MPL-2.0
//! Loading indicator, error banner and empty state.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Text};
use iced::Element;

/// What the status area shows for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    /// Committed search term, set when the empty state is shown.
    pub empty_for: Option<&'a str>,
}

impl<'a> Status<'a> {
    /// Derives the status lines from the fetch outcome.
    ///
    /// The empty state only appears when nothing else explains the lack of
    /// results.
    #[must_use]
    pub fn new(loading: bool, error: Option<&'a str>, no_results: bool, search: &'a str) -> Self {
        let empty_for = (!loading && error.is_none() && no_results).then_some(search);
        Self {
            loading,
            error,
            empty_for,
        }
    }
}

pub fn view<'a>(status: &Status<'_>, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    if status.loading {
        column = column.push(Text::new(i18n.tr("loading-videos")).size(typography::BODY_LG));
    }

    if let Some(error) = status.error {
        column = column.push(
            Text::new(error.to_string())
                .size(typography::BODY_LG)
                .style(styles::text::error),
        );
    }

    if let Some(search) = status.empty_for {
        column = column.push(
            Text::new(i18n.tr_with_args("empty-state-no-results", &[("search", search)]))
                .size(typography::BODY_LG),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_names_search_term() {
        let status = Status::new(false, None, true, "cricket");
        assert_eq!(status.empty_for, Some("cricket"));
    }

    #[test]
    fn empty_state_hidden_while_loading_or_failed() {
        assert!(Status::new(true, None, true, "x").empty_for.is_none());
        assert!(Status::new(false, Some("boom"), true, "x")
            .empty_for
            .is_none());
        assert!(Status::new(false, None, false, "x").empty_for.is_none());
    }

    #[test]
    fn error_is_kept_verbatim() {
        let status = Status::new(false, Some("Error: 404 Not Found"), true, "");
        assert_eq!(status.error, Some("Error: 404 Not Found"));
    }
}
