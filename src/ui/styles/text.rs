// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Error banner text.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// De-emphasized secondary text (timestamps, page indicator).
pub fn muted(theme: &Theme) -> text::Style {
    let extended = theme.extended_palette();
    text::Style {
        color: Some(extended.background.base.text.scale_alpha(0.7)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_is_red() {
        assert_eq!(error(&Theme::Dark).color, Some(palette::ERROR_500));
    }
}
