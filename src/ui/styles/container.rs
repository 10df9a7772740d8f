// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Video card surface.
///
/// Derived from the active theme background with a thin outline, so cards
/// stay readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: if extended.is_dark {
                palette::GRAY_700
            } else {
                palette::GRAY_200
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Placeholder box shown while a thumbnail downloads.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.strong.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Notification banner: theme surface with an outline in `accent`.
pub fn notification_banner(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
