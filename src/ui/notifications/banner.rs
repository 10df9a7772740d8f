// SPDX-License-Identifier: MPL-2.0
//! Banner rendering for visible notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Alignment, Element, Length, Theme};

/// One banner: message text and a dismiss button, outlined in the severity color.
pub fn view<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let message = Text::new(i18n.tr(notification.message_key())).size(typography::BODY);
    let dismiss = button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(styles::button::link)
        .on_press(Message::Dismiss(notification.id()));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::notification_banner(theme, accent))
        .into()
}

/// All visible banners stacked vertically. Empty when nothing is shown.
pub fn view_all<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
    manager
        .visible()
        .fold(Column::new().spacing(spacing::XS), |column, notification| {
            column.push(view(notification, i18n))
        })
        .into()
}
