// SPDX-License-Identifier: MPL-2.0
//! A single video rendered as a card.

use super::subcomponents::thumbnails::{self, Thumbnail};
use super::Message;
use crate::domain::video::VideoRecord;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use iced::widget::{button, image, Column, Container, Text};
use iced::{ContentFit, Element, Length};
use std::fmt::{Display, Write};

/// Used when a translation supplies an unusable date pattern.
const FALLBACK_DATE_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Date-time layouts accepted without an explicit offset.
const NAIVE_LAYOUTS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Display strings for a card, resolved against the current locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    pub description: String,
    pub published: String,
    pub watch_url: Option<String>,
}

impl CardText {
    #[must_use]
    pub fn new(record: &VideoRecord, i18n: &I18n) -> Self {
        let pattern = i18n.tr("video-date-format");
        let invalid = i18n.tr("video-invalid-date");

        Self {
            title: record
                .title
                .clone()
                .unwrap_or_else(|| i18n.tr("video-no-title")),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| i18n.tr("video-no-description")),
            published: format_published(record.published_at.as_deref(), &pattern, &invalid),
            watch_url: record.watch_url(),
        }
    }
}

/// Formats a server timestamp in the local time zone.
///
/// Returns `invalid` when the timestamp is absent or unparseable.
#[must_use]
pub fn format_published(raw: Option<&str>, pattern: &str, invalid: &str) -> String {
    format_published_in(raw, pattern, invalid, &Local)
}

fn format_published_in<Tz>(raw: Option<&str>, pattern: &str, invalid: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match raw.and_then(|raw| parse_timestamp(raw.trim(), tz)) {
        Some(datetime) => format_with_pattern(&datetime, pattern),
        None => invalid.to_string(),
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(tz));
    }

    // Without an offset, a date-time is local wall-clock time
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    // A bare date means midnight UTC
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

fn format_with_pattern<Tz>(datetime: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", datetime.format(pattern)).is_ok() {
        return out;
    }

    tracing::warn!(pattern, "invalid date pattern in translations");
    out.clear();
    // The fallback pattern is known to be valid
    let _ = write!(out, "{}", datetime.format(FALLBACK_DATE_PATTERN));
    out
}

/// Renders one card.
pub fn view<'a>(
    record: &VideoRecord,
    thumbnails: &'a thumbnails::State,
    i18n: &I18n,
) -> Element<'a, Message> {
    let text = CardText::new(record, i18n);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(text.title).size(typography::TITLE_SM))
        .push(Text::new(text.description).size(typography::BODY))
        .push(
            Text::new(format!(
                "{} {}",
                i18n.tr("video-published-label"),
                text.published
            ))
            .size(typography::CAPTION)
            .style(styles::text::muted),
        );

    if let Some(url) = record.thumbnail_url.as_deref() {
        if let Some(thumbnail) = thumbnail_view(url, thumbnails) {
            content = content.push(thumbnail);
        }
    }

    let link = button(Text::new(i18n.tr("video-watch-link")).size(typography::BODY))
        .padding(0)
        .style(styles::button::link)
        .on_press_maybe(text.watch_url.map(Message::OpenWatchLink));
    content = content.push(link);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn thumbnail_view<'a>(url: &str, thumbnails: &'a thumbnails::State) -> Option<Element<'a, Message>> {
    match thumbnails.get(url) {
        Some(Thumbnail::Ready(handle)) => Some(
            image(handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
        ),
        // Broken images are omitted
        Some(Thumbnail::Failed) => None,
        None if thumbnails.is_loading(url) => Some(
            Container::new(Text::new(""))
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .style(styles::container::thumbnail_placeholder)
                .into(),
        ),
        None => None,
    }
}
