// SPDX-License-Identifier: MPL-2.0
//! Evidence gallery modal.
//!
//! Images are downloaded by the shell and delivered through
//! [`Message::ImageFetched`]; each slot shows a placeholder until then.

use crate::i18n::fluent::I18n;
use crate::error::Error;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, image, mouse_area, opaque, scrollable, text, Column, Row,
};
use iced::{alignment, Background, Border, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    /// Press anywhere outside an image.
    BackdropPressed,
    ClosePressed,
    /// Press on an image; swallowed so the backdrop does not close.
    ImagePressed,
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Outcome {
    Keep,
    Close,
}

/// Download state of one image.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Clone)]
struct Entry {
    url: String,
    slot: ImageSlot,
}

/// An open gallery. Never empty.
#[derive(Debug, Clone)]
pub struct Gallery {
    entries: Vec<Entry>,
}

impl Gallery {
    /// Opens a gallery over `urls`; returns `None` when there is nothing to show.
    #[must_use]
    pub fn open(urls: Vec<String>) -> Option<Self> {
        if urls.is_empty() {
            return None;
        }
        Some(Self {
            entries: urls
                .into_iter()
                .map(|url| Entry {
                    url,
                    slot: ImageSlot::Loading,
                })
                .collect(),
        })
    }

    /// Image URLs in display order.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.url.clone()).collect()
    }

    pub fn slots(&self) -> impl Iterator<Item = &ImageSlot> {
        self.entries.iter().map(|entry| &entry.slot)
    }

    pub(super) fn update(&mut self, message: Message) -> Outcome {
        match message {
            Message::BackdropPressed | Message::ClosePressed => Outcome::Close,
            Message::ImagePressed => Outcome::Keep,
            Message::ImageFetched { url, result } => {
                let slot = match result {
                    Ok(bytes) => ImageSlot::Ready(Handle::from_bytes(bytes)),
                    Err(_) => ImageSlot::Failed,
                };
                // The same URL may be listed more than once.
                for entry in self.entries.iter_mut().filter(|entry| entry.url == url) {
                    entry.slot = slot.clone();
                }
                Outcome::Keep
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let figures = self.entries.iter().enumerate().fold(
            Row::new().spacing(spacing::LG).padding(spacing::LG),
            |row, (index, entry)| row.push(figure(index, &entry.slot, i18n)),
        );

        let close = button(text(i18n.tr("gallery-close-button")))
            .on_press(Message::ClosePressed)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary);

        let content = column![
            scrollable(figures).direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new()
            )),
            close,
        ]
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);

        opaque(
            mouse_area(
                container(content)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .style(styles::container::backdrop),
            )
            .on_press(Message::BackdropPressed),
        )
    }
}

fn figure<'a>(index: usize, slot: &ImageSlot, i18n: &I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match slot {
        ImageSlot::Ready(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::GALLERY_IMAGE_WIDTH))
            .into(),
        ImageSlot::Loading => placeholder(i18n.tr("gallery-image-loading")),
        ImageSlot::Failed => placeholder(i18n.tr("gallery-image-error")),
    };

    let framed = container(picture).padding(2.0).style(|_theme: &Theme| container::Style {
        border: Border {
            color: palette::WHITE,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    });

    let label = text(i18n.tr_with_args(
        "gallery-image-label",
        &[("index", &(index + 1).to_string())],
    ))
    .size(typography::BODY)
    .color(palette::WHITE);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(mouse_area(framed).on_press(Message::ImagePressed))
        .push(label)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    container(text(label).color(palette::SLATE_300))
        .center_x(Length::Fixed(sizing::GALLERY_IMAGE_WIDTH))
        .center_y(Length::Fixed(sizing::GALLERY_IMAGE_WIDTH * 0.6))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::SLATE_900)),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_list_does_not_open() {
        assert!(Gallery::open(Vec::new()).is_none());
    }

    #[test]
    fn fetched_images_fill_matching_slots() {
        let mut gallery =
            Gallery::open(vec!["a".into(), "b".into(), "a".into()]).expect("gallery opens");
        gallery.update(Message::ImageFetched {
            url: "a".into(),
            result: Ok(vec![0u8; 4]),
        });
        gallery.update(Message::ImageFetched {
            url: "b".into(),
            result: Err(Error::Status {
                status: 404,
                detail: String::new(),
            }),
        });

        let slots: Vec<&ImageSlot> = gallery.slots().collect();
        assert!(matches!(slots[0], ImageSlot::Ready(_)));
        assert!(matches!(slots[1], ImageSlot::Failed));
        assert!(matches!(slots[2], ImageSlot::Ready(_)));
    }

    #[test]
    fn close_button_and_backdrop_close() {
        let mut gallery = Gallery::open(vec!["a".into()]).unwrap();
        assert_eq!(gallery.update(Message::ImagePressed), Outcome::Keep);
        assert_eq!(gallery.update(Message::ClosePressed), Outcome::Close);
        assert_eq!(gallery.update(Message::BackdropPressed), Outcome::Close);
    }

    #[test]
    fn view_renders_all_slot_states() {
        use crate::app::config::Config;
        let i18n = I18n::new(Some("pt-BR".to_string()), &Config::default());
        let mut gallery = Gallery::open(vec!["a".into(), "b".into()]).unwrap();
        gallery.update(Message::ImageFetched {
            url: "b".into(),
            result: Err(Error::Network("x".into())),
        });
        let _ = gallery.view(&i18n);
    }
}
