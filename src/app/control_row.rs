// SPDX-License-Identifier: GPL-3.0-only

//! Control button elements

use crate::app::state::Message;
use crate::app::view::chrome_style;
use crate::constants::ui;
use crate::fl;
use crate::shell::ControlRole;
use crate::shell::factory::ButtonSurface;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

/// Message emitted when a button is tapped
pub fn role_message(role: ControlRole) -> Message {
    match role {
        ControlRole::Cancel => Message::Cancel,
        ControlRole::SwitchCamera => Message::SwitchCamera,
        ControlRole::ToggleTorch => Message::ToggleTorch,
    }
}

fn role_label(role: ControlRole) -> String {
    match role {
        ControlRole::Cancel => fl!("cancel"),
        ControlRole::SwitchCamera => fl!("switch-camera"),
        ControlRole::ToggleTorch => fl!("toggle-torch"),
    }
}

/// Build the element for one control button
///
/// Hidden buttons render as empty space of the same size so the row keeps its
/// spacing. A button without an image is still tappable.
pub fn control_button<'a>(surface: &ButtonSurface) -> Element<'a, Message> {
    let width = Length::Fixed(surface.size.width);
    let height = Length::Fixed(surface.size.height);

    if !surface.visible {
        return widget::Space::new(width, height).into();
    }

    let content: Element<'a, Message> = match &surface.image {
        Some(image) => widget::icon(widget::icon::from_name(image.name().to_string()).handle())
            .size(ui::BUTTON_ICON_SIZE)
            .into(),
        None => widget::Space::new(Length::Shrink, Length::Shrink).into(),
    };

    let content = widget::container(content)
        .width(width)
        .height(height)
        .center(width);

    let button = widget::button::custom(content)
        .padding(0)
        .class(cosmic::theme::Button::Text)
        .on_press(role_message(surface.role));

    let styled = widget::container(button)
        .width(width)
        .height(height)
        .style(chrome_style(surface.style));

    widget::tooltip(
        styled,
        widget::text(role_label(surface.role)),
        widget::tooltip::Position::Top,
    )
    .into()
}
