// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Turns the reader view's surfaces into elements and hands them to the
//! [`ReaderShellWidget`] in draw order: camera preview, overlay, hint panel and
//! label, then the control buttons.

use crate::app::control_row::control_button;
use crate::app::scan_overlay::ScanOverlay;
use crate::app::shell_widget::ReaderShellWidget;
use crate::app::state::{AppModel, Message};
use crate::fl;
use crate::layout::SurfaceId;
use crate::shell::factory::{ChromeStyle, LabelSurface, Rgba};
use cosmic::Element;
use cosmic::iced::widget::text::LineHeight;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

pub(crate) fn color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Container style for chrome drawn over the camera preview
pub(crate) fn chrome_style(
    style: ChromeStyle,
) -> impl Fn(&cosmic::Theme) -> widget::container::Style {
    move |_theme| widget::container::Style {
        background: Some(Background::Color(color(style.background))),
        text_color: Some(color(style.foreground)),
        border: Border {
            radius: style.corner_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let reader = &self.reader;
        let slots = reader.slots();

        let mut shell = ReaderShellWidget::new(reader.graph().clone())
            .push(SurfaceId::Camera, self.build_camera_placeholder());

        if slots.overlay.is_some() {
            shell = shell.push(SurfaceId::Overlay, ScanOverlay::new(reader.tone()));
        }

        if let Some(panel) = &slots.hint {
            shell = shell
                .push(
                    SurfaceId::HintPanel,
                    widget::container(widget::Space::new(Length::Fill, Length::Fill))
                        .style(chrome_style(panel.style)),
                )
                .push(SurfaceId::HintLabel, build_label(&panel.label));
        }

        for button in slots.controls.iter().flatten() {
            shell = shell.push(button.id(), control_button(button));
        }

        widget::container(shell)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }

    /// Stand-in for the live preview; capture is provided by the host
    fn build_camera_placeholder(&self) -> Element<'_, Message> {
        widget::container(widget::text(fl!("camera-preview")).size(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(cosmic::iced::alignment::Horizontal::Center)
            .align_y(cosmic::iced::alignment::Vertical::Center)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.3)),
                ..Default::default()
            })
            .into()
    }
}

fn build_label<'a>(label: &LabelSurface) -> Element<'a, Message> {
    let text = widget::text(label.text.clone())
        .size(label.font_size)
        .line_height(LineHeight::Relative(label.line_spacing))
        .class(cosmic::theme::Text::Color(color(label.color)))
        .width(Length::Fill);

    if label.centered {
        text.align_x(cosmic::iced::alignment::Horizontal::Center)
            .into()
    } else {
        text.into()
    }
}
