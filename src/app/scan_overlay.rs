// SPDX-License-Identifier: MPL-2.0

//! Scan target overlay
//!
//! Fills the overlay frame and draws the square scan target inside it. The
//! border color follows the feedback tone.

use crate::app::state::Message;
use crate::constants::ui;
use crate::feedback::FeedbackTone;
use crate::layout::Rect;
use crate::shell::factory;
use cosmic::iced::advanced::widget::Tree;
use cosmic::iced::advanced::{Layout, Widget, layout, mouse, renderer};
use cosmic::iced::{Border, Color, Element, Length, Rectangle, Size};
use cosmic::{Renderer, Theme};

/// Border color for a feedback tone
pub fn tone_color(tone: FeedbackTone) -> Color {
    match tone {
        FeedbackTone::Neutral => Color::WHITE,
        FeedbackTone::Success => Color::from_rgb(0.30, 0.69, 0.31),
        FeedbackTone::Failure => Color::from_rgb(0.96, 0.26, 0.21),
    }
}

pub struct ScanOverlay {
    color: Color,
}

impl ScanOverlay {
    pub fn new(tone: FeedbackTone) -> Self {
        Self {
            color: tone_color(tone),
        }
    }
}

impl Widget<Message, Theme, Renderer> for ScanOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        use cosmic::iced::advanced::Renderer as _;

        let bounds = layout.bounds();
        let target = factory::scan_target(Rect::new(
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
        ));
        if target.width <= 0.0 {
            return;
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: target.x,
                    y: target.y,
                    width: target.width,
                    height: target.height,
                },
                border: Border {
                    color: self.color,
                    width: ui::SCAN_TARGET_BORDER_WIDTH,
                    radius: ui::SCAN_TARGET_RADIUS.into(),
                },
                shadow: Default::default(),
            },
            Color::TRANSPARENT,
        );
    }
}

impl<'a> From<ScanOverlay> for Element<'a, Message, Theme, Renderer> {
    fn from(widget: ScanOverlay) -> Self {
        Element::new(widget)
    }
}
