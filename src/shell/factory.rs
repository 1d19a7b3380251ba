// SPDX-License-Identifier: GPL-3.0-only

//! Surface factories
//!
//! Stateless constructors for the chrome surfaces. They only describe what to
//! draw; the widget layer turns the descriptions into elements.

use super::{ButtonImage, ButtonSpec, ControlRole};
use crate::constants::{layout as metrics, ui};
use crate::layout::{Rect, Size, SurfaceId};
use serde::{Deserialize, Serialize};

/// Straight RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Shared look of buttons and panels drawn over the camera preview
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromeStyle {
    pub background: Rgba,
    pub foreground: Rgba,
    pub corner_radius: f32,
    /// Children are clipped to the rounded bounds
    pub clips: bool,
}

impl ChromeStyle {
    /// Dark translucent rounded rectangle with white content
    pub fn translucent() -> Self {
        Self {
            background: Rgba::BLACK.with_alpha(ui::CHROME_BACKGROUND_ALPHA),
            foreground: Rgba::WHITE,
            corner_radius: ui::CORNER_RADIUS,
            clips: true,
        }
    }

    pub fn clear() -> Self {
        Self {
            background: Rgba::TRANSPARENT,
            foreground: Rgba::WHITE,
            corner_radius: 0.0,
            clips: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonSurface {
    pub role: ControlRole,
    /// None renders an empty button
    pub image: Option<ButtonImage>,
    pub visible: bool,
    pub size: Size,
    pub style: ChromeStyle,
}

impl ButtonSurface {
    pub fn id(&self) -> SurfaceId {
        self.role.surface_id()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSurface {
    pub text: String,
    pub font_size: f32,
    /// Line height relative to the font size
    pub line_spacing: f32,
    /// None wraps onto as many lines as needed
    pub max_lines: Option<u16>,
    pub centered: bool,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSurface {
    pub style: ChromeStyle,
    pub label: LabelSurface,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlaySurface {
    pub style: ChromeStyle,
}

/// Build a control button from its spec
///
/// A spec without an image still yields a button; it just shows no icon.
pub fn button(role: ControlRole, spec: &ButtonSpec) -> ButtonSurface {
    ButtonSurface {
        role,
        image: spec.image.clone(),
        visible: spec.visible,
        size: Size::new(metrics::BUTTON_SIZE, metrics::BUTTON_SIZE),
        style: ChromeStyle::translucent(),
    }
}

/// Build a centered, multi-line white label
pub fn label(text: &str) -> LabelSurface {
    LabelSurface {
        text: text.to_string(),
        font_size: ui::HINT_TEXT_SIZE,
        line_spacing: ui::HINT_LINE_SPACING,
        max_lines: None,
        centered: true,
        color: Rgba::WHITE,
    }
}

/// Build the translucent panel wrapping the hint label
pub fn hint_panel(text: &str) -> PanelSurface {
    PanelSurface {
        style: ChromeStyle::translucent(),
        label: label(text),
    }
}

pub fn overlay() -> OverlaySurface {
    OverlaySurface {
        style: ChromeStyle::clear(),
    }
}

/// Square scan target centered inside the overlay frame
///
/// The frame is inset on every side, then the longer side is trimmed so the
/// target stays square.
pub fn scan_target(frame: Rect) -> Rect {
    let inset = ui::SCAN_TARGET_INSET;
    let width = (frame.width - inset * 2.0).max(0.0);
    let height = (frame.height - inset * 2.0).max(0.0);
    let side = width.min(height);

    Rect::new(
        frame.x + inset + (width - side) / 2.0,
        frame.y + inset + (height - side) / 2.0,
        side,
        side,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_without_image_is_still_built() {
        let spec = ButtonSpec {
            image: None,
            visible: true,
        };
        let surface = button(ControlRole::Cancel, &spec);
        assert_eq!(surface.image, None);
        assert_eq!(surface.size, Size::new(60.0, 60.0));
        assert_eq!(surface.id(), SurfaceId::CancelButton);
        assert_eq!(surface.style.corner_radius, 10.0);
        assert_eq!(surface.style.background.a, 0.5);
    }

    #[test]
    fn test_hidden_button_keeps_image() {
        let spec = ButtonSpec {
            image: Some(ButtonImage::named("camera-switch-symbolic")),
            visible: false,
        };
        let surface = button(ControlRole::SwitchCamera, &spec);
        assert!(!surface.visible);
        assert!(surface.image.is_some());
    }

    #[test]
    fn test_label_style() {
        let label = label("Point camera at code");
        assert_eq!(label.font_size, 16.0);
        assert_eq!(label.line_spacing, 1.4);
        assert_eq!(label.max_lines, None);
        assert!(label.centered);
    }

    #[test]
    fn test_scan_target_is_centered_square() {
        let frame = Rect::new(0.0, 88.0, 390.0, 648.0);
        let target = scan_target(frame);

        assert_eq!(target.width, target.height);
        assert_eq!(target.width, 290.0);
        assert_eq!(target.center_x(), frame.center_x());
        assert_eq!(target.center_y(), frame.center_y());
        assert!(frame.contains(&target));
    }

    #[test]
    fn test_scan_target_collapses_in_small_frame() {
        let target = scan_target(Rect::new(0.0, 0.0, 80.0, 80.0));
        assert_eq!(target.width, 0.0);
    }
}
