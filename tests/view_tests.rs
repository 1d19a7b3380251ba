// SPDX-License-Identifier: MPL-2.0

//! Integration tests for reader view configuration

use scanshell::layout::SurfaceId;
use scanshell::shell::factory;
use scanshell::{Appearance, ButtonImage, ControlRole, ReaderView, ViewConfiguration};

#[test]
fn test_surfaces_attach_in_order() {
    let view = ReaderView::new(
        ViewConfiguration::default().with_hint("Scan"),
        Appearance::default(),
    )
    .unwrap();

    let order: Vec<SurfaceId> = view.surfaces().iter().collect();
    assert_eq!(
        order,
        vec![
            SurfaceId::Camera,
            SurfaceId::ControlRow,
            SurfaceId::CancelButton,
            SurfaceId::TorchButton,
            SurfaceId::SwitchCameraButton,
            SurfaceId::Overlay,
            SurfaceId::HintPanel,
            SurfaceId::HintLabel,
        ]
    );
    assert_eq!(
        view.surfaces().parent_of(SurfaceId::HintLabel),
        Some(SurfaceId::HintPanel)
    );
}

#[test]
fn test_reconfigure_discards_previous_graph() {
    let mut view = ReaderView::new(
        ViewConfiguration::default().with_hint("Scan"),
        Appearance::default(),
    )
    .unwrap();
    assert!(view.graph().references(SurfaceId::HintPanel));

    view.configure(ViewConfiguration::default(), Appearance::default()).unwrap();

    assert!(!view.graph().references(SurfaceId::HintPanel));
    assert!(!view.surfaces().contains(SurfaceId::HintPanel));
    assert!(view.slots().hint.is_none());
}

#[test]
fn test_missing_image_still_builds_button() {
    let appearance = Appearance {
        cancel_button_image: Some(ButtonImage::named("window-close-symbolic")),
        ..Appearance::default()
    };
    let view = ReaderView::new(ViewConfiguration::default(), appearance).unwrap();

    let switch = view.button(ControlRole::SwitchCamera).unwrap();
    assert_eq!(switch.image, None);
    assert!(switch.visible);
    assert_eq!(switch.style.corner_radius, 10.0);
}

#[test]
fn test_hint_panel_style() {
    let view = ReaderView::new(
        ViewConfiguration::bare().with_hint("Point camera at code"),
        Appearance::default(),
    )
    .unwrap();

    let panel = view.slots().hint.as_ref().unwrap();
    assert_eq!(panel.style, factory::ChromeStyle::translucent());
    assert!(panel.label.centered);
    assert_eq!(panel.label.max_lines, None);
    assert!(view.slots().overlay.is_none());
}

#[test]
fn test_unconfigured_view_has_empty_graph() {
    let view = ReaderView::default();
    assert!(view.graph().is_empty());
    assert!(view.slots().controls.is_none());
    assert_eq!(view.surfaces().len(), 0);
}
