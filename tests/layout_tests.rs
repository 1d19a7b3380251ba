// SPDX-License-Identifier: MPL-2.0

//! Integration tests for layout composition and resolution

use scanshell::layout::{Constraint, Dimension, Rect, Size};
use scanshell::{Appearance, ControlRole, ReaderView, SurfaceId, ViewConfiguration};

fn view(config: ViewConfiguration) -> ReaderView {
    ReaderView::new(config, Appearance::default()).expect("configuration should compose")
}

fn size_of(view: &ReaderView, surface: SurfaceId, dimension: Dimension) -> Option<f32> {
    view.graph().constraints().iter().find_map(|c| match c {
        Constraint::Size {
            surface: s,
            dimension: d,
            value,
        } if *s == surface && *d == dimension => Some(*value),
        _ => None,
    })
}

#[test]
fn test_full_configuration_without_hint() {
    let view = view(ViewConfiguration::default());
    let formats = view.graph().visual_formats();

    for expected in [
        "H:|[camera]|",
        "V:|[camera]|",
        "H:|[overlay]|",
        "V:|-32-[overlay]-108-|",
        "controlRow.bottom = container.bottom - 24",
        "controlRow.height = 60",
    ] {
        assert!(
            formats.contains(&expected.to_string()),
            "missing {expected} in {formats:?}"
        );
    }

    for role in ControlRole::ROW_ORDER {
        assert_eq!(
            size_of(&view, role.surface_id(), Dimension::Width),
            Some(60.0)
        );
        assert_eq!(
            size_of(&view, role.surface_id(), Dimension::Height),
            Some(60.0)
        );
    }

    assert!(!view.graph().references(SurfaceId::HintPanel));
    assert!(!view.graph().references(SurfaceId::HintLabel));
}

#[test]
fn test_full_configuration_with_hint() {
    let view = view(ViewConfiguration::default().with_hint("Point camera at code"));
    let formats = view.graph().visual_formats();

    for expected in [
        "H:|-24-[hintPanel]-24-|",
        "V:|-32-[hintPanel][overlay]-108-|",
        "H:|-16-[hintLabel]-16-|",
        "V:|-8-[hintLabel]-8-|",
    ] {
        assert!(
            formats.contains(&expected.to_string()),
            "missing {expected} in {formats:?}"
        );
    }
    // The hint replaces the overlay-only column
    assert!(!formats.contains(&"V:|-32-[overlay]-108-|".to_string()));
}

#[test]
fn test_hintless_graph_is_strictly_smaller() {
    let without = view(ViewConfiguration::default());
    let with = view(ViewConfiguration::default().with_hint("Scan"));
    assert!(without.graph().len() < with.graph().len());
}

#[test]
fn test_composition_is_deterministic() {
    let config = ViewConfiguration::default().with_hint("Scan");
    let first = view(config.clone());
    let second = view(config);
    assert_eq!(first.graph(), second.graph());
}

#[test]
fn test_hidden_button_keeps_its_slot() {
    let shown = view(ViewConfiguration::default());
    let hidden = view(ViewConfiguration {
        show_torch: false,
        ..ViewConfiguration::default()
    });

    assert_eq!(shown.graph(), hidden.graph());
    assert!(!hidden.button(ControlRole::ToggleTorch).unwrap().visible);
    assert_eq!(
        size_of(&hidden, SurfaceId::TorchButton, Dimension::Width),
        Some(60.0)
    );
}

#[test]
fn test_no_controls_means_no_row() {
    let view = view(ViewConfiguration {
        show_cancel: false,
        show_switch_camera: false,
        show_torch: false,
        ..ViewConfiguration::default()
    });

    assert!(!view.graph().references(SurfaceId::ControlRow));
    assert!(view.slots().controls.is_none());
    assert!(!view.surfaces().contains(SurfaceId::CancelButton));
}

#[test]
fn test_resolved_frames_for_phone_sized_container() {
    let view = view(ViewConfiguration::default());
    let frames = view.resolve(Size::new(390.0, 844.0), |_, _| 0.0);

    assert_eq!(
        frames.get(SurfaceId::Camera),
        Some(Rect::new(0.0, 0.0, 390.0, 844.0))
    );
    assert_eq!(
        frames.get(SurfaceId::Overlay),
        Some(Rect::new(0.0, 32.0, 390.0, 704.0))
    );

    let row = frames.get(SurfaceId::ControlRow).unwrap();
    assert_eq!(row.max_y(), 844.0 - 24.0);
    for role in ControlRole::ROW_ORDER {
        let button = frames.get(role.surface_id()).unwrap();
        assert_eq!((button.width, button.height), (60.0, 60.0));
        assert!(row.contains(&button));
    }
    let cancel = frames.get(SurfaceId::CancelButton).unwrap();
    let switch = frames.get(SurfaceId::SwitchCameraButton).unwrap();
    assert_eq!(cancel.x, row.x);
    assert_eq!(switch.max_x(), row.max_x());
}

#[test]
fn test_torch_alone_sits_in_the_middle() {
    // Hidden buttons still occupy their slots
    let view = view(ViewConfiguration {
        show_cancel: false,
        show_switch_camera: false,
        ..ViewConfiguration::default()
    });
    let frames = view.resolve(Size::new(390.0, 844.0), |_, _| 0.0);

    let torch = frames.get(SurfaceId::TorchButton).unwrap();
    assert_eq!(torch.center_x(), 195.0);
    assert_eq!(frames.get(SurfaceId::CancelButton).unwrap().x, 64.0);
}

#[test]
fn test_hint_pushes_overlay_down() {
    let view = view(ViewConfiguration::default().with_hint("Point camera at code"));
    let frames = view.resolve(Size::new(390.0, 844.0), |_, _| 24.0);

    let panel = frames.get(SurfaceId::HintPanel).unwrap();
    let overlay = frames.get(SurfaceId::Overlay).unwrap();
    assert_eq!(overlay.y, panel.max_y());
    assert_eq!(overlay.max_y(), 844.0 - 108.0);
}
