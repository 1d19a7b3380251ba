// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use scanshell::{Config, ReaderView};
use std::time::Duration;

#[test]
fn test_config_default() {
    let config = Config::default();

    // Every control is shown by default
    let view = config.view_configuration();
    assert!(view.show_cancel);
    assert!(view.show_switch_camera);
    assert!(view.show_torch);
    assert!(view.show_overlay);
    assert_eq!(view.hint(), None);
}

#[test]
fn test_config_default_reset_delay() {
    let config = Config::default();
    assert_eq!(config.feedback_reset_delay(), Duration::from_secs(1));
}

#[test]
fn test_config_default_icons() {
    let appearance = Config::default().appearance();
    assert!(appearance.cancel_button_image.is_some());
    assert!(appearance.switch_button_image.is_some());
    assert!(appearance.torch_button_image.is_some());
}

#[test]
fn test_blank_icon_names_mean_no_image() {
    let config = Config {
        torch_icon: Some("   ".to_string()),
        cancel_icon: None,
        ..Config::default()
    };
    let appearance = config.appearance();
    assert_eq!(appearance.torch_button_image, None);
    assert_eq!(appearance.cancel_button_image, None);
    assert_eq!(
        appearance.switch_button_image.as_ref().map(|image| image.name()),
        Some("camera-switch-symbolic")
    );
}

#[test]
fn test_config_builds_reader_view() {
    let config = Config {
        hint_text: Some("Point camera at code".to_string()),
        show_torch: false,
        ..Config::default()
    };

    let view = ReaderView::new(config.view_configuration(), config.appearance())
        .expect("config should compose");
    assert!(view.slots().hint.is_some());
    assert_eq!(
        view.slots().hint.as_ref().map(|panel| panel.label.text.as_str()),
        Some("Point camera at code")
    );
}
