// SPDX-License-Identifier: GPL-3.0-only

use crate::shell::{Appearance, ButtonImage, ViewConfiguration};
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Show the cancel button
    pub show_cancel: bool,
    /// Show the switch camera button
    pub show_switch_camera: bool,
    /// Show the torch button
    pub show_torch: bool,
    /// Show the scan target overlay
    pub show_overlay: bool,
    /// Hint shown above the overlay; empty or None hides the panel
    pub hint_text: Option<String>,
    /// Icon theme name for the cancel button
    pub cancel_icon: Option<String>,
    /// Icon theme name for the switch camera button
    pub switch_camera_icon: Option<String>,
    /// Icon theme name for the torch button
    pub torch_icon: Option<String>,
    /// How long the overlay keeps its success/failure color
    pub feedback_reset_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            show_cancel: true,
            show_switch_camera: true,
            show_torch: true,
            show_overlay: true,
            hint_text: None,
            cancel_icon: Some("window-close-symbolic".to_string()),
            switch_camera_icon: Some("camera-switch-symbolic".to_string()),
            torch_icon: Some("display-brightness-symbolic".to_string()),
            feedback_reset_ms: crate::constants::timing::FEEDBACK_RESET_DELAY.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn view_configuration(&self) -> ViewConfiguration {
        ViewConfiguration {
            show_cancel: self.show_cancel,
            show_switch_camera: self.show_switch_camera,
            show_torch: self.show_torch,
            show_overlay: self.show_overlay,
            hint_text: self.hint_text.clone(),
        }
    }

    /// Button images; blank icon names count as no image
    pub fn appearance(&self) -> Appearance {
        let image = |name: &Option<String>| {
            name.as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ButtonImage::named)
        };
        Appearance {
            cancel_button_image: image(&self.cancel_icon),
            switch_button_image: image(&self.switch_camera_icon),
            torch_button_image: image(&self.torch_icon),
        }
    }

    pub fn feedback_reset_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_reset_ms)
    }
}
