// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Layout margins and sizes for the scanner chrome (in logical pixels)
pub mod layout {
    /// Gap between the container top and the first element of the vertical chain
    pub const TOP_GAP: f32 = 32.0;

    /// Gap between the overlay bottom and the container bottom
    ///
    /// Reserves room for the control row below the overlay.
    pub const BOTTOM_GAP: f32 = 108.0;

    /// Horizontal margin around the hint panel
    pub const HINT_PANEL_MARGIN: f32 = 24.0;

    /// Horizontal padding between the hint panel and its label
    pub const HINT_LABEL_PADDING_H: f32 = 16.0;

    /// Vertical padding between the hint panel and its label
    pub const HINT_LABEL_PADDING_V: f32 = 8.0;

    /// Distance between the control row and the container bottom
    pub const CONTROL_ROW_BOTTOM_INSET: f32 = 24.0;

    /// Left and right margin of the control row
    pub const CONTROL_ROW_SIDE_MARGIN: f32 = 64.0;

    /// Width and height of every control button
    pub const BUTTON_SIZE: f32 = 60.0;
}

/// UI Constants
pub mod ui {
    /// Corner radius for buttons and the hint panel
    pub const CORNER_RADIUS: f32 = 10.0;

    /// Background alpha of buttons and the hint panel over the camera preview
    pub const CHROME_BACKGROUND_ALPHA: f32 = 0.5;

    /// Icon size inside control buttons
    pub const BUTTON_ICON_SIZE: u16 = 32;

    /// Hint label font size
    pub const HINT_TEXT_SIZE: f32 = 16.0;

    /// Hint label line height, relative to the font size
    pub const HINT_LINE_SPACING: f32 = 1.4;

    /// Inset of the scan target inside the overlay
    pub const SCAN_TARGET_INSET: f32 = 50.0;

    /// Border width of the scan target
    pub const SCAN_TARGET_BORDER_WIDTH: f32 = 3.0;

    /// Corner radius of the scan target
    pub const SCAN_TARGET_RADIUS: f32 = 5.0;
}

/// Timing constants
pub mod timing {
    use super::Duration;

    /// Delay before the overlay returns to its neutral tone after a signal
    pub const FEEDBACK_RESET_DELAY: Duration = Duration::from_secs(1);

    /// Interval between signals emitted by the demo source
    pub const DEMO_SIGNAL_INTERVAL: Duration = Duration::from_millis(1500);
}

/// Application information utilities
pub mod app_info {
    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }
}
