// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::config::Config;
use crate::feedback::TimerId;
use crate::shell::ReaderView;

/// Torch (flashlight) state
///
/// The shell only tracks what the user asked for; driving the hardware is up
/// to the capture pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TorchState {
    #[default]
    Off,
    On,
}

impl TorchState {
    pub fn toggled(self) -> Self {
        match self {
            TorchState::Off => TorchState::On,
            TorchState::On => TorchState::Off,
        }
    }
}

/// Which camera the preview is requested from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

/// Startup options passed from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    /// Emit alternating decode results on a timer
    pub demo: bool,
}

/// Main application state
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime
    pub core: cosmic::Core,
    /// Configuration data that persists between application runs
    pub config: Config,
    /// Scanner chrome and overlay feedback
    pub reader: ReaderView,
    pub torch: TorchState,
    pub facing: CameraFacing,
    /// Demo signal source enabled
    pub demo: bool,
    /// Number of demo ticks delivered so far
    pub demo_ticks: u64,
}

/// Messages emitted by the application and its widgets
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Decode Results =====
    /// The capture pipeline decoded a code
    DecodeSucceeded,
    /// The capture pipeline saw a code but could not decode it
    DecodeFailed,
    /// A feedback reset timer reached its deadline
    FeedbackTimerElapsed(TimerId),

    // ===== Controls =====
    Cancel,
    SwitchCamera,
    ToggleTorch,

    // ===== System =====
    /// Configuration changed on disk
    UpdateConfig(Config),
    /// Demo signal source fired
    DemoTick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torch_toggles_back_to_off() {
        let torch = TorchState::default();
        assert_eq!(torch, TorchState::Off);
        assert_eq!(torch.toggled(), TorchState::On);
        assert_eq!(torch.toggled().toggled(), TorchState::Off);
    }

    #[test]
    fn test_facing_starts_at_back() {
        assert_eq!(CameraFacing::default(), CameraFacing::Back);
        assert_eq!(CameraFacing::Back.toggled(), CameraFacing::Front);
    }
}
