// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, while specific handlers
//! are implemented in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::feedback`: Decode results, reset timers and the demo source
//! - `handlers::controls`: Cancel, camera switching and torch
//! - `handlers::system`: Configuration updates

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== Decode Results =====
            Message::DecodeSucceeded => self.handle_decode_succeeded(),
            Message::DecodeFailed => self.handle_decode_failed(),
            Message::FeedbackTimerElapsed(timer) => self.handle_feedback_timer_elapsed(timer),

            // ===== Controls =====
            Message::Cancel => self.handle_cancel(),
            Message::SwitchCamera => self.handle_switch_camera(),
            Message::ToggleTorch => self.handle_toggle_torch(),

            // ===== System =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::DemoTick => self.handle_demo_tick(),
        }
    }
}
