// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Handles configuration updates pushed by the settings daemon.

use crate::app::state::{AppModel, Message};
use crate::config::Config;
use cosmic::Task;
use tracing::{error, info};

impl AppModel {
    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        if config == self.config {
            return Task::none();
        }

        let theme_changed = config.app_theme != self.config.app_theme;

        self.reader.set_reset_delay(config.feedback_reset_delay());
        let view = crate::app::view_configuration(&config, self.demo);
        if let Err(err) = self.reader.configure(view, config.appearance()) {
            error!(%err, "Failed to apply new view configuration, keeping previous layout");
        }
        self.config = config;

        if theme_changed {
            cosmic::command::set_theme(self.config.app_theme.theme())
        } else {
            Task::none()
        }
    }
}
