// SPDX-License-Identifier: GPL-3.0-only

//! Control button handlers

use crate::app::state::{AppModel, Message};
use cosmic::Task;
use tracing::info;

impl AppModel {
    pub(crate) fn handle_cancel(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Scan cancelled");
        cosmic::iced::exit()
    }

    pub(crate) fn handle_switch_camera(&mut self) -> Task<cosmic::Action<Message>> {
        self.facing = self.facing.toggled();
        info!(facing = ?self.facing, "Camera switch requested");
        Task::none()
    }

    pub(crate) fn handle_toggle_torch(&mut self) -> Task<cosmic::Action<Message>> {
        self.torch = self.torch.toggled();
        info!(torch = ?self.torch, "Torch toggled");
        Task::none()
    }
}
