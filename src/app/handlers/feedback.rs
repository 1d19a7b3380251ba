// SPDX-License-Identifier: GPL-3.0-only

//! Feedback handlers
//!
//! Decode results flash the overlay and schedule a reset. The reset arrives as
//! a [`Message::FeedbackTimerElapsed`] carrying the timer id, which the reader
//! view ignores when a newer signal has superseded it.

use crate::app::state::{AppModel, Message};
use crate::errors::ShellResult;
use crate::feedback::{ResetTimer, TimerId};
use cosmic::Task;
use tracing::{debug, error};

impl AppModel {
    pub(crate) fn handle_decode_succeeded(&mut self) -> Task<cosmic::Action<Message>> {
        let result = self.reader.signal_success();
        Self::schedule_reset(result)
    }

    pub(crate) fn handle_decode_failed(&mut self) -> Task<cosmic::Action<Message>> {
        let result = self.reader.signal_failure();
        Self::schedule_reset(result)
    }

    pub(crate) fn handle_feedback_timer_elapsed(
        &mut self,
        timer: TimerId,
    ) -> Task<cosmic::Action<Message>> {
        if !self.reader.reset(timer) {
            debug!(?timer, "Reset timer superseded");
        }
        Task::none()
    }

    /// Alternate failure and success, starting with failure
    pub(crate) fn handle_demo_tick(&mut self) -> Task<cosmic::Action<Message>> {
        self.demo_ticks += 1;
        if self.demo_ticks % 2 == 1 {
            self.handle_decode_failed()
        } else {
            self.handle_decode_succeeded()
        }
    }

    fn schedule_reset(result: ShellResult<ResetTimer>) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(timer) => Task::perform(timer.elapsed(), |timer| {
                cosmic::Action::App(Message::FeedbackTimerElapsed(timer))
            }),
            Err(err) => {
                error!(%err, "Decode result not shown");
                Task::none()
            }
        }
    }
}
