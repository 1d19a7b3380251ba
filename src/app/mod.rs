// SPDX-License-Identifier: MPL-2.0

//! Main application module
//!
//! Hosts a [`ReaderView`] in a COSMIC window. Decode results arrive as
//! messages, either from a capture pipeline or from the demo signal source.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, TorchState, etc.)
//! - `shell_widget`: Custom widget placing chrome elements at resolved frames
//! - `scan_overlay`: Scan target drawn in the current feedback tone
//! - `control_row`: Cancel, torch and switch camera buttons
//! - `view`: Main view rendering
//! - `update`: Message handling

mod control_row;
mod handlers;
mod scan_overlay;
mod shell_widget;
mod state;
mod update;
mod view;

use crate::config::Config;
use crate::constants::timing;
use crate::fl;
use crate::shell::{ReaderView, ViewConfiguration};
use cosmic::ApplicationExt;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::{Element, Task};
pub use shell_widget::ReaderShellWidget;
pub use state::{AppModel, CameraFacing, Flags, Message, TorchState};
use tracing::{error, info};

/// View configuration for `config`; the demo falls back to an example hint
pub(crate) fn view_configuration(config: &Config, demo: bool) -> ViewConfiguration {
    let view = config.view_configuration();
    if demo && view.hint().is_none() {
        view.with_hint(fl!("hint-example"))
    } else {
        view
    }
}

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic_utils.scanshell";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Load configuration; later changes arrive through `watch_config`
        let config = match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
            Ok(handler) => match Config::get_entry(&handler) {
                Ok(config) => config,
                Err((errors, config)) => {
                    error!(?errors, "Errors loading config");
                    config
                }
            },
            Err(err) => {
                error!(%err, "Failed to create config handler");
                Config::default()
            }
        };

        let mut reader = ReaderView::default().with_reset_delay(config.feedback_reset_delay());
        let view = view_configuration(&config, flags.demo);
        if let Err(err) = reader.configure(view, config.appearance()) {
            error!(%err, "Failed to compose reader view, showing bare preview");
        }

        info!(demo = flags.demo, "Starting scanner shell");

        let mut app = AppModel {
            core,
            config,
            reader,
            torch: Default::default(),
            facing: Default::default(),
            demo: flags.demo,
            demo_ticks: 0,
        };

        app.set_header_title(fl!("app-title"));
        let theme_task = cosmic::command::set_theme(app.config.app_theme.theme());

        (app, theme_task)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        use futures::SinkExt;

        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        if !self.demo {
            return config_sub;
        }

        let demo_sub = Subscription::run_with_id(
            "demo_signals",
            cosmic::iced::stream::channel(1, |mut output| async move {
                info!("Demo signal source started");
                loop {
                    tokio::time::sleep(timing::DEMO_SIGNAL_INTERVAL).await;
                    if output.send(Message::DemoTick).await.is_err() {
                        break;
                    }
                }
                info!("Demo signal source stopped");
            }),
        );

        Subscription::batch([config_sub, demo_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
