// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use scanshell::app::{AppModel, Flags};
use scanshell::i18n;

mod cli;

#[derive(Parser)]
#[command(name = "scanshell")]
#[command(about = "Scanner chrome for barcode and QR capture on the COSMIC desktop")]
#[command(version = scanshell::constants::app_info::version())]
#[command(subcommand_required = false)]
struct Cli {
    /// Alternate failure and success signals to preview the overlay feedback
    #[arg(long)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout graph for a view configuration
    Layout {
        /// Hide the cancel button
        #[arg(long)]
        no_cancel: bool,

        /// Hide the switch camera button
        #[arg(long)]
        no_switch: bool,

        /// Hide the torch button
        #[arg(long)]
        no_torch: bool,

        /// Leave out the scan overlay
        #[arg(long)]
        no_overlay: bool,

        /// Hint text shown above the overlay
        #[arg(long)]
        hint: Option<String>,

        /// Print JSON instead of visual format strings
        #[arg(long)]
        json: bool,

        /// Container width to resolve frames against
        #[arg(long, requires = "height")]
        width: Option<f32>,

        /// Container height to resolve frames against
        #[arg(long, requires = "width")]
        height: Option<f32>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=scanshell=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Layout {
            no_cancel,
            no_switch,
            no_torch,
            no_overlay,
            hint,
            json,
            width,
            height,
        }) => {
            let config = scanshell::ViewConfiguration {
                show_cancel: !no_cancel,
                show_switch_camera: !no_switch,
                show_torch: !no_torch,
                show_overlay: !no_overlay,
                hint_text: hint,
            };
            let container = width.zip(height);
            cli::print_layout(config, container, json)
        }
        None => run_gui(cli.demo),
    }
}

fn run_gui(demo: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(480.0),
    );

    cosmic::app::run::<AppModel>(settings, Flags { demo })?;

    Ok(())
}
