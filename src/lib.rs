// SPDX-License-Identifier: MPL-2.0

//! Scanner chrome for barcode and QR capture screens
//!
//! This library lays out the controls drawn over a camera preview while a code
//! is being scanned, and flashes the scan overlay when a decode succeeds or
//! fails. Capturing and decoding are left to the host.
//!
//! # Architecture
//!
//! - [`layout`]: Surface tree, constraint graph composition and resolution
//! - [`shell`]: View configuration, surface factories and [`ReaderView`]
//! - [`feedback`]: Overlay tone state machine with superseding reset timers
//! - [`config`]: User configuration handling
//! - [`app`]: COSMIC application hosting the shell
//!
//! # Example
//!
//! ```ignore
//! use scanshell::{Appearance, ReaderView, ViewConfiguration};
//!
//! let mut view = ReaderView::new(ViewConfiguration::default(), Appearance::default())?;
//! let timer = view.signal_success()?;
//! // later, once `timer.elapsed()` resolves:
//! view.reset(timer.id());
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod feedback;
pub mod i18n;
pub mod layout;
pub mod shell;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use config::Config;
pub use errors::{FeedbackError, LayoutError, ShellError, ShellResult};
pub use feedback::{FeedbackIndicator, FeedbackTone, ResetTimer, TimerId};
pub use layout::{LayoutGraph, SurfaceId};
pub use shell::{Appearance, ButtonImage, ControlRole, ReaderView, ViewConfiguration};
