// SPDX-License-Identifier: GPL-3.0-only

//! Scanner shell
//!
//! [`ReaderView`] ties the pieces together: it builds the chrome surfaces for
//! a [`ViewConfiguration`], composes their layout graph, and owns the
//! [`FeedbackIndicator`] that colors the overlay.
//!
//! Optional elements live in `Option` slots. Composition and rendering match
//! on their presence; a slot that is `None` was never built.

pub mod factory;

use crate::errors::{FeedbackError, ShellResult};
use crate::feedback::{FeedbackIndicator, FeedbackTone, ResetTimer, TimerId};
use crate::layout::{self, Frames, LayoutGraph, Size, SurfaceId, SurfaceTree};
use factory::{ButtonSurface, OverlaySurface, PanelSurface};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Which optional elements the scanner screen shows
///
/// Owned by the [`ReaderView`] once configured; a different configuration
/// means calling [`ReaderView::configure`] again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfiguration {
    pub show_cancel: bool,
    pub show_switch_camera: bool,
    pub show_torch: bool,
    pub show_overlay: bool,
    pub hint_text: Option<String>,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            show_cancel: true,
            show_switch_camera: true,
            show_torch: true,
            show_overlay: true,
            hint_text: None,
        }
    }
}

impl ViewConfiguration {
    /// Camera preview only
    pub fn bare() -> Self {
        Self {
            show_cancel: false,
            show_switch_camera: false,
            show_torch: false,
            show_overlay: false,
            hint_text: None,
        }
    }

    pub fn with_hint(self, text: impl Into<String>) -> Self {
        Self {
            hint_text: Some(text.into()),
            ..self
        }
    }

    /// Hint text, treating an empty string as absent
    pub fn hint(&self) -> Option<&str> {
        self.hint_text.as_deref().filter(|text| !text.is_empty())
    }

    /// Whether the control row is built at all
    pub fn shows_controls(&self) -> bool {
        self.show_cancel || self.show_switch_camera || self.show_torch
    }

    pub fn shows(&self, role: ControlRole) -> bool {
        match role {
            ControlRole::Cancel => self.show_cancel,
            ControlRole::SwitchCamera => self.show_switch_camera,
            ControlRole::ToggleTorch => self.show_torch,
        }
    }
}

/// Icon shown on a control button, by icon theme name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonImage(String);

impl ButtonImage {
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Externally supplied button images, each independently optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub cancel_button_image: Option<ButtonImage>,
    pub switch_button_image: Option<ButtonImage>,
    pub torch_button_image: Option<ButtonImage>,
}

impl Appearance {
    pub fn image(&self, role: ControlRole) -> Option<&ButtonImage> {
        match role {
            ControlRole::Cancel => self.cancel_button_image.as_ref(),
            ControlRole::SwitchCamera => self.switch_button_image.as_ref(),
            ControlRole::ToggleTorch => self.torch_button_image.as_ref(),
        }
    }
}

/// What a button is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlRole {
    Cancel,
    SwitchCamera,
    ToggleTorch,
}

impl ControlRole {
    /// Left-to-right order inside the control row
    pub const ROW_ORDER: [ControlRole; 3] = [
        ControlRole::Cancel,
        ControlRole::ToggleTorch,
        ControlRole::SwitchCamera,
    ];

    pub fn surface_id(self) -> SurfaceId {
        match self {
            ControlRole::Cancel => SurfaceId::CancelButton,
            ControlRole::SwitchCamera => SurfaceId::SwitchCameraButton,
            ControlRole::ToggleTorch => SurfaceId::TorchButton,
        }
    }
}

/// Image and visibility of one control button
///
/// Visibility does not depend on the image: a button without an image still
/// exists and still handles taps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub image: Option<ButtonImage>,
    pub visible: bool,
}

/// Built surfaces, one slot per optional element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots {
    pub overlay: Option<OverlaySurface>,
    pub hint: Option<PanelSurface>,
    /// Buttons in row order; present whenever the row is
    pub controls: Option<Vec<ButtonSurface>>,
}

/// Scanner chrome: surfaces, layout graph and overlay feedback
#[derive(Debug)]
pub struct ReaderView {
    config: ViewConfiguration,
    appearance: Appearance,
    surfaces: SurfaceTree,
    slots: Slots,
    graph: LayoutGraph,
    feedback: FeedbackIndicator,
}

/// Unconfigured view: no surfaces besides the container and an empty graph
impl Default for ReaderView {
    fn default() -> Self {
        Self {
            config: ViewConfiguration::bare(),
            appearance: Appearance::default(),
            surfaces: SurfaceTree::new(),
            slots: Slots::default(),
            graph: LayoutGraph::default(),
            feedback: FeedbackIndicator::default(),
        }
    }
}

impl ReaderView {
    /// Build and lay out a view with the default reset delay
    pub fn new(config: ViewConfiguration, appearance: Appearance) -> ShellResult<Self> {
        let mut view = Self::default();
        view.configure(config, appearance)?;
        Ok(view)
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.set_reset_delay(delay);
        self
    }

    /// Delay used by timers armed from now on
    pub fn set_reset_delay(&mut self, delay: Duration) {
        self.feedback.set_delay(delay);
    }

    /// Rebuild surfaces and layout from scratch
    ///
    /// The previous graph is discarded, never patched. Dropping the overlay
    /// also invalidates any pending feedback reset. On error the view keeps its
    /// previous state.
    pub fn configure(
        &mut self,
        config: ViewConfiguration,
        appearance: Appearance,
    ) -> ShellResult<()> {
        let (surfaces, slots) = build_surfaces(&config, &appearance)?;
        let graph = layout::compose(&config, &surfaces)?;

        if slots.overlay.is_none() {
            self.feedback.disarm();
        }

        info!(
            overlay = config.show_overlay,
            hint = ?config.hint(),
            cancel = config.show_cancel,
            switch_camera = config.show_switch_camera,
            torch = config.show_torch,
            constraints = graph.len(),
            "Reader view configured"
        );

        self.config = config;
        self.appearance = appearance;
        self.surfaces = surfaces;
        self.slots = slots;
        self.graph = graph;
        Ok(())
    }

    pub fn config(&self) -> &ViewConfiguration {
        &self.config
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn surfaces(&self) -> &SurfaceTree {
        &self.surfaces
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn graph(&self) -> &LayoutGraph {
        &self.graph
    }

    pub fn feedback(&self) -> &FeedbackIndicator {
        &self.feedback
    }

    /// Current overlay tone
    pub fn tone(&self) -> FeedbackTone {
        self.feedback.tone()
    }

    pub fn button(&self, role: ControlRole) -> Option<&ButtonSurface> {
        self.slots
            .controls
            .as_ref()
            .and_then(|buttons| buttons.iter().find(|button| button.role == role))
    }

    /// Resolve the current graph for a container size
    pub fn resolve(&self, container: Size, measure: impl FnMut(SurfaceId, f32) -> f32) -> Frames {
        self.graph.resolve(container, measure)
    }

    /// Flash the overlay green
    pub fn signal_success(&mut self) -> ShellResult<ResetTimer> {
        self.require_overlay()?;
        Ok(self.feedback.signal_success())
    }

    /// Flash the overlay red
    pub fn signal_failure(&mut self) -> ShellResult<ResetTimer> {
        self.require_overlay()?;
        Ok(self.feedback.signal_failure())
    }

    /// Deliver a fired reset timer; true if the overlay went back to neutral
    pub fn reset(&mut self, timer: TimerId) -> bool {
        self.feedback.reset(timer)
    }

    fn require_overlay(&self) -> Result<(), FeedbackError> {
        match self.slots.overlay {
            Some(_) => Ok(()),
            None => Err(FeedbackError::OverlayMissing),
        }
    }
}

/// Build and attach every configured surface
///
/// Attach order: camera, control row with its buttons, overlay, hint panel
/// with its label.
fn build_surfaces(
    config: &ViewConfiguration,
    appearance: &Appearance,
) -> ShellResult<(SurfaceTree, Slots)> {
    let mut tree = SurfaceTree::new();
    let mut slots = Slots::default();

    tree.attach(SurfaceId::Camera, SurfaceId::Container)?;

    if config.shows_controls() {
        tree.attach(SurfaceId::ControlRow, SurfaceId::Container)?;
        let mut buttons = Vec::with_capacity(ControlRole::ROW_ORDER.len());
        for role in ControlRole::ROW_ORDER {
            let spec = ButtonSpec {
                image: appearance.image(role).cloned(),
                visible: config.shows(role),
            };
            tree.attach(role.surface_id(), SurfaceId::ControlRow)?;
            buttons.push(factory::button(role, &spec));
        }
        slots.controls = Some(buttons);
    }

    if config.show_overlay {
        tree.attach(SurfaceId::Overlay, SurfaceId::Container)?;
        slots.overlay = Some(factory::overlay());
    }

    if let Some(text) = config.hint() {
        tree.attach(SurfaceId::HintPanel, SurfaceId::Container)?;
        tree.attach(SurfaceId::HintLabel, SurfaceId::HintPanel)?;
        slots.hint = Some(factory::hint_panel(text));
    }

    Ok((tree, slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShellError;

    #[test]
    fn test_empty_hint_is_absent() {
        let config = ViewConfiguration::default().with_hint("");
        assert_eq!(config.hint(), None);

        let view = ReaderView::new(config, Appearance::default()).unwrap();
        assert!(view.slots().hint.is_none());
        assert!(!view.surfaces().contains(SurfaceId::HintPanel));
    }

    #[test]
    fn test_signal_without_overlay_is_rejected() {
        let config = ViewConfiguration {
            show_overlay: false,
            ..ViewConfiguration::default()
        };
        let mut view = ReaderView::new(config, Appearance::default()).unwrap();

        assert_eq!(
            view.signal_success(),
            Err(ShellError::Feedback(FeedbackError::OverlayMissing))
        );
        assert_eq!(view.tone(), FeedbackTone::Neutral);
    }

    #[test]
    fn test_reconfigure_without_overlay_disarms_feedback() {
        let mut view =
            ReaderView::new(ViewConfiguration::default(), Appearance::default()).unwrap();
        let timer = view.signal_failure().unwrap();

        view.configure(
            ViewConfiguration {
                show_overlay: false,
                ..ViewConfiguration::default()
            },
            Appearance::default(),
        )
        .unwrap();

        assert_eq!(view.tone(), FeedbackTone::Neutral);
        assert!(!view.reset(timer.id()));
    }

    #[test]
    fn test_reconfigure_keeps_pending_feedback() {
        let mut view =
            ReaderView::new(ViewConfiguration::default(), Appearance::default()).unwrap();
        let timer = view.signal_success().unwrap();

        view.configure(
            ViewConfiguration::default().with_hint("Scan"),
            Appearance::default(),
        )
        .unwrap();

        assert_eq!(view.tone(), FeedbackTone::Success);
        assert!(view.reset(timer.id()));
    }

    #[test]
    fn test_timer_from_dropped_view_never_resets_another() {
        let mut first =
            ReaderView::new(ViewConfiguration::default(), Appearance::default()).unwrap();
        let stale = first.signal_failure().unwrap();
        drop(first);

        let mut second =
            ReaderView::new(ViewConfiguration::default(), Appearance::default()).unwrap();
        let current = second.signal_success().unwrap();

        assert_ne!(stale.id(), current.id());
        assert!(!second.reset(stale.id()));
        assert_eq!(second.tone(), FeedbackTone::Success);
    }

    #[test]
    fn test_button_images_follow_appearance() {
        let appearance = Appearance {
            torch_button_image: Some(ButtonImage::named("torch")),
            ..Appearance::default()
        };
        let view = ReaderView::new(ViewConfiguration::default(), appearance).unwrap();

        let torch = view.button(ControlRole::ToggleTorch).unwrap();
        assert_eq!(torch.image.as_ref().map(ButtonImage::name), Some("torch"));
        assert_eq!(view.button(ControlRole::Cancel).unwrap().image, None);
    }
}
