// SPDX-License-Identifier: MPL-2.0

//! Error types for the scanner shell
//!
//! Every error in this crate is a precondition violation: a layout composed
//! against surfaces that were never attached, or a feedback signal sent to a
//! view without an overlay. Callers report them and never retry.

use crate::layout::SurfaceId;
use std::fmt;

/// Result type alias using ShellError
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type
#[derive(Debug, Clone, PartialEq)]
pub enum ShellError {
    /// Layout composition failed
    Layout(LayoutError),
    /// Feedback signaling failed
    Feedback(FeedbackError),
}

/// Layout composition errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A constraint references a surface that is not attached
    Detached(SurfaceId),
    /// A constraint expects a surface under one parent but it lives under another
    ForeignParent {
        surface: SurfaceId,
        expected: SurfaceId,
        found: SurfaceId,
    },
    /// The surface was attached twice
    AlreadyAttached(SurfaceId),
    /// The container is the root and cannot be attached
    RootAttach,
}

/// Feedback indicator errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackError {
    /// Signal sent while the view has no overlay surface
    OverlayMissing,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Layout(e) => write!(f, "Layout error: {}", e),
            ShellError::Feedback(e) => write!(f, "Feedback error: {}", e),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Detached(id) => write!(f, "surface '{}' is not attached", id),
            LayoutError::ForeignParent {
                surface,
                expected,
                found,
            } => write!(
                f,
                "surface '{}' is attached to '{}', expected '{}'",
                surface, found, expected
            ),
            LayoutError::AlreadyAttached(id) => write!(f, "surface '{}' is already attached", id),
            LayoutError::RootAttach => write!(f, "the container cannot be attached"),
        }
    }
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackError::OverlayMissing => write!(f, "no overlay surface to signal on"),
        }
    }
}

impl std::error::Error for ShellError {}
impl std::error::Error for LayoutError {}
impl std::error::Error for FeedbackError {}

impl From<LayoutError> for ShellError {
    fn from(err: LayoutError) -> Self {
        ShellError::Layout(err)
    }
}

impl From<FeedbackError> for ShellError {
    fn from(err: FeedbackError) -> Self {
        ShellError::Feedback(err)
    }
}
