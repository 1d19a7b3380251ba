// SPDX-License-Identifier: MPL-2.0

//! Declarative layout model for the scanner chrome
//!
//! A [`LayoutGraph`] is an ordered list of [`Constraint`]s relating named
//! surfaces to the container and to each other. Chains are written in the
//! familiar visual format notation when displayed:
//!
//! ```text
//! H:|[camera]|
//! V:|-32-[hintPanel][overlay]-108-|
//! ```
//!
//! - [`surfaces`]: the attachment tree that constraints are validated against
//! - [`composer`]: builds the graph from a [`ViewConfiguration`](crate::shell::ViewConfiguration)
//! - [`resolver`]: turns a graph into concrete frames for a container size

pub mod composer;
pub mod resolver;
pub mod surfaces;

pub use composer::compose;
pub use resolver::{Frames, Rect, Size};
pub use surfaces::SurfaceTree;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named surfaces of the scanner chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurfaceId {
    /// Root container every other surface lives in
    Container,
    /// Camera preview
    Camera,
    /// Scan target overlay carrying the feedback tone
    Overlay,
    /// Translucent panel behind the hint label
    HintPanel,
    /// Hint text
    HintLabel,
    /// Horizontal row holding the control buttons
    ControlRow,
    CancelButton,
    SwitchCameraButton,
    TorchButton,
}

impl SurfaceId {
    /// Name used in visual format strings
    pub fn name(self) -> &'static str {
        match self {
            SurfaceId::Container => "container",
            SurfaceId::Camera => "camera",
            SurfaceId::Overlay => "overlay",
            SurfaceId::HintPanel => "hintPanel",
            SurfaceId::HintLabel => "hintLabel",
            SurfaceId::ControlRow => "controlRow",
            SurfaceId::CancelButton => "cancelButton",
            SurfaceId::SwitchCameraButton => "switchCameraButton",
            SurfaceId::TorchButton => "torchButton",
        }
    }

    /// Whether the surface height follows its text content
    pub fn is_text(self) -> bool {
        matches!(self, SurfaceId::HintLabel)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Visual format prefix
    pub fn prefix(self) -> &'static str {
        match self {
            Axis::Horizontal => "H",
            Axis::Vertical => "V",
        }
    }

    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Edge of a surface used by anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Left | Edge::Right => Axis::Horizontal,
        }
    }

    /// Whether this is the leading edge (top or left) of its axis
    pub fn is_leading(self) -> bool {
        matches!(self, Edge::Top | Edge::Left)
    }

    fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// Dimension of a fixed-size constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn axis(self) -> Axis {
        match self {
            Dimension::Width => Axis::Horizontal,
            Dimension::Height => Axis::Vertical,
        }
    }
}

/// Cross-axis alignment of arranged members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Center,
}

/// Main-axis distribution of arranged members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    /// Members keep their size, the free space is split evenly between them
    EqualSpacing,
}

/// One element of a visual format chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChainItem {
    /// The parent's edge (`|`)
    Edge,
    /// Fixed gap in points (`-24-`)
    Gap(f32),
    /// A surface (`[name]`)
    Surface(SurfaceId),
}

/// A directional chain of surfaces inside a parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub axis: Axis,
    pub parent: SurfaceId,
    pub items: Vec<ChainItem>,
}

impl Chain {
    pub fn horizontal(parent: SurfaceId) -> Self {
        Self {
            axis: Axis::Horizontal,
            parent,
            items: Vec::new(),
        }
    }

    pub fn vertical(parent: SurfaceId) -> Self {
        Self {
            axis: Axis::Vertical,
            parent,
            items: Vec::new(),
        }
    }

    /// Pin to the parent's edge
    pub fn edge(mut self) -> Self {
        self.items.push(ChainItem::Edge);
        self
    }

    pub fn gap(mut self, points: f32) -> Self {
        self.items.push(ChainItem::Gap(points));
        self
    }

    pub fn surface(mut self, id: SurfaceId) -> Self {
        self.items.push(ChainItem::Surface(id));
        self
    }

    /// Surfaces in chain order
    pub fn surfaces(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.items.iter().filter_map(|item| match item {
            ChainItem::Surface(id) => Some(*id),
            _ => None,
        })
    }

    pub fn pinned_leading(&self) -> bool {
        matches!(self.items.first(), Some(ChainItem::Edge))
    }

    pub fn pinned_trailing(&self) -> bool {
        self.items.len() > 1 && matches!(self.items.last(), Some(ChainItem::Edge))
    }

    /// Sum of all fixed gaps in the chain
    pub fn total_gap(&self) -> f32 {
        self.items
            .iter()
            .map(|item| match item {
                ChainItem::Gap(points) => *points,
                _ => 0.0,
            })
            .sum()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.axis.prefix())?;
        for item in &self.items {
            match item {
                ChainItem::Edge => f.write_str("|")?,
                ChainItem::Gap(points) => write!(f, "-{}-", points)?,
                ChainItem::Surface(id) => write!(f, "[{}]", id)?,
            }
        }
        Ok(())
    }
}

/// Inset of a surface edge from the same edge of its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub surface: SurfaceId,
    pub edge: Edge,
    pub target: SurfaceId,
    pub inset: f32,
}

/// Members laid out along an axis inside a row surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    pub row: SurfaceId,
    pub axis: Axis,
    pub alignment: Alignment,
    pub distribution: Distribution,
    pub members: Vec<SurfaceId>,
}

/// A single positional constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    Chain(Chain),
    Anchor(Anchor),
    Size {
        surface: SurfaceId,
        dimension: Dimension,
        value: f32,
    },
    Arrange(Arrangement),
}

impl Constraint {
    /// Every surface this constraint binds, parents included
    pub fn surfaces(&self) -> Vec<SurfaceId> {
        match self {
            Constraint::Chain(chain) => std::iter::once(chain.parent)
                .chain(chain.surfaces())
                .collect(),
            Constraint::Anchor(anchor) => vec![anchor.surface, anchor.target],
            Constraint::Size { surface, .. } => vec![*surface],
            Constraint::Arrange(arrangement) => std::iter::once(arrangement.row)
                .chain(arrangement.members.iter().copied())
                .collect(),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Chain(chain) => write!(f, "{}", chain),
            Constraint::Anchor(anchor) => {
                let sign = if anchor.edge.is_leading() { '+' } else { '-' };
                write!(
                    f,
                    "{}.{} = {}.{} {} {}",
                    anchor.surface,
                    anchor.edge.name(),
                    anchor.target,
                    anchor.edge.name(),
                    sign,
                    anchor.inset
                )
            }
            Constraint::Size {
                surface,
                dimension,
                value,
            } => {
                let name = match dimension {
                    Dimension::Width => "width",
                    Dimension::Height => "height",
                };
                write!(f, "{}.{} = {}", surface, name, value)
            }
            Constraint::Arrange(arrangement) => {
                let members: Vec<&str> = arrangement.members.iter().map(|m| m.name()).collect();
                write!(
                    f,
                    "{}:{}[{}] center equal-spacing",
                    arrangement.row,
                    arrangement.axis.prefix(),
                    members.join(", ")
                )
            }
        }
    }
}

/// Ordered constraint graph produced by [`compose`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutGraph {
    constraints: Vec<Constraint>,
}

impl LayoutGraph {
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether any constraint binds the given surface
    pub fn references(&self, id: SurfaceId) -> bool {
        self.constraints.iter().any(|c| c.surfaces().contains(&id))
    }

    /// Chains along the given axis
    pub fn chains(&self, axis: Axis) -> impl Iterator<Item = &Chain> {
        self.constraints.iter().filter_map(move |c| match c {
            Constraint::Chain(chain) if chain.axis == axis => Some(chain),
            _ => None,
        })
    }

    /// Every constraint rendered as a line of text, in graph order
    pub fn visual_formats(&self) -> Vec<String> {
        self.constraints.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for LayoutGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for constraint in &self.constraints {
            writeln!(f, "{}", constraint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_display() {
        let chain = Chain::vertical(SurfaceId::Container)
            .edge()
            .gap(32.0)
            .surface(SurfaceId::HintPanel)
            .surface(SurfaceId::Overlay)
            .gap(108.0)
            .edge();
        assert_eq!(chain.to_string(), "V:|-32-[hintPanel][overlay]-108-|");
        assert_eq!(chain.total_gap(), 140.0);
        assert!(chain.pinned_leading());
        assert!(chain.pinned_trailing());
    }

    #[test]
    fn test_unpinned_chain() {
        let chain = Chain::vertical(SurfaceId::Container)
            .edge()
            .gap(32.0)
            .surface(SurfaceId::HintPanel);
        assert!(chain.pinned_leading());
        assert!(!chain.pinned_trailing());
    }

    #[test]
    fn test_constraint_display() {
        let anchor = Constraint::Anchor(Anchor {
            surface: SurfaceId::ControlRow,
            edge: Edge::Bottom,
            target: SurfaceId::Container,
            inset: 24.0,
        });
        assert_eq!(
            anchor.to_string(),
            "controlRow.bottom = container.bottom - 24"
        );

        let size = Constraint::Size {
            surface: SurfaceId::TorchButton,
            dimension: Dimension::Width,
            value: 60.0,
        };
        assert_eq!(size.to_string(), "torchButton.width = 60");
    }
}
