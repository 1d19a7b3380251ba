// SPDX-License-Identifier: MPL-2.0

//! Layout composition
//!
//! Builds the constraint graph for a [`ViewConfiguration`]. The graph is built
//! conditionally: an optional element that is not configured never shows up in
//! any constraint. Each constraint is checked against the [`SurfaceTree`] as it
//! is added, the same way a toolkit refuses constraints between views that do
//! not share a hierarchy.

use super::{
    Alignment, Anchor, Arrangement, Axis, Chain, Constraint, Dimension, Distribution, Edge,
    LayoutGraph, SurfaceId, SurfaceTree,
};
use crate::constants::layout as metrics;
use crate::errors::LayoutError;
use crate::shell::{ControlRole, ViewConfiguration};
use tracing::debug;

/// Compose the constraint graph for `config` against the attached `surfaces`
///
/// Pure and deterministic: equal inputs produce equal graphs. Fails with a
/// [`LayoutError`] when a constraint references a surface that is missing from
/// `surfaces` or attached under the wrong parent.
pub fn compose(
    config: &ViewConfiguration,
    surfaces: &SurfaceTree,
) -> Result<LayoutGraph, LayoutError> {
    let mut graph = GraphBuilder::new(surfaces);

    // Camera preview sits under everything and fills the container
    graph.add_chain(
        Chain::horizontal(SurfaceId::Container)
            .edge()
            .surface(SurfaceId::Camera)
            .edge(),
    )?;
    graph.add_chain(
        Chain::vertical(SurfaceId::Container)
            .edge()
            .surface(SurfaceId::Camera)
            .edge(),
    )?;

    if config.show_overlay {
        graph.add_chain(
            Chain::horizontal(SurfaceId::Container)
                .edge()
                .surface(SurfaceId::Overlay)
                .edge(),
        )?;
    }

    match (config.hint(), config.show_overlay) {
        (Some(_), show_overlay) => {
            graph.add_chain(
                Chain::horizontal(SurfaceId::HintPanel)
                    .edge()
                    .gap(metrics::HINT_LABEL_PADDING_H)
                    .surface(SurfaceId::HintLabel)
                    .gap(metrics::HINT_LABEL_PADDING_H)
                    .edge(),
            )?;
            graph.add_chain(
                Chain::vertical(SurfaceId::HintPanel)
                    .edge()
                    .gap(metrics::HINT_LABEL_PADDING_V)
                    .surface(SurfaceId::HintLabel)
                    .gap(metrics::HINT_LABEL_PADDING_V)
                    .edge(),
            )?;
            graph.add_chain(
                Chain::horizontal(SurfaceId::Container)
                    .edge()
                    .gap(metrics::HINT_PANEL_MARGIN)
                    .surface(SurfaceId::HintPanel)
                    .gap(metrics::HINT_PANEL_MARGIN)
                    .edge(),
            )?;

            let column = Chain::vertical(SurfaceId::Container)
                .edge()
                .gap(metrics::TOP_GAP)
                .surface(SurfaceId::HintPanel);
            let column = if show_overlay {
                column
                    .surface(SurfaceId::Overlay)
                    .gap(metrics::BOTTOM_GAP)
                    .edge()
            } else {
                column
            };
            graph.add_chain(column)?;
        }
        (None, true) => {
            graph.add_chain(
                Chain::vertical(SurfaceId::Container)
                    .edge()
                    .gap(metrics::TOP_GAP)
                    .surface(SurfaceId::Overlay)
                    .gap(metrics::BOTTOM_GAP)
                    .edge(),
            )?;
        }
        (None, false) => {}
    }

    if config.shows_controls() {
        compose_control_row(&mut graph)?;
    }

    let graph = graph.finish();
    debug!(
        constraints = graph.len(),
        overlay = config.show_overlay,
        hint = config.hint().is_some(),
        controls = config.shows_controls(),
        "Composed layout graph"
    );
    Ok(graph)
}

/// Bottom-anchored row of fixed-size buttons
///
/// All three buttons are members whenever the row exists; hidden buttons keep
/// their slot so toggling visibility never changes the graph.
fn compose_control_row(graph: &mut GraphBuilder<'_>) -> Result<(), LayoutError> {
    let row = SurfaceId::ControlRow;

    for (edge, inset) in [
        (Edge::Bottom, metrics::CONTROL_ROW_BOTTOM_INSET),
        (Edge::Left, metrics::CONTROL_ROW_SIDE_MARGIN),
        (Edge::Right, metrics::CONTROL_ROW_SIDE_MARGIN),
    ] {
        graph.add(Constraint::Anchor(Anchor {
            surface: row,
            edge,
            target: SurfaceId::Container,
            inset,
        }))?;
    }
    graph.add(Constraint::Size {
        surface: row,
        dimension: Dimension::Height,
        value: metrics::BUTTON_SIZE,
    })?;

    let members: Vec<SurfaceId> = ControlRole::ROW_ORDER
        .iter()
        .map(|role| role.surface_id())
        .collect();

    for &member in &members {
        for dimension in [Dimension::Width, Dimension::Height] {
            graph.add(Constraint::Size {
                surface: member,
                dimension,
                value: metrics::BUTTON_SIZE,
            })?;
        }
    }

    graph.add(Constraint::Arrange(Arrangement {
        row,
        axis: Axis::Horizontal,
        alignment: Alignment::Center,
        distribution: Distribution::EqualSpacing,
        members,
    }))
}

/// Accumulates constraints, validating each against the surface tree
struct GraphBuilder<'a> {
    surfaces: &'a SurfaceTree,
    constraints: Vec<Constraint>,
}

impl<'a> GraphBuilder<'a> {
    fn new(surfaces: &'a SurfaceTree) -> Self {
        Self {
            surfaces,
            constraints: Vec::new(),
        }
    }

    fn add_chain(&mut self, chain: Chain) -> Result<(), LayoutError> {
        self.add(Constraint::Chain(chain))
    }

    fn add(&mut self, constraint: Constraint) -> Result<(), LayoutError> {
        match &constraint {
            Constraint::Chain(chain) => {
                self.surfaces.require(chain.parent)?;
                for id in chain.surfaces() {
                    self.surfaces.require_child(id, chain.parent)?;
                }
            }
            Constraint::Anchor(anchor) => {
                self.surfaces.require_child(anchor.surface, anchor.target)?;
            }
            Constraint::Size { surface, .. } => self.surfaces.require(*surface)?,
            Constraint::Arrange(arrangement) => {
                self.surfaces.require(arrangement.row)?;
                for &member in &arrangement.members {
                    self.surfaces.require_child(member, arrangement.row)?;
                }
            }
        }
        self.constraints.push(constraint);
        Ok(())
    }

    fn finish(self) -> LayoutGraph {
        LayoutGraph {
            constraints: self.constraints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_only_tree() -> SurfaceTree {
        let mut tree = SurfaceTree::new();
        tree.attach(SurfaceId::Camera, SurfaceId::Container).unwrap();
        tree
    }

    #[test]
    fn test_bare_configuration_pins_camera_only() {
        let config = ViewConfiguration::bare();
        let graph = compose(&config, &camera_only_tree()).unwrap();

        assert_eq!(graph.visual_formats(), vec!["H:|[camera]|", "V:|[camera]|"]);
        assert!(!graph.references(SurfaceId::ControlRow));
        assert!(!graph.references(SurfaceId::Overlay));
    }

    #[test]
    fn test_overlay_without_hint_or_controls() {
        let config = ViewConfiguration {
            show_overlay: true,
            ..ViewConfiguration::bare()
        };
        let mut tree = camera_only_tree();
        tree.attach(SurfaceId::Overlay, SurfaceId::Container).unwrap();

        let graph = compose(&config, &tree).unwrap();
        assert_eq!(
            graph.visual_formats(),
            vec![
                "H:|[camera]|",
                "V:|[camera]|",
                "H:|[overlay]|",
                "V:|-32-[overlay]-108-|"
            ]
        );
    }

    #[test]
    fn test_missing_overlay_is_reported() {
        let config = ViewConfiguration {
            show_overlay: true,
            ..ViewConfiguration::bare()
        };
        assert_eq!(
            compose(&config, &camera_only_tree()),
            Err(LayoutError::Detached(SurfaceId::Overlay))
        );
    }

    #[test]
    fn test_hint_without_overlay_pins_panel_to_top() {
        let config = ViewConfiguration::bare().with_hint("Scan");
        let mut tree = camera_only_tree();
        tree.attach(SurfaceId::HintPanel, SurfaceId::Container).unwrap();
        tree.attach(SurfaceId::HintLabel, SurfaceId::HintPanel).unwrap();

        let graph = compose(&config, &tree).unwrap();
        assert!(
            graph
                .visual_formats()
                .contains(&"V:|-32-[hintPanel]".to_string())
        );
        assert!(!graph.references(SurfaceId::Overlay));
    }
}
