// SPDX-License-Identifier: MPL-2.0

//! Reader shell widget
//!
//! Positions one child element per surface at the frame the layout graph
//! resolves to. The graph is resolved on every layout pass against the actual
//! bounds, so window resizes need no extra bookkeeping. Text surfaces are
//! measured by laying out their element at the resolved width.

use crate::app::state::Message;
use crate::layout::{self as chrome, LayoutGraph, SurfaceId};
use cosmic::iced::advanced::widget::{Operation, Tree};
use cosmic::iced::advanced::{Clipboard, Layout, Shell, Widget, layout, mouse, renderer};
use cosmic::iced::event::Status;
use cosmic::iced::{Element, Event, Length, Point, Rectangle, Size};
use cosmic::{Renderer, Theme};
use tracing::trace;

/// Custom widget hosting the scanner chrome
pub struct ReaderShellWidget<'a> {
    graph: LayoutGraph,
    /// Surface of each child, in draw order
    surfaces: Vec<SurfaceId>,
    children: Vec<Element<'a, Message, Theme, Renderer>>,
}

impl<'a> ReaderShellWidget<'a> {
    pub fn new(graph: LayoutGraph) -> Self {
        Self {
            graph,
            surfaces: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add the element drawn for `surface`; later children draw on top
    pub fn push(
        mut self,
        surface: SurfaceId,
        element: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.surfaces.push(surface);
        self.children.push(element.into());
        self
    }
}

impl<'a> Widget<Message, Theme, Renderer> for ReaderShellWidget<'a> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(&mut self.children);
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.max();

        let frames = self.graph.resolve(
            chrome::Size::new(size.width, size.height),
            |surface, width| {
                let Some(index) = self.surfaces.iter().position(|id| *id == surface) else {
                    return 0.0;
                };
                let text_limits =
                    layout::Limits::new(Size::ZERO, Size::new(width, f32::INFINITY));
                self.children[index]
                    .as_widget()
                    .layout(&mut tree.children[index], renderer, &text_limits)
                    .size()
                    .height
            },
        );

        let nodes: Vec<layout::Node> = self
            .surfaces
            .iter()
            .zip(self.children.iter())
            .zip(tree.children.iter_mut())
            .map(|((surface, child), child_tree)| {
                let frame = frames.get(*surface).unwrap_or_else(|| {
                    trace!(%surface, "No frame resolved, collapsing element");
                    chrome::Rect::default()
                });
                let frame_size = Size::new(frame.width, frame.height);
                child
                    .as_widget()
                    .layout(
                        child_tree,
                        renderer,
                        &layout::Limits::new(frame_size, frame_size),
                    )
                    .move_to(Point::new(frame.x, frame.y))
            })
            .collect();

        layout::Node::with_children(size, nodes)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        for ((child, child_tree), child_layout) in self
            .children
            .iter()
            .zip(tree.children.iter())
            .zip(layout.children())
        {
            child.as_widget().draw(
                child_tree,
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> Status {
        for ((child, child_tree), child_layout) in self
            .children
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
        {
            let status = child.as_widget_mut().on_event(
                child_tree,
                event.clone(),
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );

            if status == Status::Captured {
                return Status::Captured;
            }
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        for ((child, child_tree), child_layout) in self
            .children
            .iter()
            .zip(tree.children.iter())
            .zip(layout.children())
        {
            let interaction = child.as_widget().mouse_interaction(
                child_tree,
                child_layout,
                cursor,
                viewport,
                renderer,
            );

            if interaction != mouse::Interaction::default() {
                return interaction;
            }
        }

        mouse::Interaction::default()
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        for ((child, child_tree), child_layout) in self
            .children
            .iter()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
        {
            child
                .as_widget()
                .operate(child_tree, child_layout, renderer, operation);
        }
    }
}

impl<'a> From<ReaderShellWidget<'a>> for Element<'a, Message, Theme, Renderer> {
    fn from(widget: ReaderShellWidget<'a>) -> Self {
        Element::new(widget)
    }
}
