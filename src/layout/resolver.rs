// SPDX-License-Identifier: MPL-2.0

//! Frame resolution
//!
//! Turns a [`LayoutGraph`] into absolute rectangles for a given container size.
//! The solver is a small fixed-point loop over the constraint kinds the
//! composer emits:
//!
//! - chains pinned at both ends give their single unresolved surface the space
//!   left over, or size their parent from their content when every child is
//!   already sized (content hugging)
//! - text surfaces get their height from the `measure` callback once their
//!   width is known
//! - anchors inset a surface from the edges of its target
//! - arrangements spread fixed-size members with equal spacing
//!
//! Each pass must settle at least one extent or offset, so the loop is bounded
//! by the number of constraints.

use super::{Axis, Chain, ChainItem, Constraint, LayoutGraph, SurfaceId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in container coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

/// Resolved frame of every surface the graph could place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frames {
    rects: BTreeMap<SurfaceId, Rect>,
}

impl Frames {
    pub fn get(&self, id: SurfaceId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, Rect)> + '_ {
        self.rects.iter().map(|(id, rect)| (*id, *rect))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl LayoutGraph {
    /// Resolve every surface to an absolute rectangle inside `container`
    ///
    /// `measure(id, width)` returns the height a text surface needs when laid
    /// out at `width`. Surfaces the graph does not fully determine are left out
    /// of the result.
    pub fn resolve(
        &self,
        container: Size,
        measure: impl FnMut(SurfaceId, f32) -> f32,
    ) -> Frames {
        Resolver::new(self, container).run(measure)
    }
}

struct Resolver<'g> {
    graph: &'g LayoutGraph,
    parents: HashMap<SurfaceId, SurfaceId>,
    extents: HashMap<(SurfaceId, Axis), f32>,
    offsets: HashMap<(SurfaceId, Axis), f32>,
}

impl<'g> Resolver<'g> {
    fn new(graph: &'g LayoutGraph, container: Size) -> Self {
        let mut parents = HashMap::new();
        for constraint in graph.constraints() {
            match constraint {
                Constraint::Chain(chain) => {
                    for id in chain.surfaces() {
                        parents.insert(id, chain.parent);
                    }
                }
                Constraint::Anchor(anchor) => {
                    parents.insert(anchor.surface, anchor.target);
                }
                Constraint::Arrange(arrangement) => {
                    for &member in &arrangement.members {
                        parents.insert(member, arrangement.row);
                    }
                }
                Constraint::Size { .. } => {}
            }
        }

        let mut resolver = Self {
            graph,
            parents,
            extents: HashMap::new(),
            offsets: HashMap::new(),
        };
        let root = SurfaceId::Container;
        resolver.set_extent(root, Axis::Horizontal, container.width);
        resolver.set_extent(root, Axis::Vertical, container.height);
        resolver.set_offset(root, Axis::Horizontal, 0.0);
        resolver.set_offset(root, Axis::Vertical, 0.0);
        resolver
    }

    fn run(mut self, mut measure: impl FnMut(SurfaceId, f32) -> f32) -> Frames {
        let graph = self.graph;
        for constraint in graph.constraints() {
            if let Constraint::Size {
                surface,
                dimension,
                value,
            } = constraint
            {
                self.set_extent(*surface, dimension.axis(), *value);
            }
        }

        let max_passes = graph.len() + 2;
        for _ in 0..max_passes {
            let mut progress = self.measure_text(&mut measure);
            for constraint in graph.constraints() {
                progress |= match constraint {
                    Constraint::Chain(chain) => self.solve_chain(chain),
                    Constraint::Arrange(arrangement) => self.solve_arrangement(
                        arrangement.row,
                        arrangement.axis,
                        &arrangement.members,
                    ),
                    Constraint::Anchor(_) | Constraint::Size { .. } => false,
                };
            }
            progress |= self.solve_anchors();
            if !progress {
                break;
            }
        }

        self.frames()
    }

    fn extent(&self, id: SurfaceId, axis: Axis) -> Option<f32> {
        self.extents.get(&(id, axis)).copied()
    }

    fn offset(&self, id: SurfaceId, axis: Axis) -> Option<f32> {
        self.offsets.get(&(id, axis)).copied()
    }

    /// Record an extent; the first value wins
    fn set_extent(&mut self, id: SurfaceId, axis: Axis, value: f32) -> bool {
        if self.extents.contains_key(&(id, axis)) {
            return false;
        }
        self.extents.insert((id, axis), value.max(0.0));
        true
    }

    /// Record an offset relative to the parent; the first value wins
    fn set_offset(&mut self, id: SurfaceId, axis: Axis, value: f32) -> bool {
        if self.offsets.contains_key(&(id, axis)) {
            return false;
        }
        self.offsets.insert((id, axis), value);
        true
    }

    fn measure_text(&mut self, measure: &mut impl FnMut(SurfaceId, f32) -> f32) -> bool {
        let pending: Vec<(SurfaceId, f32)> = self
            .parents
            .keys()
            .filter(|id| id.is_text() && self.extent(**id, Axis::Vertical).is_none())
            .filter_map(|id| self.extent(*id, Axis::Horizontal).map(|width| (*id, width)))
            .collect();

        let mut progress = false;
        for (id, width) in pending {
            let height = measure(id, width);
            progress |= self.set_extent(id, Axis::Vertical, height);
        }
        progress
    }

    fn solve_chain(&mut self, chain: &Chain) -> bool {
        let axis = chain.axis;
        let members: Vec<SurfaceId> = chain.surfaces().collect();
        let unresolved: Vec<SurfaceId> = members
            .iter()
            .copied()
            .filter(|id| self.extent(*id, axis).is_none())
            .collect();
        let sized_total: f32 = members.iter().filter_map(|id| self.extent(*id, axis)).sum();
        let pinned_both = chain.pinned_leading() && chain.pinned_trailing();

        let mut progress = false;
        match (self.extent(chain.parent, axis), unresolved.as_slice()) {
            (Some(total), [flexible]) if pinned_both => {
                let remaining = total - chain.total_gap() - sized_total;
                progress |= self.set_extent(*flexible, axis, remaining);
            }
            (None, []) if pinned_both => {
                let hugged = chain.total_gap() + sized_total;
                progress |= self.set_extent(chain.parent, axis, hugged);
            }
            _ => {}
        }

        if members.iter().all(|id| self.extent(*id, axis).is_some()) {
            progress |= self.place_chain(chain);
        }
        progress
    }

    fn place_chain(&mut self, chain: &Chain) -> bool {
        let axis = chain.axis;
        let mut progress = false;

        if chain.pinned_leading() {
            let mut cursor = 0.0;
            for item in &chain.items {
                match item {
                    ChainItem::Edge => {}
                    ChainItem::Gap(points) => cursor += points,
                    ChainItem::Surface(id) => {
                        progress |= self.set_offset(*id, axis, cursor);
                        cursor += self.extent(*id, axis).unwrap_or_default();
                    }
                }
            }
        } else if chain.pinned_trailing() {
            let Some(mut cursor) = self.extent(chain.parent, axis) else {
                return false;
            };
            for item in chain.items.iter().rev() {
                match item {
                    ChainItem::Edge => {}
                    ChainItem::Gap(points) => cursor -= points,
                    ChainItem::Surface(id) => {
                        cursor -= self.extent(*id, axis).unwrap_or_default();
                        progress |= self.set_offset(*id, axis, cursor);
                    }
                }
            }
        }
        progress
    }

    fn solve_anchors(&mut self) -> bool {
        // (surface, axis) -> (target, leading inset, trailing inset)
        let mut groups: Vec<((SurfaceId, Axis), SurfaceId, Option<f32>, Option<f32>)> = Vec::new();
        for constraint in self.graph.constraints() {
            let Constraint::Anchor(anchor) = constraint else {
                continue;
            };
            let key = (anchor.surface, anchor.edge.axis());
            let index = match groups.iter().position(|(k, ..)| *k == key) {
                Some(index) => index,
                None => {
                    groups.push((key, anchor.target, None, None));
                    groups.len() - 1
                }
            };
            if anchor.edge.is_leading() {
                groups[index].2 = Some(anchor.inset);
            } else {
                groups[index].3 = Some(anchor.inset);
            }
        }

        let mut progress = false;
        for ((surface, axis), target, leading, trailing) in groups {
            let parent = self.extent(target, axis);
            match (leading, trailing) {
                (Some(lead), Some(trail)) => {
                    if let Some(total) = parent {
                        progress |= self.set_extent(surface, axis, total - lead - trail);
                    }
                    progress |= self.set_offset(surface, axis, lead);
                }
                (Some(lead), None) => {
                    progress |= self.set_offset(surface, axis, lead);
                }
                (None, Some(trail)) => {
                    if let (Some(total), Some(extent)) = (parent, self.extent(surface, axis)) {
                        progress |= self.set_offset(surface, axis, total - trail - extent);
                    }
                }
                (None, None) => {}
            }
        }
        progress
    }

    fn solve_arrangement(&mut self, row: SurfaceId, axis: Axis, members: &[SurfaceId]) -> bool {
        let Some(row_length) = self.extent(row, axis) else {
            return false;
        };
        let Some(sizes) = members
            .iter()
            .map(|id| self.extent(*id, axis))
            .collect::<Option<Vec<f32>>>()
        else {
            return false;
        };

        let mut progress = false;
        match sizes.as_slice() {
            [] => {}
            [only] => {
                progress |= self.set_offset(members[0], axis, (row_length - only) / 2.0);
            }
            _ => {
                let used: f32 = sizes.iter().sum();
                let spacing = ((row_length - used) / (sizes.len() - 1) as f32).max(0.0);
                let mut cursor = 0.0;
                for (id, size) in members.iter().zip(&sizes) {
                    progress |= self.set_offset(*id, axis, cursor);
                    cursor += size + spacing;
                }
            }
        }

        let cross = axis.cross();
        if let Some(row_thickness) = self.extent(row, cross) {
            for id in members {
                if let Some(thickness) = self.extent(*id, cross) {
                    progress |= self.set_offset(*id, cross, (row_thickness - thickness) / 2.0);
                }
            }
        }
        progress
    }

    fn absolute(&self, id: SurfaceId) -> Option<Rect> {
        let width = self.extent(id, Axis::Horizontal)?;
        let height = self.extent(id, Axis::Vertical)?;
        let x = self.offset(id, Axis::Horizontal)?;
        let y = self.offset(id, Axis::Vertical)?;

        let (origin_x, origin_y) = match self.parents.get(&id) {
            Some(parent) => {
                let parent = self.absolute(*parent)?;
                (parent.x, parent.y)
            }
            None => (0.0, 0.0),
        };
        Some(Rect::new(origin_x + x, origin_y + y, width, height))
    }

    fn frames(&self) -> Frames {
        let mut rects = BTreeMap::new();
        for id in std::iter::once(SurfaceId::Container).chain(self.parents.keys().copied()) {
            match self.absolute(id) {
                Some(rect) => {
                    rects.insert(id, rect);
                }
                None => debug!(surface = %id, "Surface left unresolved"),
            }
        }
        Frames { rects }
    }
}
