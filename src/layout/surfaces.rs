// SPDX-License-Identifier: MPL-2.0

//! Surface attachment tree
//!
//! Mirrors the parent/child hierarchy of the rendered chrome. Constraints may
//! only reference surfaces that are attached here, and chains may only bind
//! surfaces that are direct children of the chain's parent.

use super::SurfaceId;
use crate::errors::LayoutError;

/// Ordered set of attached surfaces and their parents
///
/// The [`SurfaceId::Container`] root is always present and has no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceTree {
    /// (child, parent) in attach order
    entries: Vec<(SurfaceId, SurfaceId)>,
}

impl SurfaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `child` under `parent`
    ///
    /// The parent must be the container or an already attached surface.
    pub fn attach(&mut self, child: SurfaceId, parent: SurfaceId) -> Result<(), LayoutError> {
        if child == SurfaceId::Container {
            return Err(LayoutError::RootAttach);
        }
        if self.contains(child) {
            return Err(LayoutError::AlreadyAttached(child));
        }
        if !self.contains(parent) {
            return Err(LayoutError::Detached(parent));
        }
        self.entries.push((child, parent));
        Ok(())
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        id == SurfaceId::Container || self.entries.iter().any(|(child, _)| *child == id)
    }

    pub fn parent_of(&self, id: SurfaceId) -> Option<SurfaceId> {
        self.entries
            .iter()
            .find(|(child, _)| *child == id)
            .map(|(_, parent)| *parent)
    }

    /// Direct children of `parent` in attach order
    pub fn children_of(&self, parent: SurfaceId) -> impl Iterator<Item = SurfaceId> + '_ {
        self.entries
            .iter()
            .filter(move |(_, p)| *p == parent)
            .map(|(child, _)| *child)
    }

    /// Attached surfaces (root excluded) in attach order
    pub fn iter(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.entries.iter().map(|(child, _)| *child)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that `id` is attached
    pub fn require(&self, id: SurfaceId) -> Result<(), LayoutError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(LayoutError::Detached(id))
        }
    }

    /// Check that `id` is attached directly under `parent`
    pub fn require_child(&self, id: SurfaceId, parent: SurfaceId) -> Result<(), LayoutError> {
        self.require(parent)?;
        match self.parent_of(id) {
            Some(found) if found == parent => Ok(()),
            Some(found) => Err(LayoutError::ForeignParent {
                surface: id,
                expected: parent,
                found,
            }),
            None => Err(LayoutError::Detached(id)),
        }
    }
}
