// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The arena-based tree: identity, structure, transitions, and the frame tick.

use alloc::vec::Vec;

use canopy_events::{InputConnection, InputSource};
use glam::Vec3;
use hashbrown::HashMap;

use crate::error::TreeError;
use crate::id::NodeId;
use crate::node::{Node, NodeFlags, NodeSlot};
use crate::shape::CollisionShape;

/// A generic retained-mode UI tree.
///
/// Nodes live in an arena keyed by [`NodeId`]; parent/child relationships are
/// id pairs, so every node has exactly one owner by construction. Sibling
/// order is ascending id everywhere: child iteration, event routing, queries,
/// and hit testing.
///
/// The root always has id [`NodeId::ROOT`]. Only the root talks to the host:
/// it holds the optional [`InputSource`] and subscribes to it while enabled.
///
/// ```
/// use canopy_tree::{NodeId, UiTree};
///
/// let mut tree: UiTree<&str> = UiTree::new("root");
/// let child = tree.create_child(NodeId::ROOT, "child")?;
/// assert!(tree.exists(child));
/// assert_eq!(tree.find(child)?.data(), &"child");
/// # Ok::<(), canopy_tree::TreeError>(())
/// ```
#[derive(Debug)]
pub struct UiTree<T: 'static> {
    pub(crate) nodes: HashMap<NodeId, Node<T>>,
    pub(crate) input: Option<InputSource>,
    pub(crate) connection: Option<InputConnection>,
}

impl<T: 'static> UiTree<T> {
    /// Create a tree holding a single root node with the given payload.
    pub fn new(data: T) -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(NodeId::ROOT, Node::new(NodeId::ROOT, data));
        Self {
            nodes,
            input: None,
            connection: None,
        }
    }

    /// Create a tree whose root will subscribe to `source` while enabled.
    pub fn with_input_source(data: T, source: InputSource) -> Self {
        let mut tree = Self::new(data);
        tree.input = Some(source);
        tree
    }

    /// The root's id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes. Always false for a live tree, which
    /// owns at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with this id exists anywhere in the tree.
    pub fn exists(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Look a node up, or `None` if absent.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    /// Look a node up mutably, or `None` if absent.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(&id)
    }

    /// Look a node up, failing with [`TreeError::IdNotFound`] if absent.
    ///
    /// The contract is check-then-find: callers either consult
    /// [`exists`](Self::exists) first or handle the error.
    pub fn find(&self, id: NodeId) -> Result<&Node<T>, TreeError> {
        self.nodes.get(&id).ok_or(TreeError::IdNotFound(id))
    }

    /// Mutable counterpart of [`find`](Self::find).
    pub fn find_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, TreeError> {
        self.nodes.get_mut(&id).ok_or(TreeError::IdNotFound(id))
    }

    /// The parent of `id`, or `None` for the root or an unknown id.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    /// The children of `id` in ascending-id order.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.children.iter().copied())
    }

    /// One greater than the largest id currently in the tree.
    pub fn next_available_id(&self) -> NodeId {
        let max = self.nodes.keys().map(|id| id.raw()).max().unwrap_or(0);
        NodeId::new(max + 1)
    }

    /// Insert an empty child under `parent` with an auto-assigned id.
    pub fn create_child(&mut self, parent: NodeId, data: T) -> Result<NodeId, TreeError> {
        let id = self.next_available_id();
        self.create_child_with_id(parent, id, data)
    }

    /// Insert an empty child under `parent` with a caller-chosen id.
    ///
    /// Fails with [`TreeError::DuplicateId`] if the id exists anywhere in the
    /// tree, leaving the tree untouched.
    pub fn create_child_with_id(
        &mut self,
        parent: NodeId,
        id: NodeId,
        data: T,
    ) -> Result<NodeId, TreeError> {
        if !self.nodes.contains_key(&parent) {
            return Err(TreeError::IdNotFound(parent));
        }
        if self.nodes.contains_key(&id) {
            return Err(TreeError::DuplicateId(id));
        }
        let mut node = Node::new(id, data);
        node.parent = Some(parent);
        self.nodes.insert(id, node);
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.insert(id);
        }
        Ok(id)
    }

    /// Graft a pre-built tree under `parent`, renumbering the grafted root to
    /// the next available id. Returns the grafted root's new id.
    pub fn add_child(&mut self, parent: NodeId, subtree: Self) -> Result<NodeId, TreeError> {
        let next = self
            .next_available_id()
            .raw()
            .max(subtree.next_available_id().raw());
        self.add_child_with_id(parent, NodeId::new(next), subtree)
    }

    /// Graft a pre-built tree under `parent`, renumbering the grafted root to
    /// `new_root`.
    ///
    /// Every id of the incoming tree is checked before any mutation: on a
    /// collision the graft fails with [`TreeError::DuplicateId`] and both
    /// trees are left untouched. The grafted tree's own input subscription,
    /// if any, is released.
    pub fn add_child_with_id(
        &mut self,
        parent: NodeId,
        new_root: NodeId,
        mut subtree: Self,
    ) -> Result<NodeId, TreeError> {
        if !self.nodes.contains_key(&parent) {
            return Err(TreeError::IdNotFound(parent));
        }
        if self.nodes.contains_key(&new_root) {
            return Err(TreeError::DuplicateId(new_root));
        }
        for &id in subtree.nodes.keys() {
            if id == NodeId::ROOT {
                continue;
            }
            if id == new_root || self.nodes.contains_key(&id) {
                return Err(TreeError::DuplicateId(id));
            }
        }

        let incoming = core::mem::take(&mut subtree.nodes);
        for (id, mut node) in incoming {
            let id = if id == NodeId::ROOT {
                node.id = new_root;
                node.parent = Some(parent);
                new_root
            } else {
                if node.parent == Some(NodeId::ROOT) {
                    node.parent = Some(new_root);
                }
                id
            };
            self.nodes.insert(id, node);
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.insert(new_root);
        }
        Ok(new_root)
    }

    /// Detach and destroy the subtree rooted at `id`.
    ///
    /// Returns whether a removal occurred. The root is not removable.
    pub fn remove_child(&mut self, id: NodeId) -> bool {
        if id == NodeId::ROOT {
            return false;
        }
        let Some(parent) = self.nodes.get(&id).and_then(|node| node.parent) else {
            return false;
        };
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.remove(&id);
        }
        self.remove_subtree(id);
        true
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.remove_subtree(child);
            }
        }
    }

    /// Atomically move `id` (and its subtree) under `new_parent`.
    ///
    /// Updates the old parent's child set, the new parent's child set, and
    /// the node's parent link in one operation. Fails with
    /// [`TreeError::WouldCycle`] if `new_parent` is `id` itself or inside
    /// `id`'s subtree.
    pub fn reparent(&mut self, id: NodeId, new_parent: NodeId) -> Result<(), TreeError> {
        if !self.nodes.contains_key(&id) {
            return Err(TreeError::IdNotFound(id));
        }
        if !self.nodes.contains_key(&new_parent) {
            return Err(TreeError::IdNotFound(new_parent));
        }
        let mut cursor = Some(new_parent);
        while let Some(current) = cursor {
            if current == id {
                return Err(TreeError::WouldCycle { node: id, new_parent });
            }
            cursor = self.nodes.get(&current).and_then(|node| node.parent);
        }
        let old_parent = self.nodes.get(&id).and_then(|node| node.parent);
        if old_parent == Some(new_parent) {
            return Ok(());
        }
        if let Some(old) = old_parent {
            if let Some(old_node) = self.nodes.get_mut(&old) {
                old_node.children.remove(&id);
            }
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = Some(new_parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(&new_parent) {
            parent_node.children.insert(id);
        }
        Ok(())
    }

    /// Collect every node in the tree satisfying `predicate`, depth-first in
    /// ascending-id order, root included.
    pub fn query<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node<T>) -> bool,
    {
        self.query_from(NodeId::ROOT, predicate)
    }

    /// Collect every node under (and including) `scope` satisfying
    /// `predicate`, depth-first in ascending-id order.
    pub fn query_from<F>(&self, scope: NodeId, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node<T>) -> bool,
    {
        let mut out = Vec::new();
        self.collect_query(scope, &predicate, &mut out);
        out
    }

    fn collect_query<F>(&self, id: NodeId, predicate: &F, out: &mut Vec<NodeId>)
    where
        F: Fn(&Node<T>) -> bool,
    {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        if predicate(node) {
            out.push(id);
        }
        for child in node.children.iter().copied() {
            self.collect_query(child, predicate, out);
        }
    }

    /// Sum of current translates from `id` up the parent chain.
    pub fn absolute_translate(&self, id: NodeId) -> Result<Vec3, TreeError> {
        let mut node = self.nodes.get(&id).ok_or(TreeError::IdNotFound(id))?;
        let mut total = node.transform.translate.current();
        while let Some(parent) = node.parent {
            let Some(parent_node) = self.nodes.get(&parent) else {
                break;
            };
            total += parent_node.transform.translate.current();
            node = parent_node;
        }
        Ok(total)
    }

    /// Hit-test `point` against the whole tree with the given geometry.
    ///
    /// Returns the first matching node (self before children, children in
    /// ascending-id order), or `None`.
    pub fn contains(&self, point: Vec3, shape: CollisionShape) -> Option<NodeId> {
        self.contains_from(NodeId::ROOT, point, shape)
    }

    /// Hit-test `point` (in `scope`'s parent-local space) against the subtree
    /// rooted at `scope`.
    ///
    /// A node's placement is `translate - registration` with its scale as
    /// extents; children are tested with the point translated into their
    /// local frame. The shape applies to every node in the recursion.
    pub fn contains_from(
        &self,
        scope: NodeId,
        point: Vec3,
        shape: CollisionShape,
    ) -> Option<NodeId> {
        let node = self.nodes.get(&scope)?;
        let origin = node.transform.origin();
        if shape.hit(origin, node.transform.scale.current(), point) {
            return Some(scope);
        }
        for child in node.children.iter().copied() {
            if let Some(hit) = self.contains_from(child, point - origin, shape) {
                return Some(hit);
            }
        }
        None
    }

    /// Whether `id` exists and is enabled.
    pub fn is_enabled(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(Node::is_enabled)
    }

    /// Whether `id` exists and is visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(Node::is_visible)
    }

    /// Enable or disable a node, firing `enable`/`disable` only on an actual
    /// transition.
    ///
    /// Enabling the root acquires a subscription to the attached input
    /// source; disabling it (or dropping the tree) releases the subscription.
    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(&id).ok_or(TreeError::IdNotFound(id))?;
        let previous = node.flags.contains(NodeFlags::ENABLED);
        node.flags.set(NodeFlags::ENABLED, enabled);
        if previous == enabled {
            return Ok(());
        }
        if id == NodeId::ROOT {
            if enabled {
                if let Some(source) = &self.input {
                    self.connection = Some(source.connect());
                }
            } else {
                self.connection = None;
            }
        }
        if enabled {
            self.fire_node(id, NodeSlot::Enable);
        } else {
            self.fire_node(id, NodeSlot::Disable);
        }
        Ok(())
    }

    /// Show or hide a node, firing `show`/`hide` only on an actual
    /// transition. Visibility is a rendering hint with no routing effect.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(&id).ok_or(TreeError::IdNotFound(id))?;
        let previous = node.flags.contains(NodeFlags::VISIBLE);
        node.flags.set(NodeFlags::VISIBLE, visible);
        if previous == visible {
            return Ok(());
        }
        if visible {
            self.fire_node(id, NodeSlot::Show);
        } else {
            self.fire_node(id, NodeSlot::Hide);
        }
        Ok(())
    }

    /// Advance the whole tree by one frame: children first, then each node's
    /// four animation channels, then its `update` callback.
    pub fn update(&mut self) {
        self.tick_node(NodeId::ROOT);
    }

    fn tick_node(&mut self, id: NodeId) {
        for child in self.child_ids(id) {
            self.tick_node(child);
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.transform.tick();
        }
        self.fire_node(id, NodeSlot::Update);
    }

    /// Snapshot of a node's child ids, safe to iterate while mutating.
    pub(crate) fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&id)
            .map(|node| node.children.iter().copied().collect())
            .unwrap_or_default()
    }
}
