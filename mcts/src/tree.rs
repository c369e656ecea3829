use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use crate::{MCTSError, Result};

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Ids are `u32`, which bounds a tree to `u32::MAX + 1` nodes.
    #[inline]
    fn try_from_usize(i: usize) -> Result<Self> {
        u32::try_from(i).map(Self).map_err(|_| {
            MCTSError::InvariantViolation(format!("Search tree exceeded {} nodes", u32::MAX))
        })
    }

    #[inline]
    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Statistics for a single position together with the state it was created from.
#[derive(Debug)]
pub struct NodeStats<K, S> {
    key: K,
    state: S,
    visits: u32,
    total_reward: f32,
    children: Option<Box<[NodeId]>>,
}

impl<K, S> NodeStats<K, S> {
    fn new(key: K, state: S) -> Self {
        Self {
            key,
            state,
            visits: 0,
            total_reward: 0.0,
            children: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn total_reward(&self) -> f32 {
        self.total_reward
    }

    /// `Q/N`, or `None` while the node is unvisited.
    pub fn average_reward(&self) -> Option<f32> {
        (self.visits > 0).then(|| self.total_reward / self.visits as f32)
    }

    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Child ids in expansion order, `None` until the node is expanded.
    pub fn children(&self) -> Option<&[NodeId]> {
        self.children.as_deref()
    }
}

/// Append-only store of node statistics keyed by [`StateKey`](crate::StateKey).
///
/// Nodes live in an arena indexed by [`NodeId`] and are never removed, so ids stay valid for the
/// lifetime of the tree. Each key maps to exactly one node.
#[derive(Debug)]
pub struct SearchTree<K, S> {
    nodes: Vec<NodeStats<K, S>>,
    index: HashMap<K, NodeId>,
}

impl<K, S> SearchTree<K, S>
where
    K: Clone + Debug + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &NodeStats<K, S> {
        &self.nodes[id.as_usize()]
    }

    pub fn find(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn get(&self, key: &K) -> Option<&NodeStats<K, S>> {
        self.find(key).map(|id| self.node(id))
    }

    /// Returns the node for `key`, creating an unvisited, unexpanded node holding `state` if the
    /// key has not been seen before. Fails once the tree has run out of node ids.
    pub fn get_or_insert(&mut self, key: K, state: S) -> Result<NodeId> {
        if let Some(id) = self.index.get(&key) {
            return Ok(*id);
        }

        let id = NodeId::try_from_usize(self.nodes.len())?;
        self.index.insert(key.clone(), id);
        self.nodes.push(NodeStats::new(key, state));
        Ok(id)
    }

    /// Sets the child set of `id` from `(key, state)` pairs. Only the first expansion of a node
    /// takes effect; later calls return `false` and leave the tree untouched.
    pub fn expand_node<I>(&mut self, id: NodeId, children: I) -> Result<bool>
    where
        I: IntoIterator<Item = (K, S)>,
    {
        if self.node(id).is_expanded() {
            return Ok(false);
        }

        let children = children
            .into_iter()
            .map(|(key, state)| self.get_or_insert(key, state))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .unique()
            .collect::<Box<[_]>>();

        self.nodes[id.as_usize()].children = Some(children);
        Ok(true)
    }

    pub fn record_node_visit(&mut self, id: NodeId, reward: f32) {
        let node = &mut self.nodes[id.as_usize()];
        node.visits += 1;
        node.total_reward += reward;
    }

    /// `false` for unknown keys as well as known but unexpanded ones.
    pub fn is_expanded(&self, key: &K) -> bool {
        self.get(key).map_or(false, |node| node.is_expanded())
    }

    pub fn children_of(&self, key: &K) -> Result<Vec<&K>> {
        let children = self
            .get(key)
            .and_then(|node| node.children())
            .ok_or_else(|| MCTSError::NotExpanded(format!("{:?}", key)))?;

        Ok(children.iter().map(|id| self.node(*id).key()).collect())
    }

    pub fn record_visit(&mut self, key: &K, reward: f32) -> Result<()> {
        let id = self
            .find(key)
            .ok_or_else(|| MCTSError::NotExpanded(format!("{:?}", key)))?;

        self.record_node_visit(id, reward);
        Ok(())
    }

    /// Key level form of [`SearchTree::expand_node`]. Fails if `key` has never been inserted.
    pub fn expand<I>(&mut self, key: &K, children: I) -> Result<bool>
    where
        I: IntoIterator<Item = (K, S)>,
    {
        let id = self
            .find(key)
            .ok_or_else(|| MCTSError::NotExpanded(format!("{:?}", key)))?;

        self.expand_node(id, children)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeStats<K, S>> {
        self.nodes.iter()
    }
}

impl<K, S> Default for SearchTree<K, S>
where
    K: Clone + Debug + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
