//! Per-run node arena with parent back references.
//!
//! Every generated successor becomes a fresh [`SearchNode`] even when its
//! state equals one already in the arena, so the arena is always a tree.
//! Parent links are indices into the same arena and always point at an
//! earlier node, which makes every ancestor walk finite and acyclic.

use crate::state::State;

/// Stable handle of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An immutable node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Domain state realized by this node.
    pub state: S,
    /// Generating ancestor (`None` for the root).
    pub parent: Option<NodeId>,
    /// Number of edges from the root.
    pub depth: usize,
    /// Accumulated path cost from the root.
    pub g: f64,
}

/// Arena of [`SearchNode`]s generated during one run.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: State> SearchTree<S> {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a parentless node. A tree may hold several roots (IDS does not,
    /// but a caller may reuse one arena for independent seeds).
    pub fn push_root(&mut self, state: S) -> NodeId {
        self.push(SearchNode {
            state,
            parent: None,
            depth: 0,
            g: 0.0,
        })
    }

    /// Insert a successor of `parent` reached over an edge of cost `cost`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn push_child(&mut self, parent: NodeId, state: S, cost: f64) -> NodeId {
        let (depth, g) = {
            let p = &self.nodes[parent.0];
            (p.depth + 1, p.g + cost)
        };
        self.push(SearchNode {
            state,
            parent: Some(parent),
            depth,
            g,
        })
    }

    fn push(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Node lookup.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// State realized by `id`.
    #[must_use]
    pub fn state(&self, id: NodeId) -> &S {
        &self.nodes[id.0].state
    }

    /// Reconstruct the path from the root to `id`, inclusive on both ends.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<S> {
        let mut path = Vec::with_capacity(self.nodes[id.0].depth + 1);
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            path.push(node.state.clone());
            current = node.parent;
        }

        path.reverse();
        path
    }

    /// Whether the state at `id` also occurs among its strict ancestors.
    #[must_use]
    pub fn has_ancestor_state(&self, id: NodeId) -> bool {
        let node = &self.nodes[id.0];
        let mut current = node.parent;

        while let Some(ancestor_id) = current {
            let ancestor = &self.nodes[ancestor_id.0];
            if ancestor.state == node.state {
                return true;
            }
            current = ancestor.parent;
        }

        false
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<S: State> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}
