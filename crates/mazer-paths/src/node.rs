use mazer_core::Cell;

/// Handle to a node inside a [`SearchTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its tree's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A grid cell reached during a search, with the node that discovered it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub cell: Cell,
    pub parent: Option<NodeId>,
    /// Path cost from the start (A* only).
    pub cost: Option<u32>,
    /// Estimated remaining cost to the goal (A* only).
    pub heuristic: Option<u32>,
}

impl SearchNode {
    /// A node with no parent.
    pub const fn root(cell: Cell) -> Self {
        Self {
            cell,
            parent: None,
            cost: None,
            heuristic: None,
        }
    }

    /// A node discovered from `parent`.
    pub const fn child(cell: Cell, parent: NodeId) -> Self {
        Self {
            cell,
            parent: Some(parent),
            cost: None,
            heuristic: None,
        }
    }

    /// Attach A* bookkeeping (builder).
    pub const fn with_estimate(mut self, cost: u32, heuristic: u32) -> Self {
        self.cost = Some(cost);
        self.heuristic = Some(heuristic);
        self
    }

    /// `cost + heuristic`, when both are known.
    pub fn priority(&self) -> Option<u32> {
        Some(self.cost? + self.heuristic?)
    }
}

/// Arena holding every node created by one search.
///
/// Parents are always added before their children, so every parent chain
/// ends at a root after finitely many steps.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its handle.
    ///
    /// # Panics
    ///
    /// If `node.parent` does not refer to a node already in this tree.
    pub fn add(&mut self, node: SearchNode) -> NodeId {
        if let Some(parent) = node.parent {
            assert!(
                parent.0 < self.nodes.len(),
                "parent {parent:?} is not in this tree"
            );
        }
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Look up a node, or `None` for a handle from another tree.
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Walk from `id` up to its root, yielding `id` first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node with its handle, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

/// Iterator over a node and its ancestors, ending at the root.
pub struct Ancestors<'a> {
    tree: &'a SearchTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}
