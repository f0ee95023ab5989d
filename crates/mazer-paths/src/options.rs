/// When the uninformed searches add a cell to their explored set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExploredPolicy {
    /// Mark each neighbour as it is admitted. Every cell enters the frontier
    /// at most once.
    #[default]
    OnAdmit,
    /// Mark the expanding node's own cell once it admits a child, leaving
    /// the admitted neighbour unmarked until it is expanded itself.
    ///
    /// A cell reachable from several frontier nodes is pushed once per
    /// discovery, so the work grows exponentially with grid size on open
    /// grids: BFS corner to corner admits 13, 49, 181, 671, 2507 and 9437
    /// neighbours on 3x3 through 8x8, about 3.7 times more per added row
    /// and column.
    OnExpand,
}

/// Tuning knobs for depth-first and breadth-first search.
///
/// A* keeps a best-cost map instead of an explored set and ignores these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    pub explored: ExploredPolicy,
}

impl SearchOptions {
    /// Set the explored-set policy (builder).
    pub const fn with_explored(mut self, explored: ExploredPolicy) -> Self {
        self.explored = explored;
        self
    }
}
