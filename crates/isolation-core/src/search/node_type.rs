//! Node type definitions for the alpha-beta search algorithm.

/// Node where the maximizing player picks the move.
pub struct Max;

/// Node where the opponent of the maximizing player picks the move.
pub struct Min;

/// Trait for compile-time node type specialization.
pub trait NodeType {
    /// Whether the node keeps the highest child value.
    const MAX_NODE: bool;
    /// Node type of the children.
    type Child: NodeType;
}

impl NodeType for Max {
    const MAX_NODE: bool = true;
    type Child = Min;
}

impl NodeType for Min {
    const MAX_NODE: bool = false;
    type Child = Max;
}
