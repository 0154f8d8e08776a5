//! Node Module
//!
//! A single digit cell stored in the list's arena. Links are slot indices into
//! the same arena rather than references, so the cycle cannot dangle.

/// Arena slot index of a node.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) digit: u8,
    pub(crate) prev: NodeId,
    pub(crate) next: NodeId,
    pub(crate) in_use: bool,
}

impl Node {
    /// A node linked to itself in both directions.
    pub(crate) fn detached(id: NodeId, digit: u8) -> Self {
        Self {
            digit,
            prev: id,
            next: id,
            in_use: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_node_links_to_itself() {
        let node = Node::detached(4, 1);
        assert_eq!(node.prev, 4);
        assert_eq!(node.next, 4);
        assert_eq!(node.digit, 1);
        assert!(node.in_use);
    }
}
