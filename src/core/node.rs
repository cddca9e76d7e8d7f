use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A cheap, copyable handle to a node stored in a [`Ring`](crate::Ring).
///
/// Handles are only ever issued by [`Ring::insert`](crate::Ring::insert);
/// using a handle against a ring that never issued it is reported as
/// [`RingError::UnknownNode`](crate::RingError::UnknownNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The node's slot in the ring's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// The kind tag of a node.
///
/// The three kinds share all data and logic; the tag exists so that rings mixing
/// kinds can be built and observed to behave identically. There is no behavioral
/// polymorphism behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    Base,
    VariantB,
    VariantC,
}

/// One participant in a ring.
///
/// A node holds an optional link to its successor and an append-only history of
/// the values it has generated. Nodes never exist outside a [`Ring`]; the arena
/// owns them and links are expressed as [`NodeId`] handles, so the cyclic
/// structure needs no shared-ownership pointers.
///
/// [`Ring`]: crate::Ring
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) uuid: Uuid,
    pub(crate) link: Option<NodeId>,
    pub(crate) history: Vec<i32>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            uuid: Uuid::new_v4(),
            link: None,
            history: Vec::new(),
        }
    }

    /// The kind tag this node was inserted with.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// A unique identity stamped on the node at insertion.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The successor handle, if this node has been wired.
    pub fn link(&self) -> Option<NodeId> {
        self.link
    }

    /// Every value this node has generated, oldest first.
    pub fn history(&self) -> &[i32] {
        &self.history
    }
}
