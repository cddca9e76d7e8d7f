use crate::core::error::RingError;
use crate::core::node::{Node, NodeId, NodeKind};
use crate::core::source::ValueSource;
use crate::core::trace::{HopRecord, TraceSink};

/// An arena of nodes wired into successor chains.
///
/// The ring owns every node it hands out a [`NodeId`] for, and links between
/// nodes are plain handles into the arena. That is what lets the structure be
/// cyclic without any shared-ownership pointers: nothing inside the arena owns
/// anything else, and the whole cycle lives exactly as long as the ring.
#[derive(Default)]
pub struct Ring {
    nodes: Vec<Node>,
}

impl Ring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node of the given kind and returns its handle.
    pub fn insert(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /// Points `id` at `target`, replacing any existing link unconditionally.
    pub fn set_successor(&mut self, id: NodeId, target: NodeId) -> Result<(), RingError> {
        self.ensure_known(id)?;
        self.ensure_known(target)?;

        let node = &mut self.nodes[id.0];
        if let Some(previous) = node.link {
            log::warn!(
                "Warning: {} already had successor {}, overwriting with {}.",
                id,
                previous,
                target
            );
        }
        node.link = Some(target);
        Ok(())
    }

    /// Wires the given handles into a directed cycle: each points at the next,
    /// the last points back at the first. A single handle links to itself.
    pub fn wire_cycle(&mut self, ids: &[NodeId]) -> Result<(), RingError> {
        for (i, &id) in ids.iter().enumerate() {
            self.set_successor(id, ids[(i + 1) % ids.len()])?;
        }
        Ok(())
    }

    /// Runs one bounded traversal starting at `start`.
    ///
    /// The starting node draws a value, appends it to its own history, and (if
    /// it has a successor and `remaining_hops > 0`) forwards the traversal with
    /// the counter decremented, discarding the nested result. Returns the value
    /// the starting node drew.
    ///
    /// The counter strictly decreases per hop, so despite the cyclic wiring the
    /// chain always stops after at most `remaining_hops + 1` invocations.
    /// Negative counters are accepted and behave like zero: one draw, no hop.
    pub fn act(
        &mut self,
        start: NodeId,
        remaining_hops: i32,
        source: &mut dyn ValueSource,
    ) -> Result<i32, RingError> {
        self.ensure_known(start)?;
        log::debug!("traversal from {} with {} remaining hops", start, remaining_hops);
        Ok(self.hop(start, remaining_hops, source, &mut None, 0))
    }

    /// Same traversal as [`act`](Ring::act), but records one [`HopRecord`] per
    /// invocation into the given sink.
    pub fn act_traced(
        &mut self,
        start: NodeId,
        remaining_hops: i32,
        source: &mut dyn ValueSource,
        sink: &mut dyn TraceSink,
    ) -> Result<i32, RingError> {
        self.ensure_known(start)?;
        log::debug!("traced traversal from {} with {} remaining hops", start, remaining_hops);
        Ok(self.hop(start, remaining_hops, source, &mut Some(sink), 0))
    }

    fn hop(
        &mut self,
        id: NodeId,
        remaining_hops: i32,
        source: &mut dyn ValueSource,
        sink: &mut Option<&mut dyn TraceSink>,
        depth: usize,
    ) -> i32 {
        let value = source.next_value();
        let node = &mut self.nodes[id.0];
        node.history.push(value);
        let kind = node.kind;
        let link = node.link;

        if let Some(sink) = sink.as_deref_mut() {
            sink.record(HopRecord {
                hop: depth,
                node: id,
                kind,
                value,
            });
        }

        if let Some(next) = link {
            if remaining_hops > 0 {
                // the nested value is discarded, same as at the outer call site
                let _ = self.hop(next, remaining_hops - 1, source, sink, depth + 1);
            }
        }

        value
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, RingError> {
        self.ensure_known(id)?;
        Ok(&self.nodes[id.0])
    }

    /// The values `id` has generated so far, oldest first.
    pub fn history(&self, id: NodeId) -> Result<&[i32], RingError> {
        Ok(self.node(id)?.history())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn ensure_known(&self, id: NodeId) -> Result<(), RingError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(RingError::UnknownNode(id))
        }
    }
}
