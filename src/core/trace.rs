use crate::core::node::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// A single entry in a traversal trace: which node generated which value, and
/// at which position in the hop sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopRecord {
    /// Zero-based position in the traversal (the starting node is hop 0).
    pub hop: usize,
    pub node: NodeId,
    pub kind: NodeKind,
    pub value: i32,
}

/// Trait for recording traversal hops.
pub trait TraceSink {
    fn record(&mut self, entry: HopRecord);
}

/// Simple in-memory collector for hop records.
#[derive(Debug, Default)]
pub struct MemoryTrace {
    records: Vec<HopRecord>,
}

impl MemoryTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded hops, in traversal order.
    pub fn records(&self) -> &[HopRecord] {
        &self.records
    }

    /// Serializes the recorded hops as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}

impl TraceSink for MemoryTrace {
    fn record(&mut self, entry: HopRecord) {
        self.records.push(entry);
    }
}
