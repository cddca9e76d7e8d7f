//! A complete example showing the three-node ring.
//!
//! This example demonstrates:
//! - Inserting one node of each kind into a ring
//! - Wiring them into a directed cycle of length three
//! - Running one bounded traversal with eight remaining hops
//! - Inspecting the histories and the per-hop trace afterwards

use ringlet::prelude::*;

fn main() {
    // ========================================================================
    // Step 1: Build and wire the ring
    // ========================================================================

    let mut ring = Ring::new();
    let n1 = ring.insert(NodeKind::Base);
    let n2 = ring.insert(NodeKind::VariantB);
    let n3 = ring.insert(NodeKind::VariantC);

    // n1 -> n2 -> n3 -> n1
    ring.wire_cycle(&[n1, n2, n3])
        .expect("freshly inserted handles are always valid");

    // ========================================================================
    // Step 2: Run one traversal
    // ========================================================================

    let mut source = ThreadRngSource;
    let mut trace = MemoryTrace::new();

    let first = ring
        .act_traced(n1, 8, &mut source, &mut trace)
        .expect("n1 belongs to this ring");

    println!("[ThreeRing] First node drew {first}");

    // ========================================================================
    // Step 3: Inspect what happened
    // ========================================================================

    for (label, id) in [("n1", n1), ("n2", n2), ("n3", n3)] {
        let node = ring.node(id).expect("handle belongs to this ring");
        println!(
            "[{label}] kind={:?} uuid={} history={:?}",
            node.kind(),
            node.uuid(),
            node.history()
        );
    }

    for record in trace.records() {
        println!(
            "[Trace] hop {} -> {} ({:?}) drew {}",
            record.hop, record.node, record.kind, record.value
        );
    }
}
