//! Integration test for the three_ring example
//!
//! This test ensures that the wiring and traversal in `demos/three_ring.rs`
//! behave as documented, with a seeded source so the run is reproducible.

use ringlet::prelude::*;

fn wired_three_ring(kinds: [NodeKind; 3]) -> (Ring, NodeId, NodeId, NodeId) {
    let mut ring = Ring::new();
    let n1 = ring.insert(kinds[0]);
    let n2 = ring.insert(kinds[1]);
    let n3 = ring.insert(kinds[2]);
    ring.wire_cycle(&[n1, n2, n3]).unwrap();
    (ring, n1, n2, n3)
}

#[test]
fn test_eight_hop_traversal_visits_nodes_in_cycle_order() {
    let (mut ring, n1, n2, n3) =
        wired_three_ring([NodeKind::Base, NodeKind::VariantB, NodeKind::VariantC]);
    let mut source = SeededSource::new(2024);
    let mut trace = MemoryTrace::new();

    let first = ring.act_traced(n1, 8, &mut source, &mut trace).unwrap();

    // 9 invocations total: one for the start plus one per hop
    assert_eq!(trace.records().len(), 9);

    // hop sequence n1, n2, n3, n1, n2, n3, n1, n2, n3 - the final value lands on n2
    let visited: Vec<NodeId> = trace.records().iter().map(|r| r.node).collect();
    assert_eq!(visited, vec![n1, n2, n3, n1, n2, n3, n1, n2, n3]);
    assert_eq!(trace.records().last().unwrap().node, n2);

    // hop indices count up from zero
    let hops: Vec<usize> = trace.records().iter().map(|r| r.hop).collect();
    assert_eq!(hops, (0..9).collect::<Vec<usize>>());

    // the returned value is what the starting node appended first
    assert_eq!(ring.history(n1).unwrap()[0], first);
}

#[test]
fn test_histories_match_the_trace() {
    let (mut ring, n1, n2, n3) =
        wired_three_ring([NodeKind::Base, NodeKind::VariantB, NodeKind::VariantC]);
    let mut source = SeededSource::new(99);
    let mut trace = MemoryTrace::new();

    ring.act_traced(n1, 8, &mut source, &mut trace).unwrap();

    for id in [n1, n2, n3] {
        let from_trace: Vec<i32> = trace
            .records()
            .iter()
            .filter(|r| r.node == id)
            .map(|r| r.value)
            .collect();
        assert_eq!(ring.history(id).unwrap(), from_trace.as_slice());
    }
}

#[test]
fn test_every_value_is_within_range() {
    let (mut ring, n1, n2, n3) =
        wired_three_ring([NodeKind::Base, NodeKind::VariantB, NodeKind::VariantC]);
    let mut source = SeededSource::new(7);

    ring.act(n1, 500, &mut source).unwrap();

    for id in [n1, n2, n3] {
        assert!(
            ring.history(id)
                .unwrap()
                .iter()
                .all(|v| (0..=MAX_VALUE).contains(v))
        );
    }
}

#[test]
fn test_zero_and_negative_hops_touch_the_caller_only() {
    for hops in [0, -1, -42] {
        let (mut ring, n1, n2, n3) =
            wired_three_ring([NodeKind::Base, NodeKind::VariantB, NodeKind::VariantC]);
        let mut source = SeededSource::new(1);

        ring.act(n1, hops, &mut source).unwrap();

        assert_eq!(ring.history(n1).unwrap().len(), 1);
        assert!(ring.history(n2).unwrap().is_empty());
        assert!(ring.history(n3).unwrap().is_empty());
    }
}

#[test]
fn test_kinds_are_interchangeable() {
    // Same seed, same wiring, kinds permuted: the traversal must visit the
    // same slots and draw the same values either way.
    let (mut plain, p1, _, _) =
        wired_three_ring([NodeKind::Base, NodeKind::Base, NodeKind::Base]);
    let (mut mixed, m1, _, _) =
        wired_three_ring([NodeKind::VariantC, NodeKind::Base, NodeKind::VariantB]);

    let mut plain_trace = MemoryTrace::new();
    let mut mixed_trace = MemoryTrace::new();
    plain
        .act_traced(p1, 8, &mut SeededSource::new(5), &mut plain_trace)
        .unwrap();
    mixed
        .act_traced(m1, 8, &mut SeededSource::new(5), &mut mixed_trace)
        .unwrap();

    let plain_path: Vec<(usize, NodeId, i32)> = plain_trace
        .records()
        .iter()
        .map(|r| (r.hop, r.node, r.value))
        .collect();
    let mixed_path: Vec<(usize, NodeId, i32)> = mixed_trace
        .records()
        .iter()
        .map(|r| (r.hop, r.node, r.value))
        .collect();
    assert_eq!(plain_path, mixed_path);
}

#[test]
fn test_trace_serializes_to_json() {
    let (mut ring, n1, _, _) =
        wired_three_ring([NodeKind::Base, NodeKind::VariantB, NodeKind::VariantC]);
    let mut source = SeededSource::new(17);
    let mut trace = MemoryTrace::new();

    ring.act_traced(n1, 2, &mut source, &mut trace).unwrap();

    let json = trace.to_json().unwrap();
    let parsed: Vec<HopRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed.as_slice(), trace.records());
}
