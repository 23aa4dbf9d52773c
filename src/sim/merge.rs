//! 2048-style merge resolution for the head and its trailing chain
//!
//! Given the current chain, an incoming pickup value and the head value, this
//! decides where the new value lands and cascades every possible merge. The
//! result always satisfies:
//! - segments strictly descending by value (so no two neighbours are equal)
//! - head value greater than every segment value
//! - the sum of all values grows by exactly the incoming value

use std::cmp::Ordering;

use glam::Vec2;

use super::state::Segment;
use super::value::Value;

/// Result of feeding one pickup value into the snake
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub segments: Vec<Segment>,
    pub head_value: Value,
    /// Number of doublings performed (head and chain)
    pub merges: u32,
}

/// Resolve one incoming value against the chain and head.
///
/// Pure: the input chain is only read. New segments spawn at `head_pos` and
/// catch up through the motion model on later ticks.
pub fn resolve(segments: &[Segment], incoming: Value, head_value: Value, head_pos: Vec2) -> MergeOutcome {
    let mut chain = Vec::with_capacity(segments.len() + 1);
    let mut head = head_value;
    let mut merges = 0;

    match incoming.cmp(&head_value) {
        Ordering::Equal => {
            head = head.doubled();
            merges += 1;
        }
        Ordering::Greater => {
            // Old head value is demoted into the body
            chain.push(Segment::new(head_pos, head_value));
            head = incoming;
        }
        Ordering::Less => chain.push(Segment::new(head_pos, incoming)),
    }
    chain.extend_from_slice(segments);

    loop {
        merges += collapse_adjacent(&mut chain);
        sort_descending(&mut chain);

        // Promotion: the largest value always rides in the head
        if let Some(front) = chain.first_mut() {
            if front.value > head {
                let promoted = front.value;
                front.set_value(head);
                head = promoted;
                sort_descending(&mut chain);
            }
        }

        // Sorting or a swap can line up equal values that were not neighbours
        // during the scan; settle those before touching the head again.
        if has_adjacent_pair(&chain) {
            continue;
        }

        match chain.first() {
            Some(front) if front.value == head => {
                head = head.doubled();
                chain.remove(0);
                merges += 1;
            }
            _ => break,
        }
    }

    debug_assert!(chain.windows(2).all(|w| w[0].value > w[1].value));
    debug_assert!(chain.first().is_none_or(|s| s.value < head));

    MergeOutcome {
        segments: chain,
        head_value: head,
        merges,
    }
}

/// Merge equal neighbours front to back, restarting the scan after each merge.
///
/// The merged segment keeps the position of the one closer to the head.
/// Terminates because every merge shortens the chain.
fn collapse_adjacent(chain: &mut Vec<Segment>) -> u32 {
    let mut merges = 0;
    while let Some(i) = chain.windows(2).position(|w| w[0].value == w[1].value) {
        let merged = chain[i].value.doubled();
        chain[i].set_value(merged);
        chain.remove(i + 1);
        merges += 1;
    }
    merges
}

fn has_adjacent_pair(chain: &[Segment]) -> bool {
    chain.windows(2).any(|w| w[0].value == w[1].value)
}

/// Stable, so equal values keep their relative order
fn sort_descending(chain: &mut [Segment]) {
    chain.sort_by(|a, b| b.value.cmp(&a.value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(n: u64) -> Value {
        Value::new(n).unwrap()
    }

    fn chain(values: &[u64]) -> Vec<Segment> {
        values
            .iter()
            .enumerate()
            .map(|(i, &n)| Segment::new(Vec2::new(100.0 - i as f32 * 35.0, 100.0), v(n)))
            .collect()
    }

    fn values(segments: &[Segment]) -> Vec<u64> {
        segments.iter().map(|s| s.value.get()).collect()
    }

    const HEAD_POS: Vec2 = Vec2::new(140.0, 100.0);

    #[test]
    fn test_equal_to_head_merges_into_head() {
        let out = resolve(&[], v(2), v(2), HEAD_POS);
        assert_eq!(out.head_value, v(4));
        assert!(out.segments.is_empty());
        assert_eq!(out.merges, 1);
    }

    #[test]
    fn test_smaller_value_grows_chain() {
        let out = resolve(&chain(&[4]), v(2), v(8), HEAD_POS);
        assert_eq!(out.head_value, v(8));
        assert_eq!(values(&out.segments), vec![4, 2]);
        assert_eq!(out.merges, 0);
    }

    #[test]
    fn test_new_segment_spawns_at_head() {
        let out = resolve(&[], v(2), v(4), HEAD_POS);
        assert_eq!(out.segments.len(), 1);
        assert_eq!(out.segments[0].pos, HEAD_POS);
        assert_eq!(out.segments[0].radius, crate::sim::value::segment_radius(v(2)));
    }

    #[test]
    fn test_promotion_swaps_with_head() {
        // [1,8] sorts to [8,1]; 8 outranks the head so they trade places
        let out = resolve(&chain(&[8]), v(1), v(2), HEAD_POS);
        assert_eq!(out.head_value, v(8));
        assert_eq!(values(&out.segments), vec![2, 1]);
        assert_eq!(out.merges, 0);
    }

    #[test]
    fn test_larger_value_demotes_head() {
        let out = resolve(&chain(&[2]), v(8), v(4), HEAD_POS);
        assert_eq!(out.head_value, v(8));
        assert_eq!(values(&out.segments), vec![4, 2]);
        assert_eq!(out.segments[0].pos, HEAD_POS);
    }

    #[test]
    fn test_cascade_collapses_into_head() {
        let out = resolve(&chain(&[4, 4, 4, 4]), v(8), v(8), HEAD_POS);
        assert_eq!(out.head_value, v(32));
        assert!(out.segments.is_empty());
    }

    #[test]
    fn test_merged_segment_keeps_front_position() {
        let segs = chain(&[4, 4]);
        let out = resolve(&segs, v(2), v(16), HEAD_POS);
        // [2,4,4] -> [2,8] -> sorted [8,2]
        assert_eq!(values(&out.segments), vec![8, 2]);
        assert_eq!(out.segments[0].pos, segs[0].pos);
        assert_eq!(out.segments[1].pos, HEAD_POS);
        assert_eq!(out.head_value, v(16));
    }

    #[test]
    fn test_sorted_duplicates_cascade_into_head() {
        // [2,4,2] has no equal neighbours until sorted to [4,2,2],
        // then 2+2 -> 4, 4+4 -> 8, and 8 joins the head
        let out = resolve(&chain(&[4, 2]), v(2), v(8), HEAD_POS);
        assert_eq!(out.head_value, v(16));
        assert!(out.segments.is_empty());
        assert_eq!(out.merges, 3);
    }

    #[test]
    fn test_promotion_after_late_cascade() {
        let out = resolve(&chain(&[4, 2]), v(2), v(4), HEAD_POS);
        assert_eq!(out.head_value, v(8));
        assert_eq!(values(&out.segments), vec![4]);
    }

    #[test]
    fn test_input_chain_untouched() {
        let segs = chain(&[4, 4]);
        let before = segs.clone();
        let _ = resolve(&segs, v(2), v(8), HEAD_POS);
        assert_eq!(segs, before);
    }

    #[test]
    fn test_equal_to_head_leaves_chain_behind() {
        // Head 2, chain [2], incoming 2.
        // incoming == head, so the head doubles; the leftover [2] stays behind it.
        let out = resolve(&chain(&[2]), v(2), v(2), HEAD_POS);
        assert_eq!(out.head_value, v(4));
        assert_eq!(values(&out.segments), vec![2]);
    }

    fn check_invariants(head: Value, segs: &[Segment]) {
        assert!(segs.windows(2).all(|w| w[0].value > w[1].value), "not strictly descending: {:?}", values(segs));
        if let Some(front) = segs.first() {
            assert!(head >= front.value);
        }
    }

    fn total(head: Value, segs: &[Segment]) -> u128 {
        head.get() as u128 + segs.iter().map(|s| s.value.get() as u128).sum::<u128>()
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_over_sequences(exps in proptest::collection::vec(1u32..5, 1..200)) {
            let mut head = Value::TWO;
            let mut segs: Vec<Segment> = Vec::new();
            let mut consumed: u128 = 0;
            for e in exps {
                let incoming = v(1 << e);
                let before_len = segs.len();
                let out = resolve(&segs, incoming, head, HEAD_POS);
                prop_assert!(out.segments.len() <= before_len + 1);
                head = out.head_value;
                segs = out.segments;
                consumed += incoming.get() as u128;
                check_invariants(head, &segs);
                prop_assert_eq!(total(head, &segs), 2 + consumed);
            }
        }

        #[test]
        fn prop_resolution_is_deterministic(exps in proptest::collection::vec(1u32..6, 1..100)) {
            let run = || {
                let mut head = Value::TWO;
                let mut segs: Vec<Segment> = Vec::new();
                for &e in &exps {
                    let out = resolve(&segs, v(1 << e), head, HEAD_POS);
                    head = out.head_value;
                    segs = out.segments;
                }
                (head, segs)
            };
            prop_assert_eq!(run(), run());
        }

        #[test]
        fn prop_arbitrary_start_chain_settles(
            start in proptest::collection::vec(0u32..8, 0..12),
            head_exp in 0u32..8,
            incoming_exp in 0u32..8,
        ) {
            let raw: Vec<u64> = start.iter().map(|&e| 1u64 << e).collect();
            let segs = chain(&raw);
            let head = v(1 << head_exp);
            let incoming = v(1 << incoming_exp);
            let out = resolve(&segs, incoming, head, HEAD_POS);
            check_invariants(out.head_value, &out.segments);
            prop_assert!(out.segments.len() <= segs.len() + 1);
            prop_assert_eq!(
                total(out.head_value, &out.segments),
                total(head, &segs) + incoming.get() as u128
            );
        }
    }
}
