// =====================================================================
// File: tests/integration.rs
//
// Description:
//   Scenario-based integration tests mirroring the six concrete
//   scenarios: empty-tree basics, singleton promotion, the canonical
//   "2 4 6 4" duplicate-insert case, deletion of a split node, string
//   prefix-key lookups, and a bounded deterministic stress sequence in
//   place of a randomized one (see SPEC_FULL.md §8).
// =====================================================================

use cbtree::flavors::cstr::{St, StNode};
use cbtree::flavors::scalar::{U32Node, U32};
use cbtree::tree::Tree;
use cbtree::Flavor;
use std::ptr::NonNull;

unsafe fn key_of(p: cbtree::LinkPtr) -> u32 {
    unsafe { *U32::key_of(p) }
}

#[test]
fn empty_tree_basics() {
    let mut tree: Tree<U32> = Tree::new();
    assert!(tree.is_empty());
    unsafe {
        assert!(tree.first().is_none());
        assert!(tree.last().is_none());
        assert!(tree.lookup(&0).is_none());
    }
}

#[test]
fn singleton_promotion() {
    let mut node = U32Node::new(7);
    let mut tree: Tree<U32> = Tree::new();
    unsafe {
        tree.insert(NonNull::from(&mut node).cast());
        assert!(!tree.is_empty());
        let found = tree.lookup(&7).expect("singleton key must be found");
        assert_eq!(key_of(found), 7);
        assert_eq!(key_of(tree.first().unwrap()), 7);
        assert_eq!(key_of(tree.last().unwrap()), 7);
    }
}

/// Insert 2, 4, 6 in order, then delete 4 — the canonical sequence
/// that exercises self-loop promotion on insert and a split-node
/// deletion immediately afterward.
#[test]
fn canonical_two_four_six_delete_four() {
    let mut n2 = U32Node::new(2);
    let mut n4 = U32Node::new(4);
    let mut n6 = U32Node::new(6);
    let mut tree: Tree<U32> = Tree::new();
    unsafe {
        tree.insert(NonNull::from(&mut n2).cast());
        tree.insert(NonNull::from(&mut n4).cast());
        tree.insert(NonNull::from(&mut n6).cast());

        for k in [2u32, 4, 6] {
            assert!(tree.lookup(&k).is_some(), "key {k} missing after inserts");
        }

        let removed = tree.delete(NonNull::from(&mut n4).cast());
        assert!(removed.is_some());

        assert!(tree.lookup(&4).is_none());
        assert!(tree.lookup(&2).is_some());
        assert!(tree.lookup(&6).is_some());

        assert_eq!(key_of(tree.first().unwrap()), 2);
        assert_eq!(key_of(tree.last().unwrap()), 6);
    }
}

/// 1 2 3 4 10 11, delete 4, then reinsert 4 — larger split-node
/// deletion scenario that also checks the freed node is reusable.
#[test]
fn delete_split_node_then_reinsert() {
    let keys = [1u32, 2, 3, 4, 10, 11];
    let mut nodes: Vec<Box<U32Node>> = keys.iter().map(|&k| Box::new(U32Node::new(k))).collect();
    let mut tree: Tree<U32> = Tree::new();
    unsafe {
        for n in nodes.iter_mut() {
            tree.insert(NonNull::from(n.as_mut()).cast());
        }
        for &k in &keys {
            assert!(tree.lookup(&k).is_some());
        }

        let four = NonNull::from(nodes[3].as_mut()).cast();
        assert!(tree.delete(four).is_some());
        assert!(tree.lookup(&4).is_none());
        for &k in [1u32, 2, 3, 10, 11].iter() {
            assert!(tree.lookup(&k).is_some(), "key {k} lost during delete(4)");
        }

        tree.insert(four);
        assert!(tree.lookup(&4).is_some());
        for &k in &keys {
            assert!(tree.lookup(&k).is_some(), "key {k} missing after reinsert");
        }
    }
}

#[test]
fn string_prefix_key_lookup() {
    let mut a: StNode<8> = StNode::new(b"1");
    let mut b: StNode<8> = StNode::new(b"10");
    let mut c: StNode<8> = StNode::new(b"100");
    let mut tree: Tree<St<8>> = Tree::new();
    unsafe {
        tree.insert(NonNull::from(&mut a).cast());
        tree.insert(NonNull::from(&mut b).cast());
        tree.insert(NonNull::from(&mut c).cast());

        let terminated = |s: &[u8]| -> Vec<u8> {
            let mut v = s.to_vec();
            v.push(0);
            v
        };
        for s in [&b"1"[..], b"10", b"100"] {
            let t = terminated(s);
            assert!(tree.lookup(&t).is_some(), "string key {s:?} missing");
        }
        let missing = terminated(b"2");
        assert!(tree.lookup(&missing).is_none());
    }
}

/// `lookup_ge`/`lookup_gt` above the sole key, and `lookup_le`/`lookup_lt`
/// below it, all report absence on a one-element tree.
#[test]
fn singleton_range_edges() {
    let mut node = U32Node::new(50);
    let mut tree: Tree<U32> = Tree::new();
    unsafe {
        tree.insert(NonNull::from(&mut node).cast());

        assert!(tree.lookup_ge(&51).is_none());
        assert!(tree.lookup_gt(&50).is_none());
        assert!(tree.lookup_le(&49).is_none());
        assert!(tree.lookup_lt(&50).is_none());

        assert_eq!(key_of(tree.lookup_ge(&50).unwrap()), 50);
        assert_eq!(key_of(tree.lookup_le(&50).unwrap()), 50);
        assert_eq!(key_of(tree.lookup_ge(&0).unwrap()), 50);
        assert_eq!(key_of(tree.lookup_le(&100).unwrap()), 50);
    }
}

/// A fixed linear-congruential sequence stands in for a randomized
/// insert/delete/lookup stress run, so the test has no nondeterministic
/// dependency (see SPEC_FULL.md §8 on the deterministic substitute for
/// a `rand`-backed fuzz scenario).
#[test]
fn deterministic_stress_sequence() {
    fn lcg(seed: &mut u64) -> u32 {
        *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (*seed >> 33) as u32
    }

    let mut seed = 0xC0FFEE_u64;
    let mut keys: Vec<u32> = Vec::new();
    while keys.len() < 200 {
        let k = lcg(&mut seed) % 1000;
        if !keys.contains(&k) {
            keys.push(k);
        }
    }

    let mut nodes: Vec<Box<U32Node>> = keys.iter().map(|&k| Box::new(U32Node::new(k))).collect();
    let mut tree: Tree<U32> = Tree::new();
    unsafe {
        for n in nodes.iter_mut() {
            tree.insert(NonNull::from(n.as_mut()).cast());
        }
        for &k in &keys {
            assert!(tree.lookup(&k).is_some());
        }

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        let mut walked = Vec::new();
        let mut cur = tree.first();
        while let Some(p) = cur {
            walked.push(key_of(p));
            cur = tree.next(p);
        }
        assert_eq!(walked, sorted);

        // Delete every other key, then confirm the rest are intact and
        // still iterate in order.
        let mut remaining = Vec::new();
        for (i, n) in nodes.iter_mut().enumerate() {
            let ptr = NonNull::from(n.as_mut()).cast();
            if i % 2 == 0 {
                assert!(tree.delete(ptr).is_some());
            } else {
                remaining.push(keys[i]);
            }
        }
        remaining.sort_unstable();

        let mut walked = Vec::new();
        let mut cur = tree.first();
        while let Some(p) = cur {
            walked.push(key_of(p));
            cur = tree.next(p);
        }
        assert_eq!(walked, remaining);
    }
}
