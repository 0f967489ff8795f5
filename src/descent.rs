// =====================================================================
// File: descent.rs
//
// Description:
//   The single parameterized descent engine. One traversal serves
//   lookup, insertion, deletion, and every range variant; callers
//   select behavior via `WalkMethod` and read back whichever of the
//   returned side-outputs they need (Design Notes option (c): one
//   record with every field, unused fields simply ignored).
//
//   The loop below transcribes the seven numbered steps of the
//   descent contract directly: nodeless-leaf detection (1), role
//   reversal via divergence monotonicity (2), above-node mismatch
//   (3), branch selection (4), self-loop promotion detection (5),
//   fork bookkeeping for range queries (6), and the window shift (7).
//
// Notes:
//   * Side-output bookkeeping here walks a small scratch path buffer
//     rather than chasing parent pointers (none exist) — this is an
//     internal bookkeeping detail, not a change to the zero-allocation
//     node storage contract: no `Link` is ever allocated or freed by
//     this function.
// =====================================================================

use crate::flavor::Flavor;
use crate::link::{Link, LinkPtr, Side};
use std::cmp::Ordering;

/// Which traversal to perform. See `spec`'s descent-engine table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WalkMethod {
    /// Leftmost (always left).
    Fst,
    /// Rightmost (always right).
    Lst,
    /// Locate key exactly.
    Keq,
    /// Smallest key >= the given key.
    Kge,
    /// Smallest key > the given key.
    Kgt,
    /// Largest key <= the given key.
    Kle,
    /// Largest key < the given key.
    Klt,
    /// Locate key, remembering the last leftward fork (feeds `Nxt`).
    Knx,
    /// Locate key, remembering the last rightward fork (feeds `Prv`).
    Kpr,
    /// Continue from a fork: one step right, then leftmost.
    Nxt,
    /// Continue from a fork: one step left, then rightmost.
    Prv,
}

fn is_key_directed(method: WalkMethod) -> bool {
    matches!(
        method,
        WalkMethod::Keq
            | WalkMethod::Kge
            | WalkMethod::Kgt
            | WalkMethod::Kle
            | WalkMethod::Klt
            | WalkMethod::Knx
            | WalkMethod::Kpr
    )
}

/// Every structural side-output the descent engine can produce.
/// Fields unused by a given caller are simply ignored.
pub struct DescentOutcome {
    /// The node reached by the walk, or `None` on a miss / empty tree.
    pub reached: Option<LinkPtr>,
    /// The side a new leaf for the searched key would occupy.
    pub nside: Side,
    /// The pointer slot where a new leaf for the searched key would
    /// be written.
    pub root_slot: *mut Option<LinkPtr>,
    /// The node whose branch slot references `reached` in its leaf
    /// role, and which side.
    pub lparent: Option<LinkPtr>,
    pub lpside: Side,
    /// The node whose branch slot references `reached` in its node
    /// role, and which side.
    pub nparent: Option<LinkPtr>,
    pub npside: Side,
    /// The node above `lparent`, and which side.
    pub gparent: Option<LinkPtr>,
    pub gpside: Side,
    /// The last fork where the descent went opposite to the eventual
    /// next/prev direction, for range fallback.
    pub fork: Option<LinkPtr>,
    pub fork_side: Side,
    /// The final three-way compare against the search key, when
    /// applicable.
    pub cmp: Option<Ordering>,
}

impl DescentOutcome {
    fn empty(root_slot: *mut Option<LinkPtr>) -> Self {
        DescentOutcome {
            reached: None,
            nside: Side::Left,
            root_slot,
            lparent: None,
            lpside: Side::Left,
            nparent: None,
            npside: Side::Left,
            gparent: None,
            gpside: Side::Left,
            fork: None,
            fork_side: Side::Left,
            cmp: None,
        }
    }
}

fn record_fork(
    method: WalkMethod,
    fork: &mut Option<LinkPtr>,
    fork_side: &mut Side,
    p: LinkPtr,
    chosen_side: Side,
) {
    match method {
        WalkMethod::Kge | WalkMethod::Kgt | WalkMethod::Knx => {
            if chosen_side == Side::Left {
                *fork = Some(p);
                *fork_side = Side::Left;
            }
        }
        WalkMethod::Kle | WalkMethod::Klt | WalkMethod::Kpr => {
            if chosen_side == Side::Right {
                *fork = Some(p);
                *fork_side = Side::Right;
            }
        }
        _ => {}
    }
}

fn choose_side<F: Flavor>(method: WalkMethod, dl: Option<F::Div>, dr: Option<F::Div>) -> Side {
    match method {
        WalkMethod::Fst | WalkMethod::Nxt => Side::Left,
        WalkMethod::Lst | WalkMethod::Prv => Side::Right,
        _ => {
            let dl = dl.expect("key-directed walk");
            let dr = dr.expect("key-directed walk");
            // the side whose div(key, side) is later-diverging, i.e. not earlier
            if F::earlier(dr, dl) { Side::Left } else { Side::Right }
        }
    }
}

fn classify<F: Flavor>(
    method: WalkMethod,
    key: Option<&F::Key>,
    p: Option<LinkPtr>,
) -> (Option<LinkPtr>, Option<Ordering>) {
    let p = match p {
        Some(p) => p,
        None => return (None, None),
    };
    match method {
        WalkMethod::Fst | WalkMethod::Lst | WalkMethod::Nxt | WalkMethod::Prv => (Some(p), None),
        _ => {
            let c = unsafe { F::cmp_key(key.expect("key-directed walk"), p) };
            let hit = match method {
                WalkMethod::Keq | WalkMethod::Knx | WalkMethod::Kpr => c == Ordering::Equal,
                WalkMethod::Kge => c != Ordering::Greater,
                WalkMethod::Kgt => c == Ordering::Less,
                WalkMethod::Kle => c != Ordering::Less,
                WalkMethod::Klt => c == Ordering::Greater,
                WalkMethod::Fst | WalkMethod::Lst | WalkMethod::Nxt | WalkMethod::Prv => {
                    unreachable!()
                }
            };
            (if hit { Some(p) } else { None }, Some(c))
        }
    }
}

/// Runs the shared descent. `root_slot` must point at a live
/// `Option<LinkPtr>` cell (the tree's root field, or a branch slot
/// obtained from a prior descent's fork for `Nxt`/`Prv`).
///
/// # Safety
/// Every `Link` reachable from `*root_slot` must be a live node of
/// flavor `F`, and `key` must be `Some` for key-directed methods.
pub unsafe fn descend<F: Flavor>(
    root_slot: *mut Option<LinkPtr>,
    method: WalkMethod,
    key: Option<&F::Key>,
) -> DescentOutcome {
    if (*root_slot).is_none() {
        return DescentOutcome::empty(root_slot);
    }

    let mut nodes: Vec<LinkPtr> = Vec::new();
    let mut chosen: Vec<Side> = Vec::new();
    let mut fork: Option<LinkPtr> = None;
    let mut fork_side = Side::Left;
    let mut slot = root_slot;
    let mut pdiv = F::INITIAL_PDIV;

    loop {
        let p = (*slot).expect("descent never advances into an empty slot");
        let link: &Link = p.as_ref();
        let l = link.branch(Side::Left);
        let r = link.branch(Side::Right);

        // Step 1: nodeless leaf.
        if l == r {
            return finish::<F>(nodes, chosen, Some(p), slot, fork, fork_side, method, key);
        }
        let (lp, rp) = (l.unwrap(), r.unwrap());
        let cur = F::div_nodes(lp, rp);

        // Step 2: role reversal.
        if F::earlier(cur, pdiv) {
            return finish::<F>(nodes, chosen, Some(p), slot, fork, fork_side, method, key);
        }

        let (dl, dr) = if is_key_directed(method) {
            let k = key.expect("key-directed walk requires a key");
            (Some(F::div_key(k, lp)), Some(F::div_key(k, rp)))
        } else {
            (None, None)
        };

        // Step 3: mismatch above this node.
        if let (Some(dl), Some(dr)) = (dl, dr) {
            if F::earlier(dl, cur) && F::earlier(dr, cur) {
                return finish::<F>(nodes, chosen, Some(p), slot, fork, fork_side, method, key);
            }
        }

        // Step 4: choose a branch.
        let chosen_side = choose_side::<F>(method, dl, dr);
        let chosen_ptr = if chosen_side == Side::Left { lp } else { rp };

        // Step 6: fork bookkeeping.
        record_fork(method, &mut fork, &mut fork_side, p, chosen_side);

        // Step 5: self-loop promotion.
        if chosen_ptr == p {
            let lparent = Some(p);
            let lpside = chosen_side;
            let nparent = nodes.last().copied();
            let npside = chosen.last().copied().unwrap_or(Side::Left);
            let mut out =
                finish_reached::<F>(Some(p), slot, fork, fork_side, method, key);
            out.lparent = lparent;
            out.lpside = lpside;
            out.nparent = nparent;
            out.npside = npside;
            out.gparent = nparent;
            out.gpside = npside;
            return out;
        }

        // Step 7: shift and continue.
        nodes.push(p);
        chosen.push(chosen_side);
        pdiv = cur;
        slot = link.branch_slot(chosen_side);
    }
}

/// Shared tail for step 1/2/3 terminations: `reached` is the node
/// whose incoming slot is the current `slot` variable, so lparent and
/// nparent coincide (the sliding window has not moved since it last
/// pointed at this node).
fn finish<F: Flavor>(
    nodes: Vec<LinkPtr>,
    chosen: Vec<Side>,
    reached: Option<LinkPtr>,
    slot: *mut Option<LinkPtr>,
    fork: Option<LinkPtr>,
    fork_side: Side,
    method: WalkMethod,
    key: Option<&F::Key>,
) -> DescentOutcome {
    let n = nodes.len();
    let lparent = nodes.last().copied();
    let lpside = chosen.last().copied().unwrap_or(Side::Left);
    // first occurrence of `reached` among previously visited node-role entries
    let (nparent, npside) = match reached {
        Some(p) => match nodes.iter().position(|&x| x == p) {
            Some(0) => (None, Side::Left),
            Some(j) => (Some(nodes[j - 1]), chosen[j - 1]),
            None => (lparent, lpside),
        },
        None => (None, Side::Left),
    };
    let (gparent, gpside) = if n >= 2 {
        (Some(nodes[n - 2]), chosen[n - 2])
    } else {
        (None, Side::Left)
    };

    let mut out = finish_reached::<F>(reached, slot, fork, fork_side, method, key);
    out.lparent = lparent;
    out.lpside = lpside;
    out.nparent = nparent;
    out.npside = npside;
    out.gparent = gparent;
    out.gpside = gpside;
    out
}

fn finish_reached<F: Flavor>(
    reached: Option<LinkPtr>,
    slot: *mut Option<LinkPtr>,
    fork: Option<LinkPtr>,
    fork_side: Side,
    method: WalkMethod,
    key: Option<&F::Key>,
) -> DescentOutcome {
    let (final_reached, cmp) = classify::<F>(method, key, reached);
    let nside = match cmp {
        Some(Ordering::Greater) => Side::Right,
        _ => Side::Left,
    };
    DescentOutcome {
        reached: final_reached,
        nside,
        root_slot: slot,
        lparent: None,
        lpside: Side::Left,
        nparent: None,
        npside: Side::Left,
        gparent: None,
        gpside: Side::Left,
        fork,
        fork_side,
        cmp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavors::scalar::{U32Node, U32};
    use crate::ops;
    use std::ptr::NonNull;

    unsafe fn key_of(p: LinkPtr) -> u32 {
        unsafe { *U32::key_of(p) }
    }

    #[test]
    fn fst_and_lst_on_three_node_tree() {
        let mut n2 = U32Node::new(2);
        let mut n4 = U32Node::new(4);
        let mut n6 = U32Node::new(6);
        let mut root: Option<LinkPtr> = None;
        unsafe {
            ops::insert::<U32>(&mut root, NonNull::from(&mut n2).cast());
            ops::insert::<U32>(&mut root, NonNull::from(&mut n4).cast());
            ops::insert::<U32>(&mut root, NonNull::from(&mut n6).cast());

            let fst = descend::<U32>(&mut root, WalkMethod::Fst, None);
            assert_eq!(key_of(fst.reached.unwrap()), 2);

            let lst = descend::<U32>(&mut root, WalkMethod::Lst, None);
            assert_eq!(key_of(lst.reached.unwrap()), 6);
        }
    }

    #[test]
    fn keq_miss_reports_insertion_side() {
        let mut n2 = U32Node::new(2);
        let mut root: Option<LinkPtr> = None;
        unsafe {
            ops::insert::<U32>(&mut root, NonNull::from(&mut n2).cast());
            let out = descend::<U32>(&mut root, WalkMethod::Keq, Some(&4));
            assert!(out.reached.is_none());
            assert_eq!(out.nside, Side::Right);
        }
    }
}
