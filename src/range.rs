// =====================================================================
// File: range.rs
//
// Description:
//   first/last/next/prev/lookup_{le,lt,ge,gt}. Each is one or two
//   descents, per §4.5: first/last are a single FST/LST walk; the
//   lookup_* family try a direct key-directed walk and fall back to
//   NXT/PRV from the captured fork on a miss; next/prev locate the
//   node with KNX/KPR purely to capture a fork, then resume with
//   NXT/PRV.
// =====================================================================

use crate::descent::{descend, WalkMethod};
use crate::flavor::Flavor;
use crate::link::{LinkPtr, Side};

pub unsafe fn first<F: Flavor>(root: *mut Option<LinkPtr>) -> Option<LinkPtr> {
    descend::<F>(root, WalkMethod::Fst, None).reached
}

pub unsafe fn last<F: Flavor>(root: *mut Option<LinkPtr>) -> Option<LinkPtr> {
    descend::<F>(root, WalkMethod::Lst, None).reached
}

/// Resumes from a captured fork: one step opposite the direction it
/// was recorded in, then all the way in the matching direction.
unsafe fn resume<F: Flavor>(fork: LinkPtr, fork_side: Side, method: WalkMethod) -> Option<LinkPtr> {
    let slot = fork.as_ref().branch_slot(fork_side.opposite());
    descend::<F>(slot, method, None).reached
}

pub unsafe fn next<F: Flavor>(root: *mut Option<LinkPtr>, node: LinkPtr) -> Option<LinkPtr> {
    let key = unsafe { F::key_of(node) };
    let out = descend::<F>(root, WalkMethod::Knx, Some(key));
    let fork = out.fork?;
    resume::<F>(fork, out.fork_side, WalkMethod::Nxt)
}

pub unsafe fn prev<F: Flavor>(root: *mut Option<LinkPtr>, node: LinkPtr) -> Option<LinkPtr> {
    let key = unsafe { F::key_of(node) };
    let out = descend::<F>(root, WalkMethod::Kpr, Some(key));
    let fork = out.fork?;
    resume::<F>(fork, out.fork_side, WalkMethod::Prv)
}

pub unsafe fn lookup_ge<F: Flavor>(root: *mut Option<LinkPtr>, key: &F::Key) -> Option<LinkPtr> {
    let out = descend::<F>(root, WalkMethod::Kge, Some(key));
    if out.reached.is_some() {
        return out.reached;
    }
    let fork = out.fork?;
    resume::<F>(fork, out.fork_side, WalkMethod::Nxt)
}

pub unsafe fn lookup_gt<F: Flavor>(root: *mut Option<LinkPtr>, key: &F::Key) -> Option<LinkPtr> {
    let out = descend::<F>(root, WalkMethod::Kgt, Some(key));
    if out.reached.is_some() {
        return out.reached;
    }
    let fork = out.fork?;
    resume::<F>(fork, out.fork_side, WalkMethod::Nxt)
}

pub unsafe fn lookup_le<F: Flavor>(root: *mut Option<LinkPtr>, key: &F::Key) -> Option<LinkPtr> {
    let out = descend::<F>(root, WalkMethod::Kle, Some(key));
    if out.reached.is_some() {
        return out.reached;
    }
    let fork = out.fork?;
    resume::<F>(fork, out.fork_side, WalkMethod::Prv)
}

pub unsafe fn lookup_lt<F: Flavor>(root: *mut Option<LinkPtr>, key: &F::Key) -> Option<LinkPtr> {
    let out = descend::<F>(root, WalkMethod::Klt, Some(key));
    if out.reached.is_some() {
        return out.reached;
    }
    let fork = out.fork?;
    resume::<F>(fork, out.fork_side, WalkMethod::Prv)
}
