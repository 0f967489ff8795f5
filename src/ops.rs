// =====================================================================
// File: ops.rs
//
// Description:
//   Structural mutators. Both `insert` and `delete` are a single
//   descent call followed by a small, fixed-shape pointer rewrite —
//   no recursion, no rebalancing.
// =====================================================================

use crate::descent::{descend, DescentOutcome, WalkMethod};
use crate::flavor::Flavor;
use crate::link::{LinkPtr, Side};
use std::cmp::Ordering;

/// Places `node` into the tree rooted at `*root`.
///
/// Returns `node` on success, or the pre-existing node that already
/// carries that key (in which case nothing is mutated).
///
/// # Safety
/// `node` must be a live, detached node of flavor `F` (not already
/// linked into any tree) whose key never changes while linked.
/// `*root` must only ever reference live nodes of flavor `F`.
pub unsafe fn insert<F: Flavor>(root: *mut Option<LinkPtr>, node: LinkPtr) -> LinkPtr {
    if (*root).is_none() {
        let link = node.as_ptr();
        (*link).make_nodeless_leaf(node);
        *root = Some(node);
        return node;
    }

    let key_ref: &F::Key = unsafe { F::key_of(node) };
    let out = descend::<F>(root, WalkMethod::Keq, Some(key_ref));
    if let Some(existing) = out.reached {
        if existing == node {
            return node;
        }
        return existing;
    }

    let parent = (*out.root_slot).expect("insertion slot always has a prior occupant");
    let link = node.as_ptr();
    if out.nside == Side::Right {
        (*link).set_branch(Side::Right, Some(node));
        (*link).set_branch(Side::Left, Some(parent));
    } else {
        (*link).set_branch(Side::Left, Some(node));
        (*link).set_branch(Side::Right, Some(parent));
    }
    *out.root_slot = Some(node);
    node
}

/// Removes `node` from the tree rooted at `*root`, if present.
///
/// Returns the removed node, or `None` if it was not found (including
/// if it was already detached: `b[0] == nil`).
///
/// # Safety
/// `*root` must only ever reference live nodes of flavor `F`.
pub unsafe fn delete<F: Flavor>(root: *mut Option<LinkPtr>, node: LinkPtr) -> Option<LinkPtr> {
    if node.as_ref().is_detached() {
        return None;
    }

    let key_ref: &F::Key = unsafe { F::key_of(node) };
    let out = descend::<F>(root, WalkMethod::Keq, Some(key_ref));
    let ret = out.reached?;
    if ret != node {
        return None;
    }
    debug_assert_eq!(
        unsafe { F::cmp_key(key_ref, ret) },
        Ordering::Equal,
        "key-equality descent reached a node whose key does not compare equal"
    );

    remove_reached(root, &out);
    ret.as_ptr().as_mut().unwrap().detach();
    Some(ret)
}

/// Removes whatever node a key-equality descent reached, without
/// requiring the caller to already hold that node's pointer. Returns
/// the removed node so the caller can free it.
///
/// # Safety
/// Same as [`delete`].
pub unsafe fn pick<F: Flavor>(root: *mut Option<LinkPtr>, key: &F::Key) -> Option<LinkPtr> {
    let out = descend::<F>(root, WalkMethod::Keq, Some(key));
    let ret = out.reached?;
    debug_assert_eq!(
        unsafe { F::cmp_key(key, ret) },
        Ordering::Equal,
        "key-equality descent reached a node whose key does not compare equal"
    );
    remove_reached(root, &out);
    ret.as_ptr().as_mut().unwrap().detach();
    Some(ret)
}

/// Shared pointer rewrite for the four deletion cases of §4.4.
unsafe fn remove_reached(root: *mut Option<LinkPtr>, out: &DescentOutcome) {
    let ret = out.reached.expect("remove_reached requires a hit");

    // Case 1: single-entry tree.
    if out.lparent.is_none() {
        debug_assert!(ret.as_ref().is_nodeless_leaf());
        *root = None;
        return;
    }
    let lparent = out.lparent.unwrap();

    // Case 2: node role and leaf role collapse at lparent.
    if lparent == ret {
        lift_sibling(root, out.gparent, out.gpside, lparent, out.lpside);
        return;
    }

    // Case 3: nodeless leaf removal — leaf-parent inherits the role.
    if ret.as_ref().is_nodeless_leaf() {
        let lp = lparent.as_ptr();
        (*lp).make_nodeless_leaf(lparent);
        lift_sibling(root, out.gparent, out.gpside, lparent, out.lpside);
        return;
    }

    // Case 4: split node-and-leaf — recycle lparent's slot to replace
    // ret's node role.
    let (rb0, rb1) = {
        let r = ret.as_ref();
        (r.branch(Side::Left), r.branch(Side::Right))
    };
    let lp = lparent.as_ptr();
    (*lp).set_branch(Side::Left, rb0);
    (*lp).set_branch(Side::Right, rb1);
    match out.nparent {
        Some(nparent) => {
            let np = nparent.as_ptr();
            (*np).set_branch(out.npside, Some(lparent));
        }
        None => {
            *root = Some(lparent);
        }
    }
    lift_sibling(root, out.gparent, out.gpside, lparent, out.lpside);
}

/// `gparent.b[gpside] = lparent.b[!lpside]` — the sibling lift shared
/// by deletion cases 2 and 3. When `lparent` has no grandparent (it
/// was itself the tree root), the sibling becomes the new root.
unsafe fn lift_sibling(
    root: *mut Option<LinkPtr>,
    gparent: Option<LinkPtr>,
    gpside: Side,
    lparent: LinkPtr,
    lpside: Side,
) {
    let sibling = lparent.as_ref().branch(lpside.opposite());
    match gparent {
        Some(g) => {
            (*g.as_ptr()).set_branch(gpside, sibling);
        }
        None => {
            *root = sibling;
        }
    }
}
