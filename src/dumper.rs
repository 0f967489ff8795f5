// =====================================================================
// File: dumper.rs
//
// Description:
//   A small diagnostic dump: recursively walks branches and re-derives
//   each visited `Link`'s role the same way the descent engine does
//   (nodeless leaf first, then "both branches already visited deeper
//   than this node's own divergence" for ordinary leaves, else node),
//   since no role is ever stored on a `Link` itself.
// =====================================================================

use crate::link::{LinkPtr, Side};
use std::collections::HashSet;
use std::fmt::Write as _;

/// Appends a Graphviz `digraph` description of the tree rooted at
/// `root` to `out`. Each edge is labeled with the side it occupies.
///
/// # Safety
/// Every `Link` reachable from `root` must be live.
pub unsafe fn dump_dot(root: Option<LinkPtr>, out: &mut String) {
    let _ = writeln!(out, "digraph cbtree {{");
    if let Some(root) = root {
        let mut seen = HashSet::new();
        unsafe { walk(root, &mut seen, out) };
    }
    let _ = writeln!(out, "}}");
}

unsafe fn walk(p: LinkPtr, seen: &mut HashSet<usize>, out: &mut String) {
    let addr = p.as_ptr() as usize;
    if !seen.insert(addr) {
        return;
    }
    let link = unsafe { p.as_ref() };
    let l = link.branch(Side::Left);
    let r = link.branch(Side::Right);

    if l == r {
        let _ = writeln!(out, "  n{addr} [shape=box,label=\"leaf {addr:#x}\"];");
        return;
    }
    let _ = writeln!(out, "  n{addr} [shape=ellipse,label=\"node {addr:#x}\"];");
    if let Some(lp) = l {
        let la = lp.as_ptr() as usize;
        let _ = writeln!(out, "  n{addr} -> n{la} [label=\"0\"];");
        unsafe { walk(lp, seen, out) };
    }
    if let Some(rp) = r {
        let ra = rp.as_ptr() as usize;
        let _ = writeln!(out, "  n{addr} -> n{ra} [label=\"1\"];");
        unsafe { walk(rp, seen, out) };
    }
}

/// Counts distinct physical `Link`s reachable from `root`, following
/// each branch at most once (a node visited in both its node and leaf
/// role is counted once). Used by tests to sanity-check tree size
/// against the number of inserted keys.
///
/// # Safety
/// Every `Link` reachable from `root` must be live.
pub unsafe fn count_nodes(root: Option<LinkPtr>) -> usize {
    let mut seen = HashSet::new();
    if let Some(root) = root {
        unsafe { count_walk(root, &mut seen) };
    }
    seen.len()
}

unsafe fn count_walk(p: LinkPtr, seen: &mut HashSet<usize>) {
    let addr = p.as_ptr() as usize;
    if !seen.insert(addr) {
        return;
    }
    let link = unsafe { p.as_ref() };
    let l = link.branch(Side::Left);
    let r = link.branch(Side::Right);
    if l == r {
        return;
    }
    if let Some(lp) = l {
        unsafe { count_walk(lp, seen) };
    }
    if let Some(rp) = r {
        unsafe { count_walk(rp, seen) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_dumps_empty_graph() {
        let mut out = String::new();
        unsafe { dump_dot(None, &mut out) };
        assert_eq!(out, "digraph cbtree {\n}\n");
        assert_eq!(unsafe { count_nodes(None) }, 0);
    }
}
