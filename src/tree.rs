// =====================================================================
// File: tree.rs
//
// Description:
//   `Tree<F>` is the thin, non-owning container handle: it stores
//   only the root link and forwards to the shared descent engine
//   (`descent.rs`), structural mutators (`ops.rs`), and range
//   operations (`range.rs`). It never allocates and never owns node
//   memory — callers keep their own nodes alive for as long as they
//   stay linked, per the Lifecycle section of the data model.
// =====================================================================

use crate::flavor::Flavor;
use crate::link::LinkPtr;
use crate::{ops, range};
use std::marker::PhantomData;

/// A compact binary tree over flavor `F`.
///
/// # Example
/// ```
/// use cbtree::tree::Tree;
/// use cbtree::flavors::scalar::{U32, U32Node};
/// use std::ptr::NonNull;
///
/// let mut a = U32Node::new(4);
/// let mut tree: Tree<U32> = Tree::new();
/// unsafe {
///     tree.insert(NonNull::from(&mut a).cast());
///     assert!(tree.lookup(&4).is_some());
/// }
/// ```
pub struct Tree<F: Flavor> {
    root: Option<LinkPtr>,
    _flavor: PhantomData<F>,
}

impl<F: Flavor> Tree<F> {
    pub const fn new() -> Self {
        Tree { root: None, _flavor: PhantomData }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The tree's root link, for diagnostics (e.g. `dumper::dump_dot`).
    pub fn root(&self) -> Option<LinkPtr> {
        self.root
    }

    fn root_slot(&mut self) -> *mut Option<LinkPtr> {
        &mut self.root as *mut _
    }

    /// # Safety
    /// `node` must be live, detached, and of flavor `F`, and must
    /// outlive its tenure in the tree.
    pub unsafe fn insert(&mut self, node: LinkPtr) -> LinkPtr {
        unsafe { ops::insert::<F>(self.root_slot(), node) }
    }

    /// # Safety
    /// `node` must be live and of flavor `F`.
    pub unsafe fn delete(&mut self, node: LinkPtr) -> Option<LinkPtr> {
        unsafe { ops::delete::<F>(self.root_slot(), node) }
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn pick(&mut self, key: &F::Key) -> Option<LinkPtr> {
        unsafe { ops::pick::<F>(self.root_slot(), key) }
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn lookup(&mut self, key: &F::Key) -> Option<LinkPtr> {
        let out = crate::descent::descend::<F>(
            self.root_slot(),
            crate::descent::WalkMethod::Keq,
            Some(key),
        );
        out.reached
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn lookup_ge(&mut self, key: &F::Key) -> Option<LinkPtr> {
        unsafe { range::lookup_ge::<F>(self.root_slot(), key) }
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn lookup_gt(&mut self, key: &F::Key) -> Option<LinkPtr> {
        unsafe { range::lookup_gt::<F>(self.root_slot(), key) }
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn lookup_le(&mut self, key: &F::Key) -> Option<LinkPtr> {
        unsafe { range::lookup_le::<F>(self.root_slot(), key) }
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn lookup_lt(&mut self, key: &F::Key) -> Option<LinkPtr> {
        unsafe { range::lookup_lt::<F>(self.root_slot(), key) }
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn first(&mut self) -> Option<LinkPtr> {
        unsafe { range::first::<F>(self.root_slot()) }
    }

    /// # Safety
    /// Every node reachable from the tree's root must be of flavor `F`.
    pub unsafe fn last(&mut self) -> Option<LinkPtr> {
        unsafe { range::last::<F>(self.root_slot()) }
    }

    /// # Safety
    /// `node` must be live, of flavor `F`, and currently linked into
    /// this tree. Every other node reachable from the tree's root must
    /// also be of flavor `F`.
    pub unsafe fn next(&mut self, node: LinkPtr) -> Option<LinkPtr> {
        unsafe { range::next::<F>(self.root_slot(), node) }
    }

    /// # Safety
    /// `node` must be live, of flavor `F`, and currently linked into
    /// this tree. Every other node reachable from the tree's root must
    /// also be of flavor `F`.
    pub unsafe fn prev(&mut self, node: LinkPtr) -> Option<LinkPtr> {
        unsafe { range::prev::<F>(self.root_slot(), node) }
    }
}

impl<F: Flavor> Default for Tree<F> {
    fn default() -> Self {
        Tree::new()
    }
}
