// =====================================================================
// File: flavors/addr.rs
//
// Description:
//   The `addr` flavor: there is no stored key at all. A node's key is
//   its own address, so `div`/`cmp` operate on `NonNull::as_ptr() as
//   usize` directly instead of reading a field.
// =====================================================================

use crate::flavor::Flavor;
use crate::link::{Link, LinkPtr};
use std::cell::Cell;
use std::cmp::Ordering;

/// A node whose key is its own address. `key` is not a caller-supplied
/// value; it is a lazily-populated cache so [`Flavor::key_of`] has
/// somewhere to borrow from, written the first time the node's address
/// is read (by [`AddrNode::address`] or by insertion/deletion).
#[repr(C)]
pub struct AddrNode {
    link: Link,
    key: Cell<usize>,
}

impl AddrNode {
    pub const fn new() -> Self {
        AddrNode { link: Link::new(), key: Cell::new(0) }
    }

    pub fn address(&self) -> usize {
        let a = self as *const AddrNode as usize;
        self.key.set(a);
        a
    }
}

impl Default for AddrNode {
    fn default() -> Self {
        AddrNode::new()
    }
}

fn addr_of(p: LinkPtr) -> usize {
    p.as_ptr() as usize
}

pub struct Addr;

impl Flavor for Addr {
    type Key = usize;
    type Div = usize;

    const INITIAL_PDIV: usize = usize::MAX;

    fn earlier(cur: usize, pdiv: usize) -> bool {
        cur > pdiv
    }

    unsafe fn div_nodes(a: LinkPtr, b: LinkPtr) -> usize {
        addr_of(a) ^ addr_of(b)
    }

    unsafe fn div_key(key: &usize, node: LinkPtr) -> usize {
        key ^ addr_of(node)
    }

    unsafe fn cmp_key(key: &usize, node: LinkPtr) -> Ordering {
        key.cmp(&addr_of(node))
    }

    unsafe fn key_of<'a>(node: LinkPtr) -> &'a usize {
        unsafe {
            let n = node.cast::<AddrNode>();
            n.as_ref().address();
            &*n.as_ref().key.as_ptr()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::NonNull;

    #[test]
    fn address_matches_pointer() {
        let n = AddrNode::new();
        let p: LinkPtr = NonNull::from(&n).cast();
        assert_eq!(n.address(), p.as_ptr() as usize);
    }

    #[test]
    fn div_nodes_is_address_xor() {
        let a = AddrNode::new();
        let b = AddrNode::new();
        let ap: LinkPtr = NonNull::from(&a).cast();
        let bp: LinkPtr = NonNull::from(&b).cast();
        unsafe {
            assert_eq!(Addr::div_nodes(ap, bp), a.address() ^ b.address());
        }
    }
}
