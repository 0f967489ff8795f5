// =====================================================================
// File: flavors/indirect_block.rs
//
// Description:
//   The `im` flavor: a fixed-length byte block stored outside the
//   node, referenced by a raw pointer (spec.md's indirect storage
//   literally). Unlike `mb`, the length is a per-tree runtime value
//   rather than a const generic, since the whole point of indirection
//   is that the node itself stays a fixed two-field struct regardless
//   of key length; `ImNode::new` is the one boundary point that checks
//   a caller-supplied length against the tree's established length.
// =====================================================================

use crate::error::TreeError;
use crate::flavor::{common_prefix_bits, Flavor};
use crate::link::{Link, LinkPtr};
use std::cmp::Ordering;
use std::ptr::NonNull;

#[repr(C)]
#[derive(Debug)]
pub struct ImNode {
    link: Link,
    ptr: NonNull<u8>,
    len: usize,
}

impl ImNode {
    /// Builds a node referencing `bytes`, which the caller must keep
    /// alive for as long as the node stays linked. Fails if `bytes`
    /// does not match `tree_len`, the tree's established key length.
    pub fn new(bytes: &[u8], tree_len: usize) -> Result<Self, TreeError> {
        if bytes.len() != tree_len {
            return Err(TreeError::LengthMismatch { expected: tree_len, got: bytes.len() });
        }
        Ok(ImNode {
            link: Link::new(),
            ptr: NonNull::new(bytes.as_ptr() as *mut u8).expect("byte slice is never null"),
            len: bytes.len(),
        })
    }

    /// # Safety
    /// The referenced bytes must still be alive.
    pub unsafe fn key(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

pub struct Im;

impl Flavor for Im {
    type Key = [u8];
    type Div = usize;

    const INITIAL_PDIV: usize = 0;

    fn earlier(cur: usize, pdiv: usize) -> bool {
        cur < pdiv
    }

    unsafe fn div_nodes(a: LinkPtr, b: LinkPtr) -> usize {
        unsafe {
            let a = a.cast::<ImNode>().as_ref().key();
            let b = b.cast::<ImNode>().as_ref().key();
            common_prefix_bits(a, b)
        }
    }

    unsafe fn div_key(key: &[u8], node: LinkPtr) -> usize {
        unsafe { common_prefix_bits(key, node.cast::<ImNode>().as_ref().key()) }
    }

    unsafe fn cmp_key(key: &[u8], node: LinkPtr) -> Ordering {
        unsafe { key.cmp(node.cast::<ImNode>().as_ref().key()) }
    }

    unsafe fn key_of<'a>(node: LinkPtr) -> &'a [u8] {
        unsafe { node.cast::<ImNode>().as_ref().key() }
    }
}
