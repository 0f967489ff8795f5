// =====================================================================
// File: flavors/indirect_cstr.rs
//
// Description:
//   The `is` flavor: a NUL-terminated string referenced by pointer
//   rather than embedded. Reads go through `CStr::from_ptr`, so the
//   node itself is just a pointer and the caller retains ownership of
//   the backing bytes, matching spec.md's indirect-storage wording.
// =====================================================================

use crate::flavor::{common_prefix_bits, Flavor};
use crate::link::{Link, LinkPtr};
use std::cmp::Ordering;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr::NonNull;

#[repr(C)]
pub struct IsNode {
    link: Link,
    ptr: NonNull<c_char>,
}

impl IsNode {
    /// # Safety
    /// `ptr` must reference a valid, live, NUL-terminated string for
    /// as long as this node stays linked.
    pub unsafe fn new(ptr: NonNull<c_char>) -> Self {
        IsNode { link: Link::new(), ptr }
    }

    /// # Safety
    /// The referenced string must still be alive.
    pub unsafe fn as_cstr(&self) -> &CStr {
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
    }
}

fn terminated(key: &CStr) -> &[u8] {
    key.to_bytes_with_nul()
}

pub struct Is;

impl Flavor for Is {
    type Key = CStr;
    type Div = usize;

    const INITIAL_PDIV: usize = 0;

    fn earlier(cur: usize, pdiv: usize) -> bool {
        cur < pdiv
    }

    unsafe fn div_nodes(a: LinkPtr, b: LinkPtr) -> usize {
        unsafe {
            let a = a.cast::<IsNode>().as_ref().as_cstr().to_bytes_with_nul();
            let b = b.cast::<IsNode>().as_ref().as_cstr().to_bytes_with_nul();
            common_prefix_bits(a, b)
        }
    }

    unsafe fn div_key(key: &CStr, node: LinkPtr) -> usize {
        unsafe {
            common_prefix_bits(
                terminated(key),
                node.cast::<IsNode>().as_ref().as_cstr().to_bytes_with_nul(),
            )
        }
    }

    unsafe fn cmp_key(key: &CStr, node: LinkPtr) -> Ordering {
        unsafe { terminated(key).cmp(node.cast::<IsNode>().as_ref().as_cstr().to_bytes_with_nul()) }
    }

    unsafe fn key_of<'a>(node: LinkPtr) -> &'a CStr {
        unsafe { node.cast::<IsNode>().as_ref().as_cstr() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn cmp_key_orders_by_bytes() {
        let owned = CString::new("abc").unwrap();
        let n = unsafe { IsNode::new(NonNull::new(owned.as_ptr() as *mut c_char).unwrap()) };
        let p: LinkPtr = NonNull::from(&n).cast();
        let less = CString::new("ab").unwrap();
        let greater = CString::new("abd").unwrap();
        unsafe {
            assert_eq!(Is::cmp_key(less.as_c_str(), p), Ordering::Less);
            assert_eq!(Is::cmp_key(owned.as_c_str(), p), Ordering::Equal);
            assert_eq!(Is::cmp_key(greater.as_c_str(), p), Ordering::Greater);
        }
    }
}
