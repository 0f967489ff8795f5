// =====================================================================
// File: flavors/scalar.rs
//
// Description:
//   u32 and u64 keyed flavors. Divergence is plain XOR: the magnitude
//   of `a ^ b` grows with the position of the highest differing bit,
//   so a larger XOR means an earlier split, matching `Flavor::earlier`
//   for scalar flavors (`cur > pdiv`).
// =====================================================================

use crate::link::{Link, LinkPtr};
use std::cmp::Ordering;

macro_rules! scalar_flavor {
    ($flavor:ident, $node:ident, $ty:ty) => {
        #[repr(C)]
        pub struct $node {
            link: Link,
            key: $ty,
        }

        impl $node {
            pub const fn new(key: $ty) -> Self {
                $node { link: Link::new(), key }
            }

            pub fn key(&self) -> $ty {
                self.key
            }
        }

        /// Marker type selecting the
        #[doc = concat!("`", stringify!($ty), "`")]
        /// flavor.
        pub struct $flavor;

        impl crate::flavor::Flavor for $flavor {
            type Key = $ty;
            type Div = $ty;

            const INITIAL_PDIV: $ty = <$ty>::MAX;

            fn earlier(cur: $ty, pdiv: $ty) -> bool {
                cur > pdiv
            }

            unsafe fn div_nodes(a: LinkPtr, b: LinkPtr) -> $ty {
                unsafe {
                    let a = a.cast::<$node>().as_ref().key;
                    let b = b.cast::<$node>().as_ref().key;
                    a ^ b
                }
            }

            unsafe fn div_key(key: &$ty, node: LinkPtr) -> $ty {
                unsafe { key ^ node.cast::<$node>().as_ref().key }
            }

            unsafe fn cmp_key(key: &$ty, node: LinkPtr) -> Ordering {
                unsafe { key.cmp(&node.cast::<$node>().as_ref().key) }
            }

            unsafe fn key_of<'a>(node: LinkPtr) -> &'a $ty {
                unsafe { &node.cast::<$node>().as_ref().key }
            }
        }
    };
}

scalar_flavor!(U32, U32Node, u32);
scalar_flavor!(U64, U64Node, u64);
