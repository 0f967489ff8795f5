//! # cbtree
//! A compact intrusive binary tree: ordered-set/map semantics over an
//! intrusive node carrying exactly two branch references, no parent
//! pointer, no stored bit position, and no balance or color field.
//!
//! ## Features
//! - A single parameterized descent engine (`descent`) serving lookup,
//!   insertion, deletion, and every range query through one traversal.
//! - Seven key flavors (`flavors`): `u32`, `u64`, pointer-address keys,
//!   fixed-length byte blocks (direct and indirect storage), and
//!   NUL-terminated strings (direct and indirect storage).
//! - No allocation anywhere in the library: every node is caller-owned
//!   and caller-freed; the tree only ever links and unlinks pointers.
//!
//! ## Usage
//! Most callers want [`tree::Tree`], a small generic handle built on
//! top of the lower-level `descent`/`ops`/`range` modules, which are
//! public for callers who need to drive the engine directly (e.g. to
//! share one descent across several side-outputs without `Tree`'s
//! per-call overhead).
// =====================================================================
// File: lib.rs
//
// Description:
//   Crate root: module wiring and re-exports. The algorithmic core
//   lives in `descent.rs`/`ops.rs`/`range.rs`; `flavors/*` supply the
//   per-key-type adapters; `tree.rs` is the ergonomic entry point.
// =====================================================================

pub mod descent;
pub mod dumper;
pub mod error;
pub mod flavor;
pub mod flavors;
pub mod link;
pub mod ops;
pub mod range;
pub mod tree;

pub use error::TreeError;
pub use flavor::Flavor;
pub use link::{Link, LinkPtr, Side};
pub use tree::Tree;
