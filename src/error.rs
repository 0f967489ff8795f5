// =====================================================================
// File: error.rs
//
// Description:
//   The crate's narrow error taxonomy. Core descent/insert/delete
//   never fails (they always terminate and report absence via `None`,
//   per spec); this type exists only for the one caller-input
//   boundary check the core algorithm does not cover: fixed/indirect
//   block flavors require a uniform key length across a tree, and a
//   caller can pass a mismatched `len`.
// =====================================================================

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TreeError {
    /// A block-flavor call was made with a `len` that disagrees with
    /// the tree's previously established key length.
    LengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::LengthMismatch { expected, got } => write!(
                f,
                "key length mismatch: tree uses {expected} bytes, call supplied {got}"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_both_lengths() {
        let e = TreeError::LengthMismatch { expected: 8, got: 4 };
        assert_eq!(e.to_string(), "key length mismatch: tree uses 8 bytes, call supplied 4");
    }
}
