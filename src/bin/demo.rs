// =====================================================================
// File: bin/demo.rs
//
// Description:
//   A thin example driver over the u32 flavor: reads a sequence of
//   integer arguments from the command line, inserts each into a
//   tree, then prints the sorted result via `first`/`next`. Passing
//   `-d` also prints a Graphviz dump of the final structure.
//
//   This is a diagnostic harness, not part of the library's public
//   surface.
// =====================================================================

use cbtree::dumper;
use cbtree::flavors::scalar::{U32Node, U32};
use cbtree::tree::Tree;
use cbtree::Flavor;
use std::env;

fn main() {
    let mut debug = false;
    let mut values = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "-d" {
            debug = true;
            continue;
        }
        match arg.parse::<u32>() {
            Ok(v) => values.push(v),
            Err(_) => {
                eprintln!("skipping non-integer argument: {arg}");
            }
        }
    }

    // Nodes must outlive the tree; keep them in a Vec the tree borrows
    // pointers into for the duration of this scope.
    let mut nodes: Vec<Box<U32Node>> = values.into_iter().map(|v| Box::new(U32Node::new(v))).collect();

    let mut tree: Tree<U32> = Tree::new();
    unsafe {
        for n in nodes.iter_mut() {
            let ptr = std::ptr::NonNull::from(n.as_mut()).cast();
            tree.insert(ptr);
        }
    }

    println!("sorted:");
    unsafe {
        let mut cur = tree.first();
        while let Some(p) = cur {
            let key = *U32::key_of(p);
            println!("  {key}");
            cur = tree.next(p);
        }

        if debug {
            let mut out = String::new();
            dumper::dump_dot(tree.root(), &mut out);
            println!("{out}");
        }
    }
}
