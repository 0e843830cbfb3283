#![warn(clippy::all)]

//! An ordered container keyed by a caller-supplied comparator.
//!
//! The tree stores one item per distinct key and keeps them sorted under the
//! comparator given at construction. Lookups, insertions, deletions and
//! nearest-neighbor searches (`find_ge`/`find_le`) all run in O(log n), and
//! cursors walk the items in both directions without an auxiliary stack.
//!
//! ```
//! use rbtree::RBTree;
//!
//! #[derive(Debug)]
//! struct Entry {
//!     key: i32,
//!     value: &'static str,
//! }
//!
//! let mut tree = RBTree::new(|a: &Entry, b: &Entry| a.key.cmp(&b.key));
//! tree.insert(Entry { key: 10, value: "value10" });
//! tree.insert(Entry { key: 12, value: "value12" });
//!
//! assert_eq!(tree.get(&Entry { key: 10, value: "" }).unwrap().value, "value10");
//! assert!(tree.get(&Entry { key: 11, value: "" }).is_none());
//!
//! // Find the first entry with key >= 11.
//! let iter = tree.find_ge(&Entry { key: 11, value: "" });
//! assert_eq!(iter.item().key, 12);
//!
//! // There is no entry with key >= 13.
//! assert!(tree.find_ge(&Entry { key: 13, value: "" }).is_end());
//! ```

#[macro_use]
extern crate log;

mod cursor;
mod tree;

pub use crate::cursor::{Cursor, CursorMut, Iter};
pub use crate::tree::RBTree;
