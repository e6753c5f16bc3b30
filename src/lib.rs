//! An ordered set of distinct values implemented with an AVL tree.
//!
//! The tree keeps its values in strict ascending order and restores
//! balance with local rotations after every insertion and removal, so
//! lookups, successor queries and range counts run in time proportional
//! to the tree height.
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tree.count_greater_than(&1), 2);
//! ```

mod error;
mod tree;

pub use error::EmptyTreeError;
pub use tree::iter::{IntoIter, Iter, LevelOrderIter, PostOrderIter, PreOrderIter};
pub use tree::AvlTree;
