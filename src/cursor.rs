use std::cmp::Ordering;
use std::fmt;

use crate::tree::{RBTree, NIL};

impl<T, C> RBTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    /// Cursor at the minimum item, or at the end if the tree is empty.
    pub fn begin(&self) -> Cursor<T, C> {
        Cursor {
            tree: self,
            node: self.min_node,
        }
    }

    /// Cursor past the maximum item.
    pub fn end(&self) -> Cursor<T, C> {
        Cursor {
            tree: self,
            node: NIL,
        }
    }

    /// Cursor at the smallest item >= `key`, or at the end if every item
    /// is < `key`.
    pub fn find_ge(&self, key: &T) -> Cursor<T, C> {
        let (node, _) = self.find_ge_node(key);
        Cursor { tree: self, node }
    }

    /// Cursor at the largest item <= `key`, or at the end if every item
    /// is > `key`.
    pub fn find_le(&self, key: &T) -> Cursor<T, C> {
        let node = self.find_le_node(key);
        Cursor { tree: self, node }
    }

    pub fn begin_mut(&mut self) -> CursorMut<T, C> {
        let node = self.min_node;
        CursorMut { tree: self, node }
    }

    pub fn find_ge_mut(&mut self, key: &T) -> CursorMut<T, C> {
        let (node, _) = self.find_ge_node(key);
        CursorMut { tree: self, node }
    }

    pub fn find_le_mut(&mut self, key: &T) -> CursorMut<T, C> {
        let node = self.find_le_node(key);
        CursorMut { tree: self, node }
    }

    /// Iterate over the items in ascending order.
    pub fn iter(&self) -> Iter<T, C> {
        Iter {
            tree: self,
            node: self.min_node,
        }
    }
}

/// A position in the tree: either a node, or the end sentinel past the
/// maximum. Moving past the extremes is a contract violation and panics.
pub struct Cursor<'a, T: fmt::Debug, C> {
    tree: &'a RBTree<T, C>,
    node: usize,
}

impl<'a, T, C> Clone for Cursor<'a, T, C>
where
    T: fmt::Debug,
{
    fn clone(&self) -> Self {
        Cursor {
            tree: self.tree,
            node: self.node,
        }
    }
}

impl<'a, T, C> Copy for Cursor<'a, T, C> where T: fmt::Debug {}

impl<'a, T, C> Cursor<'a, T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    /// True iff the cursor points past the maximum item.
    pub fn is_end(&self) -> bool {
        self.node == NIL
    }

    /// True iff the cursor points at the minimum item. On an empty tree
    /// the end cursor is also a begin cursor.
    pub fn is_begin(&self) -> bool {
        self.node == self.tree.min_node
    }

    /// The item under the cursor. Panics on an end cursor.
    pub fn item(&self) -> &'a T {
        assert!(!self.is_end(), "item on an end cursor");
        &self.tree.nodes[self.node].item
    }

    /// Advance to the in-order successor. Panics on an end cursor.
    pub fn move_next(&mut self) {
        assert!(!self.is_end(), "move_next on an end cursor");
        self.node = self.tree.successor_of(self.node);
    }

    /// Step back to the in-order predecessor; from the end this lands on
    /// the maximum item. Panics on a begin cursor.
    pub fn move_prev(&mut self) {
        assert!(!self.is_begin(), "move_prev on a begin cursor");
        self.node = if self.node == NIL {
            self.tree.max_node
        } else {
            self.tree.predecessor_of(self.node)
        };
    }
}

/// Like [`Cursor`], but borrows the tree mutably so the pointed-at item
/// can be removed.
pub struct CursorMut<'a, T: fmt::Debug, C> {
    tree: &'a mut RBTree<T, C>,
    node: usize,
}

impl<'a, T, C> CursorMut<'a, T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    pub fn is_end(&self) -> bool {
        self.node == NIL
    }

    pub fn is_begin(&self) -> bool {
        self.node == self.tree.min_node
    }

    pub fn item(&self) -> &T {
        assert!(!self.is_end(), "item on an end cursor");
        &self.tree.nodes[self.node].item
    }

    pub fn move_next(&mut self) {
        assert!(!self.is_end(), "move_next on an end cursor");
        self.node = self.tree.successor_of(self.node);
    }

    pub fn move_prev(&mut self) {
        assert!(!self.is_begin(), "move_prev on a begin cursor");
        self.node = if self.node == NIL {
            self.tree.max_node
        } else {
            self.tree.predecessor_of(self.node)
        };
    }

    /// Unlink the item under the cursor and return it, consuming the
    /// cursor. Panics on an end cursor.
    pub fn remove(self) -> T {
        assert!(!self.is_end(), "remove on an end cursor");
        self.tree.remove_node(self.node)
    }
}

/// Ascending iterator over the items of an [`RBTree`].
pub struct Iter<'a, T: fmt::Debug, C> {
    tree: &'a RBTree<T, C>,
    node: usize,
}

impl<'a, T, C> Iterator for Iter<'a, T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.node == NIL {
            return None;
        }
        let item = &self.tree.nodes[self.node].item;
        self.node = self.tree.successor_of(self.node);
        Some(item)
    }
}
