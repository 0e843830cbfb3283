use std::cmp::Ordering;
use std::fmt;

use slab::Slab;

/// Sentinel index meaning "no node".
pub(crate) const NIL: usize = usize::MAX;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Colour {
    Black,
    Red,
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Colour::*;
        match self {
            Black => write!(f, "black"),
            Red => write!(f, "red"),
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<T: fmt::Debug> {
    pub(crate) item: T,
    pub(crate) parent: usize,
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) colour: Colour,
}

impl<T> Node<T>
where
    T: fmt::Debug,
{
    fn new(item: T) -> Node<T> {
        Node {
            item,
            parent: NIL,
            left: NIL,
            right: NIL,
            colour: Colour::Red,
        }
    }
}

/// A red-black tree ordered by the comparator supplied at construction.
///
/// Nodes live in a slab and link to each other through indices, with
/// [`NIL`] standing in for an absent child or parent. The minimum and
/// maximum nodes are cached so `begin` and backward iteration from the
/// end are O(1).
#[derive(Clone)]
pub struct RBTree<T: fmt::Debug, C> {
    pub(crate) nodes: Slab<Node<T>>,
    pub(crate) root: usize,
    pub(crate) min_node: usize,
    pub(crate) max_node: usize,
    pub(crate) compare: C,
}

impl<T, C> RBTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty tree. `compare` must be a strict total order and
    /// must not change behaviour for the lifetime of the tree.
    pub fn new(compare: C) -> RBTree<T, C> {
        RBTree {
            nodes: Slab::new(),
            root: NIL,
            min_node: NIL,
            max_node: NIL,
            compare,
        }
    }

    /// Return the number of items in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the item equal to `key` under the comparator, if present.
    pub fn get(&self, key: &T) -> Option<&T> {
        trace!("get {:?}", key);
        let (n, exact) = self.find_ge_node(key);
        if exact {
            Some(&self.nodes[n].item)
        } else {
            None
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// The minimum item, if the tree is non-empty.
    pub fn first(&self) -> Option<&T> {
        if self.min_node == NIL {
            None
        } else {
            Some(&self.nodes[self.min_node].item)
        }
    }

    /// The maximum item, if the tree is non-empty.
    pub fn last(&self) -> Option<&T> {
        if self.max_node == NIL {
            None
        } else {
            Some(&self.nodes[self.max_node].item)
        }
    }

    /// Insert an item. Returns false, leaving the tree untouched, if an
    /// equal item is already present.
    pub fn insert(&mut self, item: T) -> bool {
        trace!("insert {:?}", item);
        let n = match self.attach(item) {
            Some(n) => n,
            None => return false,
        };
        self.insert_fixup(n);
        true
    }

    /// Delete the item equal to `key`. Returns false if no equal item is
    /// present.
    pub fn remove(&mut self, key: &T) -> bool {
        let (n, exact) = self.find_ge_node(key);
        if !exact {
            return false;
        }
        self.remove_node(n);
        true
    }

    //
    // Node attribute helpers. NIL reads as a black node with no children.
    //

    fn colour_of(&self, n: usize) -> Colour {
        if n == NIL {
            Colour::Black
        } else {
            self.nodes[n].colour
        }
    }

    fn is_left_child(&self, n: usize) -> bool {
        self.nodes[self.nodes[n].parent].left == n
    }

    fn is_right_child(&self, n: usize) -> bool {
        self.nodes[self.nodes[n].parent].right == n
    }

    fn sibling(&self, n: usize) -> usize {
        let parent = self.nodes[n].parent;
        assert_ne!(parent, NIL, "sibling of the root");
        if self.nodes[parent].left == n {
            self.nodes[parent].right
        } else {
            self.nodes[parent].left
        }
    }

    pub(crate) fn min_of(&self, mut n: usize) -> usize {
        while self.nodes[n].left != NIL {
            n = self.nodes[n].left;
        }
        n
    }

    pub(crate) fn max_of(&self, mut n: usize) -> usize {
        while self.nodes[n].right != NIL {
            n = self.nodes[n].right;
        }
        n
    }

    /// The smallest node larger than `n`, or NIL if `n` is the maximum.
    pub(crate) fn successor_of(&self, mut n: usize) -> usize {
        if self.nodes[n].right != NIL {
            return self.min_of(self.nodes[n].right);
        }
        loop {
            let parent = self.nodes[n].parent;
            if parent == NIL {
                return NIL;
            }
            if self.nodes[parent].left == n {
                return parent;
            }
            n = parent;
        }
    }

    /// The largest node smaller than `n`, or NIL if `n` is the minimum.
    pub(crate) fn predecessor_of(&self, mut n: usize) -> usize {
        if self.nodes[n].left != NIL {
            return self.max_of(self.nodes[n].left);
        }
        loop {
            let parent = self.nodes[n].parent;
            if parent == NIL {
                return NIL;
            }
            if self.nodes[parent].right == n {
                return parent;
            }
            n = parent;
        }
    }

    //
    // Search
    //

    /// Find the smallest node whose item is >= `key`. The second value is
    /// true iff the node's item equals `key`. Returns (NIL, false) when
    /// every item in the tree is < `key`.
    pub(crate) fn find_ge_node(&self, key: &T) -> (usize, bool) {
        let mut n = self.root;
        loop {
            if n == NIL {
                return (NIL, false);
            }
            match (self.compare)(key, &self.nodes[n].item) {
                Ordering::Equal => return (n, true),
                Ordering::Less => {
                    if self.nodes[n].left != NIL {
                        n = self.nodes[n].left;
                    } else {
                        return (n, false);
                    }
                }
                Ordering::Greater => {
                    if self.nodes[n].right != NIL {
                        n = self.nodes[n].right;
                    } else {
                        let succ = self.successor_of(n);
                        if succ == NIL {
                            return (NIL, false);
                        }
                        let exact = (self.compare)(key, &self.nodes[succ].item) == Ordering::Equal;
                        return (succ, exact);
                    }
                }
            }
        }
    }

    /// Find the largest node whose item is <= `key`, or NIL if every item
    /// in the tree is > `key`.
    pub(crate) fn find_le_node(&self, key: &T) -> usize {
        let (n, exact) = self.find_ge_node(key);
        if exact {
            n
        } else if n != NIL {
            self.predecessor_of(n)
        } else {
            // key is greater than every item
            self.max_node
        }
    }

    //
    // Insertion
    //

    fn maybe_set_min(&mut self, n: usize) {
        if self.min_node == NIL
            || (self.compare)(&self.nodes[n].item, &self.nodes[self.min_node].item)
                == Ordering::Less
        {
            self.min_node = n;
        }
    }

    fn maybe_set_max(&mut self, n: usize) {
        if self.max_node == NIL
            || (self.compare)(&self.nodes[n].item, &self.nodes[self.max_node].item)
                == Ordering::Greater
        {
            self.max_node = n;
        }
    }

    /// Splice a fresh red node into its BST position, or return None if an
    /// equal item already sits in the tree.
    fn attach(&mut self, item: T) -> Option<usize> {
        if self.root == NIL {
            let n = self.nodes.insert(Node::new(item));
            self.root = n;
            self.min_node = n;
            self.max_node = n;
            return Some(n);
        }
        let mut parent = self.root;
        loop {
            match (self.compare)(&item, &self.nodes[parent].item) {
                Ordering::Equal => return None,
                Ordering::Less => {
                    if self.nodes[parent].left == NIL {
                        let n = self.nodes.insert(Node::new(item));
                        self.nodes[n].parent = parent;
                        self.nodes[parent].left = n;
                        self.maybe_set_min(n);
                        return Some(n);
                    }
                    parent = self.nodes[parent].left;
                }
                Ordering::Greater => {
                    if self.nodes[parent].right == NIL {
                        let n = self.nodes.insert(Node::new(item));
                        self.nodes[n].parent = parent;
                        self.nodes[parent].right = n;
                        self.maybe_set_max(n);
                        return Some(n);
                    }
                    parent = self.nodes[parent].right;
                }
            }
        }
    }

    fn insert_fixup(&mut self, mut n: usize) {
        loop {
            // Case 1: n is the root.
            let parent = self.nodes[n].parent;
            if parent == NIL {
                self.nodes[n].colour = Colour::Black;
                break;
            }

            // Case 2: a black parent keeps the invariants intact.
            if self.nodes[parent].colour == Colour::Black {
                break;
            }

            // The parent is red, so it cannot be the root and the
            // grandparent exists.
            let grandparent = self.nodes[parent].parent;
            let uncle = if self.is_left_child(parent) {
                self.nodes[grandparent].right
            } else {
                self.nodes[grandparent].left
            };

            // Case 3: parent and uncle are both red. Paint them black,
            // make the grandparent red and continue from there.
            if uncle != NIL && self.nodes[uncle].colour == Colour::Red {
                self.nodes[parent].colour = Colour::Black;
                self.nodes[uncle].colour = Colour::Black;
                self.nodes[grandparent].colour = Colour::Red;
                n = grandparent;
                continue;
            }

            // Case 4: black uncle, n is an inner grandchild. Rotate the
            // zig-zag into a zig-zig and continue with the former parent.
            if self.is_right_child(n) && self.is_left_child(parent) {
                self.rotate_left(parent);
                n = self.nodes[n].left;
                continue;
            }
            if self.is_left_child(n) && self.is_right_child(parent) {
                self.rotate_right(parent);
                n = self.nodes[n].right;
                continue;
            }

            // Case 5: black uncle, n is an outer grandchild.
            self.nodes[parent].colour = Colour::Black;
            self.nodes[grandparent].colour = Colour::Red;
            if self.is_left_child(n) {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
            break;
        }
    }

    //
    // Deletion
    //

    /// Unlink node `n` and return its item.
    pub(crate) fn remove_node(&mut self, n: usize) -> T {
        trace!("delete {:?}", self.nodes[n].item);

        if self.min_node == n {
            self.min_node = NIL;
        }
        if self.max_node == n {
            self.max_node = NIL;
        }

        if self.nodes[n].left != NIL && self.nodes[n].right != NIL {
            self.splice_predecessor(n);
        }

        assert!(self.nodes[n].left == NIL || self.nodes[n].right == NIL);
        let child = if self.nodes[n].right == NIL {
            self.nodes[n].left
        } else {
            self.nodes[n].right
        };
        if self.nodes[n].colour == Colour::Black {
            // Run the fixup while n is still linked in, so sibling and
            // nephews can be reached through it.
            self.nodes[n].colour = self.colour_of(child);
            self.delete_fixup(n);
        }
        self.replace_node(n, child);
        if self.nodes[n].parent == NIL && child != NIL {
            self.nodes[child].colour = Colour::Black;
        }

        let node = self.nodes.remove(n);
        if !self.nodes.is_empty() {
            if self.min_node == NIL {
                self.min_node = self.min_of(self.root);
            }
            if self.max_node == NIL {
                self.max_node = self.max_of(self.root);
            }
        }
        node.item
    }

    /// Swap `n` with its in-order predecessor, links and colours included,
    /// leaving `n` in a position with at most one (left) child. Both nodes
    /// keep their items; `n` is the one about to be unlinked.
    fn splice_predecessor(&mut self, n: usize) {
        let pred = self.max_of(self.nodes[n].left);
        assert_ne!(pred, n);
        let pred_was_left = self.is_left_child(pred);
        let pred_parent = self.nodes[pred].parent;
        let pred_left = self.nodes[pred].left;
        let pred_colour = self.nodes[pred].colour;
        assert_eq!(self.nodes[pred].right, NIL);

        self.replace_node(n, pred);
        self.nodes[pred].colour = self.nodes[n].colour;

        if pred_parent == n {
            // The predecessor is n's own left child: swap the two nodes
            // directly.
            let n_right = self.nodes[n].right;
            self.nodes[pred].left = n;
            self.nodes[pred].right = n_right;
            if n_right != NIL {
                self.nodes[n_right].parent = pred;
            }
            self.nodes[n].parent = pred;
        } else {
            let n_left = self.nodes[n].left;
            let n_right = self.nodes[n].right;
            self.nodes[pred].left = n_left;
            if n_left != NIL {
                self.nodes[n_left].parent = pred;
            }
            self.nodes[pred].right = n_right;
            if n_right != NIL {
                self.nodes[n_right].parent = pred;
            }
            if pred_was_left {
                self.nodes[pred_parent].left = n;
            } else {
                self.nodes[pred_parent].right = n;
            }
            self.nodes[n].parent = pred_parent;
        }
        self.nodes[n].left = pred_left;
        if pred_left != NIL {
            self.nodes[pred_left].parent = n;
        }
        self.nodes[n].right = NIL;
        self.nodes[n].colour = pred_colour;
    }

    fn delete_fixup(&mut self, mut n: usize) {
        loop {
            if self.nodes[n].parent == NIL {
                break;
            }

            // Case 1: red sibling. Rotate it into the parent position so
            // the sibling below is black.
            if self.colour_of(self.sibling(n)) == Colour::Red {
                let parent = self.nodes[n].parent;
                let sibling = self.sibling(n);
                self.nodes[parent].colour = Colour::Red;
                self.nodes[sibling].colour = Colour::Black;
                if n == self.nodes[parent].left {
                    self.rotate_left(parent);
                } else {
                    self.rotate_right(parent);
                }
            }

            let parent = self.nodes[n].parent;
            let sibling = self.sibling(n);

            // Case 2: parent, sibling and nephews all black. Push the
            // deficiency one level up.
            if self.colour_of(parent) == Colour::Black
                && self.colour_of(sibling) == Colour::Black
                && self.colour_of(self.nodes[sibling].left) == Colour::Black
                && self.colour_of(self.nodes[sibling].right) == Colour::Black
            {
                self.nodes[sibling].colour = Colour::Red;
                n = parent;
                continue;
            }

            // Case 3: red parent, black sibling and nephews. Trading the
            // colours settles the black heights.
            if self.colour_of(parent) == Colour::Red
                && self.colour_of(sibling) == Colour::Black
                && self.colour_of(self.nodes[sibling].left) == Colour::Black
                && self.colour_of(self.nodes[sibling].right) == Colour::Black
            {
                self.nodes[sibling].colour = Colour::Red;
                self.nodes[parent].colour = Colour::Black;
            } else {
                self.delete_case5(n);
            }
            break;
        }
    }

    fn delete_case5(&mut self, n: usize) {
        let parent = self.nodes[n].parent;
        let sibling = self.sibling(n);

        // Case 5: red near nephew, black far nephew. Rotate at the sibling
        // to expose a red far nephew.
        if n == self.nodes[parent].left
            && self.colour_of(sibling) == Colour::Black
            && self.colour_of(self.nodes[sibling].left) == Colour::Red
            && self.colour_of(self.nodes[sibling].right) == Colour::Black
        {
            self.nodes[sibling].colour = Colour::Red;
            let near = self.nodes[sibling].left;
            self.nodes[near].colour = Colour::Black;
            self.rotate_right(sibling);
        } else if n == self.nodes[parent].right
            && self.colour_of(sibling) == Colour::Black
            && self.colour_of(self.nodes[sibling].right) == Colour::Red
            && self.colour_of(self.nodes[sibling].left) == Colour::Black
        {
            self.nodes[sibling].colour = Colour::Red;
            let near = self.nodes[sibling].right;
            self.nodes[near].colour = Colour::Black;
            self.rotate_left(sibling);
        }

        // Case 6: red far nephew. One rotation at the parent restores the
        // black height on n's side.
        let parent = self.nodes[n].parent;
        let sibling = self.sibling(n);
        self.nodes[sibling].colour = self.colour_of(parent);
        self.nodes[parent].colour = Colour::Black;
        if n == self.nodes[parent].left {
            let far = self.nodes[sibling].right;
            assert_eq!(self.colour_of(far), Colour::Red, "delete fixup out of balance");
            self.nodes[far].colour = Colour::Black;
            self.rotate_left(parent);
        } else {
            let far = self.nodes[sibling].left;
            assert_eq!(self.colour_of(far), Colour::Red, "delete fixup out of balance");
            self.nodes[far].colour = Colour::Black;
            self.rotate_right(parent);
        }
    }

    //
    // Rotations and link replacement
    //

    /// Rewire whichever slot referenced `old` (the root, or a parent's
    /// child link) to reference `new` instead.
    fn replace_node(&mut self, old: usize, new: usize) {
        let parent = self.nodes[old].parent;
        if parent == NIL {
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
        if new != NIL {
            self.nodes[new].parent = parent;
        }
    }

    /*
        X              Y
      A   Y    =>    X   C
         B C        A B
    */
    fn rotate_left(&mut self, x: usize) {
        trace!("rotate left: {:?}", self.nodes[x].item);
        let y = self.nodes[x].right;
        let b = self.nodes[y].left;
        self.nodes[x].right = b;
        if b != NIL {
            self.nodes[b].parent = x;
        }
        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        if parent == NIL {
            self.root = y;
        } else if self.nodes[parent].left == x {
            self.nodes[parent].left = y;
        } else {
            self.nodes[parent].right = y;
        }
        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    /*
         Y           X
       X   C  =>   A   Y
      A B             B C
    */
    fn rotate_right(&mut self, y: usize) {
        trace!("rotate right: {:?}", self.nodes[y].item);
        let x = self.nodes[y].left;
        let b = self.nodes[x].right;
        self.nodes[y].left = b;
        if b != NIL {
            self.nodes[b].parent = y;
        }
        let parent = self.nodes[y].parent;
        self.nodes[x].parent = parent;
        if parent == NIL {
            self.root = x;
        } else if self.nodes[parent].left == y {
            self.nodes[parent].left = x;
        } else {
            self.nodes[parent].right = x;
        }
        self.nodes[x].right = y;
        self.nodes[y].parent = x;
    }

    /// Render the tree in graphviz dot format, one line per node and link.
    pub fn dump_as_dot(&self) -> String {
        let mut lines = vec![String::from("graph Tree {")];
        let mut definitions = Vec::new();
        let mut links = Vec::new();

        let mut n = if self.root == NIL {
            NIL
        } else {
            self.min_of(self.root)
        };
        while n != NIL {
            let node = &self.nodes[n];
            definitions.push(format!(
                "    Node{} [label=\"{:?}\", color={}]",
                n, node.item, node.colour
            ));
            if node.left != NIL {
                links.push(format!("    Node{} -- Node{}", n, node.left));
            } else {
                definitions.push(format!("    NullL{} [shape=point]", n));
                links.push(format!("    Node{0} -- NullL{0}", n));
            }
            if node.right != NIL {
                links.push(format!("    Node{} -- Node{}", n, node.right));
            } else {
                definitions.push(format!("    NullR{} [shape=point]", n));
                links.push(format!("    Node{0} -- NullR{0}", n));
            }
            n = self.successor_of(n);
        }

        lines.append(&mut definitions);
        lines.push(String::new());
        lines.append(&mut links);

        lines.push(String::from("}"));
        lines.push(String::new());
        lines.join("\n")
    }
}


#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::{rngs::StdRng, SeedableRng};

    use super::check;
    use super::*;

    fn new_tree() -> RBTree<i32, fn(&i32, &i32) -> Ordering> {
        RBTree::new(|a, b| a.cmp(b))
    }

    fn values(tree: &RBTree<i32, fn(&i32, &i32) -> Ordering>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    macro_rules! assert_node {
        ($tree:expr, $node:expr, $item:expr, $colour:expr) => {
            assert_eq!($tree.nodes[$node].item, $item);
            assert_eq!($tree.nodes[$node].colour, $colour);
        };
    }

    #[test]
    fn rotate_left_root() {
        let mut tree = new_tree();
        tree.insert(2);
        tree.insert(11);
        tree.insert(15);

        print!("{}", tree.dump_as_dot());
        assert_node!(tree, tree.root, 11, Colour::Black);
        assert_node!(tree, tree.nodes[tree.root].left, 2, Colour::Red);
        assert_node!(tree, tree.nodes[tree.root].right, 15, Colour::Red);
    }

    #[test]
    fn rotate_left_parent() {
        let mut tree = new_tree();
        tree.insert(3);
        tree.insert(6);
        tree.insert(2);
        tree.insert(11);
        tree.insert(15);

        print!("{}", tree.dump_as_dot());
        assert_node!(tree, tree.root, 3, Colour::Black);
        assert_node!(tree, tree.nodes[tree.root].left, 2, Colour::Black);
        assert_node!(tree, tree.nodes[tree.root].right, 11, Colour::Black);
    }

    #[test]
    fn rotate_right_root() {
        let mut tree = new_tree();
        tree.insert(11);
        tree.insert(6);
        tree.insert(2);

        print!("{}", tree.dump_as_dot());
        assert_node!(tree, tree.root, 6, Colour::Black);
        assert_node!(tree, tree.nodes[tree.root].left, 2, Colour::Red);
        assert_node!(tree, tree.nodes[tree.root].right, 11, Colour::Red);
    }

    #[test]
    fn rotate_right_parent() {
        let mut tree = new_tree();
        tree.insert(11);
        tree.insert(6);
        tree.insert(15);
        tree.insert(3);
        tree.insert(2);

        print!("{}", tree.dump_as_dot());
        assert_node!(tree, tree.root, 11, Colour::Black);
        assert_node!(tree, tree.nodes[tree.root].left, 3, Colour::Black);
        assert_node!(tree, tree.nodes[tree.root].right, 15, Colour::Black);
    }

    #[test]
    fn insert() {
        let mut tree = new_tree();
        tree.insert(2);
        tree.insert(11);
        tree.insert(6);
        tree.insert(10);
        tree.insert(26);
        tree.insert(7);
        tree.insert(18);
        tree.insert(8);
        tree.insert(13);
        tree.insert(22);

        check::validate_tree(&tree).expect("validate tree");
        assert_eq!(tree.len(), 10);
        assert_eq!(values(&tree), vec![2, 6, 7, 8, 10, 11, 13, 18, 22, 26]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree = new_tree();
        assert!(tree.insert(10));
        assert!(!tree.insert(10));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(&10), Some(&10));
        assert_eq!(values(&tree), vec![10]);
    }

    #[test]
    fn find() {
        let mut tree = new_tree();
        assert!(tree.insert(2));
        tree.insert(13);
        assert!(!tree.insert(2));
        tree.insert(22);
        assert!(!tree.insert(2));

        assert_eq!(tree.get(&2), Some(&2));
        assert_eq!(tree.get(&99), None);
        assert!(tree.contains(&13));
        assert!(!tree.contains(&14));
    }

    #[test]
    fn delete_pseudoleaves() {
        let mut tree = new_tree();
        tree.insert(50);
        tree.insert(20);
        tree.insert(60);
        tree.insert(30);
        tree.insert(40);
        tree.insert(70);
        tree.insert(80);

        tree.remove(&20);
        assert_eq!(values(&tree), vec![30, 40, 50, 60, 70, 80]);

        tree.remove(&30);
        assert_eq!(values(&tree), vec![40, 50, 60, 70, 80]);

        tree.remove(&80);
        assert_eq!(values(&tree), vec![40, 50, 60, 70]);

        tree.remove(&70);
        check::validate_tree(&tree).expect("validate tree");
        assert_eq!(values(&tree), vec![40, 50, 60]);
    }

    #[test]
    fn delete() {
        let mut keep = Vec::new();
        let mut remove = Vec::new();
        for i in (1..30).step_by(3) {
            keep.push(i);
            remove.push(i + 2);
        }

        let mut tree = new_tree();
        for i in remove.iter().rev() {
            assert!(tree.insert(*i));
        }
        for i in &keep {
            assert!(tree.insert(*i));
        }
        for i in remove {
            assert!(tree.remove(&i));
        }

        check::validate_tree(&tree).expect("validate tree");
        assert_eq!(values(&tree), keep);
    }

    #[test]
    fn delete_missing_key() {
        let mut tree = new_tree();
        assert!(!tree.remove(&10));
        assert_eq!(tree.len(), 0);

        assert!(tree.insert(10));
        assert!(!tree.remove(&11));
        assert!(tree.remove(&10));
        assert!(!tree.remove(&10));
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn delete_with_adjacent_predecessor() {
        // 10's predecessor is its own left child
        let mut tree = new_tree();
        tree.insert(10);
        tree.insert(5);
        tree.insert(15);

        assert!(tree.remove(&10));
        check::validate_tree(&tree).expect("validate tree");
        assert_eq!(values(&tree), vec![5, 15]);
    }

    #[test]
    fn delete_with_distant_predecessor() {
        // 10's predecessor is 7, two links down the left subtree
        let mut tree = new_tree();
        tree.insert(10);
        tree.insert(5);
        tree.insert(15);
        tree.insert(7);

        assert!(tree.remove(&10));
        check::validate_tree(&tree).expect("validate tree");
        assert_eq!(values(&tree), vec![5, 7, 15]);
    }

    #[test]
    fn first_and_last() {
        let mut tree = new_tree();
        assert!(tree.first().is_none());
        assert!(tree.last().is_none());

        tree.insert(50);
        assert_eq!(tree.first(), tree.last());

        tree.insert(20);
        tree.insert(60);
        tree.insert(30);
        tree.insert(40);
        tree.insert(70);
        tree.insert(80);

        check::validate_tree(&tree).expect("validate tree");
        assert_eq!(tree.first(), Some(&20));
        assert_eq!(tree.last(), Some(&80));
    }

    #[test]
    fn cached_extremes_follow_deletions() {
        let mut tree = new_tree();
        for i in 1..=10 {
            tree.insert(i);
        }

        assert!(tree.remove(&1));
        assert_eq!(tree.first(), Some(&2));
        assert!(tree.remove(&10));
        assert_eq!(tree.last(), Some(&9));
        check::validate_tree(&tree).expect("validate tree");

        while let Some(min) = tree.first().copied() {
            assert!(tree.remove(&min));
            check::validate_tree(&tree).expect("validate tree");
        }
        assert!(tree.is_empty());
        assert!(tree.last().is_none());
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = new_tree();
        for i in &[50, 20, 60, 30, 40, 70, 80] {
            tree.insert(*i);
        }
        let tree_bis = tree.clone();

        assert_eq!(values(&tree), values(&tree_bis));

        tree.remove(&60);
        assert_eq!(tree.len(), tree_bis.len() - 1);
        check::validate_tree(&tree).expect("validate tree");
        check::validate_tree(&tree_bis).expect("validate tree");
    }

    #[test]
    fn randomized_small_trees() {
        // Small trees hit the adjacent-predecessor splice constantly;
        // slightly larger ones hit the distant branch.
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..300usize {
            let size = 1 + round % 12;
            let mut keys: Vec<i32> = (0..size as i32).collect();
            keys.shuffle(&mut rng);

            let mut tree = new_tree();
            for k in &keys {
                assert!(tree.insert(*k));
                check::validate_tree(&tree).expect("validate tree");
            }
            keys.shuffle(&mut rng);
            for k in &keys {
                assert!(tree.remove(k));
                check::validate_tree(&tree).expect("validate tree");
            }
            assert!(tree.is_empty());
        }
    }
}
