//! A mutable BST whose nodes keep a pointer back to their parent. Children are heap allocated and
//! owned by their parent (or by the [`Tree`] for the root). The parent pointer never owns anything;
//! it only exists so a node can be relinked in place when something above it is deleted.
//!
//! The tree does not rebalance. Inserting keys in sorted order produces a list-shaped tree, so
//! every traversal here is iterative to keep deep trees off the call stack.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::key::OrderedKey;
//! use keyed_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&OrderedKey::query("B")), None);
//!
//! assert!(tree.insert(OrderedKey::new("B", "b")));
//! assert!(tree.insert(OrderedKey::new("A", "a")));
//!
//! // Inserting an existing key is rejected and leaves the stored value alone.
//! assert!(!tree.insert(OrderedKey::new("B", "another b")));
//! assert_eq!(tree.size(), 2);
//!
//! // Removing returns the stored value.
//! let removed = tree.remove(&OrderedKey::query("B")).unwrap();
//! assert_eq!(removed.payload(), Some(&"b"));
//! assert!(tree.is_valid_bst());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::key::Keyed;

/// An unbalanced Binary Search Tree over [`Keyed`] elements. Elements are identified by their key
/// alone and each key is stored at most once.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
    // The tree owns every `Node<T>` behind `root` even though it only holds raw pointers.
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: The tree exclusively owns every node reachable from `root` and hands out references
// with the usual borrow rules, so it's as thread safe as a `Box<T>` would be.
unsafe impl<T: Send> Send for Tree<T> {}
// SAFETY: Shared references to the tree only ever produce shared references to elements.
unsafe impl<T: Sync> Sync for Tree<T> {}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<NonNull<Node<T>>> = self.root.take().0.into_iter().collect();
        while let Some(ptr) = pending.pop() {
            // SAFETY: Every node was allocated with `Box::new` in `Node::new_leaked` and is
            // reachable from exactly one owning link. We took the root out of `self` and push each
            // child exactly once, so every node is freed exactly once.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            pending.extend(node.left.0);
            pending.extend(node.right.0);
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let Some(root) = self.root() else {
            return tree;
        };

        let copy = Node::new_leaked(root.element.clone(), Link(None));
        tree.root = Link(Some(copy));
        let mut pending = vec![(root, copy)];
        while let Some((source, mut copy)) = pending.pop() {
            // SAFETY: `copy` was allocated above for `tree` and nothing else references it yet.
            let copy_node = unsafe { copy.as_mut() };
            if let Some(left) = source.left() {
                let child = Node::new_leaked(left.element.clone(), Link(Some(copy)));
                copy_node.left = Link(Some(child));
                pending.push((left, child));
            }
            if let Some(right) = source.right() {
                let child = Node::new_leaked(right.element.clone(), Link(Some(copy)));
                copy_node.right = Link(Some(child));
                pending.push((right, child));
            }
        }
        tree.len = self.len;
        tree
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Generate a `Tree` holding a single element as its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let tree = Tree::with_root(5);
    /// assert_eq!(tree.size(), 1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn with_root(element: T) -> Self {
        Self {
            root: Link(Some(Node::new_leaked(element, Link(None)))),
            len: 1,
            _owns: PhantomData,
        }
    }

    /// The number of elements in the tree.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as [`size`][Tree::size].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree has a
    /// height of `-1` and a tree with a single node a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        height_below(self.root())
    }

    /// The element with the smallest key.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| &root.min_node().element)
    }

    /// The element with the largest key.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| &root.max_node().element)
    }

    /// Iterates over the elements in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// Collects an in-order traversal of the tree. Each call walks the tree again from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = ["B", "A", "C", "F"].into_iter().collect();
    /// assert_eq!(tree.in_order(), [&"A", &"B", &"C", &"F"]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns a [`Display`][fmt::Display] adaptor printing one line per node in pre-order, with
    /// the node's height, children and parent. Absent links print as `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1].into_iter().collect();
    /// assert_eq!(
    ///     tree.outline().to_string(),
    ///     "2 (height=1) [left: 1; right: *] parent: *\n\
    ///      1 (height=0) [left: *; right: *] parent: 2\n",
    /// );
    /// ```
    pub fn outline(&self) -> Outline<'_, T> {
        Outline(self)
    }

    /// Size and height in one value. Displays as `size = <n>; height = <h>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3, 4].into_iter().collect();
    /// assert_eq!(tree.stats().to_string(), "size = 4; height = 2");
    /// ```
    pub fn stats(&self) -> Stats {
        Stats {
            size: self.len,
            height: self.height(),
        }
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }
}

impl<T: Keyed> Tree<T> {
    /// Potentially finds the stored element equal to `query`. Only the key of `query` is looked at
    /// so it can be a key-only placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::key::OrderedKey;
    /// use keyed_bst::tree::Tree;
    ///
    /// let tree = Tree::with_root(OrderedKey::new(1, "one"));
    ///
    /// assert_eq!(tree.search(&OrderedKey::query(1)).and_then(|e| e.payload()), Some(&"one"));
    /// assert_eq!(tree.search(&OrderedKey::query(42)), None);
    /// ```
    pub fn search(&self, query: &T) -> Option<&T> {
        let found = self.locate(|element| query.key().cmp(element.key()))?;
        // SAFETY: `locate` only returns pointers to live nodes owned by this tree, and the
        // returned reference borrows `self` so the node can't be removed while it's alive.
        Some(unsafe { &found.as_ref().element })
    }

    /// Like [`search`][Tree::search] but routed by a borrowed form of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let tree = Tree::with_root(String::from("Memento"));
    /// assert_eq!(tree.get("Memento").map(String::as_str), Some("Memento"));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = self.locate(|element| key.cmp(element.key().borrow()))?;
        // SAFETY: See `search`.
        Some(unsafe { &found.as_ref().element })
    }

    /// Inserts `element` unless an element with the same key is already stored. Returns whether
    /// the element was inserted. A rejected insert doesn't touch the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert("B"));
    /// assert!(!tree.insert("B"));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let Some(mut cursor) = self.root.0 else {
            self.root = Link(Some(Node::new_leaked(element, Link(None))));
            self.len = 1;
            return true;
        };

        loop {
            // SAFETY: `cursor` always points at a live node of this tree and we hold `&mut self`,
            // so this is the only reference into the tree.
            let node = unsafe { cursor.as_mut() };
            let slot = match element.key().cmp(node.element.key()) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::trace!("insert rejected: key already stored at {:p}", cursor);
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };

            match slot.0 {
                Some(child) => cursor = child,
                None => {
                    let child = Node::new_leaked(element, Link(Some(cursor)));
                    *slot = Link(Some(child));
                    self.len += 1;
                    log::trace!("inserted {:p} below {:p}", child, cursor);
                    return true;
                }
            }
        }
    }

    /// Removes the element equal to `query` from the tree and returns it. If the tree holds no
    /// such element, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.in_order(), [&1, &3]);
    /// ```
    pub fn remove(&mut self, query: &T) -> Option<T> {
        let Some(target) = self.locate(|element| query.key().cmp(element.key())) else {
            log::trace!("remove: key not found");
            return None;
        };
        // SAFETY: `locate` returned a live node of this tree and we hold `&mut self`.
        Some(unsafe { self.detach(target) })
    }

    /// Like [`remove`][Tree::remove] but routed by a borrowed form of the key.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(target) = self.locate(|element| key.cmp(element.key().borrow())) else {
            log::trace!("remove: key not found");
            return None;
        };
        // SAFETY: See `remove`.
        Some(unsafe { self.detach(target) })
    }

    /// Checks the structure of the tree in a single in-order pass:
    ///
    /// 1. the root has no parent,
    /// 2. every child points back at its parent,
    /// 3. keys strictly ascend in order, which holds exactly when every left subtree is smaller
    ///    and every right subtree is larger than its node,
    /// 4. the number of nodes matches [`size`][Tree::size].
    ///
    /// Any violation is a bug in this module rather than bad input.
    pub fn validate(&self) -> Result<(), Violation> {
        let Some(root) = self.root() else {
            return match self.len {
                0 => Ok(()),
                recorded => Err(Violation::CountMismatch {
                    counted: 0,
                    recorded,
                }),
            };
        };
        if root.parent.0.is_some() {
            return Err(Violation::RootHasParent);
        }

        let mut counted = 0;
        let mut previous: Option<&T> = None;
        let mut stack = Vec::new();
        let mut cursor = Some(root);
        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };

            let this = NonNull::from(node);
            if node.left().map_or(false, |left| left.parent.0 != Some(this))
                || node.right().map_or(false, |right| right.parent.0 != Some(this))
            {
                return Err(Violation::BrokenParentLink);
            }
            if let Some(previous) = previous {
                if previous.cmp_key(&node.element) != Ordering::Less {
                    return Err(Violation::OutOfOrder);
                }
            }

            counted += 1;
            previous = Some(&node.element);
            cursor = node.right();
        }

        if counted != self.len {
            return Err(Violation::CountMismatch {
                counted,
                recorded: self.len,
            });
        }
        Ok(())
    }

    /// Whether [`validate`][Tree::validate] finds nothing wrong.
    pub fn is_valid_bst(&self) -> bool {
        self.validate().is_ok()
    }

    /// Walks from the root following `route` (the ordering of the sought key relative to the
    /// element at hand) and returns the node it stops at.
    fn locate(&self, mut route: impl FnMut(&T) -> Ordering) -> Option<NonNull<Node<T>>> {
        let mut cursor = self.root.0;
        while let Some(ptr) = cursor {
            // SAFETY: Links only ever point at live nodes owned by this tree.
            let node = unsafe { ptr.as_ref() };
            cursor = match route(&node.element) {
                Ordering::Less => node.left.0,
                Ordering::Equal => return Some(ptr),
                Ordering::Greater => node.right.0,
            };
        }
        None
    }

    /// Removes `target` from the tree and returns the element it held.
    ///
    /// # Safety
    ///
    /// `target` must be a live node of this tree and there must be no outstanding references into
    /// the tree.
    unsafe fn detach(&mut self, mut target: NonNull<Node<T>>) -> T {
        let node = target.as_ref();
        match node.left.0 {
            Some(left) if node.full() => {
                // The in-order predecessor has no right child.
                let predecessor = Node::max_ptr(left);
                log::debug!(
                    "removing full node {:p}; promoting predecessor {:p}",
                    target,
                    predecessor
                );
                let promoted = self.splice(predecessor);
                mem::replace(&mut target.as_mut().element, promoted)
            }
            _ => {
                let shape = if node.internal() { "semileaf" } else { "leaf" };
                log::trace!("removing {} {:p}", shape, target);
                self.splice(target)
            }
        }
    }

    /// Replaces `node`, which must have at most one child, with that child and frees it.
    ///
    /// # Safety
    ///
    /// Same as [`detach`][Tree::detach].
    unsafe fn splice(&mut self, node: NonNull<Node<T>>) -> T {
        let (child, parent) = {
            let this = node.as_ref();
            debug_assert!(this.leaf() || this.semileaf(), "splice called on a full node");
            let child = if this.left.0.is_some() {
                this.left
            } else {
                this.right
            };
            (child, this.parent)
        };

        if let Some(mut child) = child.0 {
            child.as_mut().parent = parent;
        }
        match parent.0 {
            None => {
                log::debug!("replacing root {:p} with {:p}", node, Link::ptr(&child));
                self.root = child;
            }
            Some(mut parent) => {
                let parent = parent.as_mut();
                if parent.left.0 == Some(node) {
                    parent.left = child;
                } else {
                    debug_assert_eq!(parent.right.0, Some(node));
                    parent.right = child;
                }
            }
        }
        self.len -= 1;

        // SAFETY: Nothing links to `node` anymore: its parent (or the root) now points at
        // `child` and `child` points at the old parent. It was allocated in `Node::new_leaked`.
        let node = Box::from_raw(node.as_ptr());
        node.element
    }
}

impl<T: Keyed> FromIterator<T> for Tree<T> {
    /// Builds a tree by inserting each element in turn. Later duplicates of a key are dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Keyed> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A structural problem found by [`Tree::validate`].
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Violation {
    /// The root node has a parent pointer.
    RootHasParent,
    /// A child's parent pointer doesn't point at the node that owns it.
    BrokenParentLink,
    /// An in-order traversal didn't produce strictly ascending keys.
    OutOfOrder,
    /// The number of reachable nodes differs from the recorded size.
    CountMismatch {
        /// Nodes reachable from the root.
        counted: usize,
        /// The size the tree believes it has.
        recorded: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootHasParent => f.pad("the root node has a parent"),
            Self::BrokenParentLink => f.pad("a child does not point back at its parent"),
            Self::OutOfOrder => f.pad("keys are not in ascending order"),
            Self::CountMismatch { counted, recorded } => write!(
                f,
                "found {} nodes but the tree records {}",
                counted, recorded
            ),
        }
    }
}

impl std::error::Error for Violation {}

/// An in-order iterator over the elements of a [`Tree`], returned by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<&'a Node<T>>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left();
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Pre-order dump of a tree's structure, returned by [`Tree::outline`].
pub struct Outline<'a, T>(&'a Tree<T>);

impl<T: fmt::Display> fmt::Display for Outline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Slot<'a, T>(Option<&'a Node<T>>);

        impl<T: fmt::Display> fmt::Display for Slot<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Some(node) => fmt::Display::fmt(&node.element, f),
                    None => f.write_str("*"),
                }
            }
        }

        let mut pre_order = Vec::with_capacity(self.0.len);
        let mut pending: Vec<&Node<T>> = self.0.root().into_iter().collect();
        while let Some(node) = pending.pop() {
            pre_order.push(node);
            pending.extend(node.right());
            pending.extend(node.left());
        }

        // Children come after their parent in pre-order, so walking backwards sees them first.
        let mut heights: HashMap<*const Node<T>, isize> = HashMap::with_capacity(pre_order.len());
        for &node in pre_order.iter().rev() {
            let height = [node.left(), node.right()]
                .into_iter()
                .flatten()
                .map(|child| heights[&(child as *const Node<T>)] + 1)
                .max()
                .unwrap_or(0);
            heights.insert(node as *const Node<T>, height);
        }

        for node in pre_order {
            writeln!(
                f,
                "{} (height={}) [left: {}; right: {}] parent: {}",
                node.element,
                heights[&(node as *const Node<T>)],
                Slot(node.left()),
                Slot(node.right()),
                Slot(node.parent.node()),
            )?;
        }
        Ok(())
    }
}

/// Summary returned by [`Tree::stats`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Number of elements.
    pub size: usize,
    /// Height of the tree, `-1` when empty.
    pub height: isize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size = {}; height = {}", self.size, self.height)
    }
}

/// Height of the subtree rooted at `root`, `-1` if there is none. Counts levels breadth first.
fn height_below<T>(root: Option<&Node<T>>) -> isize {
    let mut level: VecDeque<&Node<T>> = root.into_iter().collect();
    let mut height = -1;
    while !level.is_empty() {
        height += 1;
        for _ in 0..level.len() {
            if let Some(node) = level.pop_front() {
                level.extend(node.left());
                level.extend(node.right());
            }
        }
    }
    height
}

struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: If the link is not `None` it points at a valid `Node` owned by the tree. The
        // returned reference borrows the link, and every link lives inside the tree or one of its
        // nodes, so the node can't be freed while the reference is alive.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Raw address for logging, null when absent.
    fn ptr(&self) -> *const Node<T> {
        self.0.map_or(std::ptr::null(), |ptr| ptr.as_ptr() as *const _)
    }
}

struct Node<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a childless node and leaks it. Ownership passes to whichever link stores the
    /// returned pointer.
    fn new_leaked(element: T, parent: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            element,
            left: Link(None),
            right: Link(None),
            parent,
        })))
    }

    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// No children.
    fn leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    /// Exactly one child.
    fn semileaf(&self) -> bool {
        self.left.0.is_some() != self.right.0.is_some()
    }

    /// Both children.
    fn full(&self) -> bool {
        self.left.0.is_some() && self.right.0.is_some()
    }

    /// At least one child.
    fn internal(&self) -> bool {
        !self.leaf()
    }

    fn min_node(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn max_node(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Pointer flavour of [`max_node`][Node::max_node], for deletion. Follows the stored links
    /// so the result can later be written through.
    fn max_ptr(mut ptr: NonNull<Self>) -> NonNull<Self> {
        // SAFETY: `ptr` and every right link below it point at live nodes.
        while let Some(right) = unsafe { ptr.as_ref() }.right.0 {
            ptr = right;
        }
        ptr
    }
}
