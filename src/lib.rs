//! This crate exposes a keyed Binary Search Tree (BST) and a small movie
//! library built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//! > `Node`s with one child are "semileaves" and `Node`s with two are "full".
//!
//! Searching for a key in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). The [`tree::Tree`]
//! here doesn't rebalance so its height depends on the insertion order. BSTs
//! also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! ## Keys
//!
//! Elements are ordered through the [`key::Keyed`] trait rather than their
//! own `Ord` so an element can carry payload that never takes part in
//! comparisons. [`key::OrderedKey`] pairs a key with such a payload.
//!
//! ## Feature flags
//!
//! - `library` (**enabled by default**) - the [`library`] module, a movie
//!   collection indexed by title that can be loaded from tab separated records.
//!
//! ## Logging
//!
//! Structural events are reported through the [`log`] facade at `debug` and
//! `trace` level, load summaries at `info`. No logger is installed by this crate.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod key;
#[cfg(feature = "library")]
pub mod library;
pub mod tree;
