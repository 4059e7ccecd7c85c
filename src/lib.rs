//! This crate provides an unbalanced Binary Search Tree (BST) that keeps
//! a parent back-reference on every node and lets the caller pick which
//! in-order neighbor replaces a node that is deleted while holding two
//! children.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! This crate does **not** rebalance. Keys inserted in a convenient order
//! keep the height near `O(lg N)`, while keys inserted in sorted order
//! degenerate the tree into a chain with height `N`. That trade-off is the
//! point: the tree stays simple enough that every structural move (and in
//! particular the three deletion cases) is easy to observe through the
//! traversal and dump operations in [`arena`].

#![deny(missing_docs)]

pub mod arena;
