//! This crate exposes a persistent Binary Search Tree (BST) over ordered
//! keys, along with a small immutable quaternion type that rides along as a
//! companion value type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a key and has two
//! children, either of which may be the empty tree. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`, where `height` is the longest
//! path from the root `Node` to a leaf `Node`. The tree in [`functional`]
//! never rebalances, so its shape depends only on insertion order: inserting
//! keys in sorted order produces a tree whose height equals its size. BSTs
//! also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Persistence
//!
//! The tree is persistent: `insert` never modifies a tree, it returns a new
//! one that shares every untouched subtree with the old one. Old versions
//! stay valid and can be read (from any number of threads) indefinitely.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod functional;
pub mod quaternion;
