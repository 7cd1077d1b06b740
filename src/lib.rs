//! A small toolkit of in-memory ordered data structures: an unbalanced Binary Search Tree with
//! the walks it is built from, a fixed-capacity double-ended queue, and a sliding-window maximum
//! built on that queue.
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
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`tree::Tree`] never stores a value twice, so in practice the right subtree is strictly
//! greater. It also never rebalances: searching takes `O(height)`, and `height` is only
//! `O(lg N)` when values arrive in a friendly order. Sorted input gives a tree shaped like a
//! linked list.
//!
//! The [`traversal`] module holds the walks (in-order, pre-order, post-order, level-order, the
//! leftmost/rightmost descent, and a search that remembers the parent) and [`check`] holds the
//! properties a well-formed tree must satisfy.
//!
//! ## Bounded Deque and max pooling
//!
//! [`deque::BoundedDeque`] is a ring buffer that never grows. [`window::max_pool`] drives one of
//! them as a monotonic queue to find the maximum of every window of an array in a single pass.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod check;
pub mod deque;
pub mod error;
pub mod traversal;
pub mod tree;
pub mod window;

#[cfg(test)]
mod test;
