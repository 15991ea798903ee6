//! A course catalog for academic advising, built on a plain Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! Courses live in a [`CourseTree`][tree::CourseTree], keyed by their course number. Every node
//! stores one [`Course`][course::Course] and owns up to two children. The invariants are:
//!
//! 1. For every node, all the nodes in its left subtree have a course number less than its own.
//! 2. For every node, all the nodes in its right subtree have a course number greater than or
//!    equal to its own.
//!
//! Visiting the left subtree, then the node, then the right subtree therefore lists courses in
//! course number order. Searching takes `O(height)`. The tree never rebalances, so the height is
//! whatever the insertion order makes it: `O(lg N)` for shuffled input and `N` for sorted input.
//!
//! ## Loading and the menu
//!
//! [`loader`] turns a comma-separated course file into insertions and [`cli`] drives the
//! interactive menu the `course-planner` binary runs.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod course;
pub mod loader;
pub mod tree;
mod util;
