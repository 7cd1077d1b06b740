//! Property checks for [`Tree`]s.
//!
//! These only use the public walk of a tree, so they find out whether the tree *behaves* like a
//! search tree rather than trusting its internals. A [`Tree`] runs [`check_tree_valid_strict`]
//! and [`check_tree_unique`] after each mutation when its [`CheckPolicy`] is
//! [`Panic`][CheckPolicy::Panic].

use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use crate::error::ParseModeError;
use crate::tree::Tree;

/// Environment variable read by [`CheckPolicy::from_env`].
pub const CHECK_POLICY_ENV: &str = "ORDKIT_TREE_CHECK";

/// What a tree does with its post-mutation invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckPolicy {
    /// Run the check and panic if it fails. A failing check is a bug in the tree, not something
    /// to recover from.
    Panic,
    /// Don't run the check.
    Skip,
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

impl CheckPolicy {
    /// `Panic` when debug assertions are on, `Skip` otherwise.
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::Skip
        }
    }

    /// Reads [`CHECK_POLICY_ENV`], falling back to [`CheckPolicy::for_build`] when it isn't set.
    pub fn from_env() -> Result<Self, ParseModeError> {
        match std::env::var(CHECK_POLICY_ENV) {
            Ok(s) => s.parse(),
            Err(_) => Ok(Self::for_build()),
        }
    }
}

impl FromStr for CheckPolicy {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "skip" => Ok(Self::Skip),
            _ => Err(ParseModeError {
                kind: "check policy",
                given: s.to_owned(),
                expected: "panic, skip",
            }),
        }
    }
}

impl fmt::Display for CheckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Panic => "panic",
            Self::Skip => "skip",
        })
    }
}

/// Walks the tree in order and returns the last value seen, or `None` if some value was smaller
/// than the one before it. The walk stops at the first such value.
fn last_if_sorted<T: Ord, P>(tree: &Tree<T, P>) -> Option<Option<&T>> {
    let mut previous: Option<&T> = None;
    let walk = tree.in_order(|node| {
        let value = node.value();
        if previous.map_or(false, |p| value < p) {
            return ControlFlow::Break(());
        }
        previous = Some(value);
        ControlFlow::Continue(())
    });
    match walk {
        ControlFlow::Continue(()) => Some(previous),
        ControlFlow::Break(()) => None,
    }
}

/// Whether an in-order walk of `tree` never goes down. Empty trees are valid.
///
/// # Examples
///
/// ```
/// use ordkit::check::check_tree_valid;
/// use ordkit::tree::Tree;
///
/// let mut tree = Tree::new();
/// assert!(check_tree_valid(&tree));
///
/// tree.insert(2);
/// tree.insert(1);
/// assert!(check_tree_valid(&tree));
/// ```
pub fn check_tree_valid<T: Ord, P>(tree: &Tree<T, P>) -> bool {
    last_if_sorted(tree).is_some()
}

/// [`check_tree_valid`], and the walk also ends on [`Tree::max`]. Sortedness alone can't see a
/// maximum that the in-order walk never reaches.
pub fn check_tree_valid_strict<T: Ord, P>(tree: &Tree<T, P>) -> bool {
    match last_if_sorted(tree) {
        Some(last) => last == tree.max().map(|n| n.value()),
        None => false,
    }
}

/// Whether no two nodes hold equal values. Only meaningful on a sorted tree, where equal
/// values would be neighbours in order.
pub fn check_tree_unique<T: Ord, P>(tree: &Tree<T, P>) -> bool {
    let mut previous: Option<&T> = None;
    tree.in_order(|node| {
        let value = node.value();
        if previous == Some(value) {
            return ControlFlow::Break(());
        }
        previous = Some(value);
        ControlFlow::Continue(())
    })
    .is_continue()
}
