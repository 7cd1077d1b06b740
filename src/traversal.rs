//! Walks over anything shaped like a binary tree.
//!
//! The functions here only need to know how to get from a node to its children and its value,
//! which is what [`Links`] describes. [`Tree`][crate::tree::Tree] implements it, and so can any
//! other node store.
//!
//! The depth-first walks recurse, so their stack depth is the height of the tree. Nothing here
//! balances anything, meaning a tree built from sorted input is as deep as it is long. The
//! level-order walk keeps an explicit queue instead.
//!
//! Visitors return [`ControlFlow`]. Returning `Break` stops the walk immediately and the break
//! value is handed back to the caller.
//!
//! # Examples
//!
//! ```
//! use std::ops::ControlFlow;
//! use ordkit::tree::Tree;
//! use ordkit::traversal::{self, Links};
//!
//! let mut tree = Tree::new();
//! for v in [5, 3, 8, 1, 4] {
//!     tree.insert(v);
//! }
//!
//! let mut seen = Vec::new();
//! let _ = traversal::pre_order(&tree, tree.root_id(), &mut |id| {
//!     seen.push(*tree.value(id));
//!     ControlFlow::<()>::Continue(())
//! });
//! assert_eq!(seen, [5, 3, 1, 4, 8]);
//! ```

use std::collections::VecDeque;
use std::ops::ControlFlow;

/// Child and value access for a binary node store.
pub trait Links {
    /// Handle naming one node in the store.
    type Id: Copy + PartialEq;
    /// What a node holds and is ordered by.
    type Value;

    /// The left child of `id`, if any.
    fn left(&self, id: Self::Id) -> Option<Self::Id>;
    /// The right child of `id`, if any.
    fn right(&self, id: Self::Id) -> Option<Self::Id>;
    /// The value stored at `id`.
    fn value(&self, id: Self::Id) -> &Self::Value;

    /// Whether a search for `value` continues into the left subtree of `id`. Only strictly
    /// smaller values go left so ties descend right.
    fn steps_left(&self, id: Self::Id, value: &Self::Value) -> bool
    where
        Self::Value: Ord,
    {
        value < self.value(id)
    }
}

/// The outcome of [`find`]. `parent` is the last node visited before `node`, or, when nothing
/// matched, the node whose empty child slot ended the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<I> {
    /// The node holding the value, if there is one.
    pub node: Option<I>,
    /// See the type level docs.
    pub parent: Option<I>,
}

/// Left subtree, node, right subtree.
pub fn in_order<L, F, B>(links: &L, node: Option<L::Id>, visit: &mut F) -> ControlFlow<B>
where
    L: Links + ?Sized,
    F: FnMut(L::Id) -> ControlFlow<B>,
{
    let Some(id) = node else {
        return ControlFlow::Continue(());
    };
    in_order(links, links.left(id), visit)?;
    visit(id)?;
    in_order(links, links.right(id), visit)
}

/// Node, left subtree, right subtree.
pub fn pre_order<L, F, B>(links: &L, node: Option<L::Id>, visit: &mut F) -> ControlFlow<B>
where
    L: Links + ?Sized,
    F: FnMut(L::Id) -> ControlFlow<B>,
{
    let Some(id) = node else {
        return ControlFlow::Continue(());
    };
    visit(id)?;
    pre_order(links, links.left(id), visit)?;
    pre_order(links, links.right(id), visit)
}

/// Left subtree, right subtree, node. A node is visited only after both of its children.
pub fn post_order<L, F, B>(links: &L, node: Option<L::Id>, visit: &mut F) -> ControlFlow<B>
where
    L: Links + ?Sized,
    F: FnMut(L::Id) -> ControlFlow<B>,
{
    let Some(id) = node else {
        return ControlFlow::Continue(());
    };
    post_order(links, links.left(id), visit)?;
    post_order(links, links.right(id), visit)?;
    visit(id)
}

/// Breadth first, left to right within a level.
pub fn level_order<L, F, B>(links: &L, node: Option<L::Id>, mut visit: F) -> ControlFlow<B>
where
    L: Links + ?Sized,
    F: FnMut(L::Id) -> ControlFlow<B>,
{
    let mut queue: VecDeque<L::Id> = node.into_iter().collect();
    while let Some(id) = queue.pop_front() {
        visit(id)?;
        queue.extend(links.left(id));
        queue.extend(links.right(id));
    }
    ControlFlow::Continue(())
}

/// Follows `next` from `start` until it yields no child and returns the last node reached.
/// `on_step` sees every node that is stepped *from*, so after the walk the last node it saw is
/// the parent of the returned node (it isn't called at all when `start` is already the end).
pub fn extreme<L, N, S>(links: &L, start: L::Id, next: N, mut on_step: S) -> L::Id
where
    L: Links + ?Sized,
    N: Fn(&L, L::Id) -> Option<L::Id>,
    S: FnMut(L::Id),
{
    let mut id = start;
    while let Some(child) = next(links, id) {
        on_step(id);
        id = child;
    }
    id
}

/// The smallest node under `start`. See [`extreme`] for `on_step`.
pub fn leftmost<L, S>(links: &L, start: L::Id, on_step: S) -> L::Id
where
    L: Links + ?Sized,
    S: FnMut(L::Id),
{
    extreme(links, start, |l, id| l.left(id), on_step)
}

/// The largest node under `start`. See [`extreme`] for `on_step`.
pub fn rightmost<L, S>(links: &L, start: L::Id, on_step: S) -> L::Id
where
    L: Links + ?Sized,
    S: FnMut(L::Id),
{
    extreme(links, start, |l, id| l.right(id), on_step)
}

/// Searches for `value` starting at `start`, tracking the parent of each visited node. `parent`
/// is what to report as the parent of `start` itself.
pub fn find<L>(links: &L, start: L::Id, value: &L::Value, parent: Option<L::Id>) -> Found<L::Id>
where
    L: Links + ?Sized,
    L::Value: Ord,
{
    let mut parent = parent;
    let mut id = start;
    loop {
        if links.value(id) == value {
            return Found {
                node: Some(id),
                parent,
            };
        }
        let next = if links.steps_left(id, value) {
            links.left(id)
        } else {
            links.right(id)
        };
        parent = Some(id);
        match next {
            Some(child) => id = child,
            None => return Found { node: None, parent },
        }
    }
}
