//! An unbalanced Binary Search Tree of unique values.
//!
//! Values smaller than a node's go to its left and everything else goes to its right. Inserting
//! a value that is already present does nothing, so every value appears at most once. Each node
//! can also carry a payload which the tree never looks at.
//!
//! Nothing is ever rotated. Inserting sorted input produces a tree as tall as it is long, which
//! makes the recursive walks in [`traversal`] just as deep.
//!
//! # Examples
//!
//! ```
//! use ordkit::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
//!
//! // Inserting the same value again is a no-op.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a node hands back its payload.
//! assert_eq!(tree.remove(&1), Some(()));
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::mem;
use std::ops::ControlFlow;

use crate::arena::Arena;
use crate::check::{self, CheckPolicy};
use crate::traversal::{self, Found, Links};

pub use crate::arena::NodeId;

#[derive(Clone)]
struct Node<T, P> {
    value: T,
    payload: P,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T, P> Node<T, P> {
    fn leaf(value: T, payload: P) -> Self {
        Self {
            value,
            payload,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree. This can be used for inserting, finding, and removing values, each of
/// which may carry a payload `P`.
///
/// After every mutation the tree checks itself with [`check_tree_valid_strict`] and
/// [`check_tree_unique`] if its [`CheckPolicy`] says so.
///
/// [`check_tree_valid_strict`]: crate::check::check_tree_valid_strict
/// [`check_tree_unique`]: crate::check::check_tree_unique
#[derive(Clone)]
pub struct Tree<T, P = ()> {
    nodes: Arena<Node<T, P>>,
    root: Option<NodeId>,
    policy: CheckPolicy,
}

impl<T, P> Default for Tree<T, P> {
    fn default() -> Self {
        Self::with_payloads(CheckPolicy::default())
    }
}

impl<T, P> fmt::Debug for Tree<T, P>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("values", &self.values())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T, P> Links for Tree<T, P> {
    type Id = NodeId;
    type Value = T;

    fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].left
    }

    fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].right
    }

    fn value(&self, id: NodeId) -> &T {
        &self.nodes[id].value
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` without payloads, using the build's default
    /// [`CheckPolicy`].
    pub fn new() -> Self {
        Self::with_policy(CheckPolicy::default())
    }

    /// Generates a new, empty `Tree` without payloads that checks itself according to `policy`.
    pub fn with_policy(policy: CheckPolicy) -> Self {
        Self::with_payloads(policy)
    }
}

impl<T, P> Tree<T, P> {
    /// Generates a new, empty `Tree` whose nodes each carry a `P`, checking itself according to
    /// `policy`. [`Tree::default`] does the same with the build's default policy.
    pub fn with_payloads(policy: CheckPolicy) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            policy,
        }
    }

    /// The policy applied after each mutation.
    pub fn check_policy(&self) -> CheckPolicy {
        self.policy
    }

    /// Changes the policy applied after each mutation.
    pub fn set_check_policy(&mut self, policy: CheckPolicy) {
        self.policy = policy;
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<NodeRef<'_, T, P>> {
        self.root.map(|id| self.get(id))
    }

    /// Id of the root node, for use with the [`traversal`] functions.
    pub fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    /// A cursor at `id`.
    ///
    /// ## Panics
    ///
    /// When `id` doesn't name a node currently in this tree.
    pub fn get(&self, id: NodeId) -> NodeRef<'_, T, P> {
        // Indexing panics on dangling ids.
        let _ = &self.nodes[id];
        NodeRef { tree: self, id }
    }

    /// The node with the smallest value.
    pub fn min(&self) -> Option<NodeRef<'_, T, P>> {
        self.root.map(|root| self.get(traversal::leftmost(self, root, |_| {})))
    }

    /// The node with the largest value.
    pub fn max(&self) -> Option<NodeRef<'_, T, P>> {
        self.root.map(|root| self.get(traversal::rightmost(self, root, |_| {})))
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, node: Option<NodeId>) -> usize {
        node.map_or(0, |id| {
            let node = &self.nodes[id];
            1 + self.height_of(node.left).max(self.height_of(node.right))
        })
    }

    /// Visits the nodes from smallest to largest value.
    pub fn in_order<'a, B>(
        &'a self,
        mut visit: impl FnMut(NodeRef<'a, T, P>) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        traversal::in_order(self, self.root, &mut |id| visit(self.get(id)))
    }

    /// Visits each node before its children.
    pub fn pre_order<'a, B>(
        &'a self,
        mut visit: impl FnMut(NodeRef<'a, T, P>) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        traversal::pre_order(self, self.root, &mut |id| visit(self.get(id)))
    }

    /// Visits each node after its children.
    pub fn post_order<'a, B>(
        &'a self,
        mut visit: impl FnMut(NodeRef<'a, T, P>) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        traversal::post_order(self, self.root, &mut |id| visit(self.get(id)))
    }

    /// Visits the nodes level by level, starting at the root.
    pub fn level_order<'a, B>(
        &'a self,
        mut visit: impl FnMut(NodeRef<'a, T, P>) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        traversal::level_order(self, self.root, |id| visit(self.get(id)))
    }

    /// All values, smallest first.
    pub fn values(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        let _ = self.in_order(|node| {
            values.push(node.value());
            ControlFlow::<()>::Continue(())
        });
        values
    }

    /// Points `parent`'s link to `old` at `new` instead. With no parent, `old` is the root.
    /// Which side of the parent `old` hangs off is decided by id, never by value.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => {
                debug_assert_eq!(self.root, Some(old));
                self.root = new;
            }
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old));
                    parent.right = new;
                }
            }
        }
    }
}

impl<T, P> Tree<T, P>
where
    T: Ord,
{
    /// Inserts `value` with a default payload. Returns `false`, leaving the tree untouched, if
    /// the value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10);
    /// tree.insert(12);
    /// tree.insert(11);
    ///
    /// let twelve = tree.root().and_then(|n| n.right()).unwrap();
    /// assert_eq!(twelve.value(), &12);
    /// assert_eq!(twelve.left().map(|n| *n.value()), Some(11));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        P: Default,
    {
        self.insert_with(value, P::default())
    }

    /// Inserts `value` carrying `payload`. Returns `false` if the value was already present, in
    /// which case `payload` is dropped and the existing node keeps its own.
    pub fn insert_with(&mut self, value: T, payload: P) -> bool {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::leaf(value, payload)));
            self.post_check("insert");
            return true;
        };

        let Found { node, parent } = traversal::find(&*self, root, &value, None);
        if node.is_some() {
            return false;
        }
        let parent = parent.expect("A failed search from the root ends at a node");
        let goes_left = self.steps_left(parent, &value);
        let id = self.nodes.alloc(Node::leaf(value, payload));
        let parent_node = &mut self.nodes[parent];
        if goes_left {
            parent_node.left = Some(id);
        } else {
            parent_node.right = Some(id);
        }
        log::trace!(
            "attached {:?} {} of {:?}",
            id,
            if goes_left { "left" } else { "right" },
            parent
        );

        self.post_check("insert");
        true
    }

    /// The node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::Tree;
    ///
    /// let mut tree = Tree::default();
    /// tree.insert_with(7, "seven");
    ///
    /// assert_eq!(tree.find(&7).map(|n| *n.payload()), Some("seven"));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T, P>> {
        let root = self.root?;
        traversal::find(self, root, value, None)
            .node
            .map(|id| self.get(id))
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Mutable access to the payload stored with `value`.
    pub fn payload_mut(&mut self, value: &T) -> Option<&mut P> {
        let root = self.root?;
        let id = traversal::find(&*self, root, value, None).node?;
        Some(&mut self.nodes[id].payload)
    }

    /// Removes `value` and returns its payload, or `None` if it wasn't present.
    ///
    /// A node with two children isn't unlinked. Its in-order successor (the smallest value of its
    /// right subtree) is unlinked instead and its value and payload move into the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::tree::Tree;
    ///
    /// let mut tree = Tree::default();
    /// for v in [10, 15, 5, 3, 6] {
    ///     tree.insert_with(v, v * 100);
    /// }
    ///
    /// assert_eq!(tree.remove(&5), Some(500));
    /// assert_eq!(tree.remove(&5), None);
    ///
    /// // 6 took over the spot 5 had.
    /// let six = tree.root().and_then(|n| n.left()).unwrap();
    /// assert_eq!((*six.value(), *six.payload()), (6, 600));
    /// assert_eq!(six.left().map(|n| *n.value()), Some(3));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<P> {
        let root = self.root?;
        let Found { node, parent } = traversal::find(&*self, root, value, None);
        let (_, payload) = self.detach(node?, parent);
        self.post_check("remove");
        Some(payload)
    }

    /// Takes the value and payload at `id` out of the tree. `parent` must be the parent of `id`.
    fn detach(&mut self, id: NodeId, parent: Option<NodeId>) -> (T, P) {
        let node = &self.nodes[id];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let mut successor_parent = id;
                let successor =
                    traversal::leftmost(&*self, right, |step| successor_parent = step);
                // The successor has no left child so this recursion ends right away.
                let (value, payload) = self.detach(successor, Some(successor_parent));
                log::trace!("promoted in-order successor of {:?}", id);

                let node = &mut self.nodes[id];
                (
                    mem::replace(&mut node.value, value),
                    mem::replace(&mut node.payload, payload),
                )
            }
            (child, None) | (None, child) => {
                self.replace_child(parent, id, child);
                log::trace!("spliced {:?} out, {:?} takes its place", id, child);
                let node = self.nodes.release(id);
                (node.value, node.payload)
            }
        }
    }

    /// Runs the invariant checks if the policy asks for them.
    ///
    /// ## Panics
    ///
    /// When the policy is [`CheckPolicy::Panic`] and a check fails.
    fn post_check(&self, op: &str) {
        if self.policy == CheckPolicy::Skip {
            return;
        }
        if !check::check_tree_valid_strict(self) || !check::check_tree_unique(self) {
            log::error!("tree is not valid after {}", op);
            panic!("tree is not valid after {}", op);
        }
    }

    /// Overwrites the value at `at` without moving anything, to build broken trees in tests.
    #[cfg(test)]
    pub(crate) fn corrupt_value(&mut self, at: &T, to: T) {
        let root = self.root.expect("corrupting an empty tree");
        let id = traversal::find(&*self, root, at, None)
            .node
            .expect("corrupting a missing value");
        self.nodes[id].value = to;
    }
}

/// A read-only cursor at one node of a [`Tree`].
pub struct NodeRef<'a, T, P> {
    tree: &'a Tree<T, P>,
    id: NodeId,
}

impl<T, P> Clone for NodeRef<'_, T, P> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, P> Copy for NodeRef<'_, T, P> {}

impl<T, P> fmt::Debug for NodeRef<'_, T, P>
where
    T: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("payload", self.payload())
            .finish()
    }
}

impl<'a, T, P> NodeRef<'a, T, P> {
    /// The id of this node.
    pub fn id(self) -> NodeId {
        self.id
    }

    /// The value this node is ordered by.
    pub fn value(self) -> &'a T {
        &self.tree.nodes[self.id].value
    }

    /// The payload stored alongside the value.
    pub fn payload(self) -> &'a P {
        &self.tree.nodes[self.id].payload
    }

    /// The left child.
    pub fn left(self) -> Option<Self> {
        self.tree.nodes[self.id].left.map(|id| self.tree.get(id))
    }

    /// The right child.
    pub fn right(self) -> Option<Self> {
        self.tree.nodes[self.id].right.map(|id| self.tree.get(id))
    }

    /// Whether this node has no children.
    pub fn is_leaf(self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}
