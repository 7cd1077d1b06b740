use ordkit::check::{check_tree_valid, check_tree_valid_strict, CheckPolicy};
use ordkit::tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K, usize>, map: &mut HashMap<K, usize>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for (i, op) in ops.iter().enumerate() {
        match op {
            Op::Insert(k) => {
                // Only the first insert of a key sticks, in both.
                tree.insert_with(k.clone(), i);
                map.entry(k.clone()).or_insert(i);
            }
            Op::Remove(k) => {
                assert_eq!(tree.remove(k), map.remove(k));
                assert!(check_tree_valid_strict(tree));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::with_payloads(CheckPolicy::Panic);
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len()
        && map
            .iter()
            .all(|(key, payload)| tree.find(key).map(|n| n.payload()) == Some(payload))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.remove(delete);
        if !check_tree_valid(&tree) {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

/// A pre-order walk pins down the shape of a search tree.
fn pre_order(tree: &Tree<i16>) -> Vec<i16> {
    let mut seen = Vec::new();
    let _ = tree.pre_order(|n| {
        seen.push(*n.value());
        ControlFlow::<()>::Continue(())
    });
    seen
}

#[quickcheck]
fn second_insert_changes_nothing(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let len = tree.len();
    let shape = pre_order(&tree);

    xs.iter().all(|x| !tree.insert(*x)) && tree.len() == len && pre_order(&tree) == shape
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for x in &xs {
        tree.remove(x);
    }

    tree.is_empty() && tree.len() == 0 && tree.root().is_none()
}
