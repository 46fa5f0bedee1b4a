use basic_collections::binary_search_tree::Tree;
use basic_collections::Error;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hash set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                let before = bst.len();
                let deleted = bst.delete(k);
                assert_eq!(deleted, set.remove(k));
                assert_eq!(bst.len(), if deleted { before - 1 } else { before });
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|value| tree.contains(value))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn min_and_max(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.find_min() == Ok(min) && tree.find_max() == Ok(max),
        _ => {
            let empty = Err(Error::EmptyCollection { collection: "tree" });
            tree.find_min() == empty && tree.find_max() == empty
        }
    }
}

#[quickcheck]
fn walk_matches_sorted_dedup(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    let mut walked = Vec::new();
    tree.walk(|x| walked.push(*x));
    walked == expected && tree.len() == expected.len()
}
