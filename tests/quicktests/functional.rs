use persistent_bst::functional::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, checking after
/// every step that both agree. Every version of the tree is kept so we can
/// check that later inserts never disturb earlier versions.
fn do_ops<T>(ops: &[Op<T>], set: &mut BTreeSet<T>) -> Vec<(Tree<T>, BTreeSet<T>)>
where
    T: Ord + Clone,
{
    let mut bst = Tree::new();
    let mut versions = vec![(bst.clone(), set.clone())];
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst = bst.insert(k.clone());
                set.insert(k.clone());
                versions.push((bst.clone(), set.clone()));
            }
            Op::Contains(k) => {
                if bst.contains(k) != set.contains(k) {
                    return Vec::new();
                }
            }
        }
    }

    versions
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();

    let versions = do_ops(&ops, &mut set);
    !versions.is_empty()
        && versions
            .iter()
            .all(|(tree, set)| tree.size() == set.len() && tree.iter().eq(set.iter()))
}

#[quickcheck]
fn contains(xs: Vec<String>) -> bool {
    let mut tree = Tree::new();
    for (i, x) in xs.iter().enumerate() {
        tree = tree.insert(x.clone());
        // Everything inserted so far is still there.
        if !xs[..=i].iter().all(|x| tree.contains(x.as_str())) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn size_counts_distinct_keys(xs: Vec<u16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let once = tree.insert(x);
    let twice = once.insert(x);

    once == twice && once.to_string() == twice.to_string()
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree = tree.insert(x);
        let keys: Vec<_> = tree.inorder().collect();
        if !keys.windows(2).all(|pair| pair[0] < pair[1]) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn membership_ignores_insertion_order(xs: Vec<i8>) -> bool {
    let forward: Tree<_> = xs.iter().copied().collect();
    let backward: Tree<_> = xs.iter().rev().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();
    let ascending: Tree<_> = sorted.into_iter().collect();

    forward.iter().eq(backward.iter()) && forward.iter().eq(ascending.iter())
}

#[quickcheck]
fn old_versions_are_unaffected(xs: Vec<i8>, k: i8) -> bool {
    let t1: Tree<_> = xs.into_iter().collect();
    let before: Vec<_> = t1.iter().copied().collect();
    let had_k = t1.contains(&k);

    let t2 = t1.insert(k);

    t1.size() == before.len()
        && t1.contains(&k) == had_k
        && t1.iter().copied().eq(before.into_iter())
        && t2.contains(&k)
}
