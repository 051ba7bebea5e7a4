use rebalance_bst::{Key, Node, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<Key>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                // `false` exactly when the key was already there.
                assert_eq!(tree.insert(k.into()), set.insert(k.into()));
            }
            Op::Remove(k) => {
                // `false` exactly when the key was missing.
                assert_eq!(tree.delete(k.into()), set.remove(&Key::from(k)));
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

fn in_order_keys(tree: &Tree) -> Vec<Key> {
    let mut keys = Vec::new();
    tree.in_order(Some(&mut |node: &Node| keys.push(node.key())))
        .expect("callback was provided");
    keys
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    let keys = in_order_keys(&tree);

    keys.windows(2).all(|pair| pair[0] < pair[1])
        && keys == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn clone_is_equal_and_independent(ops: Vec<Op>, extra: i8) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let mut copy = tree.clone();
    let equal_before = copy == tree && copy.to_string() == tree.to_string();
    if set.contains(&Key::from(extra)) {
        copy.delete(extra.into());
    } else {
        copy.insert(extra.into());
    }

    equal_before && copy != tree && tree.keys() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn second_insert_is_rejected(xs: Vec<i32>, x: i32) -> bool {
    let mut tree = Tree::from_keys(xs.into_iter().map(Key::from));
    tree.insert(x.into());
    let before = tree.len();

    !tree.insert(x.into()) && tree.len() == before
}

#[quickcheck]
fn rebalance_keeps_keys_and_balances(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let before = in_order_keys(&tree);
    tree.rebalance();

    tree.is_balanced() && in_order_keys(&tree) == before
}

#[quickcheck]
fn delete_removes_exactly_one_key(xs: Vec<i16>, pick: usize) -> bool {
    let mut tree = Tree::from_keys(xs.iter().copied().map(Key::from));
    let mut keys = tree.keys();
    if keys.is_empty() {
        return !tree.delete(0);
    }

    let victim = keys.remove(pick % keys.len());
    tree.delete(victim) && tree.find(victim).is_none() && tree.keys() == keys
}

#[quickcheck]
fn built_trees_are_balanced_and_short(xs: Vec<i64>) -> bool {
    let tree = Tree::from_keys(xs);
    let n = tree.len() as f64;
    let bound = (n + 1.0).log2().ceil() as isize;

    tree.is_balanced() && tree.height(tree.root()) <= bound
}

#[quickcheck]
fn traversals_visit_every_node_once(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let orders: [Vec<Key>; 4] = [
        tree.iter_level_order().map(Node::key).collect(),
        tree.iter_pre_order().map(Node::key).collect(),
        tree.iter_post_order().map(Node::key).collect(),
        tree.iter_in_order().map(Node::key).collect(),
    ];

    orders.iter().all(|keys| {
        let unique: HashSet<_> = keys.iter().collect();
        keys.len() == set.len()
            && unique.len() == set.len()
            && set.iter().all(|k| unique.contains(k))
    })
}

#[quickcheck]
fn callbacks_match_iterators(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.into_iter().map(Key::from));

    let mut level = Vec::new();
    let mut pre = Vec::new();
    let mut post = Vec::new();
    tree.level_order(Some(&mut |node: &Node| level.push(node.key())))
        .expect("callback was provided");
    tree.pre_order(Some(&mut |node: &Node| pre.push(node.key())))
        .expect("callback was provided");
    tree.post_order(Some(&mut |node: &Node| post.push(node.key())))
        .expect("callback was provided");

    level == tree.iter_level_order().map(Node::key).collect::<Vec<_>>()
        && pre == tree.iter_pre_order().map(Node::key).collect::<Vec<_>>()
        && post == tree.iter_post_order().map(Node::key).collect::<Vec<_>>()
}
