use keyed_bst::key::OrderedKey;
use keyed_bst::tree::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map, checking every answer the
/// tree gives against the map and the tree's structure after every step.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<OrderedKey<K, V>>, map: &mut BTreeMap<K, V>)
where
    K: Ord + Clone + std::fmt::Debug,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                let inserted = bst.insert(OrderedKey::new(k.clone(), v.clone()));
                assert_eq!(inserted, !map.contains_key(k));
                map.entry(k.clone()).or_insert_with(|| v.clone());
            }
            Op::Remove(k) => {
                let removed = bst.remove(&OrderedKey::query(k.clone()));
                assert_eq!(removed.and_then(|e| e.into_parts().1), map.remove(k));
            }
            Op::Search(k) => {
                let found = bst.search(&OrderedKey::query(k.clone()));
                assert_eq!(found.and_then(OrderedKey::payload), map.get(k));
            }
        }
        assert!(bst.is_valid_bst(), "{}", bst.validate().unwrap_err());
        assert_eq!(bst.size(), map.len());
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut map);
        tree.iter().map(OrderedKey::key).eq(map.keys())
    }
}

quickcheck::quickcheck! {
    fn fuzz_string_keys(ops: Vec<Op<String, u8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut map);
        tree.min().map(OrderedKey::key) == map.keys().next()
            && tree.max().map(OrderedKey::key) == map.keys().next_back()
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut removed = 0;
        for delete in &deletes {
            if tree.remove(delete).is_some() {
                removed += 1;
            }
        }

        let unique: HashSet<_> = xs.iter().collect();
        let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.size() == unique.len() - removed
            && tree.is_valid_bst()
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_and_restartable(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        let first: Vec<_> = tree.in_order().into_iter().copied().collect();
        let second: Vec<_> = tree.iter().copied().collect();
        first == expected && second == expected && tree.iter().len() == expected.len()
    }
}

quickcheck::quickcheck! {
    fn clone_is_independent(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
        let original: Tree<_> = xs.iter().copied().collect();
        let mut cloned = original.clone();
        for delete in &deletes {
            cloned.remove(delete);
        }

        original.outline().to_string().lines().count() == original.size()
            && original.iter().eq(xs.iter().copied().collect::<std::collections::BTreeSet<_>>().iter())
            && cloned.is_valid_bst()
            && deletes.iter().all(|x| cloned.search(x).is_none())
    }
}
