use quickcheck::{Arbitrary, Gen};

mod tree;

/// Operations applied to a tree and to a model map side by side.
#[derive(Clone, Debug)]
pub enum Op<K, V> {
    /// Insert an element keyed by K carrying V
    Insert(K, V),
    /// Remove the element keyed by K
    Remove(K),
    /// Look up K
    Search(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Search(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
