use crate::types::Node;

/// Rank-balanced node with a key and a value.
#[derive(Clone, Debug, Default)]
pub struct WavlNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub rank: u8,
}

impl<K, V> WavlNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            rank: 0,
        }
    }
}

crate::impl_node!(WavlNode<K, V>);

pub trait WavlNodeLike: Node {
    fn rank(&self) -> u8;
    fn set_rank(&mut self, rank: u8);
}

impl<K, V> WavlNodeLike for WavlNode<K, V> {
    fn rank(&self) -> u8 {
        self.rank
    }

    fn set_rank(&mut self, rank: u8) {
        self.rank = rank;
    }
}
