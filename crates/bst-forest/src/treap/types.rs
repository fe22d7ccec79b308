use crate::types::Node;

/// Treap node with a key, a value and a heap priority.
#[derive(Clone, Debug, Default)]
pub struct TreapNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Lower priorities sit closer to the root.
    pub priority: u64,
}

impl<K, V> TreapNode<K, V> {
    pub fn new(k: K, v: V, priority: u64) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            priority,
        }
    }
}

crate::impl_node!(TreapNode<K, V>);

pub trait TreapNodeLike: Node {
    fn priority(&self) -> u64;
    fn set_priority(&mut self, priority: u64);
}

impl<K, V> TreapNodeLike for TreapNode<K, V> {
    fn priority(&self) -> u64 {
        self.priority
    }

    fn set_priority(&mut self, priority: u64) {
        self.priority = priority;
    }
}
