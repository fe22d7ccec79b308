/// Splay node with a key and a value.
#[derive(Clone, Debug, Default)]
pub struct SplayNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
}

impl<K, V> SplayNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
        }
    }
}

crate::impl_node!(SplayNode<K, V>);
