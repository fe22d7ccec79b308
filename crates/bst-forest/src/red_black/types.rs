use crate::types::Node;

/// Red/black node with a key and a value.
#[derive(Clone, Debug, Default)]
pub struct RbNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Node color: `true` = black, `false` = red.
    pub b: bool,
}

impl<K, V> RbNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            b: false,
        }
    }
}

crate::impl_node!(RbNode<K, V>);

/// Red/black specific node behavior.
pub trait RbNodeLike: Node {
    fn is_black(&self) -> bool;
    fn set_black(&mut self, black: bool);
}

impl<K, V> RbNodeLike for RbNode<K, V> {
    fn is_black(&self) -> bool {
        self.b
    }

    fn set_black(&mut self, black: bool) {
        self.b = black;
    }
}
