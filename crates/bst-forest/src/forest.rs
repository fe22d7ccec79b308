use std::marker::PhantomData;

use crate::error::{ForestError, ForestResult};
use crate::link;
use crate::red_black::{RbNode, RedBlack};
use crate::splay::{Splay, SplayNode};
use crate::treap::{Treap, TreapNode};
use crate::types::{Balance, Node, Root};
use crate::util;
use crate::wavl::{RankBalanced, WavlNode};

/// An arena that owns its nodes, plus the tree threaded through them.
///
/// Indices returned by insertion stay valid until the node is erased. Erased
/// slots are recycled by later insertions; the stale payload in a free slot
/// is dropped when the slot is reused.
#[derive(Clone, Debug)]
pub struct Forest<N, B> {
    arena: Vec<N>,
    root: Root,
    free: Vec<u32>,
    len: usize,
    _balance: PhantomData<B>,
}

pub type RbForest<K, V> = Forest<RbNode<K, V>, RedBlack>;
pub type WavlForest<K, V> = Forest<WavlNode<K, V>, RankBalanced>;
pub type SplayForest<K, V> = Forest<SplayNode<K, V>, Splay>;
pub type TreapForest<K, V> = Forest<TreapNode<K, V>, Treap>;

impl<N, B> Default for Forest<N, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, B> Forest<N, B> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: Root::new(),
            free: Vec::new(),
            len: 0,
            _balance: PhantomData,
        }
    }

    /// Creates an empty forest with room for `capacity` nodes.
    pub fn try_with_capacity(capacity: usize) -> ForestResult<Self> {
        let mut forest = Self::new();
        if let Err(err) = forest.arena.try_reserve(capacity) {
            log::debug!("forest: cannot reserve {capacity} node(s): {err}");
            return Err(ForestError::AllocationFailed {
                requested: capacity,
            });
        }
        Ok(forest)
    }

    /// The node arena, including stale free slots.
    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    /// Mutable access to a node's payload. Changing anything its ordering
    /// depends on breaks the tree.
    pub fn node_mut(&mut self, idx: u32) -> &mut N {
        &mut self.arena[idx as usize]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Exchanges the contents of two forests in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn place(&mut self, node: N) -> (u32, Option<N>) {
        match self.free.pop() {
            Some(idx) => {
                let stale = std::mem::replace(&mut self.arena[idx as usize], node);
                (idx, Some(stale))
            }
            None => {
                self.arena.push(node);
                ((self.arena.len() - 1) as u32, None)
            }
        }
    }
}

impl<N: Node, B: Balance<N>> Forest<N, B> {
    /// Whether `idx` is linked into the tree.
    pub fn contains(&self, idx: u32) -> bool {
        (idx as usize) < self.arena.len()
            && (self.root.node == Some(idx) || link::get_p(&self.arena, idx).is_some())
    }

    /// Inserts `node`; equal keys are kept in insertion order.
    pub fn insert<C>(&mut self, node: N, compare_link: C) -> u32
    where
        C: Fn(&N, &N) -> i32,
    {
        let (idx, _) = self.place(node);
        util::insert::<N, B, C>(&mut self.arena, &mut self.root, idx, compare_link);
        self.len += 1;
        idx
    }

    /// Inserts `node` unless an equal key is present, in which case the node
    /// is handed back untouched.
    pub fn insert_unique<C>(&mut self, node: N, compare_link: C) -> Result<u32, N>
    where
        C: Fn(&N, &N) -> i32,
    {
        let (idx, stale) = self.place(node);
        if util::insert_unique::<N, B, C>(&mut self.arena, &mut self.root, idx, compare_link) {
            self.len += 1;
            return Ok(idx);
        }
        let node = match stale {
            Some(stale) => {
                self.free.push(idx);
                std::mem::replace(&mut self.arena[idx as usize], stale)
            }
            None => self.arena.pop().expect("node was just pushed"),
        };
        Err(node)
    }

    pub fn find<Q, C>(&self, key: &Q, compare: C) -> Option<u32>
    where
        Q: ?Sized,
        C: Fn(&N, &Q) -> i32,
    {
        util::find(&self.arena, &self.root, key, compare)
    }

    /// Like [`find`](Self::find), but lets the balance strategy react to the
    /// hit; a splay forest moves the node to the root.
    pub fn access<Q, C>(&mut self, key: &Q, compare: C) -> Option<u32>
    where
        Q: ?Sized,
        C: Fn(&N, &Q) -> i32,
    {
        let idx = util::find(&self.arena, &self.root, key, compare)?;
        B::access(&mut self.arena, idx, &mut self.root);
        Some(idx)
    }

    pub fn lower_bound<Q, C>(&self, key: &Q, compare: C) -> Option<u32>
    where
        Q: ?Sized,
        C: Fn(&N, &Q) -> i32,
    {
        util::lower_bound(&self.arena, &self.root, key, compare)
    }

    pub fn upper_bound<Q, C>(&self, key: &Q, compare: C) -> Option<u32>
    where
        Q: ?Sized,
        C: Fn(&N, &Q) -> i32,
    {
        util::upper_bound(&self.arena, &self.root, key, compare)
    }

    pub fn count<Q, C>(&self, key: &Q, compare: C) -> usize
    where
        Q: ?Sized,
        C: Fn(&N, &Q) -> i32,
    {
        util::count(&self.arena, &self.root, key, compare)
    }

    pub fn first(&self) -> Option<u32> {
        link::first(&self.arena, self.root.node)
    }

    pub fn last(&self) -> Option<u32> {
        link::last(&self.arena, self.root.node)
    }

    pub fn next(&self, idx: u32) -> Option<u32> {
        link::next(&self.arena, idx)
    }

    pub fn prev(&self, idx: u32) -> Option<u32> {
        link::prev(&self.arena, idx)
    }

    /// In-order iterator over `(index, node)`.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            arena: &self.arena,
            curr: self.first(),
        }
    }

    /// Unlinks the node at `idx` and passes it to `destroy`. The slot is
    /// recycled afterwards.
    pub fn erase<D>(&mut self, idx: u32, destroy: D)
    where
        D: FnOnce(u32, &mut N),
    {
        debug_assert!(self.contains(idx), "node {idx} is not in the tree");
        B::erase(&mut self.arena, idx, &mut self.root);
        destroy(idx, &mut self.arena[idx as usize]);
        self.free.push(idx);
        self.len -= 1;
    }

    /// Unlinks the node at `idx` and moves its payload out.
    pub fn remove(&mut self, idx: u32) -> N
    where
        N: Default,
    {
        let mut node = None;
        self.erase(idx, |_, n| node = Some(std::mem::take(n)));
        node.expect("erase hands the node to its callback")
    }

    /// Erases every node equal to `key`; returns how many went.
    pub fn erase_equal<Q, C, D>(&mut self, key: &Q, compare: C, mut destroy: D) -> usize
    where
        Q: ?Sized,
        C: Fn(&N, &Q) -> i32,
        D: FnMut(u32, &mut N),
    {
        let free = &mut self.free;
        let erased = util::erase_equal::<N, B, Q, C, _>(
            &mut self.arena,
            &mut self.root,
            key,
            compare,
            |idx, node| {
                destroy(idx, node);
                free.push(idx);
            },
        );
        self.len -= erased;
        erased
    }

    /// Destroys every node and releases the arena.
    pub fn clear<D>(&mut self, destroy: D)
    where
        D: FnMut(u32, &mut N),
    {
        util::clear(&mut self.arena, &mut self.root, destroy);
        self.arena.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Copies the tree, shape and metadata included, into a new forest.
    ///
    /// `clone` should copy balance metadata verbatim. If it declines a node,
    /// the copies made so far go through `destroy` and the error reports how
    /// many there were.
    pub fn try_clone_with<F, D>(&self, clone: F, destroy: D) -> ForestResult<Self>
    where
        F: FnMut(&N) -> Option<N>,
        D: FnMut(u32, &mut N),
    {
        let mut out = Self::new();
        if let Err(err) = out.arena.try_reserve(self.len) {
            log::debug!("forest: cannot reserve {} node(s): {err}", self.len);
            return Err(ForestError::AllocationFailed {
                requested: self.len,
            });
        }
        out.root = util::clone_into(&self.arena, &self.root, &mut out.arena, clone, destroy)?;
        out.len = self.len;
        Ok(out)
    }

    /// Copies the in-order range `[begin, end)` into a new, freshly balanced
    /// forest.
    pub fn try_clone_range_with<F, D>(
        &self,
        begin: Option<u32>,
        end: Option<u32>,
        clone: F,
        destroy: D,
    ) -> ForestResult<Self>
    where
        F: FnMut(&N) -> Option<N>,
        D: FnMut(u32, &mut N),
    {
        let mut out = Self::new();
        out.root = util::clone_range_into::<N, N, B, F, D>(
            &self.arena,
            begin,
            end,
            &mut out.arena,
            clone,
            destroy,
        )?;
        out.len = out.arena.len();
        Ok(out)
    }
}

/// In-order iterator over a [`Forest`].
pub struct Iter<'a, N> {
    arena: &'a [N],
    curr: Option<u32>,
}

impl<'a, N: Node> Iterator for Iter<'a, N> {
    type Item = (u32, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = link::next(self.arena, idx);
        Some((idx, &self.arena[idx as usize]))
    }
}
