//! Bulk allocation of root handles.
//!
//! With the `leak-check` feature, every root handed out by [`alloc`] and not
//! yet returned through [`free`] is counted process-wide; [`leak_check`]
//! reads the balance.

#[cfg(feature = "leak-check")]
use std::sync::atomic::{AtomicIsize, Ordering};

use crate::types::{Node, Root};
use crate::util;

#[cfg(feature = "leak-check")]
static LIVE_ROOTS: AtomicIsize = AtomicIsize::new(0);

/// Allocates `num` empty roots. Returns `None` if the block cannot be
/// reserved.
pub fn alloc(num: usize) -> Option<Vec<Root>> {
    let mut roots = Vec::new();
    if let Err(err) = roots.try_reserve_exact(num) {
        log::debug!("root pool: cannot reserve {num} root(s): {err}");
        return None;
    }
    roots.resize(num, Root::new());
    #[cfg(feature = "leak-check")]
    LIVE_ROOTS.fetch_add(num as isize, Ordering::Relaxed);
    Some(roots)
}

/// Clears every tree in `roots` through `destroy`, then releases the block.
pub fn free<N, D>(arena: &mut [N], roots: Vec<Root>, mut destroy: D)
where
    N: Node,
    D: FnMut(u32, &mut N),
{
    #[cfg(feature = "leak-check")]
    LIVE_ROOTS.fetch_sub(roots.len() as isize, Ordering::Relaxed);
    for mut root in roots {
        util::clear(arena, &mut root, &mut destroy);
    }
}

/// Roots allocated but not yet freed.
#[cfg(feature = "leak-check")]
pub fn leak_check() -> isize {
    LIVE_ROOTS.load(Ordering::Relaxed)
}
