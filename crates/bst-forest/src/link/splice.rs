use crate::types::{Node, Root};

use super::{first, get_l, get_p, get_r, is_left_of, replace_child, set_l, set_p, set_r};

/// The vacancy left behind by [`splice`].
///
/// `child` is the subtree (possibly empty) now sitting where the physically
/// removed slot was, `parent` is its parent and `left` tells which side of
/// `parent` it hangs on. Variants start their erase repair from here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Splice {
    pub child: Option<u32>,
    pub parent: Option<u32>,
    pub left: bool,
}

/// Unlinks `node` from the tree.
///
/// A node with at most one child is replaced by that child. A node with two
/// children is replaced by its in-order successor; before relinking,
/// `transfer(arena, node, successor)` is called so the variant can hand the
/// erased node's metadata to the successor (and keep the successor's own
/// metadata on `node`, which then describes the removed slot).
///
/// On return `node` has all links cleared.
pub fn splice<N, F>(arena: &mut [N], node: u32, root: &mut Root, transfer: F) -> Splice
where
    N: Node,
    F: FnOnce(&mut [N], u32, u32),
{
    let parent = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);

    let splice = match (l, r) {
        (Some(l), Some(r)) => {
            let scor = first(arena, Some(r)).expect("right subtree is non-empty");
            transfer(arena, node, scor);
            replace_child(arena, parent, node, Some(scor), root);

            let child = get_r(arena, scor);
            let scor_parent = get_p(arena, scor).expect("successor has a parent");
            let vacancy = if scor_parent == node {
                // Successor was the right child: it keeps its right subtree.
                Splice {
                    child,
                    parent: Some(scor),
                    left: false,
                }
            } else {
                if let Some(child) = child {
                    set_p(arena, child, Some(scor_parent));
                }
                set_l(arena, scor_parent, child);
                set_r(arena, scor, Some(r));
                set_p(arena, r, Some(scor));
                Splice {
                    child,
                    parent: Some(scor_parent),
                    left: true,
                }
            };

            set_p(arena, scor, parent);
            set_l(arena, scor, Some(l));
            set_p(arena, l, Some(scor));
            vacancy
        }
        _ => {
            let child = l.or(r);
            let left = parent.is_some_and(|p| is_left_of(arena, p, node));
            if let Some(child) = child {
                set_p(arena, child, parent);
            }
            replace_child(arena, parent, node, child, root);
            Splice {
                child,
                parent,
                left,
            }
        }
    };

    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    splice
}
