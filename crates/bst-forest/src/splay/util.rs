use crate::link::{get_p, is_left_of, rotate_left, rotate_right, splice};
use crate::types::{Balance, Node, Root};
use crate::util;

/// Move-to-root discipline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Splay;

impl<N: Node> Balance<N> for Splay {
    fn insert_rebalance(arena: &mut [N], node: u32, root: &mut Root) {
        splay(arena, node, root);
    }

    fn erase(arena: &mut [N], node: u32, root: &mut Root) {
        erase(arena, node, root);
    }

    fn access(arena: &mut [N], node: u32, root: &mut Root) {
        splay(arena, node, root);
    }
}

/// Rotates `node` up until it is the root.
///
/// ```text
/// zig:       P          X        zig-zig:      G          X
///           /    -->     \                    /            \
///          X              P                  P     -->      P
///                                           /                \
///                                          X                  G
///
/// zig-zag:     G              X
///             /             /   \
///            P      -->    P     G
///             \
///              X
/// ```
pub fn splay<N: Node>(arena: &mut [N], node: u32, root: &mut Root) {
    while let Some(p) = get_p(arena, node) {
        let node_left = is_left_of(arena, p, node);
        let Some(g) = get_p(arena, p) else {
            if node_left {
                rotate_right(arena, p, root);
            } else {
                rotate_left(arena, p, root);
            }
            break;
        };
        match (is_left_of(arena, g, p), node_left) {
            (true, true) => {
                rotate_right(arena, g, root);
                rotate_right(arena, p, root);
            }
            (false, false) => {
                rotate_left(arena, g, root);
                rotate_left(arena, p, root);
            }
            (true, false) => {
                rotate_left(arena, p, root);
                rotate_right(arena, g, root);
            }
            (false, true) => {
                rotate_right(arena, p, root);
                rotate_left(arena, g, root);
            }
        }
    }
}

/// Unlinks `node`, then splays the node the vacancy hangs under.
pub fn erase<N: Node>(arena: &mut [N], node: u32, root: &mut Root) {
    let vacancy = splice(arena, node, root, |_, _, _| {});
    if let Some(p) = vacancy.parent {
        splay(arena, p, root);
    }
}

/// Places `node` (duplicates allowed) and splays it to the root.
pub fn insert<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C)
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    util::insert::<N, Splay, C>(arena, root, node, compare_link);
}

/// Places `node` unless an equal key exists.
pub fn insert_unique<N, C>(arena: &mut [N], root: &mut Root, node: u32, compare_link: C) -> bool
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    util::insert_unique::<N, Splay, C>(arena, root, node, compare_link)
}

/// Looks up the left-most node equal to `key` and splays it to the root.
pub fn find<N, Q, C>(arena: &mut [N], root: &mut Root, key: &Q, compare: C) -> Option<u32>
where
    N: Node,
    Q: ?Sized,
    C: Fn(&N, &Q) -> i32,
{
    let found = util::find(arena, root, key, compare)?;
    splay(arena, found, root);
    Some(found)
}
