//! Red-black rebalancing: rotations, insertion fix-up and the
//! double-black deletion fix-up.
//!
//! Every function takes the arena plus the tree's root link; rotations
//! retarget the root when the pivot was the root. A `None` child is
//! treated as an implicit black node throughout, which is why the
//! deletion fix-up carries the parent of the (possibly absent) node
//! explicitly.

use crate::node::{color_of, get_l, get_p, get_r, set_color, set_l, set_p, set_r, Arena, Color};
use crate::walk::first;

/// Single left rotation at `x`. No-op when `x` has no right child.
pub fn rotate_left<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, x: u32) {
    let Some(y) = get_r(arena, x) else {
        return;
    };
    let yl = get_l(arena, y);
    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    match xp {
        None => *root = Some(y),
        Some(p) => {
            if get_l(arena, p) == Some(x) {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
        }
    }
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

/// Single right rotation at `x`; mirror of [`rotate_left`].
pub fn rotate_right<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, x: u32) {
    let Some(y) = get_l(arena, x) else {
        return;
    };
    let yr = get_r(arena, y);
    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    match xp {
        None => *root = Some(y),
        Some(p) => {
            if get_l(arena, p) == Some(x) {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
        }
    }
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

/// Restores the invariants after attaching the red node `n`.
///
/// While the parent is red: a red uncle pushes the violation up by
/// recoloring; a black uncle resolves it with at most two rotations and
/// a recolor. The root is forced black at the end.
pub fn fix_insert<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, mut n: u32) {
    loop {
        let Some(p) = get_p(arena, n) else {
            break;
        };
        if color_of(arena, Some(p)) == Color::Black {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = get_p(arena, p).expect("red parent has a grandparent");
        if get_l(arena, g) == Some(p) {
            let u = get_r(arena, g);
            if color_of(arena, u) == Color::Red {
                set_color(arena, p, Color::Black);
                set_color(arena, u.expect("red uncle exists"), Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
            } else {
                if get_r(arena, p) == Some(n) {
                    n = p;
                    rotate_left(arena, root, n);
                }
                let np = get_p(arena, n).expect("parent after rotation");
                let ng = get_p(arena, np).expect("grandparent after rotation");
                set_color(arena, np, Color::Black);
                set_color(arena, ng, Color::Red);
                rotate_right(arena, root, ng);
            }
        } else {
            let u = get_l(arena, g);
            if color_of(arena, u) == Color::Red {
                set_color(arena, p, Color::Black);
                set_color(arena, u.expect("red uncle exists"), Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
            } else {
                if get_l(arena, p) == Some(n) {
                    n = p;
                    rotate_right(arena, root, n);
                }
                let np = get_p(arena, n).expect("parent after rotation");
                let ng = get_p(arena, np).expect("grandparent after rotation");
                set_color(arena, np, Color::Black);
                set_color(arena, ng, Color::Red);
                rotate_left(arena, root, ng);
            }
        }
    }
    if let Some(r) = *root {
        set_color(arena, r, Color::Black);
    }
}

/// Replaces the subtree rooted at `u` with the subtree rooted at `v`
/// in `u`'s parent (or at the root).
fn transplant<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, u: u32, v: Option<u32>) {
    let up = get_p(arena, u);
    match up {
        None => *root = v,
        Some(p) => {
            if get_l(arena, p) == Some(u) {
                set_l(arena, p, v);
            } else {
                set_r(arena, p, v);
            }
        }
    }
    if let Some(v) = v {
        set_p(arena, v, up);
    }
}

/// Detaches `z` from the tree, rebalancing as needed.
///
/// Three cases: leaf, one child, two children. With two children the
/// in-order successor takes `z`'s place (topology and color move; the
/// successor keeps its own key/value), so the physically detached node
/// always has at most one child. The caller releases `z`'s slot
/// afterwards.
pub fn unlink<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, z: u32) {
    let mut removed_color = color_of(arena, Some(z));
    let x: Option<u32>;
    let x_parent: Option<u32>;

    if get_l(arena, z).is_none() {
        x = get_r(arena, z);
        x_parent = get_p(arena, z);
        transplant(arena, root, z, x);
    } else if get_r(arena, z).is_none() {
        x = get_l(arena, z);
        x_parent = get_p(arena, z);
        transplant(arena, root, z, x);
    } else {
        let y = first(arena, get_r(arena, z)).expect("right subtree is non-empty");
        removed_color = color_of(arena, Some(y));
        x = get_r(arena, y);
        if get_p(arena, y) == Some(z) {
            x_parent = Some(y);
        } else {
            x_parent = get_p(arena, y);
            transplant(arena, root, y, x);
            let zr = get_r(arena, z).expect("z keeps its right child until now");
            set_r(arena, y, Some(zr));
            set_p(arena, zr, Some(y));
        }
        transplant(arena, root, z, Some(y));
        let zl = get_l(arena, z).expect("z has two children");
        set_l(arena, y, Some(zl));
        set_p(arena, zl, Some(y));
        let z_color = color_of(arena, Some(z));
        set_color(arena, y, z_color);
    }

    if removed_color == Color::Black {
        fix_delete(arena, root, x, x_parent);
    }
}

/// Double-black repair. `x` occupies the position the removed black
/// node vacated; when `x` is `None` it stands for an implicit black
/// leaf below `parent`.
fn fix_delete<K, V>(
    arena: &mut Arena<K, V>,
    root: &mut Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) {
    loop {
        let Some(p) = parent else {
            // x is the root (or the tree is empty).
            break;
        };
        if color_of(arena, x) == Color::Red {
            break;
        }
        if get_l(arena, p) == x {
            // The sibling exists: the removed node was black, so the
            // other side carries at least one unit of black height.
            let mut w = get_r(arena, p).expect("sibling exists during delete fix-up");
            if color_of(arena, Some(w)) == Color::Red {
                set_color(arena, w, Color::Black);
                set_color(arena, p, Color::Red);
                rotate_left(arena, root, p);
                w = get_r(arena, p).expect("new sibling after rotation");
            }
            if color_of(arena, get_l(arena, w)) == Color::Black
                && color_of(arena, get_r(arena, w)) == Color::Black
            {
                set_color(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
            } else {
                if color_of(arena, get_r(arena, w)) == Color::Black {
                    let wl = get_l(arena, w).expect("near child is red");
                    set_color(arena, wl, Color::Black);
                    set_color(arena, w, Color::Red);
                    rotate_right(arena, root, w);
                    w = get_r(arena, p).expect("sibling after inner rotation");
                }
                let p_color = color_of(arena, Some(p));
                set_color(arena, w, p_color);
                set_color(arena, p, Color::Black);
                let wr = get_r(arena, w).expect("far child is red");
                set_color(arena, wr, Color::Black);
                rotate_left(arena, root, p);
                x = *root;
                break;
            }
        } else {
            let mut w = get_l(arena, p).expect("sibling exists during delete fix-up");
            if color_of(arena, Some(w)) == Color::Red {
                set_color(arena, w, Color::Black);
                set_color(arena, p, Color::Red);
                rotate_right(arena, root, p);
                w = get_l(arena, p).expect("new sibling after rotation");
            }
            if color_of(arena, get_l(arena, w)) == Color::Black
                && color_of(arena, get_r(arena, w)) == Color::Black
            {
                set_color(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
            } else {
                if color_of(arena, get_l(arena, w)) == Color::Black {
                    let wr = get_r(arena, w).expect("near child is red");
                    set_color(arena, wr, Color::Black);
                    set_color(arena, w, Color::Red);
                    rotate_left(arena, root, w);
                    w = get_l(arena, p).expect("sibling after inner rotation");
                }
                let p_color = color_of(arena, Some(p));
                set_color(arena, w, p_color);
                set_color(arena, p, Color::Black);
                let wl = get_l(arena, w).expect("far child is red");
                set_color(arena, wl, Color::Black);
                rotate_right(arena, root, p);
                x = *root;
                break;
            }
        }
    }
    if let Some(i) = x {
        set_color(arena, i, Color::Black);
    }
}
