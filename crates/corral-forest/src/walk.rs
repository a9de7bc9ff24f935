//! In-order navigation over the node arena.
//!
//! Successor/predecessor walk the parent back-references directly; no
//! auxiliary stack is ever needed.

use crate::node::{get_l, get_p, get_r, Arena};

/// Leftmost node under `root`.
pub fn first<K, V>(arena: &Arena<K, V>, root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<K, V>(arena: &Arena<K, V>, root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor: leftmost of the right subtree when it exists,
/// otherwise the first ancestor reached through a left-child edge.
pub fn next<K, V>(arena: &Arena<K, V>, node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor; mirror of [`next`].
pub fn prev<K, V>(arena: &Arena<K, V>, node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        let mut curr = l;
        while let Some(r) = get_r(arena, curr) {
            curr = r;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}
