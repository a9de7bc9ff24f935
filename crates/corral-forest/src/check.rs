//! Structural validation used by the test suites.
//!
//! Verifies the red-black rules, parent-link integrity, in-order key
//! ordering and the cached extrema in one pass. Returns a description
//! of the first violation found.

use crate::node::{color_of, get_p, Arena, Color};
use crate::walk;

pub(crate) fn check<K: Ord, V>(
    arena: &Arena<K, V>,
    root: Option<u32>,
    min: Option<u32>,
    max: Option<u32>,
) -> Result<(), String> {
    let Some(r) = root else {
        if !arena.is_empty() {
            return Err(format!("empty root but {} live nodes", arena.len()));
        }
        if min.is_some() || max.is_some() {
            return Err("empty tree with a cached extremum".to_string());
        }
        return Ok(());
    };

    if get_p(arena, r).is_some() {
        return Err(format!("root {r} has a parent link"));
    }
    if color_of(arena, Some(r)) == Color::Red {
        return Err(format!("root {r} is red"));
    }

    verify(arena, Some(r), None)?;

    // In-order pass: key ordering, node count and the extrema caches.
    let first = walk::first(arena, root);
    if first != min {
        return Err(format!("cached min {min:?} but leftmost node is {first:?}"));
    }
    if walk::last(arena, root) != max {
        return Err(format!("cached max {max:?} is not the rightmost node"));
    }
    let mut count = 0usize;
    let mut prev: Option<u32> = None;
    let mut curr = first;
    while let Some(i) = curr {
        count += 1;
        if let Some(p) = prev {
            if arena.node(p).key > arena.node(i).key {
                return Err(format!("keys out of order between nodes {p} and {i}"));
            }
        }
        prev = Some(i);
        curr = walk::next(arena, i);
    }
    if count != arena.len() {
        return Err(format!(
            "in-order walk visited {count} nodes but the arena holds {}",
            arena.len()
        ));
    }
    Ok(())
}

/// Recursive descent: returns the subtree's black height, counting the
/// implicit leaf.
fn verify<K: Ord, V>(
    arena: &Arena<K, V>,
    idx: Option<u32>,
    parent: Option<u32>,
) -> Result<usize, String> {
    let Some(i) = idx else {
        return Ok(1);
    };
    let node = arena
        .get(i)
        .ok_or_else(|| format!("link to vacant slot {i}"))?;
    if node.p != parent {
        return Err(format!(
            "node {i} records parent {:?} but is reached from {parent:?}",
            node.p
        ));
    }
    if node.color == Color::Red
        && (color_of(arena, node.l) == Color::Red || color_of(arena, node.r) == Color::Red)
    {
        return Err(format!("red node {i} has a red child"));
    }
    let lh = verify(arena, node.l, Some(i))?;
    let rh = verify(arena, node.r, Some(i))?;
    if lh != rh {
        return Err(format!("node {i} has black heights {lh}/{rh}"));
    }
    Ok(lh + if node.color == Color::Black { 1 } else { 0 })
}
