//! Red-black node and the slot arena that owns every node of a tree.
//!
//! All "pointers" between nodes are `Option<u32>` indices into the arena,
//! so the parent back-reference is a plain index rather than an owning
//! link and the ownership graph stays acyclic.

/// Node color tag.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Red,
    Black,
}

/// A single tree node: key, value, three links and a color.
///
/// `p` is the non-owning parent back-reference used by traversal and
/// rebalancing; the root's `p` is `None`.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub color: Color,
    pub key: K,
    pub value: V,
}

impl<K, V> RbNode<K, V> {
    /// Fresh, unlinked node. New nodes start red; insertion fix-up
    /// restores the invariants.
    pub fn new(key: K, value: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            color: Color::Red,
            key,
            value,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot<K, V> {
    Occupied(RbNode<K, V>),
    Vacant { next_free: Option<u32> },
}

/// `Vec`-backed node arena with an intrusive free list.
///
/// Erased slots are chained through `free` and reused by later
/// allocations, so long-lived trees do not grow without bound under
/// churn.
#[derive(Clone, Debug)]
pub struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Option<u32>,
    len: usize,
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Number of live (occupied) nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocates a slot for a fresh red node and returns its index.
    pub fn alloc(&mut self, key: K, value: V) -> u32 {
        self.len += 1;
        match self.free {
            Some(idx) => {
                let next_free = match self.slots[idx as usize] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
                };
                self.free = next_free;
                self.slots[idx as usize] = Slot::Occupied(RbNode::new(key, value));
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(RbNode::new(key, value)));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Releases an occupied slot, returning its key/value and chaining
    /// the slot into the free list.
    pub fn release(&mut self, idx: u32) -> (K, V) {
        let slot = std::mem::replace(
            &mut self.slots[idx as usize],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.len -= 1;
                (node.key, node.value)
            }
            Slot::Vacant { .. } => unreachable!("release of vacant slot"),
        }
    }

    /// Borrow a node; panics on a vacant or out-of-range slot.
    pub fn node(&self, idx: u32) -> &RbNode<K, V> {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("vacant arena slot {idx}"),
        }
    }

    pub fn node_mut(&mut self, idx: u32) -> &mut RbNode<K, V> {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("vacant arena slot {idx}"),
        }
    }

    /// Non-panicking lookup; `None` for vacant or out-of-range indices.
    /// Used to validate caller-supplied positions.
    pub fn get(&self, idx: u32) -> Option<&RbNode<K, V>> {
        match self.slots.get(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Drops every node and resets the free list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub(crate) fn get_p<K, V>(arena: &Arena<K, V>, idx: u32) -> Option<u32> {
    arena.node(idx).p
}

#[inline]
pub(crate) fn get_l<K, V>(arena: &Arena<K, V>, idx: u32) -> Option<u32> {
    arena.node(idx).l
}

#[inline]
pub(crate) fn get_r<K, V>(arena: &Arena<K, V>, idx: u32) -> Option<u32> {
    arena.node(idx).r
}

#[inline]
pub(crate) fn set_p<K, V>(arena: &mut Arena<K, V>, idx: u32, v: Option<u32>) {
    arena.node_mut(idx).p = v;
}

#[inline]
pub(crate) fn set_l<K, V>(arena: &mut Arena<K, V>, idx: u32, v: Option<u32>) {
    arena.node_mut(idx).l = v;
}

#[inline]
pub(crate) fn set_r<K, V>(arena: &mut Arena<K, V>, idx: u32, v: Option<u32>) {
    arena.node_mut(idx).r = v;
}

#[inline]
pub(crate) fn color_of<K, V>(arena: &Arena<K, V>, idx: Option<u32>) -> Color {
    // A missing child counts as a black leaf.
    match idx {
        Some(i) => arena.node(i).color,
        None => Color::Black,
    }
}

#[inline]
pub(crate) fn set_color<K, V>(arena: &mut Arena<K, V>, idx: u32, color: Color) {
    arena.node_mut(idx).color = color;
}
