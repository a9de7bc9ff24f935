//! Arena-based red-black tree engine backing the `corral` ordered
//! containers (set, multiset, map).
//!
//! Instead of raw pointers, all node links are `Option<u32>` indices
//! into a [`node::Arena`] owned by the tree, which keeps the parent
//! back-reference a plain index and the ownership graph acyclic. Nodes
//! never move once allocated; erasing relinks topology around the node,
//! so positions into untouched nodes stay valid across mutation.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`node`] | [`RbNode`], [`Color`] and the slot arena with free-list reuse |
//! [`walk`] | `first`, `last`, `next`, `prev` in-order navigation |
//! [`balance`] | Rotations, insertion fix-up, double-black deletion fix-up |
//! [`tree`] | [`RbTree`]: positions, lookup, bounds, merge, iteration |

pub mod balance;
mod check;
pub mod node;
pub mod tree;
pub mod walk;

pub use node::{Arena, Color, RbNode};
pub use tree::{IntoIter, Iter, Pos, RbTree};
