//! Value-semantics containers: a growable vector, a doubly linked
//! list, a fixed array, stack/queue adaptors, and set/multiset/map
//! built on the `corral-forest` red-black tree engine.
//!
//! Every container owns its elements outright; `Clone` deep-copies,
//! moves transfer the whole structure, and `merge`/`splice` leave their
//! source empty and valid. Checked accessors (`at`/`at_mut`) return
//! [`Error`]; `Index` is the unchecked, panicking form.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`vector`] | [`Vector`]: contiguous buffer, capacity doubles when full |
//! [`list`] | [`List`]: sentinel-terminated arena list, sort/merge/splice |
//! [`array`] | [`Array`]: fixed-size inline array |
//! [`stack`] / [`queue`] | [`Stack`] / [`Queue`] adaptors over [`List`] |
//! [`set`] / [`multiset`] / [`map`] | Tree-backed ordered containers |
//! [`error`] | [`Error`]: out-of-range and missing-key failures |

pub mod array;
pub mod error;
pub mod list;
pub mod map;
pub mod multiset;
pub mod queue;
pub mod set;
pub mod stack;
pub mod vector;

pub use array::Array;
pub use error::Error;
pub use list::List;
pub use map::Map;
pub use multiset::MultiSet;
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
pub use vector::Vector;

/// Position within the tree-backed containers.
pub use corral_forest::Pos;
