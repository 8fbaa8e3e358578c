//! The algorithms, flattened into one namespace.
//!
//! Every algorithm takes half-open ranges as pairs of cursors. Algorithms that
//! order elements come in two flavours: `name_by` takes a [`Compare`] strict
//! weak ordering as its last argument, and `name` uses [`Less`].
//!
//! The bounds on each function name the weakest cursor capability it needs.
//! Where a stronger capability permits a better strategy (as with
//! [`partition_point`], [`lower_bound`] or [`distance`]), the choice is made at
//! compile time from the cursor's [`Tag`].
//!
//! [`Compare`]: crate::compare::Compare
//! [`Less`]: crate::compare::Less
//! [`distance`]: crate::cursor::distance
//! [`Tag`]: crate::cursor::Cursor::Tag

mod heap;
mod merge;
mod partition;
mod reduce;
mod scan;
mod select;
mod set;

pub use heap::*;
pub use merge::*;
pub use partition::*;
pub use reduce::*;
pub use scan::*;
pub use select::*;
pub use set::*;
