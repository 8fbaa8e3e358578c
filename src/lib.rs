#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::useless_vec,
    )
)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[macro_use]
mod macros;

pub mod algorithm;
pub mod compare;
pub mod cursor;
pub mod sink;

pub use compare::{Borrowed, ByOrdering, Compare, Greater, Inverse, Less};
pub use cursor::{
    BidirectionalCursor, Cursor, Cursors, ForwardCursor, MutableCursor, RandomAccessCursor,
};
pub use sink::Sink;

/// The recommended prelude for this crate.
pub mod prelude {
    pub use crate::{
        algorithm::*,
        compare::{Compare, Greater, Less},
        cursor::{
            advance, distance, iter_swap, next, prev, BidirectionalCursor, Cursor, Cursors,
            ForwardCursor, MutableCursor, RandomAccessCursor,
        },
        sink::Sink,
    };
}

#[cfg(test)]
mod testing;

#[cfg(test)]
#[allow(dead_code)] // Not used in all configurations
pub(crate) mod test_helpers {
    /// Copied from `std::test_helpers::test_rng`, since these tests rely on the
    /// seed not being the same for every RNG invocation too.
    #[track_caller]
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec = hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
