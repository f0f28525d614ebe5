//! An ordered map backed by an unbalanced binary search tree
//!
//! [`BSTMap`] keeps its entries in a binary search tree whose nodes are owned through `Box`
//! links. Keys are ordered by a caller-supplied [`TotalOrder`](order::TotalOrder), which defaults
//! to the key type's `Ord` implementation.
//!
//! ```
//! use bstmap::{BSTMap, MapError};
//!
//! let mut map = BSTMap::new();
//! for &key in &[5, 3, 8, 1, 4, 7, 9] {
//!     map.set(key, key * 10)?;
//! }
//!
//! assert_eq!(map.get(&4), Ok(&40));
//! assert_eq!(map.remove(&5), Ok(Some(50)));
//! assert_eq!(map.len(), 6);
//! assert_eq!(map.get(&5), Err(MapError::KeyNotFound));
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, [1, 3, 4, 7, 8, 9]);
//! # Ok::<(), MapError>(())
//! ```
//!
//! The map is meant for use by a single owner. Wrap it in a lock to share it between threads.

#![allow(clippy::upper_case_acronyms)]

pub mod map;
pub mod order;

mod error;

pub use error::{MapError, Result};
pub use map::BSTMap;

#[macro_export(local_inner_macros)]
macro_rules! bstmap {
    // trailing comma case
    ($($key:expr => $value:expr,)+) => (bstmap!($($key => $value),+));

    ( $($key:expr => $value:expr),* ) => {
        {
            let mut _map = $crate::BSTMap::new();
            $(
                let _ = _map.insert($key, $value);
            )*
            _map
        }
    };
}

/// Installs a subscriber that prints the crate's trace events during tests
///
/// Filtered by `RUST_LOG`, e.g. `RUST_LOG=bstmap=trace cargo test`.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    // Only the first call in the test binary can install the global subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
