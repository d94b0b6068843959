//! Concurrency-safe slice utilities.<br/>
//! 並行安全なスライスユーティリティ。
//!
//! Two independent pieces, composed only by caller code:
//!
//! - [`SafeSlice`]: a clonable handle to a dynamically sized sequence guarded by a
//!   single read/write lock. Read operations run concurrently with each other;
//!   mutations are fully serialized.
//! - The combinators in [`concurrent`]: [`parallel_for_each`] / [`parallel_map`]
//!   fan a closure out over every element and join all tasks before returning,
//!   while [`concurrent_for_each`] / [`concurrent_map`] return immediately and
//!   leave completion to the caller.

pub mod collections;
pub mod concurrent;

pub use collections::*;
pub use concurrent::*;
