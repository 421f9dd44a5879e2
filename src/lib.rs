//! chained-hashtable: a string-keyed hash table with separate chaining and
//! caller-driven resizing.
//!
//! Internal Design:
//!
//! Summary
//! - `HashTable<V, H>` owns a bucket array of chain heads and an arena of
//!   entries. Every entry stores its key, value, cached hash and the arena
//!   key of the next entry in its chain.
//! - Placement is `hash(key) % num_slots()`, always against the current
//!   bucket array.
//! - `H: KeyHash` is the hashing strategy. `Djb2` (default) and `Fnv1` ship
//!   with the crate; any `Fn(&str) -> u64` also works, which is how tests
//!   force collisions.
//!
//! Constraints
//! - Keys are `String`s; values are opaque (`V` has no bounds).
//! - At least `MIN_CAPACITY` buckets; smaller requests are clamped.
//! - No implicit growth: `put` never resizes. Callers watch
//!   `load_factor()` and call `resize` themselves.
//! - Absence is `None`. A `delete` miss also logs a warning through `log`.
//! - No interior mutability and no locking. Shared use across threads
//!   needs an external exclusive lock around the whole table.
//!
//! Chains and ownership
//! - New keys are linked at the head of their chain.
//! - `delete` walks the chain with a trailing link and splices the match
//!   out; the entry leaves the arena and its key/value are returned.
//! - `resize` swaps in a fresh bucket array and relinks each entry through
//!   the same head-insertion routine `put` uses. No entry is copied or
//!   dropped, but chain order after a resize is not preserved.
//!
//! Hashing
//! - The hash is computed once on insert and cached in the entry; resizing
//!   recomputes only the bucket index. Lookups compare cached hashes before
//!   comparing key strings.

pub mod hash_table;
mod hash_table_proptest;
pub mod hashing;
pub mod logger;

// Public surface
pub use hash_table::{Buckets, HashTable, Iter, IterMut, MIN_CAPACITY};
pub use hashing::{djb2, fnv1, Djb2, Fnv1, KeyHash};
