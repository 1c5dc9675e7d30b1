//! Persistence: a key-value boundary and the duty collection built on it.

mod collection;
mod file;
mod memory;
mod traits;

pub use collection::{DutyStore, Upserted, DUTIES_KEY, PROFILE_KEY};
pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use traits::KeyValueStore;
