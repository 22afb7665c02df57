// webtools storage backends
// The key/value capability the config store persists through.

pub mod backend;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};
